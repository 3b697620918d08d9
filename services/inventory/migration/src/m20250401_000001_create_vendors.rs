use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vendors::VendorId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vendors::VendorName).string().not_null())
                    .col(ColumnDef::new(Vendors::ContactPerson).string())
                    .col(ColumnDef::new(Vendors::Address).string())
                    .col(ColumnDef::new(Vendors::Phone).string())
                    .col(ColumnDef::new(Vendors::Email).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vendors {
    Table,
    VendorId,
    VendorName,
    ContactPerson,
    Address,
    Phone,
    Email,
}
