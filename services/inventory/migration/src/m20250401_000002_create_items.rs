use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::ProductId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::ProductName).string().not_null())
                    .col(ColumnDef::new(Items::Description).string().not_null())
                    .col(ColumnDef::new(Items::Type).string().not_null())
                    .col(ColumnDef::new(Items::VendorId).integer().not_null())
                    .col(ColumnDef::new(Items::PricePerUnit).double().not_null())
                    .col(ColumnDef::new(Items::OrderQuantity).integer())
                    .col(ColumnDef::new(Items::WeightAmount).double())
                    .col(ColumnDef::new(Items::MaxSignoutQuantity).integer())
                    .col(ColumnDef::new(Items::MaxSignoutWeight).double())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Items::Table, Items::VendorId)
                            .to(Vendors::Table, Vendors::VendorId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Items::Table)
                    .col(Items::VendorId)
                    .name("idx_items_vendor_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Items {
    Table,
    ProductId,
    ProductName,
    Description,
    Type,
    VendorId,
    PricePerUnit,
    OrderQuantity,
    WeightAmount,
    MaxSignoutQuantity,
    MaxSignoutWeight,
}

#[derive(Iden)]
enum Vendors {
    Table,
    VendorId,
}
