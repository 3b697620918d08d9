use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // user_id is deliberately NOT a foreign key: transaction history must
        // survive user deletion (weak reference by id).
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::TransactionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::UserId).string().not_null())
                    .col(ColumnDef::new(Transactions::ProductId).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::QuantityTaken)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::UserStatus).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::TakenAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Transactions::Table, Transactions::ProductId)
                            .to(Items::Table, Items::ProductId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .name("idx_transactions_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Transactions {
    Table,
    TransactionId,
    UserId,
    ProductId,
    QuantityTaken,
    UserStatus,
    TakenAt,
}

#[derive(Iden)]
enum Items {
    Table,
    ProductId,
}
