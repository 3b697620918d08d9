use sea_orm_migration::prelude::*;

mod m20250401_000001_create_vendors;
mod m20250401_000002_create_items;
mod m20250401_000003_create_users;
mod m20250401_000004_create_transactions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_vendors::Migration),
            Box::new(m20250401_000002_create_items::Migration),
            Box::new(m20250401_000003_create_users::Migration),
            Box::new(m20250401_000004_create_transactions::Migration),
        ]
    }
}
