use sea_orm::entity::prelude::*;

/// Pantry user. `user_id` is generated from name initials plus random
/// digits; `password` holds an argon2 hash, never plaintext.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub status: String,
    pub role: String,
}

// Transactions reference users by id only (no FK) so history survives
// user deletion.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
