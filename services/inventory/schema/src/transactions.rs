use sea_orm::entity::prelude::*;

/// Append-only withdrawal record. `user_status` is lower-cased at write
/// time; `quantity_taken` carries either a unit count or a weight,
/// depending on the item's stock representation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub transaction_id: i32,
    pub user_id: String,
    pub product_id: String,
    pub quantity_taken: f64,
    pub user_status: String,
    pub taken_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::items::Entity",
        from = "Column::ProductId",
        to = "super::items::Column::ProductId"
    )]
    Items,
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
