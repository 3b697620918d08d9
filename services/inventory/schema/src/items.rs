use sea_orm::entity::prelude::*;

/// Pantry item. Exactly one of `order_quantity` / `weight_amount` is the
/// active stock column; the other stays NULL.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    pub product_name: String,
    pub description: String,
    #[sea_orm(column_name = "type")]
    pub item_type: String,
    pub vendor_id: i32,
    pub price_per_unit: f64,
    pub order_quantity: Option<i32>,
    pub weight_amount: Option<f64>,
    pub max_signout_quantity: Option<i32>,
    pub max_signout_weight: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendors::Entity",
        from = "Column::VendorId",
        to = "super::vendors::Column::VendorId"
    )]
    Vendors,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::vendors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendors.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
