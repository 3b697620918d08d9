use chrono::{DateTime, Utc};

use pantry_domain::stock::StockKind;

/// Pantry item with its active stock representation.
#[derive(Debug, Clone)]
pub struct Item {
    pub product_id: String,
    pub product_name: String,
    pub description: String,
    pub item_type: String,
    pub vendor_id: i32,
    pub price_per_unit: f64,
    pub stock: StockKind,
    pub max_signout_quantity: Option<i32>,
    pub max_signout_weight: Option<f64>,
}

/// Partial update for an item row. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub item_type: Option<String>,
    pub vendor_id: Option<i32>,
    pub price_per_unit: Option<f64>,
    pub order_quantity: Option<i32>,
    pub weight_amount: Option<f64>,
    pub max_signout_quantity: Option<i32>,
    pub max_signout_weight: Option<f64>,
}

/// Vendor supplying items.
#[derive(Debug, Clone)]
pub struct Vendor {
    pub vendor_id: i32,
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Fields for creating or replacing a vendor (id is store-generated).
#[derive(Debug, Clone)]
pub struct VendorFields {
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Pantry user. `password_hash` is an argon2 PHC string.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub status: String,
    pub role: String,
}

/// Partial update for a user row.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
}

/// A withdrawal to record: amount is a unit count or a weight depending on
/// the item's stock representation.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: String,
    pub product_id: String,
    pub quantity_taken: f64,
    pub user_status: String,
}

/// Stored transaction joined with item (and optionally user) details for
/// the history views.
#[derive(Debug, Clone)]
pub struct TransactionDetails {
    pub transaction_id: i32,
    pub user_id: String,
    pub product_id: String,
    pub quantity_taken: f64,
    pub user_status: String,
    pub taken_at: DateTime<Utc>,
    pub product_name: String,
    pub item_type: String,
    pub username: Option<String>,
}

/// Result of a successful withdrawal: the stock level seen before the
/// decrement and the item as persisted after it.
#[derive(Debug, Clone)]
pub struct StockWithdrawal {
    pub before: StockKind,
    pub item: Item,
}

/// Per-item transaction count, ordered by count desc then name asc.
#[derive(Debug, Clone)]
pub struct ItemTransactionCount {
    pub product_id: String,
    pub product_name: String,
    pub item_type: String,
    pub total_transactions: i64,
}

/// `ItemTransactionCount` with its competition rank assigned.
#[derive(Debug, Clone)]
pub struct RankedItem {
    pub product_id: String,
    pub product_name: String,
    pub item_type: String,
    pub total_transactions: i64,
    pub ranking: i64,
}

/// Distinct participating users per normalized status.
#[derive(Debug, Clone)]
pub struct StatusCount {
    pub user_status: String,
    pub count: i64,
}

/// One line of a checkout batch.
#[derive(Debug, Clone)]
pub struct CheckoutLine {
    pub product_id: String,
    pub amount: StockKind,
}
