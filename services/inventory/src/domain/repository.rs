#![allow(async_fn_in_trait)]

use pantry_domain::stock::StockKind;

use crate::domain::types::{
    CheckoutLine, Item, ItemPatch, ItemTransactionCount, NewTransaction, StatusCount,
    TransactionDetails, User, UserPatch, Vendor, VendorFields,
};
use crate::error::InventoryError;

/// Repository for pantry items and their stock columns.
pub trait ItemRepository: Send + Sync {
    async fn list(&self, vendor_id: Option<i32>) -> Result<Vec<Item>, InventoryError>;
    async fn find_by_id(&self, product_id: &str) -> Result<Option<Item>, InventoryError>;
    async fn create(&self, item: &Item) -> Result<(), InventoryError>;
    /// Update the given fields. Returns the number of rows touched.
    async fn update_fields(
        &self,
        product_id: &str,
        patch: &ItemPatch,
    ) -> Result<u64, InventoryError>;
    /// Delete an item. Returns the number of rows deleted.
    async fn delete(&self, product_id: &str) -> Result<u64, InventoryError>;
    /// Atomically decrement stock by `amount` iff enough remains
    /// (single conditional UPDATE — the affected-row count is the race
    /// detector). Returns the updated item, or `None` when no row qualified.
    async fn withdraw_stock(
        &self,
        product_id: &str,
        amount: StockKind,
    ) -> Result<Option<Item>, InventoryError>;
    /// Add `amount` to current stock. Returns the updated item, or `None`
    /// when the item does not exist.
    async fn restock(
        &self,
        product_id: &str,
        amount: StockKind,
    ) -> Result<Option<Item>, InventoryError>;
    /// Blanket rewrite of the sign-out caps across every item. Returns the
    /// affected-row count.
    async fn set_global_limits(
        &self,
        quantity: Option<i32>,
        weight: Option<f64>,
    ) -> Result<u64, InventoryError>;
    /// Distinct item categories, sorted ascending.
    async fn list_types(&self) -> Result<Vec<String>, InventoryError>;
    async fn count_by_vendor(&self, vendor_id: i32) -> Result<u64, InventoryError>;
}

/// Repository for vendors.
pub trait VendorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Vendor>, InventoryError>;
    async fn find_by_id(&self, vendor_id: i32) -> Result<Option<Vendor>, InventoryError>;
    /// Insert a vendor and return its generated id.
    async fn create(&self, fields: &VendorFields) -> Result<i32, InventoryError>;
    /// Replace a vendor's fields. Returns the number of rows touched.
    async fn update(&self, vendor_id: i32, fields: &VendorFields) -> Result<u64, InventoryError>;
    /// Delete a vendor. Returns the number of rows deleted.
    async fn delete(&self, vendor_id: i32) -> Result<u64, InventoryError>;
}

/// Repository for users.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, InventoryError>;
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, InventoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, InventoryError>;
    /// Insert a user. Unique violations surface as `DuplicateEmail` or
    /// `UserIdCollision` so the caller can retry id generation.
    async fn create(&self, user: &User) -> Result<(), InventoryError>;
    async fn update_fields(
        &self,
        user_id: &str,
        patch: &UserPatch,
    ) -> Result<u64, InventoryError>;
    async fn delete(&self, user_id: &str) -> Result<u64, InventoryError>;
}

/// Repository for the append-only transaction ledger.
pub trait TransactionRepository: Send + Sync {
    /// Append one record; returns the generated transaction id.
    async fn append(&self, transaction: &NewTransaction) -> Result<i32, InventoryError>;
    async fn list_all(&self) -> Result<Vec<TransactionDetails>, InventoryError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TransactionDetails>, InventoryError>;
    /// Per-item transaction counts, ordered count desc then name asc.
    async fn counts_by_item(&self) -> Result<Vec<ItemTransactionCount>, InventoryError>;
    /// Distinct participating users grouped by stored (normalized) status.
    async fn distinct_users_by_status(&self) -> Result<Vec<StatusCount>, InventoryError>;
}

/// Port for the atomic checkout batch: every line's withdrawal and
/// transaction record commit together or not at all.
pub trait CheckoutPort: Send + Sync {
    async fn checkout(
        &self,
        user_id: &str,
        lines: &[CheckoutLine],
    ) -> Result<Vec<i32>, InventoryError>;
}
