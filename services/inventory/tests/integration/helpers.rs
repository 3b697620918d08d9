use std::sync::{Arc, Mutex};

use pantry_domain::stock::StockKind;
use pantry_inventory::domain::repository::{
    CheckoutPort, ItemRepository, TransactionRepository, UserRepository, VendorRepository,
};
use pantry_inventory::domain::types::{
    CheckoutLine, Item, ItemPatch, ItemTransactionCount, NewTransaction, StatusCount,
    TransactionDetails, User, UserPatch, Vendor, VendorFields,
};
use pantry_inventory::error::InventoryError;

// ── MockItemRepo ─────────────────────────────────────────────────────────────

pub struct MockItemRepo {
    pub items: Arc<Mutex<Vec<Item>>>,
}

impl MockItemRepo {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the item list for post-execution inspection.
    pub fn items_handle(&self) -> Arc<Mutex<Vec<Item>>> {
        Arc::clone(&self.items)
    }
}

impl ItemRepository for MockItemRepo {
    async fn list(&self, vendor_id: Option<i32>) -> Result<Vec<Item>, InventoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|item| vendor_id.is_none_or(|v| item.vendor_id == v))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, product_id: &str) -> Result<Option<Item>, InventoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.product_id == product_id)
            .cloned())
    }

    async fn create(&self, item: &Item) -> Result<(), InventoryError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update_fields(
        &self,
        product_id: &str,
        patch: &ItemPatch,
    ) -> Result<u64, InventoryError> {
        let mut items = self.items.lock().unwrap();
        let Some(item) = items.iter_mut().find(|i| i.product_id == product_id) else {
            return Ok(0);
        };
        if let Some(v) = &patch.product_name {
            item.product_name = v.clone();
        }
        if let Some(v) = patch.max_signout_quantity {
            item.max_signout_quantity = Some(v);
        }
        if let Some(v) = patch.max_signout_weight {
            item.max_signout_weight = Some(v);
        }
        Ok(1)
    }

    async fn delete(&self, product_id: &str) -> Result<u64, InventoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.product_id != product_id);
        Ok((before - items.len()) as u64)
    }

    // Mirrors the conditional UPDATE: only a matching representation with
    // enough stock decrements; anything else is zero affected rows.
    async fn withdraw_stock(
        &self,
        product_id: &str,
        amount: StockKind,
    ) -> Result<Option<Item>, InventoryError> {
        let mut items = self.items.lock().unwrap();
        let Some(item) = items.iter_mut().find(|i| i.product_id == product_id) else {
            return Ok(None);
        };
        let updated = match (item.stock, amount) {
            (StockKind::Quantity(current), StockKind::Quantity(requested))
                if current >= requested =>
            {
                StockKind::Quantity(current - requested)
            }
            (StockKind::Weight(current), StockKind::Weight(requested))
                if current >= requested =>
            {
                StockKind::Weight(current - requested)
            }
            _ => return Ok(None),
        };
        item.stock = updated;
        Ok(Some(item.clone()))
    }

    async fn restock(
        &self,
        product_id: &str,
        amount: StockKind,
    ) -> Result<Option<Item>, InventoryError> {
        let mut items = self.items.lock().unwrap();
        let Some(item) = items.iter_mut().find(|i| i.product_id == product_id) else {
            return Ok(None);
        };
        let updated = match (item.stock, amount) {
            (StockKind::Quantity(current), StockKind::Quantity(added)) => {
                StockKind::Quantity(current + added)
            }
            (StockKind::Weight(current), StockKind::Weight(added)) => {
                StockKind::Weight(current + added)
            }
            _ => return Ok(None),
        };
        item.stock = updated;
        Ok(Some(item.clone()))
    }

    async fn set_global_limits(
        &self,
        quantity: Option<i32>,
        weight: Option<f64>,
    ) -> Result<u64, InventoryError> {
        let mut items = self.items.lock().unwrap();
        for item in items.iter_mut() {
            if let Some(q) = quantity {
                item.max_signout_quantity = Some(q);
            }
            if let Some(w) = weight {
                item.max_signout_weight = Some(w);
            }
        }
        Ok(items.len() as u64)
    }

    async fn list_types(&self) -> Result<Vec<String>, InventoryError> {
        let items = self.items.lock().unwrap();
        let mut types: Vec<String> = items.iter().map(|i| i.item_type.clone()).collect();
        types.sort();
        types.dedup();
        Ok(types)
    }

    async fn count_by_vendor(&self, vendor_id: i32) -> Result<u64, InventoryError> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().filter(|i| i.vendor_id == vendor_id).count() as u64)
    }
}

// ── MockVendorRepo ───────────────────────────────────────────────────────────

pub struct MockVendorRepo {
    pub vendors: Arc<Mutex<Vec<Vendor>>>,
}

impl MockVendorRepo {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self {
            vendors: Arc::new(Mutex::new(vendors)),
        }
    }

    pub fn vendors_handle(&self) -> Arc<Mutex<Vec<Vendor>>> {
        Arc::clone(&self.vendors)
    }
}

impl VendorRepository for MockVendorRepo {
    async fn list(&self) -> Result<Vec<Vendor>, InventoryError> {
        Ok(self.vendors.lock().unwrap().clone())
    }

    async fn find_by_id(&self, vendor_id: i32) -> Result<Option<Vendor>, InventoryError> {
        Ok(self
            .vendors
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.vendor_id == vendor_id)
            .cloned())
    }

    async fn create(&self, fields: &VendorFields) -> Result<i32, InventoryError> {
        let mut vendors = self.vendors.lock().unwrap();
        let vendor_id = vendors.iter().map(|v| v.vendor_id).max().unwrap_or(0) + 1;
        vendors.push(Vendor {
            vendor_id,
            vendor_name: fields.vendor_name.clone(),
            contact_person: fields.contact_person.clone(),
            address: fields.address.clone(),
            phone: fields.phone.clone(),
            email: fields.email.clone(),
        });
        Ok(vendor_id)
    }

    async fn update(&self, vendor_id: i32, fields: &VendorFields) -> Result<u64, InventoryError> {
        let mut vendors = self.vendors.lock().unwrap();
        let Some(vendor) = vendors.iter_mut().find(|v| v.vendor_id == vendor_id) else {
            return Ok(0);
        };
        vendor.vendor_name = fields.vendor_name.clone();
        vendor.contact_person = fields.contact_person.clone();
        vendor.address = fields.address.clone();
        vendor.phone = fields.phone.clone();
        vendor.email = fields.email.clone();
        Ok(1)
    }

    async fn delete(&self, vendor_id: i32) -> Result<u64, InventoryError> {
        let mut vendors = self.vendors.lock().unwrap();
        let before = vendors.len();
        vendors.retain(|v| v.vendor_id != vendor_id);
        Ok((before - vendors.len()) as u64)
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    /// Number of initial `create` calls to fail with `UserIdCollision`,
    /// simulating generated-id collisions.
    pub id_collisions: Mutex<u32>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            id_collisions: Mutex::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn with_id_collisions(users: Vec<User>, collisions: u32) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            id_collisions: Mutex::new(collisions),
        }
    }

    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn list(&self) -> Result<Vec<User>, InventoryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, InventoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, InventoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), InventoryError> {
        {
            let mut collisions = self.id_collisions.lock().unwrap();
            if *collisions > 0 {
                *collisions -= 1;
                return Err(InventoryError::UserIdCollision);
            }
        }
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(InventoryError::DuplicateEmail);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update_fields(
        &self,
        user_id: &str,
        patch: &UserPatch,
    ) -> Result<u64, InventoryError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.user_id == user_id) else {
            return Ok(0);
        };
        if let Some(v) = &patch.status {
            user.status = v.clone();
        }
        Ok(1)
    }

    async fn delete(&self, user_id: &str) -> Result<u64, InventoryError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.user_id != user_id);
        Ok((before - users.len()) as u64)
    }
}

// ── MockTransactionRepo ──────────────────────────────────────────────────────

pub struct MockTransactionRepo {
    pub appended: Arc<Mutex<Vec<NewTransaction>>>,
    pub counts: Vec<ItemTransactionCount>,
    pub status_counts: Vec<StatusCount>,
}

impl MockTransactionRepo {
    pub fn empty() -> Self {
        Self {
            appended: Arc::new(Mutex::new(vec![])),
            counts: vec![],
            status_counts: vec![],
        }
    }

    pub fn with_counts(counts: Vec<ItemTransactionCount>) -> Self {
        Self {
            counts,
            ..Self::empty()
        }
    }

    pub fn with_status_counts(status_counts: Vec<StatusCount>) -> Self {
        Self {
            status_counts,
            ..Self::empty()
        }
    }

    pub fn appended_handle(&self) -> Arc<Mutex<Vec<NewTransaction>>> {
        Arc::clone(&self.appended)
    }
}

impl TransactionRepository for MockTransactionRepo {
    async fn append(&self, transaction: &NewTransaction) -> Result<i32, InventoryError> {
        let mut appended = self.appended.lock().unwrap();
        appended.push(transaction.clone());
        Ok(appended.len() as i32)
    }

    async fn list_all(&self) -> Result<Vec<TransactionDetails>, InventoryError> {
        Ok(vec![])
    }

    async fn list_by_user(
        &self,
        _user_id: &str,
    ) -> Result<Vec<TransactionDetails>, InventoryError> {
        Ok(vec![])
    }

    async fn counts_by_item(&self) -> Result<Vec<ItemTransactionCount>, InventoryError> {
        Ok(self.counts.clone())
    }

    async fn distinct_users_by_status(&self) -> Result<Vec<StatusCount>, InventoryError> {
        Ok(self.status_counts.clone())
    }
}

// ── MockCheckoutPort ─────────────────────────────────────────────────────────

pub struct MockCheckoutPort {
    pub received: Arc<Mutex<Vec<(String, Vec<CheckoutLine>)>>>,
    pub fail_with: Option<fn() -> InventoryError>,
}

impl MockCheckoutPort {
    pub fn ok() -> Self {
        Self {
            received: Arc::new(Mutex::new(vec![])),
            fail_with: None,
        }
    }

    pub fn failing(fail_with: fn() -> InventoryError) -> Self {
        Self {
            received: Arc::new(Mutex::new(vec![])),
            fail_with: Some(fail_with),
        }
    }

    pub fn received_handle(&self) -> Arc<Mutex<Vec<(String, Vec<CheckoutLine>)>>> {
        Arc::clone(&self.received)
    }
}

impl CheckoutPort for MockCheckoutPort {
    async fn checkout(
        &self,
        user_id: &str,
        lines: &[CheckoutLine],
    ) -> Result<Vec<i32>, InventoryError> {
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        self.received
            .lock()
            .unwrap()
            .push((user_id.to_owned(), lines.to_vec()));
        Ok((1..=lines.len() as i32).collect())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn quantity_item(product_id: &str, quantity: i32) -> Item {
    Item {
        product_id: product_id.to_owned(),
        product_name: format!("{product_id} name"),
        description: "test item".to_owned(),
        item_type: "canned".to_owned(),
        vendor_id: 1,
        price_per_unit: 2.5,
        stock: StockKind::Quantity(quantity),
        max_signout_quantity: Some(3),
        max_signout_weight: None,
    }
}

pub fn weight_item(product_id: &str, weight: f64) -> Item {
    Item {
        product_id: product_id.to_owned(),
        product_name: format!("{product_id} name"),
        description: "test item".to_owned(),
        item_type: "produce".to_owned(),
        vendor_id: 1,
        price_per_unit: 1.2,
        stock: StockKind::Weight(weight),
        max_signout_quantity: None,
        max_signout_weight: Some(5.0),
    }
}

pub fn test_user(user_id: &str, status: &str) -> User {
    User {
        user_id: user_id.to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Smith".to_owned(),
        email: format!("{user_id}@example.edu"),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAAAAAAAAA".to_owned(),
        status: status.to_owned(),
        role: "student".to_owned(),
    }
}

pub fn test_vendor(vendor_id: i32, name: &str) -> Vendor {
    Vendor {
        vendor_id,
        vendor_name: name.to_owned(),
        contact_person: None,
        address: None,
        phone: None,
        email: None,
    }
}
