use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    Statement, TransactionTrait,
    sea_query::Expr,
};

use pantry_domain::stock::StockKind;
use pantry_inventory_schema::{items, transactions, users, vendors};

use crate::domain::repository::{
    CheckoutPort, ItemRepository, TransactionRepository, UserRepository, VendorRepository,
};
use crate::domain::types::{
    CheckoutLine, Item, ItemPatch, ItemTransactionCount, NewTransaction, StatusCount,
    TransactionDetails, User, UserPatch, Vendor, VendorFields,
};
use crate::error::InventoryError;

// ── Item repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbItemRepository {
    pub db: DatabaseConnection,
}

impl ItemRepository for DbItemRepository {
    async fn list(&self, vendor_id: Option<i32>) -> Result<Vec<Item>, InventoryError> {
        let mut query = items::Entity::find();
        if let Some(vendor_id) = vendor_id {
            query = query.filter(items::Column::VendorId.eq(vendor_id));
        }
        let models = query.all(&self.db).await.context("list items")?;
        Ok(models.into_iter().map(item_from_model).collect())
    }

    async fn find_by_id(&self, product_id: &str) -> Result<Option<Item>, InventoryError> {
        let model = items::Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .context("find item by id")?;
        Ok(model.map(item_from_model))
    }

    async fn create(&self, item: &Item) -> Result<(), InventoryError> {
        let (order_quantity, weight_amount) = item.stock.into_columns();
        items::ActiveModel {
            product_id: Set(item.product_id.clone()),
            product_name: Set(item.product_name.clone()),
            description: Set(item.description.clone()),
            item_type: Set(item.item_type.clone()),
            vendor_id: Set(item.vendor_id),
            price_per_unit: Set(item.price_per_unit),
            order_quantity: Set(order_quantity),
            weight_amount: Set(weight_amount),
            max_signout_quantity: Set(item.max_signout_quantity),
            max_signout_weight: Set(item.max_signout_weight),
        }
        .insert(&self.db)
        .await
        .context("create item")?;
        Ok(())
    }

    async fn update_fields(
        &self,
        product_id: &str,
        patch: &ItemPatch,
    ) -> Result<u64, InventoryError> {
        let mut update =
            items::Entity::update_many().filter(items::Column::ProductId.eq(product_id));
        let mut changed = false;
        if let Some(v) = &patch.product_name {
            update = update.col_expr(items::Column::ProductName, Expr::value(v.clone()));
            changed = true;
        }
        if let Some(v) = &patch.description {
            update = update.col_expr(items::Column::Description, Expr::value(v.clone()));
            changed = true;
        }
        if let Some(v) = &patch.item_type {
            update = update.col_expr(items::Column::ItemType, Expr::value(v.clone()));
            changed = true;
        }
        if let Some(v) = patch.vendor_id {
            update = update.col_expr(items::Column::VendorId, Expr::value(v));
            changed = true;
        }
        if let Some(v) = patch.price_per_unit {
            update = update.col_expr(items::Column::PricePerUnit, Expr::value(v));
            changed = true;
        }
        if let Some(v) = patch.order_quantity {
            update = update.col_expr(items::Column::OrderQuantity, Expr::value(v));
            changed = true;
        }
        if let Some(v) = patch.weight_amount {
            update = update.col_expr(items::Column::WeightAmount, Expr::value(v));
            changed = true;
        }
        if let Some(v) = patch.max_signout_quantity {
            update = update.col_expr(items::Column::MaxSignoutQuantity, Expr::value(v));
            changed = true;
        }
        if let Some(v) = patch.max_signout_weight {
            update = update.col_expr(items::Column::MaxSignoutWeight, Expr::value(v));
            changed = true;
        }
        if !changed {
            return Ok(0);
        }
        let result = update.exec(&self.db).await.context("update item")?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, product_id: &str) -> Result<u64, InventoryError> {
        let result = items::Entity::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .context("delete item")?;
        Ok(result.rows_affected)
    }

    async fn withdraw_stock(
        &self,
        product_id: &str,
        amount: StockKind,
    ) -> Result<Option<Item>, InventoryError> {
        let rows = decrement_stock(&self.db, product_id, amount)
            .await
            .context("withdraw stock")?;
        if rows == 0 {
            return Ok(None);
        }
        let model = items::Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .context("reload item after withdraw")?;
        Ok(model.map(item_from_model))
    }

    async fn restock(
        &self,
        product_id: &str,
        amount: StockKind,
    ) -> Result<Option<Item>, InventoryError> {
        let update = match amount {
            StockKind::Quantity(q) => items::Entity::update_many()
                .col_expr(
                    items::Column::OrderQuantity,
                    Expr::col(items::Column::OrderQuantity).add(q),
                )
                .filter(items::Column::OrderQuantity.is_not_null()),
            StockKind::Weight(w) => items::Entity::update_many()
                .col_expr(
                    items::Column::WeightAmount,
                    Expr::col(items::Column::WeightAmount).add(w),
                )
                .filter(items::Column::WeightAmount.is_not_null()),
        };
        let result = update
            .filter(items::Column::ProductId.eq(product_id))
            .exec(&self.db)
            .await
            .context("restock item")?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        let model = items::Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .context("reload item after restock")?;
        Ok(model.map(item_from_model))
    }

    async fn set_global_limits(
        &self,
        quantity: Option<i32>,
        weight: Option<f64>,
    ) -> Result<u64, InventoryError> {
        let mut update = items::Entity::update_many();
        if let Some(q) = quantity {
            update = update.col_expr(items::Column::MaxSignoutQuantity, Expr::value(q));
        }
        if let Some(w) = weight {
            update = update.col_expr(items::Column::MaxSignoutWeight, Expr::value(w));
        }
        let result = update.exec(&self.db).await.context("set global limits")?;
        Ok(result.rows_affected)
    }

    async fn list_types(&self) -> Result<Vec<String>, InventoryError> {
        let types = items::Entity::find()
            .select_only()
            .column(items::Column::ItemType)
            .distinct()
            .order_by_asc(items::Column::ItemType)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("list item types")?;
        Ok(types)
    }

    async fn count_by_vendor(&self, vendor_id: i32) -> Result<u64, InventoryError> {
        let count = items::Entity::find()
            .filter(items::Column::VendorId.eq(vendor_id))
            .count(&self.db)
            .await
            .context("count items by vendor")?;
        Ok(count)
    }
}

/// Conditional stock decrement: the `stock >= amount` filter makes the
/// UPDATE atomic, so two racing withdrawals can never drive stock negative.
/// Returns the affected-row count (0 = missing item, wrong representation,
/// or insufficient stock).
async fn decrement_stock<C: ConnectionTrait>(
    conn: &C,
    product_id: &str,
    amount: StockKind,
) -> Result<u64, DbErr> {
    let update = match amount {
        StockKind::Quantity(q) => items::Entity::update_many()
            .col_expr(
                items::Column::OrderQuantity,
                Expr::col(items::Column::OrderQuantity).sub(q),
            )
            .filter(items::Column::OrderQuantity.gte(q)),
        StockKind::Weight(w) => items::Entity::update_many()
            .col_expr(
                items::Column::WeightAmount,
                Expr::col(items::Column::WeightAmount).sub(w),
            )
            .filter(items::Column::WeightAmount.gte(w)),
    };
    let result = update
        .filter(items::Column::ProductId.eq(product_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

fn item_from_model(model: items::Model) -> Item {
    Item {
        stock: StockKind::from_columns(model.order_quantity, model.weight_amount),
        product_id: model.product_id,
        product_name: model.product_name,
        description: model.description,
        item_type: model.item_type,
        vendor_id: model.vendor_id,
        price_per_unit: model.price_per_unit,
        max_signout_quantity: model.max_signout_quantity,
        max_signout_weight: model.max_signout_weight,
    }
}

// ── Vendor repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVendorRepository {
    pub db: DatabaseConnection,
}

impl VendorRepository for DbVendorRepository {
    async fn list(&self) -> Result<Vec<Vendor>, InventoryError> {
        let models = vendors::Entity::find()
            .all(&self.db)
            .await
            .context("list vendors")?;
        Ok(models.into_iter().map(vendor_from_model).collect())
    }

    async fn find_by_id(&self, vendor_id: i32) -> Result<Option<Vendor>, InventoryError> {
        let model = vendors::Entity::find_by_id(vendor_id)
            .one(&self.db)
            .await
            .context("find vendor by id")?;
        Ok(model.map(vendor_from_model))
    }

    async fn create(&self, fields: &VendorFields) -> Result<i32, InventoryError> {
        let model = vendors::ActiveModel {
            vendor_name: Set(fields.vendor_name.clone()),
            contact_person: Set(fields.contact_person.clone()),
            address: Set(fields.address.clone()),
            phone: Set(fields.phone.clone()),
            email: Set(fields.email.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create vendor")?;
        Ok(model.vendor_id)
    }

    async fn update(&self, vendor_id: i32, fields: &VendorFields) -> Result<u64, InventoryError> {
        let result = vendors::Entity::update_many()
            .col_expr(
                vendors::Column::VendorName,
                Expr::value(fields.vendor_name.clone()),
            )
            .col_expr(
                vendors::Column::ContactPerson,
                Expr::value(fields.contact_person.clone()),
            )
            .col_expr(vendors::Column::Address, Expr::value(fields.address.clone()))
            .col_expr(vendors::Column::Phone, Expr::value(fields.phone.clone()))
            .col_expr(vendors::Column::Email, Expr::value(fields.email.clone()))
            .filter(vendors::Column::VendorId.eq(vendor_id))
            .exec(&self.db)
            .await
            .context("update vendor")?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, vendor_id: i32) -> Result<u64, InventoryError> {
        let result = vendors::Entity::delete_by_id(vendor_id)
            .exec(&self.db)
            .await
            .context("delete vendor")?;
        Ok(result.rows_affected)
    }
}

fn vendor_from_model(model: vendors::Model) -> Vendor {
    Vendor {
        vendor_id: model.vendor_id,
        vendor_name: model.vendor_name,
        contact_person: model.contact_person,
        address: model.address,
        phone: model.phone,
        email: model.email,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, InventoryError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, InventoryError> {
        let model = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, InventoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), InventoryError> {
        let insert = users::ActiveModel {
            user_id: Set(user.user_id.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password_hash.clone()),
            status: Set(user.status.clone()),
            role: Set(user.role.clone()),
        }
        .insert(&self.db)
        .await;
        match insert {
            Ok(_) => Ok(()),
            // Distinguish which unique key tripped: email is a 409 for the
            // caller, a user_id collision triggers one regeneration retry.
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(message)) => {
                    if message.contains("email") {
                        Err(InventoryError::DuplicateEmail)
                    } else {
                        Err(InventoryError::UserIdCollision)
                    }
                }
                _ => Err(anyhow::Error::new(e).context("create user").into()),
            },
        }
    }

    async fn update_fields(
        &self,
        user_id: &str,
        patch: &UserPatch,
    ) -> Result<u64, InventoryError> {
        let mut update = users::Entity::update_many().filter(users::Column::UserId.eq(user_id));
        let mut changed = false;
        if let Some(v) = &patch.first_name {
            update = update.col_expr(users::Column::FirstName, Expr::value(v.clone()));
            changed = true;
        }
        if let Some(v) = &patch.last_name {
            update = update.col_expr(users::Column::LastName, Expr::value(v.clone()));
            changed = true;
        }
        if let Some(v) = &patch.email {
            update = update.col_expr(users::Column::Email, Expr::value(v.clone()));
            changed = true;
        }
        if let Some(v) = &patch.status {
            update = update.col_expr(users::Column::Status, Expr::value(v.clone()));
            changed = true;
        }
        if let Some(v) = &patch.role {
            update = update.col_expr(users::Column::Role, Expr::value(v.clone()));
            changed = true;
        }
        if !changed {
            return Ok(0);
        }
        let result = update.exec(&self.db).await.context("update user")?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, user_id: &str) -> Result<u64, InventoryError> {
        let result = users::Entity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        user_id: model.user_id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        password_hash: model.password,
        status: model.status,
        role: model.role,
    }
}

// ── Transaction repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTransactionRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct TransactionRow {
    transaction_id: i32,
    user_id: String,
    product_id: String,
    quantity_taken: f64,
    user_status: String,
    taken_at: chrono::DateTime<chrono::Utc>,
    product_name: String,
    item_type: String,
    username: Option<String>,
}

impl From<TransactionRow> for TransactionDetails {
    fn from(row: TransactionRow) -> Self {
        Self {
            transaction_id: row.transaction_id,
            user_id: row.user_id,
            product_id: row.product_id,
            quantity_taken: row.quantity_taken,
            user_status: row.user_status,
            taken_at: row.taken_at,
            product_name: row.product_name,
            item_type: row.item_type,
            username: row.username,
        }
    }
}

impl TransactionRepository for DbTransactionRepository {
    async fn append(&self, transaction: &NewTransaction) -> Result<i32, InventoryError> {
        let model = transactions::ActiveModel {
            user_id: Set(transaction.user_id.clone()),
            product_id: Set(transaction.product_id.clone()),
            quantity_taken: Set(transaction.quantity_taken),
            user_status: Set(transaction.user_status.clone()),
            taken_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("append transaction")?;
        Ok(model.transaction_id)
    }

    async fn list_all(&self) -> Result<Vec<TransactionDetails>, InventoryError> {
        let sql = r#"
            SELECT t.transaction_id, t.user_id, t.product_id, t.quantity_taken,
                   t.user_status, t.taken_at,
                   i.product_name, i.type AS item_type,
                   u.first_name || ' ' || u.last_name AS username
            FROM transactions t
            JOIN items i ON t.product_id = i.product_id
            JOIN users u ON t.user_id = u.user_id
            ORDER BY t.taken_at DESC
        "#;
        let rows = TransactionRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(&self.db)
        .await
        .context("list transactions")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TransactionDetails>, InventoryError> {
        let sql = r#"
            SELECT t.transaction_id, t.user_id, t.product_id, t.quantity_taken,
                   t.user_status, t.taken_at,
                   i.product_name, i.type AS item_type,
                   NULL::text AS username
            FROM transactions t
            JOIN items i ON t.product_id = i.product_id
            WHERE t.user_id = $1
            ORDER BY t.taken_at DESC
        "#;
        let rows = TransactionRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [user_id.into()],
        ))
        .all(&self.db)
        .await
        .context("list transactions by user")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn counts_by_item(&self) -> Result<Vec<ItemTransactionCount>, InventoryError> {
        #[derive(Debug, FromQueryResult)]
        struct CountRow {
            product_id: String,
            product_name: String,
            item_type: String,
            total_transactions: i64,
        }

        let sql = r#"
            SELECT i.product_id, i.product_name, i.type AS item_type,
                   COUNT(*) AS total_transactions
            FROM transactions t
            JOIN items i ON t.product_id = i.product_id
            GROUP BY i.product_id, i.product_name, i.type
            ORDER BY total_transactions DESC, i.product_name ASC
        "#;
        let rows = CountRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(&self.db)
        .await
        .context("count transactions by item")?;
        Ok(rows
            .into_iter()
            .map(|row| ItemTransactionCount {
                product_id: row.product_id,
                product_name: row.product_name,
                item_type: row.item_type,
                total_transactions: row.total_transactions,
            })
            .collect())
    }

    async fn distinct_users_by_status(&self) -> Result<Vec<StatusCount>, InventoryError> {
        #[derive(Debug, FromQueryResult)]
        struct StatusRow {
            user_status: String,
            count: i64,
        }

        let sql = r#"
            SELECT user_status, COUNT(DISTINCT user_id) AS count
            FROM transactions
            GROUP BY user_status
        "#;
        let rows = StatusRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(&self.db)
        .await
        .context("count distinct users by status")?;
        Ok(rows
            .into_iter()
            .map(|row| StatusCount {
                user_status: row.user_status,
                count: row.count,
            })
            .collect())
    }
}

// ── Checkout port ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCheckoutPort {
    pub db: DatabaseConnection,
}

impl CheckoutPort for DbCheckoutPort {
    /// Withdraw and record every line inside one transaction. Any error
    /// before commit rolls the whole batch back (the transaction is dropped
    /// uncommitted).
    async fn checkout(
        &self,
        user_id: &str,
        lines: &[CheckoutLine],
    ) -> Result<Vec<i32>, InventoryError> {
        let txn = self.db.begin().await.context("begin checkout")?;

        let user = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .context("find checkout user")?
            .ok_or(InventoryError::UserNotFound)?;
        if user.status.trim().is_empty() {
            return Err(InventoryError::MissingStatus);
        }
        let user_status = pantry_domain::status::normalize_status(&user.status);

        let mut transaction_ids = Vec::with_capacity(lines.len());
        for line in lines {
            let item = items::Entity::find_by_id(&line.product_id)
                .one(&txn)
                .await
                .context("find checkout item")?
                .ok_or(InventoryError::ItemNotFound)?;
            let stock = StockKind::from_columns(item.order_quantity, item.weight_amount);
            if !line.amount.same_kind(&stock) {
                return Err(InventoryError::WrongMeasurementType);
            }
            let rows = decrement_stock(&txn, &line.product_id, line.amount)
                .await
                .context("withdraw checkout line")?;
            if rows == 0 {
                return Err(InventoryError::InsufficientStock);
            }

            let model = transactions::ActiveModel {
                user_id: Set(user_id.to_owned()),
                product_id: Set(line.product_id.clone()),
                quantity_taken: Set(line.amount.amount()),
                user_status: Set(user_status.clone()),
                taken_at: Set(Utc::now()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .context("record checkout line")?;
            transaction_ids.push(model.transaction_id);
        }

        txn.commit().await.context("commit checkout")?;
        Ok(transaction_ids)
    }
}
