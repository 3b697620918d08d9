//! Transaction recorder and history reads.

use pantry_domain::status::normalize_status;

use crate::domain::repository::{TransactionRepository, UserRepository};
use crate::domain::types::{NewTransaction, TransactionDetails};
use crate::error::InventoryError;

// ── RecordWithdrawal ─────────────────────────────────────────────────────────

pub struct RecordWithdrawalInput {
    pub user_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity_taken: Option<f64>,
}

pub struct RecordWithdrawalUseCase<U: UserRepository, T: TransactionRepository> {
    pub users: U,
    pub transactions: T,
}

impl<U: UserRepository, T: TransactionRepository> RecordWithdrawalUseCase<U, T> {
    /// Append one withdrawal record and return its generated id.
    ///
    /// Stock is NOT re-validated here — the caller is expected to have
    /// performed a successful withdrawal first (two-step legacy protocol).
    pub async fn execute(&self, input: RecordWithdrawalInput) -> Result<i32, InventoryError> {
        let (Some(user_id), Some(product_id), Some(quantity_taken)) =
            (input.user_id, input.product_id, input.quantity_taken)
        else {
            return Err(InventoryError::InvalidInput(
                "All fields are required: user_id, product_id, quantity_taken",
            ));
        };
        if quantity_taken <= 0.0 {
            return Err(InventoryError::InvalidInput(
                "quantity_taken must be positive",
            ));
        }

        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or(InventoryError::UserNotFound)?;
        if user.status.trim().is_empty() {
            return Err(InventoryError::MissingStatus);
        }

        self.transactions
            .append(&NewTransaction {
                user_id,
                product_id,
                quantity_taken,
                user_status: normalize_status(&user.status),
            })
            .await
    }
}

// ── History reads ────────────────────────────────────────────────────────────

pub struct ListTransactionsUseCase<T: TransactionRepository> {
    pub repo: T,
}

impl<T: TransactionRepository> ListTransactionsUseCase<T> {
    pub async fn execute(&self) -> Result<Vec<TransactionDetails>, InventoryError> {
        self.repo.list_all().await
    }
}

pub struct ListUserTransactionsUseCase<T: TransactionRepository> {
    pub repo: T,
}

impl<T: TransactionRepository> ListUserTransactionsUseCase<T> {
    pub async fn execute(&self, user_id: &str) -> Result<Vec<TransactionDetails>, InventoryError> {
        self.repo.list_by_user(user_id).await
    }
}
