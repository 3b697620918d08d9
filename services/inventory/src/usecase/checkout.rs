//! Atomic checkout: withdraw + record for a whole cart in one database
//! transaction.
//!
//! The legacy protocol issued two independent requests per cart line, leaving
//! a window where stock was decremented with no matching record. Those
//! endpoints still exist; this batch endpoint is the transactional
//! alternative — any failing line rolls back every line.

use crate::domain::repository::CheckoutPort;
use crate::domain::types::CheckoutLine;
use crate::error::InventoryError;
use crate::usecase::stock::stock_amount;

pub struct CheckoutLineInput {
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

pub struct CheckoutInput {
    pub user_id: Option<String>,
    pub lines: Vec<CheckoutLineInput>,
}

pub struct CheckoutUseCase<P: CheckoutPort> {
    pub port: P,
}

impl<P: CheckoutPort> CheckoutUseCase<P> {
    /// Returns the generated transaction id per line, in input order.
    pub async fn execute(&self, input: CheckoutInput) -> Result<Vec<i32>, InventoryError> {
        let user_id = input
            .user_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(InventoryError::MissingField("user_id"))?;
        if input.lines.is_empty() {
            return Err(InventoryError::InvalidInput(
                "At least one checkout line is required",
            ));
        }

        let mut lines = Vec::with_capacity(input.lines.len());
        for line in input.lines {
            let product_id = line
                .product_id
                .filter(|id| !id.trim().is_empty())
                .ok_or(InventoryError::MissingField("product_id"))?;
            let amount = stock_amount(line.quantity, line.weight)?;
            lines.push(CheckoutLine { product_id, amount });
        }

        self.port.checkout(&user_id, &lines).await
    }
}
