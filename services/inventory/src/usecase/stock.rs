//! Stock ledger operations: withdraw, restock, global sign-out limits.

use pantry_domain::stock::StockKind;

use crate::domain::repository::ItemRepository;
use crate::domain::types::{Item, StockWithdrawal};
use crate::error::InventoryError;

/// Resolve a (quantity?, weight?) request pair into a single stock amount.
///
/// Exactly one must be provided, and it must be positive.
pub fn stock_amount(
    quantity: Option<i32>,
    weight: Option<f64>,
) -> Result<StockKind, InventoryError> {
    let amount = match (quantity, weight) {
        (Some(q), None) => StockKind::Quantity(q),
        (None, Some(w)) => StockKind::Weight(w),
        (None, None) => {
            return Err(InventoryError::InvalidInput(
                "Either quantity or weight must be provided",
            ));
        }
        (Some(_), Some(_)) => {
            return Err(InventoryError::InvalidInput(
                "Provide only one of quantity or weight",
            ));
        }
    };
    if !amount.is_positive() {
        return Err(InventoryError::InvalidInput(
            "Requested amount must be positive",
        ));
    }
    Ok(amount)
}

// ── Withdraw ─────────────────────────────────────────────────────────────────

pub struct WithdrawStockInput {
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

pub struct WithdrawStockUseCase<R: ItemRepository> {
    pub repo: R,
    /// When true, the per-item sign-out cap is enforced here in addition to
    /// stock sufficiency. Off by default: the legacy system checked caps in
    /// the front end only.
    pub enforce_signout_caps: bool,
}

impl<R: ItemRepository> WithdrawStockUseCase<R> {
    pub async fn execute(
        &self,
        product_id: &str,
        input: WithdrawStockInput,
    ) -> Result<StockWithdrawal, InventoryError> {
        let requested = stock_amount(input.quantity, input.weight)?;

        let item = self
            .repo
            .find_by_id(product_id)
            .await?
            .ok_or(InventoryError::ItemNotFound)?;
        let before = item.stock;

        if !requested.same_kind(&before) {
            return Err(InventoryError::WrongMeasurementType);
        }
        if self.enforce_signout_caps {
            check_signout_cap(&item, requested)?;
        }
        if requested.exceeds(&before) {
            return Err(InventoryError::InsufficientStock);
        }

        // The conditional UPDATE re-checks sufficiency; a concurrent
        // withdrawal that drained the stock since our read shows up as zero
        // affected rows, never as negative stock.
        let item = self
            .repo
            .withdraw_stock(product_id, requested)
            .await?
            .ok_or(InventoryError::InsufficientStock)?;

        Ok(StockWithdrawal { before, item })
    }
}

fn check_signout_cap(item: &Item, requested: StockKind) -> Result<(), InventoryError> {
    let over_cap = match requested {
        StockKind::Quantity(q) => item.max_signout_quantity.is_some_and(|cap| q > cap),
        StockKind::Weight(w) => item.max_signout_weight.is_some_and(|cap| w > cap),
    };
    if over_cap {
        return Err(InventoryError::ExceedsSignoutLimit);
    }
    Ok(())
}

// ── Restock ──────────────────────────────────────────────────────────────────

pub struct RestockInput {
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

pub struct RestockUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> RestockUseCase<R> {
    pub async fn execute(
        &self,
        product_id: &str,
        input: RestockInput,
    ) -> Result<Item, InventoryError> {
        let amount = stock_amount(input.quantity, input.weight)?;

        let item = self
            .repo
            .find_by_id(product_id)
            .await?
            .ok_or(InventoryError::ItemNotFound)?;
        if !amount.same_kind(&item.stock) {
            return Err(InventoryError::WrongMeasurementType);
        }

        self.repo
            .restock(product_id, amount)
            .await?
            .ok_or(InventoryError::ItemNotFound)
    }
}

// ── Global sign-out limits ───────────────────────────────────────────────────

pub struct SetGlobalLimitsInput {
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

pub struct SetGlobalLimitsUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> SetGlobalLimitsUseCase<R> {
    /// Overwrite the sign-out caps on every item. Returns the affected-row
    /// count.
    pub async fn execute(&self, input: SetGlobalLimitsInput) -> Result<u64, InventoryError> {
        if input.quantity.is_none() && input.weight.is_none() {
            return Err(InventoryError::InvalidInput(
                "Either quantity or weight must be provided",
            ));
        }
        self.repo
            .set_global_limits(input.quantity, input.weight)
            .await
    }
}
