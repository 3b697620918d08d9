//! Aggregate reporting: most-taken ranking, low-stock, status counts.

use pantry_domain::status::UserStatus;
use pantry_domain::stock::StockKind;

use crate::domain::repository::{ItemRepository, TransactionRepository};
use crate::domain::types::{Item, ItemTransactionCount, RankedItem};
use crate::error::InventoryError;

// ── Most taken ───────────────────────────────────────────────────────────────

pub struct MostTakenUseCase<T: TransactionRepository> {
    pub transactions: T,
}

impl<T: TransactionRepository> MostTakenUseCase<T> {
    /// Items ranked by transaction count with competition ranking (SQL
    /// `RANK()` semantics): ties share a rank, the next distinct count gets
    /// rank = preceding row count + 1. Everything with rank ≤ `limit` is
    /// returned, names ascending within equal counts.
    pub async fn execute(&self, limit: i64) -> Result<Vec<RankedItem>, InventoryError> {
        let counts = self.transactions.counts_by_item().await?;
        Ok(rank_items(counts, limit))
    }
}

// Counts arrive presorted (count desc, name asc).
fn rank_items(counts: Vec<ItemTransactionCount>, limit: i64) -> Vec<RankedItem> {
    let mut ranked = Vec::new();
    let mut previous_count = None;
    let mut rank = 0;
    for (index, c) in counts.into_iter().enumerate() {
        if previous_count != Some(c.total_transactions) {
            rank = index as i64 + 1;
            previous_count = Some(c.total_transactions);
        }
        if rank > limit {
            break;
        }
        ranked.push(RankedItem {
            product_id: c.product_id,
            product_name: c.product_name,
            item_type: c.item_type,
            total_transactions: c.total_transactions,
            ranking: rank,
        });
    }
    ranked
}

// ── Low stock ────────────────────────────────────────────────────────────────

pub struct LowStockUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> LowStockUseCase<R> {
    /// Items whose active stock is positive and at or below the applicable
    /// threshold, most critically low first (ascending stock/threshold
    /// fraction, so quantity- and weight-tracked items interleave fairly).
    /// Zero stock means "out", not "low" — excluded.
    pub async fn execute(
        &self,
        quantity_threshold: i32,
        weight_threshold: f64,
    ) -> Result<Vec<Item>, InventoryError> {
        if quantity_threshold <= 0 || weight_threshold <= 0.0 {
            return Err(InventoryError::InvalidInput("Thresholds must be positive"));
        }
        let items = self.repo.list(None).await?;

        let mut low: Vec<(f64, Item)> = items
            .into_iter()
            .filter_map(|item| {
                let fraction = match item.stock {
                    StockKind::Quantity(q) if q > 0 && q <= quantity_threshold => {
                        f64::from(q) / f64::from(quantity_threshold)
                    }
                    StockKind::Weight(w) if w > 0.0 && w <= weight_threshold => {
                        w / weight_threshold
                    }
                    _ => return None,
                };
                Some((fraction, item))
            })
            .collect();
        low.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(low.into_iter().map(|(_, item)| item).collect())
    }
}

// ── Status counts ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCountsOutput {
    pub undergraduate_count: i64,
    pub graduate_count: i64,
}

pub struct StatusCountsUseCase<T: TransactionRepository> {
    pub transactions: T,
}

impl<T: TransactionRepository> StatusCountsUseCase<T> {
    /// Distinct participating users per status. Statuses other than the two
    /// known ones are counted by the store but not surfaced by name.
    pub async fn execute(&self) -> Result<StatusCountsOutput, InventoryError> {
        let rows = self.transactions.distinct_users_by_status().await?;
        let mut out = StatusCountsOutput {
            undergraduate_count: 0,
            graduate_count: 0,
        };
        for row in rows {
            match UserStatus::parse(&row.user_status) {
                Some(UserStatus::Undergraduate) => out.undergraduate_count = row.count,
                Some(UserStatus::Graduate) => out.graduate_count = row.count,
                None => {}
            }
        }
        Ok(out)
    }
}
