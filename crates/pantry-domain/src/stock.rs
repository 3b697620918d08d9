//! Stock representation for pantry items.

use serde::{Deserialize, Serialize};

/// How an item's on-hand stock is tracked.
///
/// An item is either counted (`Quantity`, whole units) or weighed (`Weight`,
/// fractional pounds) — never both. The two legacy nullable columns
/// (`order_quantity` / `weight_amount`) are collapsed into this tagged
/// variant at the storage boundary; which variant is active decides the
/// arithmetic and which sign-out cap applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum StockKind {
    Quantity(i32),
    Weight(f64),
}

impl StockKind {
    /// Reconstruct the active representation from the two nullable columns.
    ///
    /// A populated weight column wins only when the quantity column is absent
    /// or non-positive; rows with neither column set are counted items with
    /// zero stock.
    pub fn from_columns(order_quantity: Option<i32>, weight_amount: Option<f64>) -> Self {
        match (order_quantity, weight_amount) {
            (Some(q), None) => Self::Quantity(q),
            (None, Some(w)) => Self::Weight(w),
            (Some(q), Some(w)) => {
                if w > 0.0 && q <= 0 {
                    Self::Weight(w)
                } else {
                    Self::Quantity(q)
                }
            }
            (None, None) => Self::Quantity(0),
        }
    }

    /// Split back into the two nullable columns for storage and API rows.
    pub fn into_columns(self) -> (Option<i32>, Option<f64>) {
        match self {
            Self::Quantity(q) => (Some(q), None),
            Self::Weight(w) => (None, Some(w)),
        }
    }

    /// Numeric view of the amount, independent of representation.
    pub fn amount(&self) -> f64 {
        match *self {
            Self::Quantity(q) => f64::from(q),
            Self::Weight(w) => w,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.amount() > 0.0
    }

    /// Whether `self` and `other` use the same representation.
    pub fn same_kind(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Quantity(_), Self::Quantity(_)) | (Self::Weight(_), Self::Weight(_))
        )
    }

    /// Whether withdrawing `self` from `available` would overdraw it.
    /// Callers must have checked `same_kind` first.
    pub fn exceeds(&self, available: &Self) -> bool {
        self.amount() > available.amount()
    }
}
