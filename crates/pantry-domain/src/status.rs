//! User status (academic standing) types.

use serde::{Deserialize, Serialize};

/// Academic standing recorded on each transaction.
///
/// Stored lower-cased at transaction-write time so aggregate queries can
/// group case-insensitively without re-normalizing. Statuses outside these
/// two are stored as-is but not surfaced by name in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Undergraduate,
    Graduate,
}

impl UserStatus {
    /// Parse case-insensitively. Returns `None` for unknown statuses.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undergraduate" => Some(Self::Undergraduate),
            "graduate" => Some(Self::Graduate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
        }
    }
}

/// Normalize a raw status value the way transactions store it.
pub fn normalize_status(s: &str) -> String {
    s.trim().to_lowercase()
}
