//! Admin authorization policy.
//!
//! The legacy middleware had a bypass baked into what looked like the
//! production code path. Here the policy is an injected strategy: the
//! always-allow variant exists, but only an explicit `ADMIN_POLICY=allow-all`
//! config value installs it.

use axum::http::HeaderMap;

use crate::error::InventoryError;

/// Which policy the config installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPolicyKind {
    RoleHeader,
    AllowAll,
}

impl AdminPolicyKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "role-header" => Some(Self::RoleHeader),
            "allow-all" => Some(Self::AllowAll),
            _ => None,
        }
    }
}

/// Gate for admin-only operations. Implementations inspect the request
/// headers and either admit the request or fail with `Forbidden`.
pub trait AdminPolicy: Send + Sync {
    fn authorize(&self, headers: &HeaderMap) -> Result<(), InventoryError>;
}

/// Requires the `x-role: admin` header.
pub struct RoleHeaderPolicy;

impl AdminPolicy for RoleHeaderPolicy {
    fn authorize(&self, headers: &HeaderMap) -> Result<(), InventoryError> {
        let role = headers.get("x-role").and_then(|v| v.to_str().ok());
        if role == Some("admin") {
            Ok(())
        } else {
            Err(InventoryError::Forbidden)
        }
    }
}

/// Admits every request. For local development and tests only; never
/// installed unless the config names it explicitly.
pub struct AllowAllPolicy;

impl AdminPolicy for AllowAllPolicy {
    fn authorize(&self, _headers: &HeaderMap) -> Result<(), InventoryError> {
        Ok(())
    }
}
