use crate::auth::AdminPolicyKind;

/// Inventory service configuration loaded from environment variables.
#[derive(Debug)]
pub struct InventoryConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `INVENTORY_PORT`.
    pub inventory_port: u16,
    /// Which admin authorization policy to install. Env var: `ADMIN_POLICY`
    /// (`role-header` default, `allow-all` for local development).
    pub admin_policy: AdminPolicyKind,
    /// Whether `withdraw` also enforces per-item sign-out caps server-side
    /// (default false: only stock sufficiency is checked, matching the
    /// legacy front-end-enforced behavior). Env var: `ENFORCE_SIGNOUT_CAPS`.
    pub enforce_signout_caps: bool,
}

impl InventoryConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            inventory_port: std::env::var("INVENTORY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            admin_policy: std::env::var("ADMIN_POLICY")
                .ok()
                .and_then(|v| AdminPolicyKind::parse(&v))
                .unwrap_or(AdminPolicyKind::RoleHeader),
            enforce_signout_caps: std::env::var("ENFORCE_SIGNOUT_CAPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}
