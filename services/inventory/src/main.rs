use std::sync::Arc;

use sea_orm::Database;
use tracing::{info, warn};

use pantry_core::tracing::init_tracing;
use pantry_inventory::auth::{AdminPolicy, AdminPolicyKind, AllowAllPolicy, RoleHeaderPolicy};
use pantry_inventory::config::InventoryConfig;
use pantry_inventory::router::build_router;
use pantry_inventory::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = InventoryConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let admin: Arc<dyn AdminPolicy> = match config.admin_policy {
        AdminPolicyKind::RoleHeader => Arc::new(RoleHeaderPolicy),
        AdminPolicyKind::AllowAll => {
            warn!("admin authorization policy is allow-all; every admin request is admitted");
            Arc::new(AllowAllPolicy)
        }
    };

    let state = AppState {
        db,
        admin,
        enforce_signout_caps: config.enforce_signout_caps,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.inventory_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("inventory service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
