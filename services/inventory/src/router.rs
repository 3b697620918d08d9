use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use pantry_core::health::{healthz, readyz};
use pantry_core::middleware::request_id_layer;

use crate::handlers::{
    checkout::checkout,
    item::{
        create_item, delete_item, get_item, list_items, list_types, low_stock, restock_item,
        update_global_limits, update_item, update_quantity,
    },
    transaction::{
        create_transaction, list_transactions, most_taken, unique_students, user_transactions,
    },
    user::{delete_user, get_user, list_users, login, signup, update_user},
    vendor::{
        create_vendor, delete_vendor, get_vendor, list_vendors, update_vendor, vendor_items,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Items
        .route("/api/items", get(list_items))
        .route("/api/items", post(create_item))
        .route("/api/items/low-stock", get(low_stock))
        .route("/api/items/update-global-limits", post(update_global_limits))
        .route("/api/items/{id}", get(get_item))
        .route("/api/items/{id}", put(update_item))
        .route("/api/items/{id}", delete(delete_item))
        .route("/api/items/{id}/update-quantity", post(update_quantity))
        .route("/api/items/{id}/restock", post(restock_item))
        // Item types
        .route("/api/types", get(list_types))
        // Vendors
        .route("/api/vendors", get(list_vendors))
        .route("/api/vendors", post(create_vendor))
        .route("/api/vendors/{id}", get(get_vendor))
        .route("/api/vendors/{id}", put(update_vendor))
        .route("/api/vendors/{id}", delete(delete_vendor))
        .route("/api/vendors/{id}/items", get(vendor_items))
        // Users
        .route("/api/users", get(list_users))
        .route("/api/users/signup", post(signup))
        .route("/api/users/login", post(login))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}", put(update_user))
        .route("/api/users/{id}", delete(delete_user))
        // Transactions
        .route("/api/transactions", get(list_transactions))
        .route("/api/transactions", post(create_transaction))
        .route("/api/transactions/most-taken", get(most_taken))
        .route("/api/transactions/unique-students", get(unique_students))
        .route("/api/transactions/{user_id}", get(user_transactions))
        // Checkout
        .route("/api/checkout", post(checkout))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
