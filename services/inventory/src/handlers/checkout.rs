use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::state::AppState;
use crate::usecase::checkout::{CheckoutInput, CheckoutLineInput, CheckoutUseCase};

// ── POST /api/checkout ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    pub lines: Vec<CheckoutLineRequest>,
}

#[derive(Deserialize)]
pub struct CheckoutLineRequest {
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub message: &'static str,
    pub transaction_ids: Vec<i32>,
}

/// Transactional alternative to the two-call per-line protocol: every line's
/// withdrawal and record commit together or the whole cart is rolled back.
pub async fn checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>), InventoryError> {
    let usecase = CheckoutUseCase {
        port: state.checkout_port(),
    };
    let transaction_ids = usecase
        .execute(CheckoutInput {
            user_id: body.user_id,
            lines: body
                .lines
                .into_iter()
                .map(|line| CheckoutLineInput {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    weight: line.weight,
                })
                .collect(),
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            message: "Checkout completed successfully",
            transaction_ids,
        }),
    ))
}
