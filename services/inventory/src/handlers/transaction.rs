use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::types::{RankedItem, TransactionDetails};
use crate::error::InventoryError;
use crate::state::AppState;
use crate::usecase::report::{MostTakenUseCase, StatusCountsUseCase};
use crate::usecase::transaction::{
    ListTransactionsUseCase, ListUserTransactionsUseCase, RecordWithdrawalInput,
    RecordWithdrawalUseCase,
};

const MOST_TAKEN_RANK_LIMIT: i64 = 10;

#[derive(Serialize)]
pub struct TransactionResponse {
    pub transaction_id: i32,
    pub user_id: String,
    pub product_id: String,
    pub quantity_taken: f64,
    pub user_status: String,
    #[serde(serialize_with = "pantry_core::serde::to_rfc3339_ms")]
    pub taken_at: chrono::DateTime<chrono::Utc>,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl From<TransactionDetails> for TransactionResponse {
    fn from(details: TransactionDetails) -> Self {
        Self {
            transaction_id: details.transaction_id,
            user_id: details.user_id,
            product_id: details.product_id,
            quantity_taken: details.quantity_taken,
            user_status: details.user_status,
            taken_at: details.taken_at,
            product_name: details.product_name,
            item_type: details.item_type,
            username: details.username,
        }
    }
}

// ── GET /api/transactions ────────────────────────────────────────────────────

pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionResponse>>, InventoryError> {
    let usecase = ListTransactionsUseCase {
        repo: state.transaction_repo(),
    };
    let transactions = usecase.execute().await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

// ── GET /api/transactions/most-taken ─────────────────────────────────────────

#[derive(Serialize)]
pub struct MostTakenResponse {
    pub product_id: String,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub total_transactions: i64,
    pub ranking: i64,
}

impl From<RankedItem> for MostTakenResponse {
    fn from(item: RankedItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            item_type: item.item_type,
            total_transactions: item.total_transactions,
            ranking: item.ranking,
        }
    }
}

pub async fn most_taken(
    State(state): State<AppState>,
) -> Result<Json<Vec<MostTakenResponse>>, InventoryError> {
    let usecase = MostTakenUseCase {
        transactions: state.transaction_repo(),
    };
    let ranked = usecase.execute(MOST_TAKEN_RANK_LIMIT).await?;
    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}

// ── GET /api/transactions/unique-students ────────────────────────────────────

#[derive(Serialize)]
pub struct UniqueStudentsResponse {
    pub undergraduate_count: i64,
    pub graduate_count: i64,
}

pub async fn unique_students(
    State(state): State<AppState>,
) -> Result<Json<UniqueStudentsResponse>, InventoryError> {
    let usecase = StatusCountsUseCase {
        transactions: state.transaction_repo(),
    };
    let counts = usecase.execute().await?;
    Ok(Json(UniqueStudentsResponse {
        undergraduate_count: counts.undergraduate_count,
        graduate_count: counts.graduate_count,
    }))
}

// ── GET /api/transactions/{user_id} ──────────────────────────────────────────

pub async fn user_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, InventoryError> {
    let usecase = ListUserTransactionsUseCase {
        repo: state.transaction_repo(),
    };
    let transactions = usecase.execute(&user_id).await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

// ── POST /api/transactions ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTransactionRequest {
    pub user_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity_taken: Option<f64>,
}

#[derive(Serialize)]
pub struct CreateTransactionResponse {
    pub message: &'static str,
    pub transaction_id: i32,
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(body): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), InventoryError> {
    let usecase = RecordWithdrawalUseCase {
        users: state.user_repo(),
        transactions: state.transaction_repo(),
    };
    let transaction_id = usecase
        .execute(RecordWithdrawalInput {
            user_id: body.user_id,
            product_id: body.product_id,
            quantity_taken: body.quantity_taken,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateTransactionResponse {
            message: "Transaction created successfully",
            transaction_id,
        }),
    ))
}
