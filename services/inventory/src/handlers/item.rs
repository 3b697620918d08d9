use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Item, ItemPatch};
use crate::error::InventoryError;
use crate::state::AppState;
use crate::usecase::item::{
    CreateItemInput, CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, ListItemsUseCase,
    ListTypesUseCase, UpdateItemUseCase,
};
use crate::usecase::report::LowStockUseCase;
use crate::usecase::stock::{
    RestockInput, RestockUseCase, SetGlobalLimitsInput, SetGlobalLimitsUseCase,
    WithdrawStockInput, WithdrawStockUseCase,
};

/// Item row as the API has always exposed it: the active stock column is
/// populated, the other is null.
#[derive(Serialize)]
pub struct ItemResponse {
    pub product_id: String,
    pub product_name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub vendor_id: i32,
    pub price_per_unit: f64,
    pub order_quantity: Option<i32>,
    pub weight_amount: Option<f64>,
    pub max_signout_quantity: Option<i32>,
    pub max_signout_weight: Option<f64>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let (order_quantity, weight_amount) = item.stock.into_columns();
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            description: item.description,
            item_type: item.item_type,
            vendor_id: item.vendor_id,
            price_per_unit: item.price_per_unit,
            order_quantity,
            weight_amount,
            max_signout_quantity: item.max_signout_quantity,
            max_signout_weight: item.max_signout_weight,
        }
    }
}

// ── GET /api/items ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListItemsQuery {
    pub vendor_id: Option<i32>,
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, InventoryError> {
    let usecase = ListItemsUseCase {
        repo: state.item_repo(),
    };
    let items = usecase.execute(query.vendor_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /api/items/low-stock ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LowStockQuery {
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

pub async fn low_stock(
    State(state): State<AppState>,
    Query(query): Query<LowStockQuery>,
) -> Result<Json<Vec<ItemResponse>>, InventoryError> {
    let usecase = LowStockUseCase {
        repo: state.item_repo(),
    };
    let items = usecase
        .execute(query.quantity.unwrap_or(5), query.weight.unwrap_or(10.0))
        .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /api/items/{id} ──────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ItemResponse>, InventoryError> {
    let usecase = GetItemUseCase {
        repo: state.item_repo(),
    };
    let item = usecase.execute(&product_id).await?;
    Ok(Json(item.into()))
}

// ── POST /api/items ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub vendor_id: Option<i32>,
    pub price_per_unit: Option<f64>,
    pub order_quantity: Option<i32>,
    pub weight_amount: Option<f64>,
    pub max_signout_quantity: Option<i32>,
    pub max_signout_weight: Option<f64>,
}

#[derive(Serialize)]
pub struct CreateItemResponse {
    pub message: &'static str,
    pub id: String,
    pub item: ItemResponse,
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreateItemResponse>), InventoryError> {
    let usecase = CreateItemUseCase {
        repo: state.item_repo(),
    };
    let item = usecase
        .execute(CreateItemInput {
            product_id: body.product_id,
            product_name: body.product_name,
            description: body.description,
            item_type: body.item_type,
            vendor_id: body.vendor_id,
            price_per_unit: body.price_per_unit,
            order_quantity: body.order_quantity,
            weight_amount: body.weight_amount,
            max_signout_quantity: body.max_signout_quantity,
            max_signout_weight: body.max_signout_weight,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateItemResponse {
            message: "Item created successfully",
            id: item.product_id.clone(),
            item: item.into(),
        }),
    ))
}

// ── PUT /api/items/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateItemRequest {
    pub product_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub vendor_id: Option<i32>,
    pub price_per_unit: Option<f64>,
    pub order_quantity: Option<i32>,
    pub weight_amount: Option<f64>,
    pub max_signout_quantity: Option<i32>,
    pub max_signout_weight: Option<f64>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn update_item(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<MessageResponse>, InventoryError> {
    state.admin.authorize(&headers)?;
    let usecase = UpdateItemUseCase {
        repo: state.item_repo(),
    };
    usecase
        .execute(
            &product_id,
            ItemPatch {
                product_name: body.product_name,
                description: body.description,
                item_type: body.item_type,
                vendor_id: body.vendor_id,
                price_per_unit: body.price_per_unit,
                order_quantity: body.order_quantity,
                weight_amount: body.weight_amount,
                max_signout_quantity: body.max_signout_quantity,
                max_signout_weight: body.max_signout_weight,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "Item updated",
    }))
}

// ── DELETE /api/items/{id} ───────────────────────────────────────────────────

pub async fn delete_item(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<MessageResponse>, InventoryError> {
    state.admin.authorize(&headers)?;
    let usecase = DeleteItemUseCase {
        repo: state.item_repo(),
    };
    usecase.execute(&product_id).await?;
    Ok(Json(MessageResponse {
        message: "Item deleted",
    }))
}

// ── POST /api/items/{id}/update-quantity ─────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

#[derive(Serialize)]
pub struct UpdatedItemResponse {
    pub message: &'static str,
    #[serde(rename = "updatedItem")]
    pub updated_item: ItemResponse,
}

pub async fn update_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Result<Json<UpdatedItemResponse>, InventoryError> {
    let usecase = WithdrawStockUseCase {
        repo: state.item_repo(),
        enforce_signout_caps: state.enforce_signout_caps,
    };
    let withdrawal = usecase
        .execute(
            &product_id,
            WithdrawStockInput {
                quantity: body.quantity,
                weight: body.weight,
            },
        )
        .await?;
    Ok(Json(UpdatedItemResponse {
        message: "Item quantity updated successfully",
        updated_item: withdrawal.item.into(),
    }))
}

// ── POST /api/items/{id}/restock ─────────────────────────────────────────────

pub async fn restock_item(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Result<Json<UpdatedItemResponse>, InventoryError> {
    state.admin.authorize(&headers)?;
    let usecase = RestockUseCase {
        repo: state.item_repo(),
    };
    let item = usecase
        .execute(
            &product_id,
            RestockInput {
                quantity: body.quantity,
                weight: body.weight,
            },
        )
        .await?;
    Ok(Json(UpdatedItemResponse {
        message: "Item restocked successfully",
        updated_item: item.into(),
    }))
}

// ── POST /api/items/update-global-limits ─────────────────────────────────────

#[derive(Deserialize)]
pub struct GlobalLimitsRequest {
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

#[derive(Serialize)]
pub struct GlobalLimitsResponse {
    pub message: &'static str,
    #[serde(rename = "affectedRows")]
    pub affected_rows: u64,
}

pub async fn update_global_limits(
    headers: HeaderMap,
    State(state): State<AppState>,
    Json(body): Json<GlobalLimitsRequest>,
) -> Result<Json<GlobalLimitsResponse>, InventoryError> {
    state.admin.authorize(&headers)?;
    let usecase = SetGlobalLimitsUseCase {
        repo: state.item_repo(),
    };
    let affected_rows = usecase
        .execute(SetGlobalLimitsInput {
            quantity: body.quantity,
            weight: body.weight,
        })
        .await?;
    Ok(Json(GlobalLimitsResponse {
        message: "Global limits updated successfully",
        affected_rows,
    }))
}

// ── GET /api/types ───────────────────────────────────────────────────────────

pub async fn list_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, InventoryError> {
    let usecase = ListTypesUseCase {
        repo: state.item_repo(),
    };
    Ok(Json(usecase.execute().await?))
}
