use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Vendor, VendorFields};
use crate::error::InventoryError;
use crate::handlers::item::ItemResponse;
use crate::state::AppState;
use crate::usecase::vendor::{
    CreateVendorUseCase, DeleteVendorUseCase, GetVendorUseCase, ListVendorItemsUseCase,
    ListVendorsUseCase, UpdateVendorUseCase, VendorInput,
};

#[derive(Serialize)]
pub struct VendorResponse {
    pub vendor_id: i32,
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            vendor_id: vendor.vendor_id,
            vendor_name: vendor.vendor_name,
            contact_person: vendor.contact_person,
            address: vendor.address,
            phone: vendor.phone,
            email: vendor.email,
        }
    }
}

#[derive(Deserialize)]
pub struct VendorRequest {
    pub vendor_name: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<VendorRequest> for VendorInput {
    fn from(body: VendorRequest) -> Self {
        Self {
            vendor_name: body.vendor_name,
            contact_person: body.contact_person,
            address: body.address,
            phone: body.phone,
            email: body.email,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── GET /api/vendors ─────────────────────────────────────────────────────────

pub async fn list_vendors(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorResponse>>, InventoryError> {
    let usecase = ListVendorsUseCase {
        repo: state.vendor_repo(),
    };
    let vendors = usecase.execute().await?;
    Ok(Json(vendors.into_iter().map(Into::into).collect()))
}

// ── GET /api/vendors/{id} ────────────────────────────────────────────────────

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<VendorResponse>, InventoryError> {
    let usecase = GetVendorUseCase {
        repo: state.vendor_repo(),
    };
    let vendor = usecase.execute(vendor_id).await?;
    Ok(Json(vendor.into()))
}

// ── GET /api/vendors/{id}/items ──────────────────────────────────────────────

pub async fn vendor_items(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<Vec<ItemResponse>>, InventoryError> {
    let usecase = ListVendorItemsUseCase {
        vendors: state.vendor_repo(),
        items: state.item_repo(),
    };
    let items = usecase.execute(vendor_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── POST /api/vendors ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CreateVendorResponse {
    pub message: &'static str,
    pub id: i32,
    pub vendor: StoredVendorFields,
}

/// The fields as stored, echoed back on create (the generated id travels
/// separately in `id`).
#[derive(Serialize)]
pub struct StoredVendorFields {
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<VendorFields> for StoredVendorFields {
    fn from(fields: VendorFields) -> Self {
        Self {
            vendor_name: fields.vendor_name,
            contact_person: fields.contact_person,
            address: fields.address,
            phone: fields.phone,
            email: fields.email,
        }
    }
}

pub async fn create_vendor(
    headers: HeaderMap,
    State(state): State<AppState>,
    Json(body): Json<VendorRequest>,
) -> Result<(StatusCode, Json<CreateVendorResponse>), InventoryError> {
    state.admin.authorize(&headers)?;
    let usecase = CreateVendorUseCase {
        repo: state.vendor_repo(),
    };
    let (id, fields) = usecase.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateVendorResponse {
            message: "Vendor created successfully",
            id,
            vendor: fields.into(),
        }),
    ))
}

// ── PUT /api/vendors/{id} ────────────────────────────────────────────────────

pub async fn update_vendor(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
    Json(body): Json<VendorRequest>,
) -> Result<Json<MessageResponse>, InventoryError> {
    state.admin.authorize(&headers)?;
    let usecase = UpdateVendorUseCase {
        repo: state.vendor_repo(),
    };
    usecase.execute(vendor_id, body.into()).await?;
    Ok(Json(MessageResponse {
        message: "Vendor updated successfully",
    }))
}

// ── DELETE /api/vendors/{id} ─────────────────────────────────────────────────

pub async fn delete_vendor(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<MessageResponse>, InventoryError> {
    state.admin.authorize(&headers)?;
    let usecase = DeleteVendorUseCase {
        vendors: state.vendor_repo(),
        items: state.item_repo(),
    };
    usecase.execute(vendor_id).await?;
    Ok(Json(MessageResponse {
        message: "Vendor deleted successfully",
    }))
}
