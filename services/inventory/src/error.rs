use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Inventory service error variants.
///
/// Responses carry the `{error, details?}` JSON body the legacy API used;
/// store failures pass their message through as `details` (acceptable for an
/// internal tool, not for a hardened public service).
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Item not found")]
    ItemNotFound,
    #[error("Vendor not found")]
    VendorNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("Requested measurement type does not match item stock type")]
    WrongMeasurementType,
    #[error("Requested quantity exceeds available stock")]
    InsufficientStock,
    #[error("Requested amount exceeds the sign-out limit for this item")]
    ExceedsSignoutLimit,
    #[error("User status is missing")]
    MissingStatus,
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Could not allocate a unique user id")]
    UserIdCollision,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Access denied. Admin privileges required.")]
    Forbidden,
    #[error("Vendor has associated items")]
    VendorHasItems(u64),
    #[error("Database error")]
    Internal(#[from] anyhow::Error),
}

impl InventoryError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ItemNotFound | Self::VendorNotFound | Self::UserNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MissingField(_)
            | Self::InvalidInput(_)
            | Self::WrongMeasurementType
            | Self::InsufficientStock
            | Self::ExceedsSignoutLimit
            | Self::MissingStatus
            | Self::VendorHasItems(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserIdCollision | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::VendorHasItems(count) => Some(format!(
                "This vendor has {count} items associated with it. \
                 Please remove or reassign these items before deleting the vendor."
            )),
            Self::Internal(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let mut body = serde_json::json!({ "error": self.to_string() });
        if let Some(details) = self.details() {
            body["details"] = serde_json::Value::String(details);
        }
        (status, axum::Json(body)).into_response()
    }
}
