use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::AdminPolicy;
use crate::infra::db::{
    DbCheckoutPort, DbItemRepository, DbTransactionRepository, DbUserRepository,
    DbVendorRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub admin: Arc<dyn AdminPolicy>,
    pub enforce_signout_caps: bool,
}

impl AppState {
    pub fn item_repo(&self) -> DbItemRepository {
        DbItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn vendor_repo(&self) -> DbVendorRepository {
        DbVendorRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn transaction_repo(&self) -> DbTransactionRepository {
        DbTransactionRepository {
            db: self.db.clone(),
        }
    }

    pub fn checkout_port(&self) -> DbCheckoutPort {
        DbCheckoutPort {
            db: self.db.clone(),
        }
    }
}
