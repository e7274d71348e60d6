use sea_orm::DatabaseConnection;

use crate::infra::db::{DbCollectionRepository, DbCustomerRepository, DbRoleRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn customer_repo(&self) -> DbCustomerRepository {
        DbCustomerRepository {
            db: self.db.clone(),
        }
    }

    pub fn collection_repo(&self) -> DbCollectionRepository {
        DbCollectionRepository {
            db: self.db.clone(),
        }
    }
}
