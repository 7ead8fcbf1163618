//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool
//! handle and the document store only holds its root path.

use sea_orm::DatabaseConnection;
use url::Url;

use super::storage::DocumentStorage;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Local store holding uploaded document files.
    pub storage: DocumentStorage,

    /// Public base URL, used to build absolute download links.
    pub app_url: Url,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: DocumentStorage, app_url: Url) -> Self {
        Self {
            db,
            storage,
            app_url,
        }
    }
}
