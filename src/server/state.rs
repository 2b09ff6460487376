//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use super::service::mail::MailService;

/// Shared resources for request handlers.
///
/// Every field is cheap to clone: the connection is a pool handle, `MailService`
/// wraps a `reqwest::Client` (an `Arc` internally) and the upload directory is
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Enrollment notifications.
    pub mail: MailService,

    /// Root directory for student file submissions.
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, mail: MailService, upload_dir: PathBuf) -> Self {
        Self {
            db,
            mail,
            upload_dir: Arc::new(upload_dir),
        }
    }
}
