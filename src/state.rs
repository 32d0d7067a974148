//! Shared application state for all routes.

use crate::service::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Opens one session per request.
    pub db: Arc<dyn Database>,
}

impl AppState {
    pub fn new(db: impl Database + 'static) -> Self {
        AppState { db: Arc::new(db) }
    }
}
