//! Router assembly and store selection.

use crate::error::AppError;
use crate::openapi::openapi_routes;
use crate::routes::{common_routes_with_ready, product_routes};
use crate::service::{MemoryDatabase, PgDatabase};
use crate::settings::{Settings, StorageBackend};
use crate::state::AppState;
use crate::store::{ensure_database_exists, ensure_products_table};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Mount common, OpenAPI, and product routes. Products live under `{api_v1_prefix}/products`.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    let products = product_routes(state.clone());
    let api = if settings.api_v1_prefix.is_empty() {
        products
    } else {
        Router::new().nest(&settings.api_v1_prefix, products)
    };
    Router::new()
        .merge(common_routes_with_ready(state))
        .merge(openapi_routes(&settings.api_v1_prefix))
        .merge(api)
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
}

/// Open the configured store. For PostgreSQL this creates the database and table when absent.
pub async fn connect(settings: &Settings) -> Result<AppState, AppError> {
    match settings.storage {
        StorageBackend::Memory => {
            tracing::info!("using in-memory product store");
            Ok(AppState::new(MemoryDatabase::new()))
        }
        StorageBackend::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.db_max_connections)
                .connect(&settings.database_url)
                .await?;
            ensure_products_table(&pool).await?;
            Ok(AppState::new(PgDatabase::new(pool)))
        }
    }
}
