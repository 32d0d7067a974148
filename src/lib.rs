//! Product API: REST CRUD over a single `products` table.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;

pub use app::{build_router, connect};
pub use error::AppError;
pub use model::{Field, Product, ProductChanges, ProductCreate, ProductUpdate, ProductUpdatePartial};
pub use routes::{common_routes_with_ready, product_routes};
pub use service::{resolve, Database, MemoryDatabase, PgDatabase, ProductSession};
pub use settings::{Settings, StorageBackend};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_products_table};
