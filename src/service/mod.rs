//! Persistence layer: per-request sessions over a product store.

mod crud;
mod memory;
mod resolver;
pub use crud::{PgDatabase, PgSession};
pub use memory::{MemoryDatabase, MemorySession};
pub use resolver::resolve;

use crate::error::AppError;
use crate::model::{Product, ProductChanges, ProductCreate};
use async_trait::async_trait;

/// Opens one session per request. Implemented for PostgreSQL and the in-memory store.
#[async_trait]
pub trait Database: Send + Sync {
    /// Acquire a session. The underlying connection is released when the session is dropped.
    async fn open(&self) -> Result<Box<dyn ProductSession>, AppError>;

    /// Round-trip to the store; used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// CRUD operations against one acquired session. Mutations commit before returning.
#[async_trait]
pub trait ProductSession: Send {
    /// Every product ordered by id ascending.
    async fn list_all(&mut self) -> Result<Vec<Product>, AppError>;

    /// Point lookup; `None` when no row has this id.
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Product>, AppError>;

    /// Insert a row and return it with its assigned id.
    async fn create(&mut self, input: ProductCreate) -> Result<Product, AppError>;

    /// Apply the present fields of `changes` to `existing` and persist them.
    async fn replace(&mut self, existing: Product, changes: ProductChanges) -> Result<Product, AppError>;

    /// Remove the row. A row that is already gone stays gone.
    async fn delete(&mut self, existing: Product) -> Result<(), AppError>;
}
