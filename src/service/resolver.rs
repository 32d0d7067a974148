//! Resolve a product id to the stored row, or fail with not-found.

use super::ProductSession;
use crate::error::AppError;
use crate::model::Product;

/// Look up `id` once on the request's session. Callers reuse the returned row for the rest of the request.
pub async fn resolve(session: &mut dyn ProductSession, id: i32) -> Result<Product, AppError> {
    session
        .get_by_id(id)
        .await?
        .ok_or(AppError::ProductNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{Database, MemoryDatabase};

    #[tokio::test]
    async fn missing_id_is_not_found_with_message() {
        let db = MemoryDatabase::new();
        let mut session = db.open().await.unwrap();
        let err = resolve(session.as_mut(), 999999).await.unwrap_err();
        assert_eq!(err.to_string(), "Product 999999 not found");
    }
}
