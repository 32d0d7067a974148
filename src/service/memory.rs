//! In-process product store. Selected with `STORAGE_BACKEND=memory`.

use super::{Database, ProductSession};
use crate::error::AppError;
use crate::model::{Product, ProductChanges, ProductCreate};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct Tables {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// Rows live for the lifetime of the process. Ids are never reused.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    async fn open(&self) -> Result<Box<dyn ProductSession>, AppError> {
        Ok(Box::new(MemorySession {
            tables: Arc::clone(&self.tables),
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct MemorySession {
    tables: Arc<Mutex<Tables>>,
}

#[async_trait]
impl ProductSession for MemorySession {
    async fn list_all(&mut self) -> Result<Vec<Product>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.products.values().cloned().collect())
    }

    async fn get_by_id(&mut self, id: i32) -> Result<Option<Product>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.products.get(&id).cloned())
    }

    async fn create(&mut self, input: ProductCreate) -> Result<Product, AppError> {
        let mut tables = self.tables.lock().await;
        tables.last_id += 1;
        let product = Product {
            id: tables.last_id,
            name: input.name,
            description: input.description,
            price: input.price,
        };
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn replace(&mut self, existing: Product, changes: ProductChanges) -> Result<Product, AppError> {
        if changes.is_empty() {
            return Ok(existing);
        }
        let mut tables = self.tables.lock().await;
        let row = tables
            .products
            .get_mut(&existing.id)
            .ok_or(AppError::ProductNotFound(existing.id))?;
        changes.apply(row);
        Ok(row.clone())
    }

    async fn delete(&mut self, existing: Product) -> Result<(), AppError> {
        let mut tables = self.tables.lock().await;
        if tables.products.remove(&existing.id).is_none() {
            tracing::debug!(product_id = existing.id, "delete matched no row");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use rust_decimal::Decimal;

    fn input(name: &str) -> ProductCreate {
        ProductCreate {
            name: name.into(),
            description: format!("{} description", name),
            price: Decimal::new(150, 2),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_fields() {
        let db = MemoryDatabase::new();
        let mut session = db.open().await.unwrap();
        let created = session.create(input("Pen")).await.unwrap();
        assert_eq!(created.id, 1);
        let fetched = session.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn list_is_empty_then_ordered_by_id() {
        let db = MemoryDatabase::new();
        let mut session = db.open().await.unwrap();
        assert!(session.list_all().await.unwrap().is_empty());
        for name in ["c", "a", "b"] {
            session.create(input(name)).await.unwrap();
        }
        let ids: Vec<i32> = session.list_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let db = MemoryDatabase::new();
        let mut session = db.open().await.unwrap();
        let first = session.create(input("a")).await.unwrap();
        session.delete(first).await.unwrap();
        let second = session.create(input("b")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn second_delete_does_not_resurrect() {
        let db = MemoryDatabase::new();
        let mut session = db.open().await.unwrap();
        let product = session.create(input("Pen")).await.unwrap();
        session.delete(product.clone()).await.unwrap();
        session.delete(product.clone()).await.unwrap();
        assert_eq!(session.get_by_id(product.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn replace_on_vanished_row_is_not_found() {
        let db = MemoryDatabase::new();
        let mut session = db.open().await.unwrap();
        let product = session.create(input("Pen")).await.unwrap();
        session.delete(product.clone()).await.unwrap();
        let changes = ProductChanges {
            name: Field::Present("Pencil".into()),
            ..Default::default()
        };
        let err = session.replace(product, changes).await.unwrap_err();
        assert!(matches!(err, AppError::ProductNotFound(1)));
    }
}
