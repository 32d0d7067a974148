//! PostgreSQL sessions: one pooled connection per request.

use super::{Database, ProductSession};
use crate::error::AppError;
use crate::model::{Product, ProductChanges, ProductCreate};
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{Connection, PgConnection, PgPool, Postgres};

#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        PgDatabase { pool }
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn open(&self) -> Result<Box<dyn ProductSession>, AppError> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgSession { conn }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Holds one connection checked out of the pool; dropping the session returns it.
pub struct PgSession {
    conn: PoolConnection<Postgres>,
}

impl PgSession {
    async fn fetch_optional(conn: &mut PgConnection, q: QueryBuf) -> Result<Option<Product>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let QueryBuf { sql, params } = q;
        let mut query = sqlx::query_as::<_, Product>(&sql);
        for p in params {
            query = p.bind_to(query);
        }
        Ok(query.fetch_optional(conn).await?)
    }
}

#[async_trait]
impl ProductSession for PgSession {
    async fn list_all(&mut self) -> Result<Vec<Product>, AppError> {
        let q = sql::select_all();
        tracing::debug!(sql = %q.sql, "query");
        let rows = sqlx::query_as::<_, Product>(&q.sql).fetch_all(&mut *self.conn).await?;
        Ok(rows)
    }

    async fn get_by_id(&mut self, id: i32) -> Result<Option<Product>, AppError> {
        Self::fetch_optional(&mut self.conn, sql::select_by_id(id)).await
    }

    async fn create(&mut self, input: ProductCreate) -> Result<Product, AppError> {
        let mut tx = self.conn.begin().await?;
        let row = Self::fetch_optional(&mut tx, sql::insert(input))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        Ok(row)
    }

    async fn replace(&mut self, existing: Product, changes: ProductChanges) -> Result<Product, AppError> {
        let Some(q) = sql::update(existing.id, &changes) else {
            return Ok(existing);
        };
        let mut tx = self.conn.begin().await?;
        let row = Self::fetch_optional(&mut tx, q)
            .await?
            .ok_or(AppError::ProductNotFound(existing.id))?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete(&mut self, existing: Product) -> Result<(), AppError> {
        let QueryBuf { sql, params } = sql::delete(existing.id);
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut tx = self.conn.begin().await?;
        let mut query = sqlx::query(&sql);
        for p in params {
            query = p.bind_to_query(query);
        }
        let result = query.execute(&mut *tx).await?;
        tx.commit().await?;
        if result.rows_affected() == 0 {
            tracing::debug!(product_id = existing.id, "delete matched no row");
        }
        Ok(())
    }
}
