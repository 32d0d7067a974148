//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the products table.

use super::params::PgBindValue;
use crate::model::{Field, ProductChanges, ProductCreate};

pub const PRODUCTS_TABLE: &str = "products";

/// Columns in the order they map onto [`crate::model::Product`].
const COLUMNS: [&str; 4] = ["id", "name", "description", "price"];

/// Quote identifier for PostgreSQL (safe: identifiers are compile-time constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<PgBindValue>) -> u32 {
        self.params.push(v.into());
        self.params.len() as u32
    }
}

/// DDL for the products table. Idempotent.
pub fn create_products_table() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" SERIAL PRIMARY KEY,
            "name" VARCHAR NOT NULL,
            "description" VARCHAR NOT NULL,
            "price" NUMERIC NOT NULL
        )
        "#,
        quoted(PRODUCTS_TABLE)
    )
}

/// SELECT every row ordered by primary key ascending.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {} ASC",
        column_list(),
        quoted(PRODUCTS_TABLE),
        quoted("id")
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list(),
        quoted(PRODUCTS_TABLE),
        quoted("id"),
        n
    );
    q
}

/// INSERT one row; the primary key is always left to the sequence.
pub fn insert(input: ProductCreate) -> QueryBuf {
    let mut q = QueryBuf::new();
    let name = q.push_param(input.name);
    let description = q.push_param(input.description);
    let price = q.push_param(input.price);
    q.sql = format!(
        "INSERT INTO {} ({}, {}, {}) VALUES (${}, ${}, ${}) RETURNING {}",
        quoted(PRODUCTS_TABLE),
        quoted("name"),
        quoted("description"),
        quoted("price"),
        name,
        description,
        price,
        column_list()
    );
    q
}

/// UPDATE only the columns present in `changes`. Returns None when there is nothing to set.
pub fn update(id: i32, changes: &ProductChanges) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Field::Present(name) = changes.name.as_ref() {
        let n = q.push_param(name.clone());
        sets.push(format!("{} = ${}", quoted("name"), n));
    }
    if let Field::Present(description) = changes.description.as_ref() {
        let n = q.push_param(description.clone());
        sets.push(format!("{} = ${}", quoted("description"), n));
    }
    if let Field::Present(price) = changes.price.as_ref() {
        let n = q.push_param(*price);
        sets.push(format!("{} = ${}", quoted("price"), n));
    }
    if sets.is_empty() {
        return None;
    }
    let id_param = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(PRODUCTS_TABLE),
        sets.join(", "),
        quoted("id"),
        id_param,
        column_list()
    );
    Some(q)
}

/// DELETE by primary key.
pub fn delete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(PRODUCTS_TABLE), quoted("id"), n);
    q
}
