//! Typed values that can be bound to a PostgreSQL query.

use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::{Query, QueryAs};

/// A value that can be bound to a PostgreSQL query. Each variant binds with its own column type.
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Int(i32),
    Text(String),
    Numeric(Decimal),
}

impl PgBindValue {
    /// Bind this value as the next positional parameter.
    pub fn bind_to<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            PgBindValue::Int(n) => query.bind(n),
            PgBindValue::Text(s) => query.bind(s),
            PgBindValue::Numeric(d) => query.bind(d),
        }
    }

    /// Same as [`PgBindValue::bind_to`] for statements that return no rows.
    pub fn bind_to_query<'q>(self, query: Query<'q, Postgres, PgArguments>) -> Query<'q, Postgres, PgArguments> {
        match self {
            PgBindValue::Int(n) => query.bind(n),
            PgBindValue::Text(s) => query.bind(s),
            PgBindValue::Numeric(d) => query.bind(d),
        }
    }
}

impl From<i32> for PgBindValue {
    fn from(n: i32) -> Self {
        PgBindValue::Int(n)
    }
}

impl From<String> for PgBindValue {
    fn from(s: String) -> Self {
        PgBindValue::Text(s)
    }
}

impl From<Decimal> for PgBindValue {
    fn from(d: Decimal) -> Self {
        PgBindValue::Numeric(d)
    }
}
