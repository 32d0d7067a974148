//! Extract the `product_id` path segment as an integer id.

use crate::error::{AppError, ValidationIssue};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Path id of a single-resource route. Non-integer ids reject with 422.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_id(&raw).map(ProductId)
    }
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| {
        AppError::Validation(vec![ValidationIssue::new(
            &["path", "product_id"],
            format!("Input should be a valid integer, unable to parse string as an integer: {:?}", raw),
            "int_parsing",
        )])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_integer_ids() {
        let err = parse_id("abc").unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
