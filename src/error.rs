//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// One entry of a structured request error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        ValidationIssue {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Product {0} not found")]
    ProductNotFound(i32),
    #[error("validation: {}", summarize(.0))]
    Validation(Vec<ValidationIssue>),
    #[error("rejected request ({status}): {}", summarize(.issues))]
    Rejected {
        status: StatusCode,
        issues: Vec<ValidationIssue>,
    },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("config: {0}")]
    Config(String),
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues.iter().map(|i| i.msg.as_str()).collect::<Vec<_>>().join("; ")
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected { status, .. } => *status,
            AppError::Db(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "request_error",
        };
        let issues = vec![ValidationIssue::new(&["body"], rejection.body_text(), kind)];
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            AppError::Validation(issues)
        } else {
            AppError::Rejected { status, issues }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            issues: vec![ValidationIssue::new(&["path"], rejection.body_text(), "request_error")],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::ProductNotFound(id) => {
                let body = ErrorBody { detail: format!("Product {} not found", id) };
                (status, Json(body)).into_response()
            }
            AppError::Validation(issues) | AppError::Rejected { issues, .. } => {
                (status, Json(ErrorBody { detail: issues })).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (status, Json(ErrorBody { detail: "database error" })).into_response()
            }
            AppError::Config(msg) => {
                tracing::error!(error = %msg, "configuration error");
                (status, Json(ErrorBody { detail: "configuration error" })).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_detail_message() {
        let (status, body) = body_json(AppError::ProductNotFound(999999)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"detail": "Product 999999 not found"}));
    }

    #[tokio::test]
    async fn validation_renders_issue_list() {
        let err = AppError::Validation(vec![ValidationIssue::new(&["path", "product_id"], "not an integer", "int_parsing")]);
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], serde_json::json!(["path", "product_id"]));
        assert_eq!(body["detail"][0]["type"], "int_parsing");
    }

    #[tokio::test]
    async fn database_errors_hide_the_cause() {
        let (status, body) = body_json(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "database error");
    }
}
