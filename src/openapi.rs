//! OpenAPI document for the products API.

use crate::handlers::product as handlers;
use crate::model::{Product, ProductCreate, ProductUpdate, ProductUpdatePartial};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_products,
        handlers::create_product,
        handlers::get_product,
        handlers::update_product,
        handlers::update_product_partial,
        handlers::delete_product,
    ),
    components(schemas(Product, ProductCreate, ProductUpdate, ProductUpdatePartial)),
    tags((name = "Products", description = "Product CRUD"))
)]
pub struct ApiDoc;

/// Build the document with every path moved under `api_prefix`.
pub fn document(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| (format!("{}{}", api_prefix, path), item))
        .collect();
    doc
}

/// `GET /openapi.json`.
pub fn openapi_routes(api_prefix: &str) -> Router {
    let doc = document(api_prefix);
    Router::new().route(
        "/openapi.json",
        get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_the_prefix() {
        let doc = document("/api/v1");
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/products/create-product"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/products/{product_id}"));
        assert!(paths.iter().all(|p| p.starts_with("/api/v1/products")));
    }
}
