//! Product CRUD handlers: list, create, read, full update, partial update, delete.
//!
//! Every handler opens its own session; single-resource handlers resolve the
//! target once on that session and reuse it for the mutation.

use crate::error::AppError;
use crate::extractors::{JsonBody, ProductId};
use crate::model::{Product, ProductCreate, ProductUpdate, ProductUpdatePartial};
use crate::response;
use crate::service::resolve;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    responses((status = 200, description = "All products ordered by id", body = [Product]))
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut session = state.db.open().await?;
    let products = session.list_all().await?;
    Ok(response::ok(products))
}

#[utoipa::path(
    post,
    path = "/products/create-product",
    tag = "Products",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 422, description = "Body does not match ProductCreate")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.db.open().await?;
    let product = session.create(input).await?;
    tracing::info!(product_id = product.id, "product created");
    Ok(response::created(product))
}

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.db.open().await?;
    let product = resolve(session.as_mut(), id).await?;
    Ok(response::ok(product))
}

#[utoipa::path(
    put,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = i32, Path, description = "Product id")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Every field replaced", body = Product),
        (status = 404, description = "No product with this id"),
        (status = 422, description = "Body does not match ProductUpdate")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(update): JsonBody<ProductUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.db.open().await?;
    let existing = resolve(session.as_mut(), id).await?;
    let product = session.replace(existing, update.into()).await?;
    tracing::info!(product_id = id, "product replaced");
    Ok(response::ok(product))
}

#[utoipa::path(
    patch,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = i32, Path, description = "Product id")),
    request_body = ProductUpdatePartial,
    responses(
        (status = 200, description = "Supplied fields applied", body = Product),
        (status = 404, description = "No product with this id"),
        (status = 422, description = "Body does not match ProductUpdatePartial")
    )
)]
pub async fn update_product_partial(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(update): JsonBody<ProductUpdatePartial>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.db.open().await?;
    let existing = resolve(session.as_mut(), id).await?;
    let product = session.replace(existing, update.into()).await?;
    tracing::info!(product_id = id, "product updated");
    Ok(response::ok(product))
}

#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    tag = "Products",
    params(("product_id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.db.open().await?;
    let existing = resolve(session.as_mut(), id).await?;
    session.delete(existing).await?;
    tracing::info!(product_id = id, "product deleted");
    Ok(response::no_content())
}
