//! Products route table. Nested under the versioned API prefix by [`crate::app::build_router`].

use crate::handlers::product::{
    create_product, delete_product, get_product, list_products, update_product, update_product_partial,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/", get(list_products))
        .route("/products/create-product", post(create_product))
        .route(
            "/products/:product_id",
            get(get_product)
                .put(update_product)
                .patch(update_product_partial)
                .delete(delete_product),
        )
        .with_state(state)
}
