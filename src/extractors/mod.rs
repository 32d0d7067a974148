//! Request extractors that reject with [`crate::error::AppError`].

mod json;
mod product_id;
pub use json::JsonBody;
pub use product_id::ProductId;
