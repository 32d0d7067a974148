//! Product data model: the persisted row and its request shapes.

mod field;
mod product;
pub use field::Field;
pub use product::{Product, ProductChanges, ProductCreate, ProductUpdate, ProductUpdatePartial};
