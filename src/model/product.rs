//! Product entity and its request shapes.

use super::Field;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted product row. `id` is assigned by storage and never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// Body of `POST /create-product`.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// Body of `PUT /{product_id}`: every field is required and replaced.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// Body of `PATCH /{product_id}`: only supplied fields are applied.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct ProductUpdatePartial {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<Decimal>)]
    pub price: Field<Decimal>,
}

/// Field-level change set consumed by the persistence layer for both update shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Field<String>,
    pub description: Field<String>,
    pub price: Field<Decimal>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_missing() && self.description.is_missing() && self.price.is_missing()
    }

    /// Apply the present fields to `product` in place. `id` is never touched.
    pub fn apply(self, product: &mut Product) {
        self.name.apply_to(&mut product.name);
        self.description.apply_to(&mut product.description);
        self.price.apply_to(&mut product.price);
    }
}

impl From<ProductUpdate> for ProductChanges {
    fn from(update: ProductUpdate) -> Self {
        ProductChanges {
            name: Field::Present(update.name),
            description: Field::Present(update.description),
            price: Field::Present(update.price),
        }
    }
}

impl From<ProductUpdatePartial> for ProductChanges {
    fn from(update: ProductUpdatePartial) -> Self {
        ProductChanges {
            name: update.name,
            description: update.description,
            price: update.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product {
            id: 1,
            name: "Pen".into(),
            description: "Blue pen".into(),
            price: Decimal::new(150, 2),
        }
    }

    #[test]
    fn partial_price_only_keeps_text_fields() {
        let patch: ProductUpdatePartial = serde_json::from_str(r#"{"price": 2.00}"#).unwrap();
        let mut product = pen();
        ProductChanges::from(patch).apply(&mut product);
        assert_eq!(product.name, "Pen");
        assert_eq!(product.description, "Blue pen");
        assert_eq!(product.price, Decimal::new(200, 2));
        assert_eq!(product.id, 1);
    }

    #[test]
    fn full_update_overwrites_every_field() {
        let update: ProductUpdate =
            serde_json::from_str(r#"{"name": "Pencil", "description": "HB", "price": "0.75"}"#).unwrap();
        let mut product = pen();
        ProductChanges::from(update).apply(&mut product);
        assert_eq!(product.name, "Pencil");
        assert_eq!(product.description, "HB");
        assert_eq!(product.price, Decimal::new(75, 2));
    }

    #[test]
    fn full_update_requires_every_field() {
        let err = serde_json::from_str::<ProductUpdate>(r#"{"name": "Pencil", "price": 1}"#).err();
        assert!(err.is_some());
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let create: ProductCreate =
            serde_json::from_str(r#"{"id": 42, "name": "Pen", "description": "Blue pen", "price": 1.5}"#).unwrap();
        assert_eq!(create.name, "Pen");
    }

    #[test]
    fn empty_patch_has_no_changes() {
        let patch: ProductUpdatePartial = serde_json::from_str("{}").unwrap();
        assert!(ProductChanges::from(patch).is_empty());
    }
}
