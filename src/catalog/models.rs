//! Catalog Domain Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product offered by the storefront
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price, serialized as a plain JSON number
    #[serde(with = "crate::money")]
    pub price: Decimal,

    /// Image location, passed through untouched
    #[serde(default)]
    pub image_url: String,
}

/// Accepted shapes of a catalog document on disk
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogDocument {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

impl CatalogDocument {
    pub(crate) fn into_products(self) -> Vec<Product> {
        match self {
            CatalogDocument::Wrapped { products } | CatalogDocument::Bare(products) => products,
        }
    }
}

/// Response body for `GET /api/products`
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}
