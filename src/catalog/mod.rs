//! Product Catalog Module
//!
//! The catalog is an immutable, ordered list of products loaded once at
//! startup. It answers "does product X exist, and what are its attributes"
//! without side effects.

pub mod errors;
pub mod handlers;
pub mod models;

pub use errors::CatalogError;
pub use handlers::routes;
pub use models::Product;

use models::CatalogDocument;
use rust_decimal::Decimal;
use std::{collections::HashMap, path::Path};

/// Read-only product catalog with O(1) lookup by id
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from an ordered product list, validating every record.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id.clone()));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products, index })
    }

    /// Parses a catalog from JSON, either a bare array of products or
    /// an object with a `products` array.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_slice(bytes)?;
        Self::new(document.into_products())
    }

    /// Reads and parses the catalog file at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&bytes)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// All products, in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            price,
            image_url: format!("/images/{id}.jpg"),
        }
    }

    #[test]
    fn should_find_product_by_id() {
        let catalog = Catalog::new(vec![
            product("p1", Decimal::new(1999, 2)),
            product("p2", Decimal::new(500, 2)),
        ])
        .unwrap();

        let found = catalog.find_by_id("p2").unwrap();
        assert_eq!(found.id, "p2");
        assert_eq!(found.price, Decimal::new(5, 0));
        assert!(catalog.find_by_id("p3").is_none());
    }

    #[test]
    fn should_keep_file_order() {
        let catalog = Catalog::new(vec![
            product("b", Decimal::ONE),
            product("a", Decimal::ONE),
            product("c", Decimal::ONE),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn should_parse_bare_array() {
        let json = br#"[
            { "id": "p1", "name": "Desk Lamp", "price": 19.99, "imageUrl": "/lamp.jpg" },
            { "id": "p2", "name": "Mug", "price": 5 }
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        let lamp = catalog.find_by_id("p1").unwrap();
        assert_eq!(lamp.price, Decimal::new(1999, 2));
        assert_eq!(lamp.image_url, "/lamp.jpg");
        assert_eq!(catalog.find_by_id("p2").unwrap().image_url, "");
    }

    #[test]
    fn should_parse_wrapped_document() {
        let json = br#"{ "products": [ { "id": "p1", "name": "Mug", "price": 5.0, "imageUrl": "" } ] }"#;

        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = Catalog::from_json(b"{ not json");

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let result = Catalog::new(vec![product("p1", Decimal::ONE), product("p1", Decimal::TWO)]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "p1"));
    }

    #[test]
    fn should_reject_empty_name() {
        let mut nameless = product("p1", Decimal::ONE);
        nameless.name = "  ".into();

        let result = Catalog::new(vec![nameless]);

        assert!(matches!(result, Err(CatalogError::EmptyName(_))));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Catalog::new(vec![product("p1", Decimal::new(-1, 2))]);

        assert!(matches!(result, Err(CatalogError::NegativePrice(_))));
    }

    #[test]
    fn should_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "p1", "name": "Mug", "price": 5, "imageUrl": "" }}]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert!(catalog.find_by_id("p1").is_some());
    }

    #[test]
    fn should_fail_when_file_missing() {
        let result = Catalog::load(Path::new("/definitely/not/here/products.json"));

        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
