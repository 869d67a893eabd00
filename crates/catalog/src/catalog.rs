use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use sabores_core::{DomainError, DomainResult, Price, ProductId};

use crate::data::{BUILTIN_PRODUCTS, BUILTIN_VERSION};
use crate::product::{Category, Product};

/// Shown by the presentation layer when a category has no products.
pub const EMPTY_CATEGORY_MESSAGE: &str = "No hay productos disponibles en esta categoría";

/// Products of `category`, in catalog order.
///
/// Pure and stable: the same input always yields the same ordered output. An
/// empty result is a normal outcome, not an error.
pub fn filter_by_category(products: &[Product], category: Category) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.category() == category)
        .collect()
}

/// A versioned, read-only list of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    version: u32,
    products: Vec<Product>,
}

impl Catalog {
    /// The menu compiled into the crate.
    pub fn builtin() -> DomainResult<Self> {
        let products = BUILTIN_PRODUCTS
            .iter()
            .map(|&(id, name, description, price, image, category)| {
                Ok(Product::new(
                    ProductId::new(id)?,
                    name,
                    description,
                    Price::new(price)?,
                    image,
                    category,
                ))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Self::from_products(BUILTIN_VERSION, products)
    }

    /// Build a catalog, rejecting duplicate ids and blank names.
    pub fn from_products(version: u32, products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id_typed().clone()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id: {}",
                    product.id_typed()
                )));
            }
            if product.name().trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.id_typed()
                )));
            }
        }

        tracing::debug!(version, products = products.len(), "catalog loaded");

        Ok(Self { version, products })
    }

    /// Parse a catalog document: `{"version": 1, "products": [...]}`.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let raw: Catalog = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid catalog document: {e}")))?;
        Self::from_products(raw.version, raw.products)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Look up by raw id, failing with `NotFound` for unknown ids.
    pub fn require(&self, id: &str) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id_typed().as_str() == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        filter_by_category(&self.products, category)
    }
}
