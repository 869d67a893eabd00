//! Product catalog: categories, products, the built-in menu and the category
//! filter.
//!
//! The catalog is loaded once and never mutated afterwards.

pub mod catalog;
pub mod data;
pub mod product;

pub use catalog::{Catalog, EMPTY_CATEGORY_MESSAGE, filter_by_category};
pub use product::{Category, Product};
