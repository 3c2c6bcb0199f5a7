//! Catalog data model.
//!
//! Products and variants arrive from the catalog service already resolved;
//! this crate only reads them.

pub mod models;

pub use models::{Image, Price, Product, Variant};
