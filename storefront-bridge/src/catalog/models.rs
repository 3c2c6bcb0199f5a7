//! Product and variant data consumed by the page templates.
//!
//! Field names follow the camelCase JSON produced by the catalog service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product as supplied by the catalog service.
///
/// Read-only inside templates, except `meta_description`, which a template
/// defaults from `short_description` when it is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// URL key substituted into the product path pattern.
    pub url_key: String,
    /// Short description, used as meta description fallback.
    #[serde(default)]
    pub short_description: Option<String>,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit document title.
    #[serde(default)]
    pub meta_title: Option<String>,
    /// Explicit meta description.
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Comma-separated meta keywords.
    #[serde(default)]
    pub meta_keyword: Option<String>,
    /// Open attribute bag (brand, material, ...).
    #[serde(default)]
    pub attribute_map: BTreeMap<String, String>,
    /// Product images, first one is the primary image.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Product-level price.
    #[serde(default)]
    pub price: Option<Price>,
    /// Stock status.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl Product {
    /// Returns an attribute value when present and non-empty.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attribute_map.get(name).map(String::as_str).filter(|v| !v.trim().is_empty())
    }

    /// Returns the primary image URL.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

/// Purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Identifier in the commerce backend.
    pub external_id: String,
    /// Base64-encoded option selections, in option order.
    #[serde(default)]
    pub selections: Vec<String>,
    /// Variant SKU. Falls back to the product SKU when absent.
    #[serde(default)]
    pub sku: Option<String>,
    /// Variant display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Variant price. Falls back to the product price when absent.
    #[serde(default)]
    pub price: Option<Price>,
    /// Stock status.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Variant images.
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Product or variant image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Absolute image URL.
    pub url: String,
    /// Alt text.
    #[serde(default)]
    pub label: Option<String>,
}

/// Final price with currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in major units.
    pub amount: Decimal,
    /// Currency code (ISO 4217).
    pub currency: String,
}

const fn default_in_stock() -> bool {
    true
}
