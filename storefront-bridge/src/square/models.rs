//! Square response types.

use serde::Deserialize;
use serde_json::Value;

/// Amount in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Money {
    /// Amount in minor units (cents for USD).
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// Error entry returned alongside or instead of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SquareError {
    /// Error category, e.g. `INVALID_REQUEST_ERROR`.
    pub category: String,
    /// Error code, e.g. `NOT_FOUND`.
    pub code: String,
    /// Human-readable detail.
    #[serde(default)]
    pub detail: Option<String>,
    /// Request field the error refers to.
    #[serde(default)]
    pub field: Option<String>,
}

/// Catalog entry of any type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogObject {
    /// Object type: `ITEM`, `ITEM_VARIATION`, `IMAGE`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Object identifier.
    pub id: String,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Object version.
    #[serde(default)]
    pub version: Option<i64>,
    /// Whether the object was deleted.
    #[serde(default)]
    pub is_deleted: bool,
    /// Whether the object is available at every location.
    #[serde(default)]
    pub present_at_all_locations: Option<bool>,
    /// Payload of `ITEM` objects.
    #[serde(default)]
    pub item_data: Option<CatalogItem>,
    /// Payload of `ITEM_VARIATION` objects.
    #[serde(default)]
    pub item_variation_data: Option<CatalogItemVariation>,
    /// Payload of `IMAGE` objects.
    #[serde(default)]
    pub image_data: Option<CatalogImage>,
}

/// `ITEM` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogItem {
    /// Item name.
    #[serde(default)]
    pub name: Option<String>,
    /// Plain-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category identifier.
    #[serde(default)]
    pub category_id: Option<String>,
    /// Variations, each an `ITEM_VARIATION` object.
    #[serde(default)]
    pub variations: Vec<CatalogObject>,
    /// Identifiers of attached `IMAGE` objects.
    #[serde(default)]
    pub image_ids: Vec<String>,
}

/// `ITEM_VARIATION` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItemVariation {
    /// Parent item identifier.
    pub item_id: String,
    /// Variation name.
    #[serde(default)]
    pub name: Option<String>,
    /// Variation SKU.
    #[serde(default)]
    pub sku: Option<String>,
    /// Display order within the item.
    #[serde(default)]
    pub ordinal: Option<i32>,
    /// `FIXED_PRICING` or `VARIABLE_PRICING`.
    #[serde(default)]
    pub pricing_type: Option<String>,
    /// Price for fixed pricing.
    #[serde(default)]
    pub price_money: Option<Money>,
    /// Whether inventory is tracked.
    #[serde(default)]
    pub track_inventory: Option<bool>,
}

/// `IMAGE` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogImage {
    /// Image name.
    #[serde(default)]
    pub name: Option<String>,
    /// Public image URL.
    pub url: String,
    /// Caption.
    #[serde(default)]
    pub caption: Option<String>,
}

/// Response of `POST /v2/catalog/batch-retrieve`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchRetrieveCatalogObjectsResponse {
    /// Errors, if any.
    #[serde(default)]
    pub errors: Vec<SquareError>,
    /// Requested objects.
    #[serde(default)]
    pub objects: Vec<CatalogObject>,
    /// Objects referenced by the requested ones.
    #[serde(default)]
    pub related_objects: Vec<CatalogObject>,
}

/// Response of `GET /v2/catalog/list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListCatalogResponse {
    /// Errors, if any.
    #[serde(default)]
    pub errors: Vec<SquareError>,
    /// Pagination cursor for the next page.
    #[serde(default)]
    pub cursor: Option<String>,
    /// Objects on this page.
    #[serde(default)]
    pub objects: Vec<CatalogObject>,
}

/// Quantity of one catalog object in one state at one location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryCount {
    /// Counted catalog object.
    pub catalog_object_id: String,
    /// Type of the counted object.
    #[serde(default)]
    pub catalog_object_type: Option<String>,
    /// Inventory state, e.g. `IN_STOCK`.
    pub state: String,
    /// Location identifier.
    pub location_id: String,
    /// Decimal quantity as a string.
    pub quantity: String,
    /// Calculation timestamp (RFC 3339).
    #[serde(default)]
    pub calculated_at: Option<String>,
}

/// Response of `POST /v2/inventory/counts/batch-retrieve`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryCountsResponse {
    /// Errors, if any.
    #[serde(default)]
    pub errors: Vec<SquareError>,
    /// Counts.
    #[serde(default)]
    pub counts: Vec<InventoryCount>,
    /// Pagination cursor for the next page.
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Hosted checkout link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentLink {
    /// Link identifier.
    pub id: String,
    /// Link version.
    pub version: i64,
    /// Description shown to the buyer.
    #[serde(default)]
    pub description: Option<String>,
    /// Order created for the link.
    #[serde(default)]
    pub order_id: Option<String>,
    /// Short checkout URL.
    pub url: String,
    /// Long checkout URL.
    #[serde(default)]
    pub long_url: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `POST /v2/online-checkout/payment-links`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatePaymentLinkResponse {
    /// Errors, if any.
    #[serde(default)]
    pub errors: Vec<SquareError>,
    /// Created link.
    #[serde(default)]
    pub payment_link: Option<PaymentLink>,
    /// Objects created with the link (orders), kept opaque.
    #[serde(default)]
    pub related_resources: Option<Value>,
}
