//! schema.org JSON-LD types emitted by product templates.
//!
//! Only the subset of the vocabulary the storefront templates render is
//! modelled. Enumeration members serialize to their schema.org URLs.

use rust_decimal::Decimal;
use serde::Serialize;

/// JSON-LD `@context` value.
pub const SCHEMA_CONTEXT: &str = "http://schema.org";

/// schema.org `Product`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLd {
    /// JSON-LD context.
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// Node type, always `Product`.
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Node identifier, the canonical product URL.
    #[serde(rename = "@id")]
    pub id: String,
    /// Product name.
    pub name: String,
    /// Product SKU.
    pub sku: String,
    /// Product identifier (the SKU).
    #[serde(rename = "productID")]
    pub product_id: String,
    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical product URL.
    pub url: String,
    /// Image URLs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<String>,
    /// Offers, one per purchasable variant.
    pub offers: Vec<Offer>,
    /// Brand, when the site renders one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
}

/// schema.org `Brand`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    /// Node type, always `Brand`.
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Brand name.
    pub name: String,
}

impl Brand {
    /// Creates a brand node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { kind: "Brand", name: name.into() }
    }
}

/// schema.org `Offer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Node type, always `Offer`.
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Offered SKU.
    pub sku: String,
    /// URL selecting this offer on the storefront.
    pub url: String,
    /// Price in major units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Currency code (ISO 4217).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_currency: Option<String>,
    /// Stock availability.
    pub availability: ItemAvailability,
    /// Item condition.
    pub item_condition: ItemCondition,
    /// Offer image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Shipping details added by site overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<OfferShippingDetails>,
    /// Return policy added by site overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_merchant_return_policy: Option<MerchantReturnPolicy>,
}

/// schema.org `OfferShippingDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferShippingDetails {
    /// Node type.
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Where the offer ships to.
    pub shipping_destination: DefinedRegion,
}

impl OfferShippingDetails {
    /// Shipping details for a single destination region.
    #[must_use]
    pub fn to_region(shipping_destination: DefinedRegion) -> Self {
        Self { kind: "OfferShippingDetails", shipping_destination }
    }
}

/// schema.org `DefinedRegion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinedRegion {
    /// Node type.
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Country code (ISO 3166-1 alpha-2).
    pub address_country: String,
}

impl DefinedRegion {
    /// A region covering a whole country.
    #[must_use]
    pub fn country(address_country: impl Into<String>) -> Self {
        Self { kind: "DefinedRegion", address_country: address_country.into() }
    }
}

/// schema.org `MerchantReturnPolicy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantReturnPolicy {
    /// Node type.
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Country the policy applies to.
    pub applicable_country: String,
    /// Policy category.
    pub return_policy_category: ReturnPolicyCategory,
    /// Return window in days.
    pub merchant_return_days: u32,
    /// How items are returned.
    pub return_method: ReturnMethod,
    /// Who pays for returns.
    pub return_fees: ReturnFees,
    /// Refund kind.
    pub refund_type: RefundType,
    /// Public policy page.
    pub merchant_return_link: String,
}

/// schema.org `ItemAvailability` members used by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemAvailability {
    /// In stock.
    #[serde(rename = "https://schema.org/InStock")]
    InStock,
    /// Out of stock.
    #[serde(rename = "https://schema.org/OutOfStock")]
    OutOfStock,
}

impl ItemAvailability {
    /// Maps a stock flag to availability.
    #[must_use]
    pub const fn from_stock(in_stock: bool) -> Self {
        if in_stock { Self::InStock } else { Self::OutOfStock }
    }
}

/// schema.org `OfferItemCondition` members used by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemCondition {
    /// New item.
    #[serde(rename = "https://schema.org/NewCondition")]
    NewCondition,
}

/// schema.org `MerchantReturnEnumeration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnPolicyCategory {
    /// Returns accepted within a fixed number of days.
    #[serde(rename = "https://schema.org/MerchantReturnFiniteReturnWindow")]
    FiniteReturnWindow,
    /// Returns not accepted.
    #[serde(rename = "https://schema.org/MerchantReturnNotPermitted")]
    NotPermitted,
}

/// schema.org `ReturnMethodEnumeration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnMethod {
    /// Returned by mail.
    #[serde(rename = "https://schema.org/ReturnByMail")]
    ByMail,
    /// Returned in store.
    #[serde(rename = "https://schema.org/ReturnInStore")]
    InStore,
}

/// schema.org `ReturnFeesEnumeration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnFees {
    /// Free returns.
    #[serde(rename = "https://schema.org/FreeReturn")]
    FreeReturn,
    /// Customer pays return shipping.
    #[serde(rename = "https://schema.org/ReturnShippingFees")]
    ReturnShippingFees,
}

/// schema.org `RefundTypeEnumeration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefundType {
    /// Full refund.
    #[serde(rename = "https://schema.org/FullRefund")]
    FullRefund,
    /// Store credit.
    #[serde(rename = "https://schema.org/StoreCreditRefund")]
    StoreCreditRefund,
}
