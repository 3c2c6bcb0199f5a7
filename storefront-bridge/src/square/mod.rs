//! Square API response contracts.
//!
//! Shapes of the Square catalog, inventory and checkout responses consumed by
//! the storefront. Only the fields the storefront reads are modelled; unknown
//! fields are ignored.

pub mod models;

pub use models::{
    BatchRetrieveCatalogObjectsResponse, CatalogImage, CatalogItem, CatalogItemVariation,
    CatalogObject, CreatePaymentLinkResponse, InventoryCount, InventoryCountsResponse,
    ListCatalogResponse, Money, PaymentLink, SquareError,
};
