//! Harbor Outfitters storefront.
//!
//! Brand comes from the product's `brand` attribute. Every offer ships to the
//! US only.

use crate::{
    error::Result,
    template::{
        ProductTemplate, SiteOverrides, base,
        jsonld::{Brand, DefinedRegion, Offer, OfferShippingDetails},
    },
};

/// Brand used when a product has no `brand` attribute.
pub const DEFAULT_BRAND: &str = "Harbor Outfitters";

/// Attribute holding the brand name.
pub const BRAND_ATTRIBUTE: &str = "brand";

const SHIPPING_COUNTRY: &str = "US";

/// Harbor Outfitters overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarborSite;

impl HarborSite {
    /// Site key.
    pub const KEY: &'static str = "harbor";
}

impl SiteOverrides for HarborSite {
    fn site_key(&self) -> &'static str {
        Self::KEY
    }

    fn render_brand(&self, template: &ProductTemplate) -> Option<Brand> {
        let name = template.product().attribute(BRAND_ATTRIBUTE).unwrap_or(DEFAULT_BRAND);
        Some(Brand::new(name))
    }

    fn render_offers(&self, template: &ProductTemplate) -> Result<Vec<Offer>> {
        let offers = base::render_offers(template.product(), template.variants(), |variant| {
            self.construct_product_url(template, variant)
        })?;
        Ok(with_shipping_details(&offers))
    }
}

/// Returns a copy of `offers` where each offer ships to the US.
#[must_use]
pub fn with_shipping_details(offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .map(|offer| Offer {
            shipping_details: Some(OfferShippingDetails::to_region(DefinedRegion::country(
                SHIPPING_COUNTRY,
            ))),
            ..offer.clone()
        })
        .collect()
}
