//! Site override capability trait.

use std::fmt;

use crate::{
    catalog::Variant,
    error::Result,
    template::{
        ProductTemplate, base,
        jsonld::{Brand, Offer},
    },
};

/// Per-site customization of product page rendering.
///
/// Every method has a default that delegates to [`base`]. A site overrides
/// only what differs and composes with the base output by calling the
/// corresponding `base` function and transforming its result.
///
/// # Examples
///
/// ```
/// use storefront_bridge::{
///     Result,
///     template::{ProductTemplate, SiteOverrides, base, jsonld::Offer},
/// };
///
/// #[derive(Debug)]
/// struct NoImageOffers;
///
/// impl SiteOverrides for NoImageOffers {
///     fn site_key(&self) -> &'static str {
///         "no-image"
///     }
///
///     fn render_offers(&self, template: &ProductTemplate) -> Result<Vec<Offer>> {
///         let offers = base::render_offers(template.product(), template.variants(), |variant| {
///             self.construct_product_url(template, variant)
///         })?;
///         Ok(offers.into_iter().map(|offer| Offer { image: None, ..offer }).collect())
///     }
/// }
/// ```
pub trait SiteOverrides: Send + Sync + fmt::Debug {
    /// Site key this implementation is registered under.
    fn site_key(&self) -> &'static str;

    /// Renders the `<head>` meta tag fragment.
    ///
    /// # Errors
    ///
    /// Overrides that embed product URLs return configuration errors from
    /// [`construct_product_url`](Self::construct_product_url).
    fn render_document_meta_tags(&self, template: &ProductTemplate) -> Result<String> {
        Ok(base::render_document_meta_tags(template.product(), template.title_suffix().as_deref()))
    }

    /// Renders the JSON-LD brand. The base contract renders none.
    fn render_brand(&self, _template: &ProductTemplate) -> Option<Brand> {
        None
    }

    /// Renders the JSON-LD offers.
    ///
    /// # Errors
    ///
    /// Returns error if a product URL cannot be constructed.
    fn render_offers(&self, template: &ProductTemplate) -> Result<Vec<Offer>> {
        base::render_offers(template.product(), template.variants(), |variant| {
            self.construct_product_url(template, variant)
        })
    }

    /// Builds the canonical product URL, optionally selecting a variant.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ConfigError`](crate::StorefrontError::ConfigError) if the
    /// site has no URL pattern, or
    /// [`StorefrontError::InvalidInput`](crate::StorefrontError::InvalidInput) if a variant
    /// selection cannot be decoded.
    fn construct_product_url(
        &self,
        template: &ProductTemplate,
        variant: Option<&Variant>,
    ) -> Result<String> {
        base::construct_product_url(template.config(), template.product(), variant)
    }
}
