//! Product page templates.
//!
//! A [`ProductTemplate`] renders one product into an HTML head fragment,
//! schema.org JSON-LD, or a full HTML document. Site-specific behavior comes
//! from the [`SiteOverrides`] implementation selected by the configured site
//! key (see [`registry`]).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use storefront_bridge::{catalog::Product, config::SiteConfig, template::Context};
//!
//! # fn main() -> storefront_bridge::Result<()> {
//! let config = SiteConfig::from_toml(
//!     r#"
//!     site_key = "summit"
//!     host = "https://www.summitgear.com"
//!     matched_patterns = ["/products/{{urlkey}}/{{sku}}"]
//!     "#,
//! )?;
//! let product: Product =
//!     serde_json::from_str(r#"{"name":"Tent","sku":"T-1","urlKey":"tent"}"#)?;
//!
//! let mut context = Context::new(Arc::new(config));
//! let json_ld = context.json_template(&product, &[]).render_json_ld()?;
//! assert_eq!(json_ld.url, "https://www.summitgear.com/products/tent/t-1");
//! assert_eq!(json_ld.brand.map(|b| b.name).as_deref(), Some("Summit Gear"));
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod html;
pub mod jsonld;
pub mod registry;
pub mod sites;
pub mod traits;

use std::sync::Arc;

use tracing::instrument;

pub use jsonld::{Brand, Offer, ProductLd};
pub use traits::SiteOverrides;

use crate::{
    catalog::{Product, Variant},
    config::SiteConfig,
    error::Result,
    template::jsonld::SCHEMA_CONTEXT,
};

/// Renders one product for one site.
#[derive(Debug, Clone)]
pub struct ProductTemplate {
    config: Arc<SiteConfig>,
    product: Product,
    variants: Vec<Variant>,
    site: &'static dyn SiteOverrides,
}

impl ProductTemplate {
    /// Creates a template for `product` using the overrides registered for
    /// the configured site key.
    ///
    /// A missing or blank meta description is filled from the short
    /// description.
    #[must_use]
    pub fn new(config: Arc<SiteConfig>, mut product: Product, variants: Vec<Variant>) -> Self {
        let site = registry::site_overrides(&config.site_key);

        let has_description =
            product.meta_description.as_deref().is_some_and(|d| !d.trim().is_empty());
        if !has_description {
            product.meta_description.clone_from(&product.short_description);
        }

        Self { config, product, variants, site }
    }

    /// Product being rendered.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Variants of the product, in catalog order.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Key of the overrides in use. `default` when the configured key has
    /// none registered.
    #[must_use]
    pub fn site_key(&self) -> &'static str {
        self.site.site_key()
    }

    /// Title suffix: the rendered brand, otherwise the store name.
    #[must_use]
    pub fn title_suffix(&self) -> Option<String> {
        self.site
            .render_brand(self)
            .map(|brand| brand.name)
            .or_else(|| self.config.store_name.clone())
    }

    /// Canonical product URL without variant parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the site has no URL pattern.
    pub fn product_url(&self) -> Result<String> {
        self.site.construct_product_url(self, None)
    }

    /// Renders the `<head>` meta tag fragment.
    ///
    /// # Errors
    ///
    /// Returns error if the site's meta tags need a product URL that cannot
    /// be constructed.
    pub fn render_head(&self) -> Result<String> {
        self.site.render_document_meta_tags(self)
    }

    /// Renders the schema.org `Product` node.
    ///
    /// # Errors
    ///
    /// Returns error if a product or variant URL cannot be constructed.
    #[instrument(skip(self), fields(site = self.site_key(), sku = %self.product.sku))]
    pub fn render_json_ld(&self) -> Result<ProductLd> {
        let url = self.product_url()?;

        Ok(ProductLd {
            context: SCHEMA_CONTEXT,
            kind: "Product",
            id: url.clone(),
            name: self.product.name.clone(),
            sku: self.product.sku.clone(),
            product_id: self.product.sku.clone(),
            description: self.product.meta_description.clone(),
            url,
            image: self.product.images.iter().map(|image| image.url.clone()).collect(),
            offers: self.site.render_offers(self)?,
            brand: self.site.render_brand(self),
        })
    }

    /// Renders the JSON-LD node as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns error if rendering or serialization fails.
    pub fn render_json_ld_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.render_json_ld()?)?)
    }

    /// Renders the full product HTML document.
    ///
    /// # Errors
    ///
    /// Returns error if the head or JSON-LD cannot be rendered.
    pub fn render_html(&self) -> Result<String> {
        let head = self.render_head()?;
        let json_ld = self.render_json_ld_string()?;
        Ok(html::render_document(&head, &json_ld, &self.product, &self.variants))
    }
}

/// Request-scoped rendering context.
#[derive(Debug)]
pub struct Context {
    /// Site configuration.
    pub config: Arc<SiteConfig>,
    /// Per-request cache.
    pub attributes: Attributes,
}

impl Context {
    /// Creates a context with an empty cache.
    #[must_use]
    pub fn new(config: Arc<SiteConfig>) -> Self {
        Self { config, attributes: Attributes::default() }
    }

    /// Returns the JSON template for this request.
    ///
    /// The first call builds the template from `product` and `variants`;
    /// later calls return the same instance and ignore their arguments.
    pub fn json_template(&mut self, product: &Product, variants: &[Variant]) -> &ProductTemplate {
        let config = &self.config;
        self.attributes.json_template.get_or_insert_with(|| {
            ProductTemplate::new(Arc::clone(config), product.clone(), variants.to_vec())
        })
    }
}

/// Values memoized for the lifetime of a [`Context`].
#[derive(Debug, Default)]
pub struct Attributes {
    json_template: Option<ProductTemplate>,
}

impl Attributes {
    /// The memoized JSON template, if one was built.
    #[must_use]
    pub fn json_template(&self) -> Option<&ProductTemplate> {
        self.json_template.as_ref()
    }
}
