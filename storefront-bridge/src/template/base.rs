//! Base product page rendering shared by every site.
//!
//! [`SiteOverrides`](super::SiteOverrides) defaults call into these functions,
//! and site overrides call them directly before extending the result.

use base64::{Engine, engine::general_purpose::STANDARD};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;
use url::Url;

use crate::{
    catalog::{Product, Variant},
    config::SiteConfig,
    error::{Result, StorefrontError},
    template::{
        html::escape_html,
        jsonld::{ItemAvailability, ItemCondition, Offer},
    },
};

/// Characters escaped in the SKU path segment; everything but
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const SKU_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Placeholder for the product URL key in path patterns.
pub const URL_KEY_PLACEHOLDER: &str = "{{urlkey}}";

/// Placeholder for the product SKU in path patterns.
pub const SKU_PLACEHOLDER: &str = "{{sku}}";

/// Prefix carried by decoded configurable-option selections.
const SELECTION_PREFIX: &str = "configurable/";

/// Renders the base `<head>` meta tag fragment.
///
/// The title is the meta title (or name), followed by `| <suffix>` when a
/// suffix is given. Description and keywords tags are emitted only when the
/// product carries a value for them.
///
/// # Examples
///
/// ```
/// use storefront_bridge::{catalog::Product, template::base::render_document_meta_tags};
///
/// let product: Product =
///     serde_json::from_str(r#"{"name":"Tent","sku":"T-1","urlKey":"tent"}"#).unwrap();
/// let head = render_document_meta_tags(&product, Some("Summit Gear"));
/// assert!(head.contains("<title>Tent | Summit Gear</title>"));
/// assert!(!head.contains("name=\"description\""));
/// ```
#[must_use]
pub fn render_document_meta_tags(product: &Product, title_suffix: Option<&str>) -> String {
    let title = non_blank(product.meta_title.as_deref()).unwrap_or(&product.name);
    let title = match title_suffix {
        Some(suffix) => format!("{} | {}", escape_html(title), escape_html(suffix)),
        None => escape_html(title).into_owned(),
    };

    let mut tags = vec![
        r#"<meta charset="UTF-8">"#.to_owned(),
        format!("<title>{title}</title>"),
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_owned(),
    ];

    if let Some(description) = non_blank(product.meta_description.as_deref()) {
        tags.push(meta_name_tag("description", description));
    }

    if let Some(keywords) = non_blank(product.meta_keyword.as_deref()) {
        tags.push(meta_name_tag("keywords", keywords));
    }

    tags.join("\n")
}

/// Renders a `<meta name=... content=...>` tag with escaped content.
#[must_use]
pub fn meta_name_tag(name: &str, content: &str) -> String {
    format!(r#"<meta name="{name}" content="{}">"#, escape_html(content))
}

/// Renders a `<meta property=... content=...>` tag with escaped content.
#[must_use]
pub fn meta_property_tag(property: &str, content: &str) -> String {
    format!(r#"<meta property="{property}" content="{}">"#, escape_html(content))
}

/// Renders the base offer list.
///
/// One offer per variant, or a single product-level offer when the product
/// has no variants. `product_url` builds the offer URL, so sites that override
/// URL construction get their URLs into the offers too.
///
/// # Errors
///
/// Returns the first error produced by `product_url`.
pub fn render_offers<F>(product: &Product, variants: &[Variant], product_url: F) -> Result<Vec<Offer>>
where
    F: Fn(Option<&Variant>) -> Result<String>,
{
    if variants.is_empty() {
        let price = product.price.as_ref();
        return Ok(vec![Offer {
            kind: "Offer",
            sku: product.sku.clone(),
            url: product_url(None)?,
            price: price.map(|p| p.amount),
            price_currency: price.map(|p| p.currency.clone()),
            availability: ItemAvailability::from_stock(product.in_stock),
            item_condition: ItemCondition::NewCondition,
            image: product.primary_image().map(str::to_owned),
            shipping_details: None,
            has_merchant_return_policy: None,
        }]);
    }

    variants
        .iter()
        .map(|variant| {
            let price = variant.price.as_ref().or(product.price.as_ref());
            let image = variant.images.first().map(|i| i.url.as_str()).or(product.primary_image());

            Ok(Offer {
                kind: "Offer",
                sku: variant.sku.clone().unwrap_or_else(|| product.sku.clone()),
                url: product_url(Some(variant))?,
                price: price.map(|p| p.amount),
                price_currency: price.map(|p| p.currency.clone()),
                availability: ItemAvailability::from_stock(variant.in_stock),
                item_condition: ItemCondition::NewCondition,
                image: image.map(str::to_owned),
                shipping_details: None,
                has_merchant_return_policy: None,
            })
        })
        .collect()
}

/// Builds the canonical product URL.
///
/// The first configured pattern gets `{{urlkey}}` replaced by the URL key and
/// `{{sku}}` by the lower-cased, percent-encoded SKU, and is prefixed with the
/// host. A variant adds `?pid=<external id>&o=<options>`, see
/// [`encode_selections`].
///
/// # Errors
///
/// Returns [`StorefrontError::ConfigError`] when no pattern is configured and
/// [`StorefrontError::InvalidInput`] when a selection cannot be decoded.
///
/// # Examples
///
/// ```
/// use storefront_bridge::{
///     catalog::Product, config::SiteConfig, template::base::construct_product_url,
/// };
///
/// let config = SiteConfig {
///     site_key: "default".into(),
///     host: "https://x".into(),
///     matched_patterns: vec!["/p/{{urlkey}}/{{sku}}".into()],
///     ..Default::default()
/// };
/// let product: Product =
///     serde_json::from_str(r#"{"name":"A","sku":"SKU-1","urlKey":"abc"}"#).unwrap();
///
/// assert_eq!(construct_product_url(&config, &product, None)?, "https://x/p/abc/sku-1");
/// # Ok::<(), storefront_bridge::StorefrontError>(())
/// ```
pub fn construct_product_url(
    config: &SiteConfig,
    product: &Product,
    variant: Option<&Variant>,
) -> Result<String> {
    let pattern = config.product_pattern()?;

    let sku = utf8_percent_encode(&product.sku.to_lowercase(), SKU_ENCODE_SET).to_string();
    let path = pattern.replace(URL_KEY_PLACEHOLDER, &product.url_key).replace(SKU_PLACEHOLDER, &sku);
    let product_url = format!("{}{path}", config.host.trim_end_matches('/'));

    let Some(variant) = variant else {
        return Ok(product_url);
    };

    let options = encode_selections(&variant.selections)?;
    let mut url = Url::parse(&product_url).map_err(|e| {
        StorefrontError::ConfigError(format!("product URL '{product_url}' is invalid: {e}"))
    })?;
    url.query_pairs_mut().append_pair("pid", &variant.external_id).append_pair("o", &options);

    debug!(sku = %product.sku, variant = %variant.external_id, "constructed variant URL");
    Ok(url.into())
}

/// Encodes variant selections into the `o` option parameter.
///
/// Each selection is base64-decoded, stripped of the `configurable/` prefix,
/// and has its remaining `/` separators turned into `-`. Selections are joined
/// with `,` and the result is base64-encoded again.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidInput`] if a selection is not base64 or
/// not UTF-8.
///
/// # Examples
///
/// ```
/// use storefront_bridge::template::base::encode_selections;
///
/// // "configurable/93/56" and "configurable/144/171"
/// let selections =
///     vec!["Y29uZmlndXJhYmxlLzkzLzU2".to_owned(), "Y29uZmlndXJhYmxlLzE0NC8xNzE=".to_owned()];
///
/// // base64 of "93-56,144-171"
/// assert_eq!(encode_selections(&selections)?, "OTMtNTYsMTQ0LTE3MQ==");
/// # Ok::<(), storefront_bridge::StorefrontError>(())
/// ```
pub fn encode_selections(selections: &[String]) -> Result<String> {
    let options = selections
        .iter()
        .map(|selection| decode_selection(selection).map(|uid| uid.replace('/', "-")))
        .collect::<Result<Vec<_>>>()?
        .join(",");

    Ok(STANDARD.encode(options))
}

/// Decodes one selection token and strips its option-type prefix.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidInput`] if the token is not base64-encoded UTF-8.
pub fn decode_selection(selection: &str) -> Result<String> {
    let bytes = STANDARD.decode(selection.trim()).map_err(|e| {
        StorefrontError::InvalidInput(format!("selection '{selection}' is not base64: {e}"))
    })?;
    let decoded = String::from_utf8(bytes).map_err(|e| {
        StorefrontError::InvalidInput(format!("selection '{selection}' is not UTF-8: {e}"))
    })?;

    Ok(decoded.strip_prefix(SELECTION_PREFIX).map_or_else(|| decoded.clone(), str::to_owned))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
