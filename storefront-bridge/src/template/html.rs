//! HTML output helpers.

use std::borrow::Cow;

use crate::catalog::{Product, Variant};

/// Escapes text for use in HTML element content and quoted attributes.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Makes serialized JSON safe to embed in a `<script>` element.
#[must_use]
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if json.contains("</") { Cow::Owned(json.replace("</", "<\\/")) } else { Cow::Borrowed(json) }
}

/// Renders a full product document around a head fragment and JSON-LD.
pub(crate) fn render_document(
    head: &str,
    json_ld: &str,
    product: &Product,
    variants: &[Variant],
) -> String {
    let mut html = String::with_capacity(head.len() + json_ld.len() + 512);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(head);
    html.push_str("\n<script type=\"application/ld+json\">");
    html.push_str(&escape_script_json(json_ld));
    html.push_str("</script>\n</head>\n<body>\n<header></header>\n<main>\n");
    html.push_str("<div class=\"product-details\">\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&product.name)));
    html.push_str(&format!("<p class=\"sku\">{}</p>\n", escape_html(&product.sku)));

    if let Some(description) = product.description.as_deref().or(product.short_description.as_deref())
    {
        html.push_str(&format!("<div class=\"description\">{}</div>\n", escape_html(description)));
    }

    if !variants.is_empty() {
        html.push_str("<ul class=\"variants\">\n");
        for variant in variants {
            let label = variant.name.as_deref().or(variant.sku.as_deref()).unwrap_or(&variant.external_id);
            let class = if variant.in_stock { "" } else { " class=\"out-of-stock\"" };
            html.push_str(&format!(
                "<li data-external-id=\"{}\"{class}>{}</li>\n",
                escape_html(&variant.external_id),
                escape_html(label)
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</div>\n</main>\n<footer></footer>\n</body>\n</html>\n");
    html
}
