//! Summit Gear storefront.
//!
//! Single-brand store with a 30 day free mail-return policy on every offer
//! and Open Graph tags in the document head.

use crate::{
    error::Result,
    template::{
        ProductTemplate, SiteOverrides, base,
        jsonld::{
            Brand, MerchantReturnPolicy, Offer, RefundType, ReturnFees, ReturnMethod,
            ReturnPolicyCategory,
        },
    },
};

/// Brand rendered for every product.
pub const BRAND: &str = "Summit Gear";

/// Return window in days.
pub const RETURN_DAYS: u32 = 30;

/// Public return policy page.
pub const RETURN_POLICY_URL: &str = "https://www.summitgear.com/returns";

const RETURN_COUNTRY: &str = "US";

/// Summit Gear overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummitSite;

impl SummitSite {
    /// Site key.
    pub const KEY: &'static str = "summit";
}

impl SiteOverrides for SummitSite {
    fn site_key(&self) -> &'static str {
        Self::KEY
    }

    fn render_document_meta_tags(&self, template: &ProductTemplate) -> Result<String> {
        let product = template.product();
        let mut head =
            base::render_document_meta_tags(product, template.title_suffix().as_deref());

        let title = product.meta_title.as_deref().filter(|t| !t.trim().is_empty());
        let og = [
            Some(base::meta_property_tag("og:type", "product")),
            Some(base::meta_property_tag("og:title", title.unwrap_or(&product.name))),
            Some(base::meta_property_tag("og:url", &self.construct_product_url(template, None)?)),
            product.primary_image().map(|image| base::meta_property_tag("og:image", image)),
        ];

        for tag in og.into_iter().flatten() {
            head.push('\n');
            head.push_str(&tag);
        }

        Ok(head)
    }

    fn render_brand(&self, _template: &ProductTemplate) -> Option<Brand> {
        Some(Brand::new(BRAND))
    }

    fn render_offers(&self, template: &ProductTemplate) -> Result<Vec<Offer>> {
        let offers = base::render_offers(template.product(), template.variants(), |variant| {
            self.construct_product_url(template, variant)
        })?;
        Ok(with_return_policy(&offers))
    }
}

/// The return policy attached to every offer.
#[must_use]
pub fn return_policy() -> MerchantReturnPolicy {
    MerchantReturnPolicy {
        kind: "MerchantReturnPolicy",
        applicable_country: RETURN_COUNTRY.to_owned(),
        return_policy_category: ReturnPolicyCategory::FiniteReturnWindow,
        merchant_return_days: RETURN_DAYS,
        return_method: ReturnMethod::ByMail,
        return_fees: ReturnFees::FreeReturn,
        refund_type: RefundType::FullRefund,
        merchant_return_link: RETURN_POLICY_URL.to_owned(),
    }
}

/// Returns a copy of `offers` where each offer carries the return policy.
#[must_use]
pub fn with_return_policy(offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .map(|offer| Offer { has_merchant_return_policy: Some(return_policy()), ..offer.clone() })
        .collect()
}
