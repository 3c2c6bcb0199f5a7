//! Site key to override lookup.

use crate::template::{
    SiteOverrides,
    sites::{DefaultSite, HarborSite, SummitSite},
};

static SITES: &[(&str, &dyn SiteOverrides)] =
    &[(HarborSite::KEY, &HarborSite), (SummitSite::KEY, &SummitSite)];

/// Returns the overrides registered for `site_key`.
///
/// Unknown keys get [`DefaultSite`], which renders with the base behavior.
///
/// # Examples
///
/// ```
/// use storefront_bridge::template::registry::site_overrides;
///
/// assert_eq!(site_overrides("summit").site_key(), "summit");
/// assert_eq!(site_overrides("nowhere").site_key(), "default");
/// ```
#[must_use]
pub fn site_overrides(site_key: &str) -> &'static dyn SiteOverrides {
    SITES
        .iter()
        .find(|(key, _)| *key == site_key)
        .map_or(&DefaultSite as &'static dyn SiteOverrides, |(_, site)| *site)
}

/// Keys of every site with registered overrides.
pub fn registered_sites() -> impl Iterator<Item = &'static str> {
    SITES.iter().map(|(key, _)| *key)
}
