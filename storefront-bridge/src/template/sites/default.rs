//! Base site used for unmapped site keys.

use crate::template::SiteOverrides;

/// Site without overrides: every capability uses the base rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSite;

impl DefaultSite {
    /// Key reported by the base site.
    pub const KEY: &'static str = "default";
}

impl SiteOverrides for DefaultSite {
    fn site_key(&self) -> &'static str {
        Self::KEY
    }
}
