//! Content-admin service helpers.
//!
//! Builds admin URLs from the configured org/site/ref coordinates, issues
//! admin calls through an [`AdminTransport`](crate::transport::AdminTransport)
//! and sequences preview/live promotion for content paths.
//!
//! # Examples
//!
//! ```rust,no_run
//! use storefront_bridge::{admin, config::SiteConfig, transport::HttpTransport};
//!
//! # async fn example() -> storefront_bridge::Result<()> {
//! let config = SiteConfig::from_file("site.toml")?;
//! let transport = HttpTransport::with_config(&config.http)?;
//!
//! let paths = vec!["/products/tent".to_owned(), "/products/stove".to_owned()];
//! let results = admin::publish(&transport, &config.admin, &paths, 4).await?;
//! for (path, result) in &results {
//!     println!("{path}: preview {} live {}", result.preview.status, result.live.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod call;
pub mod publish;
pub mod url;

pub use call::{AdminCallOptions, call_admin};
pub use publish::{
    AdminCallResult, CallStatus, PathResult, call_preview_publish, preview_publish_paths, publish,
    unpublish,
};
pub use url::create_admin_url;

/// Admin service origin.
pub const ADMIN_ORIGIN: &str = "https://admin.hlx.page";

/// Query parameter carrying the configured admin API version.
pub const ADMIN_VERSION_PARAM: &str = "hlx-admin-version";

/// Response header carrying the failure reason of a non-2xx admin call.
pub const ERROR_HEADER: &str = "x-error";
