//! Storefront Bridge: product page rendering and content-admin helpers
//!
//! A Rust library for a static storefront pipeline. It renders catalog
//! products into HTML and schema.org JSON-LD with per-site customization, and
//! drives the content-admin service that promotes pages from preview to live.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────────────────────┐
//! │ Catalog product  │─────▶│ template::Context (per request)      │
//! │ + variants       │      │   └─ ProductTemplate                 │
//! └──────────────────┘      │        └─ SiteOverrides (by site key)│
//!                           └──────────────┬───────────────────────┘
//!                                          │ HTML / JSON-LD
//!                                          ▼
//! ┌──────────────────┐      ┌──────────────────────────────────────┐
//! │ Content paths    │─────▶│ admin::publish / unpublish           │
//! └──────────────────┘      │   └─ call_admin ─▶ AdminTransport    │
//!                           └──────────────┬───────────────────────┘
//!                                          │ HTTPS
//!                                          ▼
//!                                 admin.hlx.page preview / live
//! ```
//!
//! # Quick Start
//!
//! ## 1. Render a Product
//!
//! ```
//! use std::sync::Arc;
//!
//! use storefront_bridge::{catalog::Product, config::SiteConfig, template::Context};
//!
//! # fn example() -> storefront_bridge::Result<()> {
//! let config = SiteConfig::from_toml(
//!     r#"
//!     site_key = "harbor"
//!     host = "https://www.harbor-outfitters.com"
//!     matched_patterns = ["/products/{{urlkey}}/{{sku}}"]
//!     "#,
//! )?;
//! let product: Product = serde_json::from_str(
//!     r#"{"name":"Dry Bag","sku":"DB-20","urlKey":"dry-bag","attributeMap":{"brand":"Tidewater"}}"#,
//! )?;
//!
//! let mut context = Context::new(Arc::new(config));
//! let template = context.json_template(&product, &[]);
//!
//! let head = template.render_head()?;
//! assert!(head.contains("<title>Dry Bag | Tidewater</title>"));
//!
//! let json_ld = template.render_json_ld_string()?;
//! assert!(json_ld.contains(r#""shippingDetails""#));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## 2. Publish Content Paths
//!
//! ```rust,no_run
//! use storefront_bridge::{admin, config::SiteConfig, transport::HttpTransport};
//!
//! # async fn example() -> storefront_bridge::Result<()> {
//! let config = SiteConfig::from_file("site.toml")?;
//! let transport = HttpTransport::with_config(&config.http)?;
//!
//! let results = admin::publish(&transport, &config.admin, &["/products/dry-bag".to_owned()], 4).await?;
//! println!("{}", serde_json::to_string_pretty(&results)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`catalog`]: product and variant data read by templates
//! - [`template`]: product templates, site overrides and the site registry
//! - [`admin`]: admin URL building, single calls and preview/live sequencing
//! - [`transport`]: the [`AdminTransport`](transport::AdminTransport) seam and its reqwest implementation
//! - [`square`]: Square API response contracts
//! - [`config`]: TOML site configuration
//! - [`error`]: error type and `Result` alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]. Admin calls that reach the
//! service never fail on HTTP status; the status is reported per path in
//! [`AdminCallResult`](admin::AdminCallResult). Only transport failures
//! propagate.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and tokio"
)]

pub mod admin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod square;
pub mod template;
pub mod transport;

pub use error::{Result, StorefrontError};
pub use template::{Context, ProductTemplate, SiteOverrides};
