//! Error types for storefront-bridge.
//!
//! All errors implement [`std::error::Error`] via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Network Errors** ([`StorefrontError::HttpError`]): transport-level failures
//!   talking to the admin service. These always propagate to the caller.
//! - **Configuration Errors** ([`StorefrontError::ConfigError`]): missing or malformed
//!   site configuration, such as a site with no product URL pattern.
//! - **Input Errors** ([`StorefrontError::InvalidInput`]): product or variant data that
//!   cannot be rendered, such as undecodable option selections.
//!
//! Non-2xx admin responses are *not* errors. They are recorded as
//! [`CallStatus`](crate::admin::CallStatus) values so that a batch of
//! preview/publish calls always completes.
//!
//! # Examples
//!
//! ```
//! use storefront_bridge::error::{Result, StorefrontError};
//!
//! fn require_pattern(patterns: &[String]) -> Result<&str> {
//!     patterns
//!         .first()
//!         .map(String::as_str)
//!         .ok_or_else(|| StorefrontError::ConfigError("no product URL pattern".to_owned()))
//! }
//!
//! assert!(require_pattern(&[]).is_err());
//! ```

use thiserror::Error;

/// Result type alias for storefront-bridge operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Errors that can occur while rendering templates or calling the admin service.
///
/// # Error Recovery
///
/// - **Transient errors** ([`HttpError`](Self::HttpError)): the surrounding caller may retry;
///   this crate performs no retries itself
/// - **Configuration errors** ([`ConfigError`](Self::ConfigError)): fix the site
///   configuration, the operation cannot succeed as configured
/// - **Input errors** ([`InvalidInput`](Self::InvalidInput)): fix the product data
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// HTTP request failed before a response was received.
    ///
    /// Wraps [`reqwest::Error`]. Common causes include DNS failures, refused
    /// connections, TLS errors and client-side timeouts.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Site configuration is missing a required value or is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_bridge::error::StorefrontError;
    ///
    /// let err = StorefrontError::ConfigError("no matched URL pattern".to_string());
    /// assert!(err.to_string().contains("Invalid site configuration"));
    /// ```
    #[error("Invalid site configuration: {0}")]
    ConfigError(String),

    /// Product, variant or request input cannot be processed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization or deserialization failed.
    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The transport could not send a request.
    #[error("Transport error: {0}")]
    TransportError(String),
}
