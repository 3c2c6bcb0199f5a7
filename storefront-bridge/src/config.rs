//! Site configuration types.
//!
//! This module defines TOML-deserializable configuration for one storefront:
//! the site key that selects template overrides, the public host and product
//! URL patterns, admin service coordinates and HTTP client settings.
//!
//! ```toml
//! site_key = "harbor"
//! host = "https://www.harbor-outfitters.com"
//! matched_patterns = ["/products/{{urlkey}}/{{sku}}"]
//! store_name = "Harbor Outfitters"
//!
//! [admin]
//! org = "harbor"
//! site = "storefront"
//! ref = "main"
//! admin_version = "5"
//! api_key_env = "HLX_ADMIN_TOKEN"
//!
//! [http]
//! timeout_secs = 20
//! ```

use std::{path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::{Result, StorefrontError};

/// Root site configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Identifier selecting which site overrides apply.
    pub site_key: String,

    /// Public storefront origin prepended to product paths.
    pub host: String,

    /// Product path patterns. The first entry is used for URL construction.
    #[serde(default)]
    pub matched_patterns: Vec<String>,

    /// Store name used as the document title suffix when a site renders no brand.
    #[serde(default)]
    pub store_name: Option<String>,

    /// Content-admin service configuration.
    #[serde(default)]
    pub admin: AdminConfig,

    /// HTTP client configuration for admin calls.
    #[serde(default)]
    pub http: HttpConfig,
}

impl SiteConfig {
    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ConfigError`] if parsing or validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_bridge::config::SiteConfig;
    ///
    /// let config = SiteConfig::from_toml(
    ///     r#"
    ///     site_key = "summit"
    ///     host = "https://www.summitgear.com"
    ///     matched_patterns = ["/p/{{urlkey}}/{{sku}}"]
    /// "#,
    /// )?;
    /// assert_eq!(config.site_key, "summit");
    /// # Ok::<(), storefront_bridge::StorefrontError>(())
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| StorefrontError::ConfigError(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the configuration is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            StorefrontError::ConfigError(format!(
                "cannot read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Validates the configuration.
    ///
    /// Checks that:
    /// - `site_key` is not empty
    /// - `host` is an absolute HTTPS URL without a path
    /// - every URL pattern starts with `/` and contains no traversal sequences
    /// - admin and HTTP settings are well formed
    ///
    /// An empty `matched_patterns` list is accepted here; rendering a product URL
    /// without a pattern fails later with a configuration error.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ConfigError`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.site_key.trim().is_empty() {
            return Err(StorefrontError::ConfigError("site_key cannot be empty".to_owned()));
        }

        self.validate_host()?;

        for pattern in &self.matched_patterns {
            validate_pattern(pattern)?;
        }

        self.admin.validate()?;
        self.http.validate()
    }

    /// Returns the first configured product URL pattern.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ConfigError`] if no pattern is configured.
    pub fn product_pattern(&self) -> Result<&str> {
        self.matched_patterns.first().map(String::as_str).ok_or_else(|| {
            StorefrontError::ConfigError(format!(
                "no product URL pattern configured for site '{}'",
                self.site_key
            ))
        })
    }

    fn validate_host(&self) -> Result<()> {
        let url = Url::parse(&self.host).map_err(|e| {
            StorefrontError::ConfigError(format!("invalid host '{}': {e}", self.host))
        })?;

        if url.scheme() != "https" {
            return Err(StorefrontError::ConfigError(format!(
                "host must use HTTPS, got: {}",
                url.scheme()
            )));
        }

        if url.path() != "/" || url.query().is_some() {
            return Err(StorefrontError::ConfigError(format!(
                "host must be an origin without path or query: {}",
                self.host
            )));
        }

        Ok(())
    }
}

/// Validates a product URL pattern.
pub(crate) fn validate_pattern(pattern: &str) -> Result<()> {
    if !pattern.starts_with('/') {
        return Err(StorefrontError::ConfigError(format!(
            "URL pattern must start with '/': {pattern}"
        )));
    }

    if pattern.contains("..") || pattern.contains("//") {
        return Err(StorefrontError::ConfigError(format!(
            "URL pattern contains a traversal sequence: {pattern}"
        )));
    }

    Ok(())
}

/// Content-admin service coordinates and credentials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Organization (repository owner).
    #[serde(default)]
    pub org: Option<String>,

    /// Site (repository) name.
    #[serde(default)]
    pub site: Option<String>,

    /// Branch or ref.
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,

    /// Value sent as the `hlx-admin-version` query parameter.
    #[serde(default)]
    pub admin_version: Option<String>,

    /// Admin API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Environment variable holding the admin API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl AdminConfig {
    /// Returns `(org, site, ref)` when all three are present and non-empty.
    #[must_use]
    pub fn coordinates(&self) -> Option<(&str, &str, &str)> {
        fn present(value: Option<&String>) -> Option<&str> {
            value.map(String::as_str).filter(|v| !v.is_empty())
        }

        Some((
            present(self.org.as_ref())?,
            present(self.site.as_ref())?,
            present(self.git_ref.as_ref())?,
        ))
    }

    /// Resolves the admin API key.
    ///
    /// An explicit `api_key` wins; otherwise the variable named by
    /// `api_key_env` is read. Empty values count as absent.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            return Some(key.to_owned());
        }

        self.api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|k| !k.is_empty())
    }

    /// Validates the admin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ConfigError`] if a coordinate contains `/` or the
    /// API key variable name is malformed.
    pub fn validate(&self) -> Result<()> {
        let segments = [("org", &self.org), ("site", &self.site), ("ref", &self.git_ref)];
        for (name, value) in segments {
            if let Some(value) = value
                && value.contains('/')
            {
                return Err(StorefrontError::ConfigError(format!(
                    "admin {name} must be a single path segment: {value}"
                )));
            }
        }

        if let Some(ref name) = self.api_key_env {
            validate_env_var_name(name)?;
        }

        Ok(())
    }
}

/// Validates an environment variable name.
fn validate_env_var_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first_char) = chars.next() else {
        return Err(StorefrontError::ConfigError(
            "environment variable name cannot be empty".to_owned(),
        ));
    };

    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(StorefrontError::ConfigError(format!(
            "environment variable name must start with letter or underscore: {name}"
        )));
    }

    if let Some(ch) = chars.find(|ch| !ch.is_ascii_alphanumeric() && *ch != '_') {
        return Err(StorefrontError::ConfigError(format!(
            "environment variable name contains invalid character '{ch}': {name}"
        )));
    }

    Ok(())
}

/// HTTP client configuration for the admin transport.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Maximum idle connections per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: default_pool_max_idle(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Validates timeout bounds.
    ///
    /// # Errors
    ///
    /// Returns error if `timeout_secs` is outside 1-300 or
    /// `connect_timeout_secs` is outside 1-60.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(StorefrontError::ConfigError(
                "timeout_secs must be between 1 and 300".to_owned(),
            ));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(StorefrontError::ConfigError(
                "connect_timeout_secs must be between 1 and 60".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns timeout as Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns connect timeout as Duration.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_pool_max_idle() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        site_key = "harbor"
        host = "https://www.harbor-outfitters.com"
    "#;

    #[test]
    fn test_site_config_minimal() {
        let config = SiteConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.site_key, "harbor");
        assert!(config.matched_patterns.is_empty());
        assert!(config.store_name.is_none());
        assert!(config.admin.coordinates().is_none());
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_site_config_full() {
        let toml = r#"
            site_key = "summit"
            host = "https://www.summitgear.com"
            matched_patterns = ["/p/{{urlkey}}/{{sku}}", "/products/{{sku}}"]
            store_name = "Summit Gear"

            [admin]
            org = "summit"
            site = "store"
            ref = "main"
            admin_version = "5"

            [http]
            timeout_secs = 15
            connect_timeout_secs = 5
        "#;

        let config = SiteConfig::from_toml(toml).unwrap();
        assert_eq!(config.product_pattern().unwrap(), "/p/{{urlkey}}/{{sku}}");
        assert_eq!(config.store_name.as_deref(), Some("Summit Gear"));
        assert_eq!(config.admin.coordinates(), Some(("summit", "store", "main")));
        assert_eq!(config.admin.admin_version.as_deref(), Some("5"));
        assert_eq!(config.http.timeout(), Duration::from_secs(15));
        assert_eq!(config.http.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_site_config_invalid_toml() {
        let result = SiteConfig::from_toml("site_key = ");
        assert!(matches!(result, Err(StorefrontError::ConfigError(_))));
    }

    #[test]
    fn test_site_config_rejects_empty_site_key() {
        let toml = r#"
            site_key = " "
            host = "https://example.com"
        "#;
        assert!(SiteConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_site_config_rejects_http_host() {
        let toml = r#"
            site_key = "harbor"
            host = "http://example.com"
        "#;
        let err = SiteConfig::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("HTTPS"));
    }

    #[test]
    fn test_site_config_rejects_host_with_path() {
        let toml = r#"
            site_key = "harbor"
            host = "https://example.com/shop"
        "#;
        assert!(SiteConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_product_pattern_missing() {
        let config = SiteConfig::from_toml(MINIMAL).unwrap();
        let err = config.product_pattern().unwrap_err();
        assert!(matches!(err, StorefrontError::ConfigError(_)));
        assert!(err.to_string().contains("harbor"));
    }

    #[test]
    fn test_validate_pattern() {
        assert!(validate_pattern("/products/{{urlkey}}/{{sku}}").is_ok());
        assert!(validate_pattern("products/{{sku}}").is_err());
        assert!(validate_pattern("/products/../{{sku}}").is_err());
        assert!(validate_pattern("/products//{{sku}}").is_err());
    }

    #[test]
    fn test_admin_coordinates_require_all_three() {
        let mut admin = AdminConfig {
            org: Some("org".to_owned()),
            site: Some("site".to_owned()),
            git_ref: None,
            ..Default::default()
        };
        assert!(admin.coordinates().is_none());

        admin.git_ref = Some(String::new());
        assert!(admin.coordinates().is_none());

        admin.git_ref = Some("main".to_owned());
        assert_eq!(admin.coordinates(), Some(("org", "site", "main")));
    }

    #[test]
    fn test_admin_rejects_multi_segment_coordinates() {
        let admin = AdminConfig { org: Some("a/b".to_owned()), ..Default::default() };
        assert!(admin.validate().is_err());
    }

    #[test]
    fn test_admin_explicit_api_key_wins() {
        let admin = AdminConfig {
            api_key: Some("explicit".to_owned()),
            api_key_env: Some("STOREFRONT_TEST_UNSET_VARIABLE".to_owned()),
            ..Default::default()
        };
        assert_eq!(admin.resolve_api_key().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_admin_missing_env_key() {
        let admin = AdminConfig {
            api_key_env: Some("STOREFRONT_TEST_UNSET_VARIABLE".to_owned()),
            ..Default::default()
        };
        assert!(admin.resolve_api_key().is_none());
    }

    #[test]
    fn test_env_var_name_validation() {
        assert!(validate_env_var_name("HLX_ADMIN_TOKEN").is_ok());
        assert!(validate_env_var_name("_PRIVATE").is_ok());
        assert!(validate_env_var_name("").is_err());
        assert!(validate_env_var_name("1TOKEN").is_err());
        assert!(validate_env_var_name("TOKEN-NAME").is_err());
    }

    #[test]
    fn test_http_config_bounds() {
        assert!(HttpConfig::default().validate().is_ok());
        assert!(HttpConfig { timeout_secs: 0, ..Default::default() }.validate().is_err());
        assert!(HttpConfig { timeout_secs: 301, ..Default::default() }.validate().is_err());
        assert!(HttpConfig { connect_timeout_secs: 61, ..Default::default() }.validate().is_err());
    }
}
