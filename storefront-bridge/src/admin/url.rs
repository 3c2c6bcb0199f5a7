//! Admin URL construction.

use tracing::debug;
use url::Url;

use crate::{
    admin::{ADMIN_ORIGIN, ADMIN_VERSION_PARAM},
    config::AdminConfig,
    error::{Result, StorefrontError},
};

/// Builds the URL for an admin `operation`.
///
/// With org, site and ref all configured the URL is
/// `{origin}/{operation}/{org}/{site}/{ref}` followed by the segments of
/// `path`, keeping a trailing slash. If any coordinate is missing the URL is
/// exactly `{origin}/{operation}` and `path` is ignored. `hlx-admin-version` is added
/// when configured, then `search_params` in order.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidInput`] if `operation` is empty or not a
/// single path segment.
///
/// # Examples
///
/// ```
/// use storefront_bridge::{admin::create_admin_url, config::AdminConfig};
///
/// let config = AdminConfig {
///     org: Some("acme".to_owned()),
///     site: Some("shop".to_owned()),
///     git_ref: Some("main".to_owned()),
///     ..Default::default()
/// };
///
/// let url = create_admin_url(&config, "preview", Some("/products/tent"), &[])?;
/// assert_eq!(url.as_str(), "https://admin.hlx.page/preview/acme/shop/main/products/tent");
///
/// let url = create_admin_url(&AdminConfig::default(), "preview", Some("/products/tent"), &[])?;
/// assert_eq!(url.as_str(), "https://admin.hlx.page/preview");
/// # Ok::<(), storefront_bridge::StorefrontError>(())
/// ```
pub fn create_admin_url(
    config: &AdminConfig,
    operation: &str,
    path: Option<&str>,
    search_params: &[(String, String)],
) -> Result<Url> {
    if operation.is_empty() || operation.contains('/') {
        return Err(StorefrontError::InvalidInput(format!(
            "admin operation must be a single path segment: '{operation}'"
        )));
    }

    let mut url = Url::parse(ADMIN_ORIGIN)
        .map_err(|e| StorefrontError::InvalidInput(format!("invalid admin origin: {e}")))?;

    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            StorefrontError::InvalidInput("admin origin cannot carry a path".to_owned())
        })?;
        segments.pop_if_empty().push(operation);

        if let Some((org, site, git_ref)) = config.coordinates() {
            segments.extend([org, site, git_ref]);
            if let Some(path) = path {
                segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
                if path.ends_with('/') {
                    segments.push("");
                }
            }
        }
    }

    let version = config.admin_version.as_deref().filter(|v| !v.is_empty());
    if version.is_some() || !search_params.is_empty() {
        let mut query = url.query_pairs_mut();
        if let Some(version) = version {
            query.append_pair(ADMIN_VERSION_PARAM, version);
        }
        for (name, value) in search_params {
            query.append_pair(name, value);
        }
    }

    debug!(url = %url, "admin URL built");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AdminConfig {
        AdminConfig {
            org: Some("acme".to_owned()),
            site: Some("shop".to_owned()),
            git_ref: Some("main".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_coordinate_degrades_to_operation() {
        for config in [
            AdminConfig { org: None, ..config() },
            AdminConfig { site: None, ..config() },
            AdminConfig { git_ref: Some(String::new()), ..config() },
        ] {
            let url = create_admin_url(&config, "status", Some("/a/b"), &[]).unwrap();
            assert_eq!(url.as_str(), "https://admin.hlx.page/status");
        }
    }

    #[test]
    fn test_full_coordinates_without_path() {
        let url = create_admin_url(&config(), "live", None, &[]).unwrap();
        assert_eq!(url.as_str(), "https://admin.hlx.page/live/acme/shop/main");
    }

    #[test]
    fn test_path_without_leading_slash() {
        let url = create_admin_url(&config(), "live", Some("products/tent"), &[]).unwrap();
        assert_eq!(url.as_str(), "https://admin.hlx.page/live/acme/shop/main/products/tent");
    }

    #[test]
    fn test_admin_version_before_search_params() {
        let config = AdminConfig { admin_version: Some("v2".to_owned()), ..config() };
        let params = vec![("force".to_owned(), "true".to_owned())];
        let url = create_admin_url(&config, "preview", Some("/index"), &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://admin.hlx.page/preview/acme/shop/main/index?hlx-admin-version=v2&force=true"
        );
    }

    #[test]
    fn test_admin_version_without_coordinates() {
        let config = AdminConfig { admin_version: Some("1".to_owned()), ..Default::default() };
        let url = create_admin_url(&config, "status", None, &[]).unwrap();
        assert_eq!(url.as_str(), "https://admin.hlx.page/status?hlx-admin-version=1");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let url = create_admin_url(&config(), "preview", Some("/my page"), &[]).unwrap();
        assert_eq!(url.path(), "/preview/acme/shop/main/my%20page");
    }

    #[test]
    fn test_index_path_keeps_trailing_slash() {
        let url = create_admin_url(&config(), "preview", Some("/"), &[]).unwrap();
        assert_eq!(url.as_str(), "https://admin.hlx.page/preview/acme/shop/main/");
    }

    #[test]
    fn test_folder_path_keeps_trailing_slash() {
        let url = create_admin_url(&config(), "preview", Some("/docs/"), &[]).unwrap();
        assert_eq!(url.as_str(), "https://admin.hlx.page/preview/acme/shop/main/docs/");
    }

    #[test]
    fn test_invalid_operation() {
        assert!(matches!(
            create_admin_url(&config(), "", None, &[]),
            Err(StorefrontError::InvalidInput(_))
        ));
        assert!(matches!(
            create_admin_url(&config(), "a/b", None, &[]),
            Err(StorefrontError::InvalidInput(_))
        ));
    }
}
