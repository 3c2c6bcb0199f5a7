//! Single admin call.

use serde_json::Value;
use tracing::{instrument, warn};

use crate::{
    admin::create_admin_url,
    config::AdminConfig,
    error::Result,
    transport::{AdminRequest, AdminResponse, AdminTransport, HttpMethod},
};

/// Options for [`call_admin`].
#[derive(Debug, Clone, Default)]
pub struct AdminCallOptions {
    /// Request method, `GET` by default.
    pub method: HttpMethod,
    /// Content path appended to the admin URL.
    pub path: Option<String>,
    /// JSON body. Sets `Content-Type: application/json` when present.
    pub body: Option<Value>,
    /// Extra query parameters, appended in order.
    pub search_params: Vec<(String, String)>,
    /// Extra request headers.
    pub headers: Vec<(String, String)>,
}

impl AdminCallOptions {
    /// Options for `method` on `path`.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: Some(path.into()), ..Default::default() }
    }

    /// Adds a request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Calls admin `operation` once.
///
/// A request without body and without extra headers is sent with neither.
/// Non-2xx responses are returned, not turned into errors. No retries.
///
/// # Errors
///
/// Returns error if the URL cannot be built, the body cannot be serialized
/// or the transport fails.
#[instrument(
    skip(transport, config, options),
    fields(method = %options.method, path = options.path.as_deref())
)]
pub async fn call_admin<T: AdminTransport>(
    transport: &T,
    config: &AdminConfig,
    operation: &str,
    options: AdminCallOptions,
) -> Result<AdminResponse> {
    let AdminCallOptions { method, path, body, search_params, mut headers } = options;

    let url = create_admin_url(config, operation, path.as_deref(), &search_params)?;

    let body = match body {
        Some(value) => {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
            Some(serde_json::to_vec(&value)?)
        }
        None => None,
    };
    let headers = (!headers.is_empty()).then_some(headers);

    let response = transport.send(AdminRequest { method, url, headers, body }).await?;

    if !response.is_success() {
        warn!(
            status = response.status,
            error = response.header(crate::admin::ERROR_HEADER),
            "admin call failed"
        );
    }

    Ok(response)
}
