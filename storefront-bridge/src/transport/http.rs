//! HTTP transport implementation using reqwest.

use std::sync::LazyLock;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    config::HttpConfig,
    error::{Result, StorefrontError},
    transport::{AdminRequest, AdminResponse, AdminTransport, HttpMethod},
};

/// Default HTTP client with connection pooling enabled.
///
/// Shared by every transport created with [`HttpTransport::new`] so pooled
/// connections survive across transports.
static DEFAULT_HTTP_CLIENT: LazyLock<Option<Client>> =
    LazyLock::new(|| build_client(&HttpConfig::default()).ok());

fn build_client(config: &HttpConfig) -> reqwest::Result<Client> {
    Client::builder()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
}

/// Ensures the URL uses HTTPS.
fn validate_url(url: &Url) -> Result<()> {
    if url.scheme() != "https" {
        return Err(StorefrontError::TransportError(format!(
            "only HTTPS URLs are allowed, got: {}",
            url.scheme()
        )));
    }
    Ok(())
}

/// Rejects header names and values carrying control characters.
fn validate_header(name: &str, value: &str) -> Result<()> {
    if name.contains(['\r', '\n', '\0']) {
        return Err(StorefrontError::TransportError(
            "invalid header name: control characters not allowed".to_owned(),
        ));
    }
    if value.contains(['\r', '\n', '\0']) {
        return Err(StorefrontError::TransportError(
            "invalid header value: control characters not allowed".to_owned(),
        ));
    }
    Ok(())
}

/// Admin transport over HTTP/1.1 or HTTP/2.
///
/// Non-2xx responses are returned as-is; callers inspect the status.
///
/// # Examples
///
/// ```
/// use storefront_bridge::{config::HttpConfig, transport::HttpTransport};
///
/// let config = HttpConfig { pool_max_idle_per_host: 4, timeout_secs: 60, connect_timeout_secs: 5 };
/// let transport = HttpTransport::with_config(&config)?;
/// # Ok::<(), storefront_bridge::StorefrontError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport sharing the default pooled client.
    ///
    /// Defaults: 10 idle connections per host, 30 second timeout, 10 second
    /// connect timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::TransportError`] if the default client could
    /// not be built.
    pub fn new() -> Result<Self> {
        let client = DEFAULT_HTTP_CLIENT.clone().ok_or_else(|| {
            StorefrontError::TransportError("default HTTP client unavailable".to_owned())
        })?;
        Ok(Self { client })
    }

    /// Creates a transport with its own client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or client creation fails.
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        let client = build_client(config)?;
        Ok(Self { client })
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn execute(&self, request: AdminRequest) -> Result<AdminResponse> {
        validate_url(&request.url)?;

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
            HttpMethod::Put => self.client.put(request.url),
            HttpMethod::Delete => self.client.delete(request.url),
        };

        for (name, value) in request.headers.iter().flatten() {
            validate_header(name, value)?;
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_owned()))
            .collect();
        let body = response.bytes().await?.to_vec();

        debug!(status, body_len = body.len(), "admin response received");

        Ok(AdminResponse { status, headers, body })
    }
}

impl AdminTransport for HttpTransport {
    async fn send(&self, request: AdminRequest) -> Result<AdminResponse> {
        self.execute(request).await
    }
}
