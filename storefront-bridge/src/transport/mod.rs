//! Admin service transport.
//!
//! [`AdminTransport`] sends one fully built [`AdminRequest`] and returns the
//! raw [`AdminResponse`]. HTTP status codes are data, not errors: only
//! failures to complete the exchange are reported as `Err`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use storefront_bridge::transport::{AdminRequest, AdminTransport, HttpMethod, HttpTransport};
//! use url::Url;
//!
//! # async fn example() -> storefront_bridge::Result<()> {
//! let transport = HttpTransport::new()?;
//! let url = Url::parse("https://admin.hlx.page/status/acme/shop/main/products").unwrap();
//!
//! let response = transport
//!     .send(AdminRequest { method: HttpMethod::Get, url, headers: None, body: None })
//!     .await?;
//! println!("Status: {}", response.status);
//! # Ok(())
//! # }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;
use std::fmt;

use url::Url;

use crate::error::Result;

pub mod http;

pub use http::HttpTransport;

/// HTTP methods used against the admin service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    #[default]
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRequest {
    /// Request method.
    pub method: HttpMethod,
    /// Absolute request URL, query included.
    pub url: Url,
    /// Request headers. `None` when the caller set none.
    pub headers: Option<Vec<(String, String)>>,
    /// Request body. `None` when the request has no body.
    pub body: Option<Vec<u8>>,
}

/// Raw admin service response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl AdminResponse {
    /// Returns the first value of header `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends admin requests.
///
/// Implemented by [`HttpTransport`] for real traffic; tests substitute an
/// in-memory implementation that records requests.
pub trait AdminTransport: Send + Sync {
    /// Sends `request` and returns the response whatever its status.
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent or the response cannot be
    /// read.
    fn send(&self, request: AdminRequest) -> impl Future<Output = Result<AdminResponse>> + Send;
}

impl<T: AdminTransport> AdminTransport for &T {
    fn send(&self, request: AdminRequest) -> impl Future<Output = Result<AdminResponse>> + Send {
        (**self).send(request)
    }
}
