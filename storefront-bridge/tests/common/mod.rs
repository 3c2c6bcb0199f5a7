//! Shared test support: an in-memory admin service.

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use std::sync::Mutex;

use storefront_bridge::{
    Result,
    config::AdminConfig,
    transport::{AdminRequest, AdminResponse, AdminTransport},
};

type Responder = Box<dyn Fn(&AdminRequest) -> Result<AdminResponse> + Send + Sync>;

/// Records every request and answers with a canned response.
pub struct RecordingTransport {
    requests: Mutex<Vec<AdminRequest>>,
    responder: Responder,
}

impl RecordingTransport {
    /// Answers every request with `status` and optional `x-error` header.
    pub fn with_status(status: u16, error: Option<&str>) -> Self {
        let headers: Vec<(String, String)> =
            error.map(|e| vec![("x-error".to_owned(), e.to_owned())]).unwrap_or_default();
        Self::with_responder(move |_| {
            Ok(AdminResponse { status, headers: headers.clone(), body: Vec::new() })
        })
    }

    /// Answers with `responder`.
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&AdminRequest) -> Result<AdminResponse> + Send + Sync + 'static,
    {
        Self { requests: Mutex::new(Vec::new()), responder: Box::new(responder) }
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<AdminRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl AdminTransport for RecordingTransport {
    async fn send(&self, request: AdminRequest) -> Result<AdminResponse> {
        let response = (self.responder)(&request);
        self.requests.lock().expect("requests lock").push(request);
        response
    }
}

/// Admin config with full coordinates and no API key.
pub fn admin_config() -> AdminConfig {
    AdminConfig {
        org: Some("acme".to_owned()),
        site: Some("shop".to_owned()),
        git_ref: Some("main".to_owned()),
        ..Default::default()
    }
}
