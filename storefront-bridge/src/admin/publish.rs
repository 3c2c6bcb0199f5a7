//! Preview-then-live promotion of content paths.

use std::collections::{BTreeMap, BTreeSet};

use futures::{StreamExt, TryStreamExt, stream};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    admin::{AdminCallOptions, ERROR_HEADER, call_admin},
    config::AdminConfig,
    error::{Result, StorefrontError},
    transport::{AdminResponse, AdminTransport, HttpMethod},
};

/// Admin operation for the staging view.
pub const PREVIEW_OPERATION: &str = "preview";

/// Admin operation for production.
pub const LIVE_OPERATION: &str = "live";

/// Outcome of one admin call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallStatus {
    /// HTTP status code.
    pub status: u16,
    /// Failure reason from `x-error`, only for non-2xx responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CallStatus {
    /// Captures status and, for failures, the `x-error` header.
    #[must_use]
    pub fn from_response(response: &AdminResponse) -> Self {
        let message = if response.is_success() {
            None
        } else {
            response.header(ERROR_HEADER).map(str::to_owned)
        };
        Self { status: response.status, message }
    }
}

/// Preview and live outcomes for one content path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Preview call outcome.
    pub preview: CallStatus,
    /// Live call outcome.
    pub live: CallStatus,
}

/// Per-path results of a batch, keyed by content path.
pub type AdminCallResult = BTreeMap<String, PathResult>;

/// Runs the preview and live calls for `path`.
///
/// Both calls are always made, whatever the first one returned. `POST`
/// previews first; `DELETE` takes the path down from live first. An
/// `authorization: token <key>` header is sent when an API key resolves.
///
/// # Errors
///
/// Returns error only for transport failures; HTTP error statuses are
/// reported in the result.
#[instrument(skip(transport, config), fields(method = %method))]
pub async fn call_preview_publish<T: AdminTransport>(
    transport: &T,
    config: &AdminConfig,
    method: HttpMethod,
    path: &str,
) -> Result<PathResult> {
    let api_key = config.resolve_api_key();
    let options = || {
        let options = AdminCallOptions::new(method, path);
        match api_key.as_deref() {
            Some(key) => options.header("authorization", format!("token {key}")),
            None => options,
        }
    };

    let (preview, live) = if method == HttpMethod::Delete {
        let live = call_admin(transport, config, LIVE_OPERATION, options()).await?;
        let preview = call_admin(transport, config, PREVIEW_OPERATION, options()).await?;
        (preview, live)
    } else {
        let preview = call_admin(transport, config, PREVIEW_OPERATION, options()).await?;
        let live = call_admin(transport, config, LIVE_OPERATION, options()).await?;
        (preview, live)
    };

    let result = PathResult {
        preview: CallStatus::from_response(&preview),
        live: CallStatus::from_response(&live),
    };
    info!(preview = result.preview.status, live = result.live.status, "path processed");
    Ok(result)
}

/// Runs [`call_preview_publish`] for every path, up to `concurrency` paths at
/// a time.
///
/// Each path keeps its own preview/live order. A `concurrency` of zero is
/// treated as one. Repeated paths are processed once.
///
/// # Errors
///
/// Returns the first transport failure.
#[instrument(skip(transport, config, paths), fields(method = %method, paths = paths.len()))]
pub async fn preview_publish_paths<T: AdminTransport>(
    transport: &T,
    config: &AdminConfig,
    method: HttpMethod,
    paths: &[String],
    concurrency: usize,
) -> Result<AdminCallResult> {
    let unique: BTreeSet<&String> = paths.iter().collect();

    stream::iter(unique)
        .map(|path| async move {
            let result = call_preview_publish(transport, config, method, path).await?;
            Ok::<_, StorefrontError>((path.clone(), result))
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect()
        .await
}

/// Previews and publishes `paths`.
///
/// # Errors
///
/// Returns the first transport failure.
pub async fn publish<T: AdminTransport>(
    transport: &T,
    config: &AdminConfig,
    paths: &[String],
    concurrency: usize,
) -> Result<AdminCallResult> {
    preview_publish_paths(transport, config, HttpMethod::Post, paths, concurrency).await
}

/// Removes `paths` from live and preview.
///
/// # Errors
///
/// Returns the first transport failure.
pub async fn unpublish<T: AdminTransport>(
    transport: &T,
    config: &AdminConfig,
    paths: &[String],
    concurrency: usize,
) -> Result<AdminCallResult> {
    preview_publish_paths(transport, config, HttpMethod::Delete, paths, concurrency).await
}
