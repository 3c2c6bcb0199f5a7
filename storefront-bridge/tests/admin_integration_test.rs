//! Integration tests for admin calls and preview/live sequencing.

mod common;

use common::{RecordingTransport, admin_config};
use serde_json::json;
use storefront_bridge::{
    StorefrontError,
    admin::{
        AdminCallOptions, CallStatus, call_admin, call_preview_publish, preview_publish_paths,
        publish, unpublish,
    },
    config::AdminConfig,
    transport::{AdminResponse, HttpMethod},
};

fn header<'a>(headers: Option<&'a [(String, String)]>, name: &str) -> Option<&'a str> {
    headers?.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn test_call_admin_defaults() {
    let transport = RecordingTransport::with_status(200, None);

    let response = call_admin(&transport, &admin_config(), "status", AdminCallOptions::default())
        .await
        .expect("call should succeed");

    assert_eq!(response.status, 200);
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url.as_str(), "https://admin.hlx.page/status/acme/shop/main");
    assert!(requests[0].headers.is_none());
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn test_call_admin_with_body() {
    let transport = RecordingTransport::with_status(200, None);
    let body = json!({ "paths": ["/a", "/b"], "delete": false });
    let options = AdminCallOptions {
        method: HttpMethod::Post,
        body: Some(body.clone()),
        ..Default::default()
    };

    call_admin(&transport, &admin_config(), "preview", options).await.expect("call should succeed");

    let request = &transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(header(request.headers.as_deref(), "content-type"), Some("application/json"));
    assert_eq!(request.body.as_deref(), Some(serde_json::to_vec(&body).unwrap().as_slice()));
}

#[tokio::test]
async fn test_call_admin_headers_and_search_params() {
    let transport = RecordingTransport::with_status(200, None);
    let config = AdminConfig { admin_version: Some("3".to_owned()), ..admin_config() };
    let options = AdminCallOptions {
        path: Some("/products/tent".to_owned()),
        search_params: vec![("limit".to_owned(), "5".to_owned())],
        headers: vec![("x-trace".to_owned(), "abc".to_owned())],
        ..Default::default()
    };

    call_admin(&transport, &config, "status", options).await.expect("call should succeed");

    let request = &transport.requests()[0];
    assert_eq!(
        request.url.as_str(),
        "https://admin.hlx.page/status/acme/shop/main/products/tent?hlx-admin-version=3&limit=5"
    );
    assert_eq!(request.headers.as_deref().map(<[_]>::len), Some(1));
    assert_eq!(header(request.headers.as_deref(), "x-trace"), Some("abc"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_call_admin_returns_error_status() {
    let transport = RecordingTransport::with_status(503, Some("busy"));

    let response = call_admin(&transport, &admin_config(), "status", AdminCallOptions::default())
        .await
        .expect("HTTP status must not be an error");

    assert_eq!(response.status, 503);
    assert_eq!(response.header("x-error"), Some("busy"));
}

#[tokio::test]
async fn test_preview_publish_issues_two_calls() {
    for status in [200, 401, 500] {
        let transport = RecordingTransport::with_status(status, None);

        let result =
            call_preview_publish(&transport, &admin_config(), HttpMethod::Post, "/products/tent")
                .await
                .expect("sequence should complete");

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url.path(), "/preview/acme/shop/main/products/tent");
        assert_eq!(requests[1].url.path(), "/live/acme/shop/main/products/tent");
        assert!(requests.iter().all(|r| r.method == HttpMethod::Post));
        assert_eq!(result.preview.status, status);
        assert_eq!(result.live.status, status);
    }
}

#[tokio::test]
async fn test_preview_publish_not_found() {
    let transport = RecordingTransport::with_status(404, Some("Not found"));

    let result = call_preview_publish(&transport, &admin_config(), HttpMethod::Post, "/missing")
        .await
        .expect("sequence should complete");

    let expected = CallStatus { status: 404, message: Some("Not found".to_owned()) };
    assert_eq!(result.preview, expected);
    assert_eq!(result.live, expected);
}

#[tokio::test]
async fn test_preview_publish_mixed_outcome() {
    let transport = RecordingTransport::with_responder(|request| {
        let failed = request.url.path().starts_with("/live/");
        Ok(AdminResponse {
            status: if failed { 403 } else { 200 },
            headers: vec![("x-error".to_owned(), "forbidden".to_owned())],
            body: Vec::new(),
        })
    });

    let result = call_preview_publish(&transport, &admin_config(), HttpMethod::Post, "/page")
        .await
        .expect("sequence should complete");

    assert_eq!(result.preview, CallStatus { status: 200, message: None });
    assert_eq!(result.live, CallStatus { status: 403, message: Some("forbidden".to_owned()) });
}

#[tokio::test]
async fn test_preview_publish_sends_token() {
    let transport = RecordingTransport::with_status(200, None);
    let config = AdminConfig { api_key: Some("secret".to_owned()), ..admin_config() };

    call_preview_publish(&transport, &config, HttpMethod::Post, "/page")
        .await
        .expect("sequence should complete");

    for request in transport.requests() {
        assert_eq!(header(request.headers.as_deref(), "authorization"), Some("token secret"));
        assert!(request.body.is_none());
    }
}

#[tokio::test]
async fn test_delete_without_api_key() {
    let transport = RecordingTransport::with_status(204, None);

    let result = call_preview_publish(&transport, &admin_config(), HttpMethod::Delete, "/page")
        .await
        .expect("sequence should complete");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.method == HttpMethod::Delete && r.headers.is_none()));

    let mut paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    paths.sort_unstable();
    assert_eq!(paths, ["/live/acme/shop/main/page", "/preview/acme/shop/main/page"]);

    assert_eq!(result.preview.status, 204);
    assert_eq!(result.live.status, 204);
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let transport = RecordingTransport::with_responder(|_| {
        Err(StorefrontError::TransportError("connection reset".to_owned()))
    });

    let result =
        call_preview_publish(&transport, &admin_config(), HttpMethod::Post, "/page").await;

    assert!(matches!(result, Err(StorefrontError::TransportError(_))));
}

#[tokio::test]
async fn test_publish_many_paths() {
    let transport = RecordingTransport::with_responder(|request| {
        let missing = request.url.path().ends_with("/gone");
        Ok(AdminResponse {
            status: if missing { 404 } else { 200 },
            headers: vec![("x-error".to_owned(), "Not found".to_owned())],
            body: Vec::new(),
        })
    });
    let paths: Vec<String> = ["/a", "/b", "/gone", "/c"].iter().map(|p| (*p).to_owned()).collect();

    let results = publish(&transport, &admin_config(), &paths, 3).await.expect("batch should complete");

    assert_eq!(results.len(), 4);
    assert_eq!(results["/a"].preview, CallStatus { status: 200, message: None });
    assert_eq!(results["/gone"].live.message.as_deref(), Some("Not found"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 8);
    for path in &paths {
        let position = |operation: &str| {
            let target = format!("/{operation}/acme/shop/main{path}");
            requests.iter().position(|r| r.url.path() == target).expect("call recorded")
        };
        assert!(position("preview") < position("live"), "preview must precede live for {path}");
    }
}

#[tokio::test]
async fn test_unpublish_uses_delete() {
    let transport = RecordingTransport::with_status(200, None);
    let paths = vec!["/a".to_owned(), "/b".to_owned()];

    let results = unpublish(&transport, &admin_config(), &paths, 2).await.expect("batch should complete");

    assert_eq!(results.keys().collect::<Vec<_>>(), ["/a", "/b"]);
    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|r| r.method == HttpMethod::Delete));
}

#[tokio::test]
async fn test_repeated_paths_run_once() {
    let transport = RecordingTransport::with_status(200, None);
    let paths: Vec<String> = ["/a", "/a", "/b"].iter().map(|p| (*p).to_owned()).collect();

    let results = publish(&transport, &admin_config(), &paths, 3).await.expect("batch should complete");

    assert_eq!(results.keys().collect::<Vec<_>>(), ["/a", "/b"]);
    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    let preview_a = requests.iter().filter(|r| r.url.path() == "/preview/acme/shop/main/a").count();
    assert_eq!(preview_a, 1);
}

#[tokio::test]
async fn test_zero_concurrency_still_runs() {
    let transport = RecordingTransport::with_status(200, None);
    let paths = vec!["/only".to_owned()];

    let results = preview_publish_paths(&transport, &admin_config(), HttpMethod::Post, &paths, 0)
        .await
        .expect("batch should complete");

    assert_eq!(results.len(), 1);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_empty_batch() {
    let transport = RecordingTransport::with_status(200, None);

    let results = publish(&transport, &admin_config(), &[], 4).await.expect("batch should complete");

    assert!(results.is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_missing_coordinates_degrade_url() {
    let transport = RecordingTransport::with_status(200, None);

    call_preview_publish(&transport, &AdminConfig::default(), HttpMethod::Post, "/page")
        .await
        .expect("sequence should complete");

    let urls: Vec<String> = transport.requests().iter().map(|r| r.url.to_string()).collect();
    assert_eq!(urls, ["https://admin.hlx.page/preview", "https://admin.hlx.page/live"]);
}
