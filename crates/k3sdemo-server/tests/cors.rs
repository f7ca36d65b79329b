#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request},
};

use common::Harness;
use k3sdemo_core::env::MapEnv;

const ORIGIN: &str = "https://dashboard.example";

#[tokio::test]
async fn simple_requests_echo_origin_with_credentials() {
    let h = Harness::new(MapEnv::new());
    for path in ["/", "/health", "/ready", "/metrics", "/missing"] {
        let req = Request::get(path).header(header::ORIGIN, ORIGIN).body(Body::empty()).unwrap();
        let res = h.send(req).await;
        let headers = res.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN, "{path}");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true", "{path}");
    }
}

#[tokio::test]
async fn preflight_allows_any_method_and_headers() {
    let h = Harness::new(MapEnv::new());
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
        .body(Body::empty())
        .unwrap();
    let res = h.send(req).await;

    assert!(res.status().is_success());
    let headers = res.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "DELETE");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-custom-header");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn preflight_does_not_count_as_root_request() {
    let h = Harness::new(MapEnv::new());
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    h.send(req).await;
    assert_eq!(h.state.process().request_count(), 0);
}
