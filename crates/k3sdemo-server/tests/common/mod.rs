//! Shared helpers for router tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt;

use k3sdemo_core::clock::ManualClock;
use k3sdemo_core::env::MapEnv;
use k3sdemo_server::{app_state::AppState, config::ServerConfig, router};

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap()
}

pub struct Harness {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new(env: MapEnv) -> Self {
        let clock = Arc::new(ManualClock::new(start()));
        let state = AppState::with_capabilities(ServerConfig::default(), clock.clone(), Arc::new(env));
        Self { state, clock }
    }

    pub fn router(&self) -> Router {
        router::build_router(self.state.clone())
    }

    pub async fn get(&self, path: &str) -> Response<Body> {
        self.send(Request::get(path).body(Body::empty()).unwrap()).await
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router().oneshot(req).await.unwrap()
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let res = self.get(path).await;
        assert_eq!(res.status(), 200, "GET {path}");
        serde_json::from_slice(&body_bytes(res).await).unwrap()
    }

    pub async fn get_text(&self, path: &str) -> String {
        let res = self.get(path).await;
        assert_eq!(res.status(), 200, "GET {path}");
        String::from_utf8(body_bytes(res).await).unwrap()
    }
}

pub async fn body_bytes(res: Response<Body>) -> Vec<u8> {
    to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()
}
