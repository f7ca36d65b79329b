//! Operational HTTP endpoints.
//!
//! - `/`        : pod identity + uptime + request count (increments the counter)
//! - `/health`  : liveness with uptime
//! - `/ready`   : readiness (always ready)
//! - `/metrics` : Prometheus text format
//!
//! Only `GET /` touches the request counter; `HEAD /`, probes, and scrapes are
//! not counted.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use k3sdemo_core::{clock, uptime};

use crate::{app_state::AppState, error::ApiError, obs};

pub const GREETING: &str = "Hello from K3s! 🚀";

#[derive(Debug, Serialize)]
pub struct RootStatus {
    pub message: &'static str,
    pub version: String,
    pub timestamp: String,
    pub hostname: String,
    pub replicas: String,
    pub deploy_count: String,
    pub environment: String,
    pub uptime: String,
    pub started_at: String,
    pub request_count: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub uptime: String,
}

pub async fn root(State(state): State<AppState>) -> Json<RootStatus> {
    let request_count = state.process().record_request();
    let id = state.identity();
    let now = state.now();

    tracing::debug!(request_count, "root status served");

    Json(RootStatus {
        message: GREETING,
        version: id.version,
        timestamp: clock::iso8601(now),
        hostname: id.hostname,
        replicas: id.replicas,
        deploy_count: id.deploy_count,
        environment: id.environment,
        uptime: uptime::format_elapsed(clock::elapsed_since(state.process().start_time(), now)),
        started_at: clock::iso8601(state.process().start_time()),
        request_count,
    })
}

pub async fn root_head() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")])
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        uptime: uptime::format_elapsed(state.elapsed()),
    })
}

pub async fn ready() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}

pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = obs::metrics::render(&state)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response())
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not_found" })))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({ "error": "method_not_allowed" })))
}
