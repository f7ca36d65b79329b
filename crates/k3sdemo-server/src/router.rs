//! Axum router wiring.
//!
//! Every route, including the fallbacks, sits behind the panic guard, CORS,
//! and request tracing layers.

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{app_state::AppState, error, ops};

/// Any origin, method, and header, with credentials. A literal `*` is not
/// valid alongside credentials, so the request's values are mirrored back.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // HEAD is answered without touching the request counter.
        .route(
            "/",
            get(ops::root).head(ops::root_head).fallback(ops::method_not_allowed),
        )
        .route("/health", get(ops::health).fallback(ops::method_not_allowed))
        .route("/ready", get(ops::ready).fallback(ops::method_not_allowed))
        .route("/metrics", get(ops::metrics).fallback(ops::method_not_allowed))
        .fallback(ops::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
