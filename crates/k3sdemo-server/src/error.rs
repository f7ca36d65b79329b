//! HTTP mapping for `StatusError`.
//!
//! No handler has a documented failure path, so every error that reaches the
//! HTTP layer is reported as a generic 500 with a minimal JSON body. Panics
//! caught by the router's `CatchPanicLayer` get the same response.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use k3sdemo_core::error::{ClientCode, StatusError};

/// Handler error wrapper so core errors can become HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub StatusError);

impl From<StatusError> for ApiError {
    fn from(e: StatusError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, code = self.0.client_code().as_str(), "request failed");
        internal_error()
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "internal_error" }))).into_response()
}

/// Response for a panic caught while serving a request.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, code = ClientCode::Internal.as_str(), "handler panicked");
    internal_error()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::{body::to_bytes, http::header};

    async fn assert_internal_error(res: Response) {
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"internal_error"}"#);
    }

    #[tokio::test]
    async fn internal_error_is_generic_500() {
        let res = ApiError(StatusError::Internal("clock exploded".into())).into_response();
        assert_internal_error(res).await;
    }

    #[tokio::test]
    async fn status_error_converts_through_question_mark() {
        fn fails() -> Result<(), ApiError> {
            Err::<(), _>(StatusError::from(std::fmt::Error))?;
            Ok(())
        }
        assert_internal_error(fails().unwrap_err().into_response()).await;
    }

    #[tokio::test]
    async fn panic_payloads_map_to_generic_500() {
        assert_internal_error(panic_response(Box::new("static str"))).await;
        assert_internal_error(panic_response(Box::new(String::from("owned")))).await;
        assert_internal_error(panic_response(Box::new(42_u8))).await;
    }
}
