//! Uniform error-to-status mapping for every route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cityscout_api::ApiError;
use cityscout_core::Error;
use serde_json::json;

/// Whatever a handler failed with, ready to be sent back
///
/// Upstream, store and shape failures are all a 500. Only an empty
/// geocoding answer is a 404.
#[derive(Debug)]
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match &self.0 {
            Error::Api(ApiError::RequestFailed { .. }) => "upstream_status",
            Error::Api(ApiError::NetworkError(_)) => "upstream_network",
            Error::Api(ApiError::ParseError(_)) => "upstream_shape",
            Error::Cache(_) | Error::CacheTask(_) => "cache",
            Error::NotFound(_) => "not_found",
            Error::Config(_) => "config",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!("Request failed ({}): {}", status, self.0);

        let mut body = json!({
            "error": self.kind(),
            "message": self.0.to_string(),
        });

        // Pass the upstream's own answer through, it usually says what went wrong
        if let Error::Api(ApiError::RequestFailed {
            status: upstream_status,
            body: upstream_body,
        }) = &self.0
        {
            body["status"] = json!(upstream_status);
            body["body"] = json!(upstream_body);
        }

        (status, Json(body)).into_response()
    }
}
