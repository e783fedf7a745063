//! Mapping of failures onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pizzadronz_core::{CoordinateError, DeliveryError, PlanError, ProviderError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request; never reaches validation or planning.
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Coordinates(#[from] CoordinateError),
    /// The data feed could not be read.
    #[error(transparent)]
    Feed(#[from] ProviderError),
    /// Airspace data admits no legal path.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Coordinates(_) => StatusCode::BAD_REQUEST,
            Self::Feed(_) => StatusCode::BAD_GATEWAY,
            Self::Plan(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DeliveryError> for ApiError {
    fn from(err: DeliveryError) -> Self {
        match err {
            DeliveryError::Provider(err) => Self::Feed(err),
            DeliveryError::Plan(err) => Self::Plan(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, message);
        } else {
            tracing::warn!("Rejected request: {}", message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
