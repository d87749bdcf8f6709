// src/error.rs
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{response::{IntoResponse, Response}, Json};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    MalformedInput(String),
    NotFound(String),
    IdMismatch(String),
    Internal(String),
}

impl AppError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::MalformedInput(msg) => (StatusCode::BAD_REQUEST, "malformed_input", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            // Reported as 404 like any other unmatched target.
            AppError::IdMismatch(msg) => (StatusCode::NOT_FOUND, "id_mismatch", msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        if status.is_server_error() {
            error!(%status, code, error = %message, "request failed");
        } else {
            warn!(%status, code, error = %message, "request rejected");
        }

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::IdMismatch { .. } => AppError::IdMismatch(err.to_string()),
            StoreError::IdsExhausted(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::malformed(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::malformed(rejection.body_text())
    }
}

/// Failures before the server starts accepting requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("seed: {0}")]
    Seed(String),
    #[error("failed to bind to any port from {first} to {last} on {host}")]
    Bind { host: std::net::IpAddr, first: u16, last: u16 },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
