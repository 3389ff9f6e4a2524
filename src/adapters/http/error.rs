//! Shared error envelope for the HTTP surface.
//!
//! Every failed request answers with the same single-field JSON body:
//!
//! ```text
//! { "message": "..." }
//! ```
//!
//! Messages are the short, user-facing ones the domain errors carry.
//! Backend detail (connection strings, SQL errors, upstream bodies) goes
//! to the logs at the point of mapping, never to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::{AdapterError, AuthError, StoreError};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// An HTTP-level failure: a status code plus a client-safe message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<AdapterError> for ApiError {
    fn from(error: AdapterError) -> Self {
        let status = StatusCode::from_u16(error.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::AlreadyExists => Self::conflict(error.to_string()),
            StoreError::NotFound => Self::not_found(error.to_string()),
            StoreError::Backend(detail) => {
                tracing::error!("Record store failure: {}", detail);
                Self::internal("An internal server error occurred.")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match &error {
            AuthError::InvalidCredentials | AuthError::InvalidToken => {
                Self::unauthorized(error.to_string())
            }
            AuthError::AlreadyRegistered => Self::conflict(error.to_string()),
            AuthError::ServiceUnavailable(detail) => {
                tracing::error!("Identity backend failure: {}", detail);
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Authentication service unavailable.",
                )
            }
        }
    }
}
