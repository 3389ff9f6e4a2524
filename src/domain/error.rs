//! The error taxonomy shared by every upstream adapter.
//!
//! Each variant pins down one failure class from the dashboard's
//! perspective, so callers can tell "the upstream is down" apart from
//! "the upstream changed its contract" without parsing message text.
//! The HTTP layer maps `status()` onto the response code; messages are
//! short and user-facing, never stack traces.

use thiserror::Error;

/// Failure of a single upstream adapter invocation.
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    /// Input rejected before any network call was attempted.
    #[error("{0}")]
    Validation(String),

    /// Network failure or a non-2xx upstream response.
    #[error("{message}")]
    Transport {
        /// Status to surface: the upstream's own code, or 502 when the
        /// request never produced one.
        status: u16,
        message: String,
    },

    /// A 2xx response whose body does not match the expected contract.
    #[error("{message}")]
    Shape {
        /// Which validation stage failed ("parse" or "missing-field").
        stage: &'static str,
        message: String,
    },

    /// The XML envelope did not yield a JSON payload.
    #[error("{0}")]
    Extraction(String),

    /// The GraphQL response body carried an `errors` array.
    #[error("{message}")]
    Graphql { message: String },

    /// Upstream answered but has no data for the requested subject.
    #[error("{0}")]
    NotFound(String),
}

impl AdapterError {
    /// Creates a validation error (rejected before any network call).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a transport error carrying the upstream's status code.
    pub fn transport(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    /// Creates a transport error for a request that never reached the
    /// upstream (connect failure, timeout). Surfaces as 502.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Transport {
            status: 502,
            message: message.into(),
        }
    }

    /// Creates a shape error for a body that failed to parse.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Shape {
            stage: "parse",
            message: message.into(),
        }
    }

    /// Creates a shape error for a parsed body missing a required field.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::Shape {
            stage: "missing-field",
            message: message.into(),
        }
    }

    /// Creates an extraction error.
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }

    /// Creates a GraphQL-level error.
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::Graphql {
            message: message.into(),
        }
    }

    /// Creates a no-data error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// The HTTP status this failure surfaces as.
    pub fn status(&self) -> u16 {
        match self {
            AdapterError::Validation(_) => 400,
            AdapterError::Transport { status, .. } => *status,
            AdapterError::Shape { .. } => 500,
            AdapterError::Extraction(_) => 500,
            AdapterError::Graphql { .. } => 502,
            AdapterError::NotFound(_) => 404,
        }
    }

    /// Which pipeline stage produced the failure, for logs and tests.
    pub fn stage(&self) -> &'static str {
        match self {
            AdapterError::Validation(_) => "validation",
            AdapterError::Transport { .. } => "transport",
            AdapterError::Shape { stage, .. } => stage,
            AdapterError::Extraction(_) => "extraction",
            AdapterError::Graphql { .. } => "graphql",
            AdapterError::NotFound(_) => "no-data",
        }
    }
}
