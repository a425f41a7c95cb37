//! Unified error handling.
//!
//! `AppError` carries infrastructure faults raised by collaborators
//! (hashing, token signing, persistence). Expected business failures are
//! returned by use cases as `Either::Left` and only enter this type at the
//! presentation edge through [`AppError::domain`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, DomainErrorKind};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Business rule violation surfaced at the edge
    #[error("{message}")]
    Domain {
        kind: DomainErrorKind,
        message: String,
    },

    // Collaborator faults
    #[error("Hashing error: {0}")]
    Hashing(String),

    #[error("Token error")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Carry a domain error to the presentation layer.
    pub fn domain<E: DomainError + ?Sized>(err: &E) -> Self {
        AppError::Domain {
            kind: err.kind(),
            message: err.message(),
        }
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain { kind, .. } => kind.code(),
            AppError::Hashing(_) => "HASHING_ERROR",
            AppError::Token(_) => "TOKEN_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain { kind, .. } => match kind {
                DomainErrorKind::Conflict => StatusCode::CONFLICT,
                DomainErrorKind::NotFound => StatusCode::NOT_FOUND,
                DomainErrorKind::NotAllowed => StatusCode::FORBIDDEN,
                DomainErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Domain { message, .. } => message.clone(),
            AppError::Hashing(msg) => {
                tracing::error!("Hashing error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Token(e) => {
                tracing::error!("Token error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Persistence(msg) => {
                tracing::error!("Persistence error: {}", msg);
                "A database error occurred".to_string()
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// True for business failures, false for infrastructure faults.
    pub fn is_domain(&self) -> bool {
        matches!(self, AppError::Domain { .. })
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::Hashing(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
