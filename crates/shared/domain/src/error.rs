//! Domain-level errors.
//!
//! These errors represent business rule violations that a use case returns
//! as data. They are independent of infrastructure concerns (HTTP, database,
//! hashing) and are never used for faults.

use std::fmt;

/// Category of a business rule violation.
///
/// Presentation layers map on this tag, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    /// Entity already exists (conflict)
    Conflict,
    /// Entity not found
    NotFound,
    /// Action not allowed for the caller
    NotAllowed,
    /// Invalid credentials provided
    InvalidCredentials,
}

impl DomainErrorKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DomainErrorKind::Conflict => "CONFLICT",
            DomainErrorKind::NotFound => "NOT_FOUND",
            DomainErrorKind::NotAllowed => "NOT_ALLOWED",
            DomainErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
        }
    }
}

impl fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Capability required of every use-case failure payload.
pub trait DomainError: std::error::Error + Send + Sync + 'static {
    /// Category used to pick a user-facing response.
    fn kind(&self) -> DomainErrorKind;

    /// Human-readable message.
    fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("Resource not found.")]
    struct Missing;

    impl DomainError for Missing {
        fn kind(&self) -> DomainErrorKind {
            DomainErrorKind::NotFound
        }
    }

    #[test]
    fn test_message_defaults_to_display() {
        let err = Missing;
        assert_eq!(err.message(), "Resource not found.");
        assert_eq!(err.kind(), DomainErrorKind::NotFound);
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(DomainErrorKind::Conflict.code(), "CONFLICT");
        assert_eq!(DomainErrorKind::InvalidCredentials.to_string(), "INVALID_CREDENTIALS");
    }

    #[test]
    fn test_usable_as_trait_object() {
        let boxed: Box<dyn DomainError> = Box::new(Missing);
        assert_eq!(boxed.kind(), DomainErrorKind::NotFound);
    }
}
