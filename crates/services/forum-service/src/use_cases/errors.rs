//! Domain errors returned by forum use cases.

use thiserror::Error;

use domain::{DomainError, DomainErrorKind};

/// A student with the given identifier is already registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Student \"{identifier}\" already exists.")]
pub struct StudentAlreadyExistsError {
    identifier: String,
}

impl StudentAlreadyExistsError {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl DomainError for StudentAlreadyExistsError {
    fn kind(&self) -> DomainErrorKind {
        DomainErrorKind::Conflict
    }
}

/// Email unknown or password mismatch. Deliberately does not say which.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Credentials are not valid.")]
pub struct WrongCredentialsError;

impl DomainError for WrongCredentialsError {
    fn kind(&self) -> DomainErrorKind {
        DomainErrorKind::InvalidCredentials
    }
}
