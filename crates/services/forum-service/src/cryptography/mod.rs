//! Cryptography contracts consumed by use cases.
//!
//! Algorithms, salts and key material live in the implementations
//! (see `infra`).

use async_trait::async_trait;

use common::AppResult;
use domain::UniqueEntityId;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Turns a plain text secret into a storable hash.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HashGenerator: Send + Sync {
    async fn hash(&self, plain: &str) -> AppResult<String>;
}

/// Checks a plain text secret against a stored hash.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HashComparer: Send + Sync {
    async fn compare(&self, plain: &str, hash: &str) -> AppResult<bool>;
}

/// Issues a signed access token for a subject.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, subject: &UniqueEntityId) -> AppResult<String>;
}
