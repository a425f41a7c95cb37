//! Argon2id password hashing.
//!
//! Implements both `HashGenerator` and `HashComparer` so that hashing and
//! verification share one parameter set.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use common::{AppError, AppResult, HashingConfig};

use crate::cryptography::{HashComparer, HashGenerator};

#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Hasher").finish_non_exhaustive()
    }
}

impl Argon2Hasher {
    /// Build a hasher from configuration.
    ///
    /// # Errors
    /// Returns a hashing error if the parameters are out of Argon2's range.
    pub fn new(config: &HashingConfig) -> AppResult<Self> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

#[async_trait]
impl HashGenerator for Argon2Hasher {
    async fn hash(&self, plain: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let plain = plain.to_owned();

        // Argon2 is CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(plain.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AppError::hashing(format!("Password hash failed: {}", e)))
        })
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }
}

#[async_trait]
impl HashComparer for Argon2Hasher {
    async fn compare(&self, plain: &str, hash: &str) -> AppResult<bool> {
        let argon2 = self.argon2.clone();
        let plain = plain.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || -> AppResult<bool> {
            let parsed = PasswordHash::new(&hash)
                .map_err(|e| AppError::hashing(format!("Invalid hash format: {}", e)))?;
            Ok(argon2.verify_password(plain.as_bytes(), &parsed).is_ok())
        })
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }
}
