//! Shared configuration structures.
//!
//! Values are read from environment variables with development defaults.

use std::env;

use crate::error::{AppError, AppResult};

/// Default Argon2 memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;

/// Default Argon2 iteration count
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Default Argon2 lanes
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Password hashing (Argon2id) configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl HashingConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            memory_kib: env_parse("HASH_MEMORY_KIB").unwrap_or(DEFAULT_HASH_MEMORY_KIB),
            iterations: env_parse("HASH_ITERATIONS").unwrap_or(DEFAULT_HASH_ITERATIONS),
            parallelism: env_parse("HASH_PARALLELISM").unwrap_or(DEFAULT_HASH_PARALLELISM),
        }
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

/// JWT configuration for access tokens.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl JwtConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns a configuration error if `JWT_SECRET` is shorter than
    /// [`MIN_JWT_SECRET_LENGTH`].
    pub fn from_env() -> AppResult<Self> {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using insecure default for development");
            DEV_JWT_SECRET.to_string()
        });

        let config = Self {
            secret,
            expiration_hours: env_parse("JWT_EXPIRATION_HOURS")
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject secrets too short to sign HS256 tokens safely.
    pub fn validate(&self) -> AppResult<()> {
        if self.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        Ok(())
    }

    /// Token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.expiration_hours * SECONDS_PER_HOUR
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEV_JWT_SECRET.to_string(),
            expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
