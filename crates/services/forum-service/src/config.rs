//! Forum service configuration.

use common::{AppResult, HashingConfig, JwtConfig};

/// Forum service configuration.
#[derive(Debug, Clone, Default)]
pub struct ForumServiceConfig {
    pub hashing: HashingConfig,
    pub jwt: JwtConfig,
}

impl ForumServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            hashing: HashingConfig::from_env(),
            jwt: JwtConfig::from_env()?,
        })
    }
}
