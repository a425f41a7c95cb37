//! HS256 access tokens via `jsonwebtoken`.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppResult, JwtConfig};
use domain::UniqueEntityId;

use crate::cryptography::Encrypter;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Clone)]
pub struct JwtEncrypter {
    config: JwtConfig,
}

impl JwtEncrypter {
    /// # Errors
    /// Returns a configuration error if the secret is too short.
    pub fn new(config: JwtConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn secret_bytes(&self) -> &[u8] {
        self.config.secret.as_bytes()
    }

    /// Verify a token issued by this encrypter and return its claims.
    pub fn verify(&self, token: &str) -> AppResult<AccessClaims> {
        let token_data = decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl Encrypter for JwtEncrypter {
    async fn encrypt(&self, subject: &UniqueEntityId) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.expiration_hours);

        let claims = AccessClaims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_bytes()),
        )?;

        Ok(token)
    }
}
