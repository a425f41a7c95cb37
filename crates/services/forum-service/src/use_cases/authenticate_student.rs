//! Authenticate student use case.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use common::AppResult;
use domain::{left, right, Either};

use super::errors::WrongCredentialsError;
use super::UseCase;
use crate::cryptography::{Encrypter, HashComparer};
use crate::repository::StudentsRepository;

#[derive(Clone, Deserialize)]
pub struct AuthenticateStudentRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AuthenticateStudentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateStudentRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AuthenticateStudentResponse {
    pub access_token: String,
}

/// Exchanges student credentials for an access token.
pub struct AuthenticateStudentUseCase {
    students_repository: Arc<dyn StudentsRepository>,
    hash_comparer: Arc<dyn HashComparer>,
    encrypter: Arc<dyn Encrypter>,
}

impl AuthenticateStudentUseCase {
    pub fn new(
        students_repository: Arc<dyn StudentsRepository>,
        hash_comparer: Arc<dyn HashComparer>,
        encrypter: Arc<dyn Encrypter>,
    ) -> Self {
        Self {
            students_repository,
            hash_comparer,
            encrypter,
        }
    }
}

#[async_trait]
impl UseCase for AuthenticateStudentUseCase {
    type Request = AuthenticateStudentRequest;
    type Response = AuthenticateStudentResponse;
    type Error = WrongCredentialsError;

    async fn execute(
        &self,
        request: Self::Request,
    ) -> AppResult<Either<Self::Error, Self::Response>> {
        let Some(student) = self
            .students_repository
            .find_by_email(&request.email)
            .await?
        else {
            debug!(email = %request.email, "Authentication failed, unknown email");
            return Ok(left(WrongCredentialsError));
        };

        let password_valid = self
            .hash_comparer
            .compare(&request.password, student.password())
            .await?;

        if !password_valid {
            debug!(student_id = %student.id(), "Authentication failed, password mismatch");
            return Ok(left(WrongCredentialsError));
        }

        let access_token = self.encrypter.encrypt(student.id()).await?;

        info!(student_id = %student.id(), "Student authenticated");
        Ok(right(AuthenticateStudentResponse { access_token }))
    }
}
