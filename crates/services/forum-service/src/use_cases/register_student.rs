//! Register student use case.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use common::AppResult;
use domain::{left, right, Either, Student, StudentProps};

use super::errors::StudentAlreadyExistsError;
use super::UseCase;
use crate::cryptography::HashGenerator;
use crate::repository::StudentsRepository;

/// Registration input
#[derive(Clone, Deserialize)]
pub struct RegisterStudentRequest {
    pub name: String,
    pub email: String,
    /// Plain text password, hashed before anything is stored
    pub password: String,
}

// Don't expose plain text password in debug output (security)
impl std::fmt::Debug for RegisterStudentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterStudentRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct RegisterStudentResponse {
    pub student: Student,
}

/// Registers a new student with a unique email.
pub struct RegisterStudentUseCase {
    students_repository: Arc<dyn StudentsRepository>,
    hash_generator: Arc<dyn HashGenerator>,
}

impl RegisterStudentUseCase {
    pub fn new(
        students_repository: Arc<dyn StudentsRepository>,
        hash_generator: Arc<dyn HashGenerator>,
    ) -> Self {
        Self {
            students_repository,
            hash_generator,
        }
    }
}

#[async_trait]
impl UseCase for RegisterStudentUseCase {
    type Request = RegisterStudentRequest;
    type Response = RegisterStudentResponse;
    type Error = StudentAlreadyExistsError;

    /// Look up the email, hash the password, persist the student.
    ///
    /// The lookup is advisory: two concurrent registrations for one email
    /// can both pass it, and only a storage-level unique constraint
    /// rejects the second write (surfacing as `Err`).
    async fn execute(
        &self,
        request: Self::Request,
    ) -> AppResult<Either<Self::Error, Self::Response>> {
        let RegisterStudentRequest {
            name,
            email,
            password,
        } = request;

        if self
            .students_repository
            .find_by_email(&email)
            .await?
            .is_some()
        {
            debug!(%email, "Registration rejected, email already taken");
            return Ok(left(StudentAlreadyExistsError::new(email)));
        }

        let hashed_password = self.hash_generator.hash(&password).await?;

        let student = Student::create(
            StudentProps {
                name,
                email,
                password: hashed_password,
            },
            None,
        );

        self.students_repository.create(&student).await?;

        info!(student_id = %student.id(), "Student registered");
        Ok(right(RegisterStudentResponse { student }))
    }
}
