//! Use cases - one business operation each.
//!
//! Every `execute` returns `AppResult<Either<_, _>>`: the outer `Err`
//! is an infrastructure fault propagated untouched, `Left` is an
//! expected domain failure, `Right` is the success payload.

use async_trait::async_trait;

use common::AppResult;
use domain::{DomainError, Either};

mod authenticate_student;
pub mod errors;
mod register_student;

pub use authenticate_student::{
    AuthenticateStudentRequest, AuthenticateStudentResponse, AuthenticateStudentUseCase,
};
pub use errors::{StudentAlreadyExistsError, WrongCredentialsError};
pub use register_student::{RegisterStudentRequest, RegisterStudentResponse, RegisterStudentUseCase};

/// One business operation with an explicit failure arm.
///
/// `Error` must be a [`DomainError`], so every `Left` a caller receives
/// carries a kind a presentation layer can map.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Request: Send + 'static;
    type Response: Send;
    type Error: DomainError;

    async fn execute(
        &self,
        request: Self::Request,
    ) -> AppResult<Either<Self::Error, Self::Response>>;
}
