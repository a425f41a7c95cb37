//! Register student use case tests.

use std::sync::Arc;

use mockall::{predicate::eq, Sequence};
use tokio_test::assert_ok;

use common::AppError;
use domain::{DomainError, DomainErrorKind, Either, Student, StudentProps, UniqueEntityId};
use forum_service_lib::cryptography::MockHashGenerator;
use forum_service_lib::repository::MockStudentsRepository;
use forum_service_lib::use_cases::{RegisterStudentRequest, RegisterStudentUseCase, UseCase};

fn request() -> RegisterStudentRequest {
    RegisterStudentRequest {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        password: "p@ss".to_string(),
    }
}

fn existing_student() -> Student {
    Student::create(
        StudentProps {
            name: "Someone Else".to_string(),
            email: "ana@x.com".to_string(),
            password: "stored-hash".to_string(),
        },
        Some(UniqueEntityId::new()),
    )
}

#[tokio::test]
async fn test_register_student_success() {
    let mut seq = Sequence::new();

    let mut repo = MockStudentsRepository::new();
    let mut hasher = MockHashGenerator::new();

    repo.expect_find_by_email()
        .with(eq("ana@x.com"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(None));
    hasher
        .expect_hash()
        .with(eq("p@ss"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|plain| Ok(format!("{}-hashed", plain)));
    repo.expect_create()
        .withf(|student: &Student| {
            student.name() == "Ana"
                && student.email() == "ana@x.com"
                && student.password() == "p@ss-hashed"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let use_case = RegisterStudentUseCase::new(Arc::new(repo), Arc::new(hasher));
    let outcome = assert_ok!(use_case.execute(request()).await);

    assert!(outcome.is_right());
    let student = outcome.unwrap_right().student;
    assert_eq!(student.email(), "ana@x.com");
    assert_ne!(student.password(), "p@ss");
    assert!(!student.id().to_string().is_empty());
}

#[tokio::test]
async fn test_register_student_email_taken() {
    let mut repo = MockStudentsRepository::new();
    repo.expect_find_by_email()
        .returning(|_| Ok(Some(existing_student())));
    repo.expect_create().never();

    let mut hasher = MockHashGenerator::new();
    hasher.expect_hash().never();

    let use_case = RegisterStudentUseCase::new(Arc::new(repo), Arc::new(hasher));
    let outcome = assert_ok!(use_case.execute(request()).await);

    assert!(outcome.is_left());
    let err = outcome.unwrap_left();
    assert_eq!(err.kind(), DomainErrorKind::Conflict);
    assert_eq!(err.message(), "Student \"ana@x.com\" already exists.");
}

#[tokio::test]
async fn test_register_student_lookup_fault_propagates() {
    let mut repo = MockStudentsRepository::new();
    repo.expect_find_by_email()
        .returning(|_| Err(AppError::persistence("connection refused")));
    repo.expect_create().never();

    let mut hasher = MockHashGenerator::new();
    hasher.expect_hash().never();

    let use_case = RegisterStudentUseCase::new(Arc::new(repo), Arc::new(hasher));
    let result = use_case.execute(request()).await;

    assert!(matches!(result, Err(AppError::Persistence(_))));
}

#[tokio::test]
async fn test_register_student_hash_fault_skips_write() {
    let mut repo = MockStudentsRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create().never();

    let mut hasher = MockHashGenerator::new();
    hasher
        .expect_hash()
        .times(1)
        .returning(|_| Err(AppError::hashing("out of memory")));

    let use_case = RegisterStudentUseCase::new(Arc::new(repo), Arc::new(hasher));
    let result = use_case.execute(request()).await;

    assert!(matches!(result, Err(AppError::Hashing(_))));
}

#[tokio::test]
async fn test_register_student_write_fault_is_not_a_domain_failure() {
    let mut repo = MockStudentsRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .times(1)
        .returning(|_| Err(AppError::persistence("unique violation")));

    let mut hasher = MockHashGenerator::new();
    hasher.expect_hash().returning(|_| Ok("hashed".to_string()));

    let use_case = RegisterStudentUseCase::new(Arc::new(repo), Arc::new(hasher));
    let result = use_case.execute(request()).await;

    let err = result.unwrap_err();
    assert!(!err.is_domain());
    assert!(matches!(err, AppError::Persistence(_)));
}

/// Works for any use case because its failure arm is bound to `DomainError`.
async fn failure_kind<U: UseCase>(use_case: &U, request: U::Request) -> Option<DomainErrorKind> {
    match use_case.execute(request).await.ok()? {
        Either::Left(err) => Some(err.kind()),
        Either::Right(_) => None,
    }
}

#[tokio::test]
async fn test_register_student_failure_kind_is_generic() {
    let mut repo = MockStudentsRepository::new();
    repo.expect_find_by_email()
        .returning(|_| Ok(Some(existing_student())));

    let use_case = RegisterStudentUseCase::new(Arc::new(repo), Arc::new(MockHashGenerator::new()));

    assert_eq!(
        failure_kind(&use_case, request()).await,
        Some(DomainErrorKind::Conflict)
    );
}
