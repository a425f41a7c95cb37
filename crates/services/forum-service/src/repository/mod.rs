//! Repository contracts consumed by use cases.

mod students_repository;

pub use students_repository::StudentsRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use students_repository::MockStudentsRepository;
