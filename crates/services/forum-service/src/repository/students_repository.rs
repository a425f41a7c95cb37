//! Students repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::Student;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Students repository trait for dependency injection.
///
/// Only guarantees that a student passed to `create` is afterwards
/// returned by `find_by_email`. Email uniqueness under concurrent writes
/// must be enforced by the storage itself.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentsRepository: Send + Sync {
    /// Find student by email address. `Ok(None)` when absent.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;

    /// Persist a new student
    async fn create(&self, student: &Student) -> AppResult<()>;
}
