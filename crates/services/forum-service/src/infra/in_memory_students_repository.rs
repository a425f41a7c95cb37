//! Process-local students repository.
//!
//! Keyed by email, so a second `create` for the same email fails like a
//! unique constraint would.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::Student;

use crate::repository::StudentsRepository;

#[derive(Debug, Default)]
pub struct InMemoryStudentsRepository {
    items: RwLock<HashMap<String, Student>>,
}

impl InMemoryStudentsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored students
    pub async fn all(&self) -> Vec<Student> {
        self.items.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl StudentsRepository for InMemoryStudentsRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        Ok(self.items.read().await.get(email).cloned())
    }

    async fn create(&self, student: &Student) -> AppResult<()> {
        let mut items = self.items.write().await;
        if items.contains_key(student.email()) {
            return Err(AppError::persistence(format!(
                "unique violation on students.email for {}",
                student.email()
            )));
        }

        items.insert(student.email().to_string(), student.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::StudentProps;

    fn student(email: &str) -> Student {
        Student::create(
            StudentProps {
                name: "Ana".to_string(),
                email: email.to_string(),
                password: "hashed".to_string(),
            },
            None,
        )
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryStudentsRepository::new();
        let ana = student("ana@x.com");

        assert!(repo.find_by_email("ana@x.com").await.unwrap().is_none());
        repo.create(&ana).await.unwrap();

        let found = repo.find_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(found, ana);
        assert_eq!(repo.all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryStudentsRepository::new();
        repo.create(&student("ana@x.com")).await.unwrap();

        let result = repo.create(&student("ana@x.com")).await;
        assert!(matches!(result, Err(AppError::Persistence(_))));
        assert_eq!(repo.all().await.len(), 1);
    }
}
