//! Student response (safe to return to client)

use serde::Serialize;

use domain::{Student, UniqueEntityId};

#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: UniqueEntityId,
    pub name: String,
    pub email: String,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: *student.id(),
            name: student.name().to_string(),
            email: student.email().to_string(),
        }
    }
}
