//! Student domain entity.

use std::fmt;

use crate::entity::{Entity, UniqueEntityId};

/// Student properties. `password` always holds a hash, never plain text.
#[derive(Clone)]
pub struct StudentProps {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Don't expose hash in debug output (security)
impl fmt::Debug for StudentProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudentProps")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student(Entity<StudentProps>);

impl Student {
    /// Create a student, generating an id when none is supplied.
    pub fn create(props: StudentProps, id: Option<UniqueEntityId>) -> Self {
        Self(Entity::create(props, id))
    }

    pub fn id(&self) -> &UniqueEntityId {
        self.0.id()
    }

    pub fn name(&self) -> &str {
        &self.0.props().name
    }

    pub fn email(&self) -> &str {
        &self.0.props().email
    }

    /// Stored password hash
    pub fn password(&self) -> &str {
        &self.0.props().password
    }

    /// Update student's display name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.0.props_mut().name = name.into();
    }
}
