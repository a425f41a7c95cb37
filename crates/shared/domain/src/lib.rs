//! Domain layer - Core business abstractions, entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Use cases in the service crates build on the types exported here.

pub mod either;
pub mod entity;
pub mod error;
pub mod forum;
pub mod value_object;

pub use either::{left, right, Either};
pub use entity::{Entity, UniqueEntityId};
pub use error::{DomainError, DomainErrorKind};
pub use forum::{CommentWithAuthor, CommentWithAuthorProps, Student, StudentProps};
pub use value_object::ValueObject;
