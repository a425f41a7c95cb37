//! Forum bounded context: students and comment projections.

pub mod comment_with_author;
pub mod student;

pub use comment_with_author::{CommentWithAuthor, CommentWithAuthorProps};
pub use student::{Student, StudentProps};
