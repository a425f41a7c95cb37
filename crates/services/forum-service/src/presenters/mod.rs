//! JSON views of domain objects for outer layers.

mod comment_with_author_presenter;
mod student_presenter;

pub use comment_with_author_presenter::CommentWithAuthorResponse;
pub use student_presenter::StudentResponse;
