//! Comment joined with a snapshot of its author's display name.
//!
//! Read-side projection: `comment_id` identifies the underlying comment,
//! not this value.

use chrono::{DateTime, Utc};

use crate::entity::UniqueEntityId;
use crate::value_object::ValueObject;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentWithAuthorProps {
    pub comment_id: UniqueEntityId,
    pub content: String,
    pub author_id: UniqueEntityId,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// None = never edited
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentWithAuthor(ValueObject<CommentWithAuthorProps>);

impl CommentWithAuthor {
    pub fn create(props: CommentWithAuthorProps) -> Self {
        Self(ValueObject::create(props))
    }

    pub fn comment_id(&self) -> &UniqueEntityId {
        &self.0.props().comment_id
    }

    pub fn content(&self) -> &str {
        &self.0.props().content
    }

    pub fn author_id(&self) -> &UniqueEntityId {
        &self.0.props().author_id
    }

    pub fn author(&self) -> &str {
        &self.0.props().author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.0.props().created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.0.props().updated_at
    }
}
