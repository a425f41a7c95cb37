use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::{CommentWithAuthor, UniqueEntityId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthorResponse {
    pub comment_id: UniqueEntityId,
    pub content: String,
    pub author_id: UniqueEntityId,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&CommentWithAuthor> for CommentWithAuthorResponse {
    fn from(comment: &CommentWithAuthor) -> Self {
        Self {
            comment_id: *comment.comment_id(),
            content: comment.content().to_string(),
            author_id: *comment.author_id(),
            author_name: comment.author().to_string(),
            created_at: comment.created_at(),
            updated_at: comment.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain::CommentWithAuthorProps;

    fn comment(updated_at: Option<DateTime<Utc>>) -> CommentWithAuthor {
        CommentWithAuthor::create(CommentWithAuthorProps {
            comment_id: UniqueEntityId::new(),
            content: "Nice answer".to_string(),
            author_id: UniqueEntityId::new(),
            author: "Ana".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            updated_at,
        })
    }

    #[test]
    fn test_camel_case_fields() {
        let view = comment(None);
        let json = serde_json::to_value(CommentWithAuthorResponse::from(&view)).unwrap();

        assert_eq!(json["commentId"], view.comment_id().to_string());
        assert_eq!(json["authorName"], "Ana");
        assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_updated_at_present_when_edited() {
        let edited = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        let json =
            serde_json::to_value(CommentWithAuthorResponse::from(&comment(Some(edited)))).unwrap();

        assert_eq!(json["updatedAt"], "2024-01-03T00:00:00Z");
    }
}
