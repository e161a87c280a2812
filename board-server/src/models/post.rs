//! Post entity, write drafts and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::error::BoardError;

/// A persisted board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Post fields as bound from a JSON or form body.
///
/// Every field is optional here so that a missing field is reported as a
/// [`ValidationError`] instead of a body rejection. Any `id` in the body is
/// ignored; the path decides which post an update targets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "contents")]
    pub content: Option<String>,
    #[serde(default, alias = "author")]
    pub writer: Option<String>,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            writer: Some(writer.into()),
        }
    }

    /// Check required fields, in declaration order.
    pub fn validate(self) -> Result<NewPost, ValidationError> {
        Ok(NewPost {
            title: required("title", self.title)?,
            content: required("content", self.content)?,
            writer: required("writer", self.writer)?,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::Empty { field }),
    }
}

/// A draft with every required field present. Only these reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub writer: String,
}

/// Validated post identifier (positive integer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(i64);

impl PostId {
    pub fn new(raw: i64) -> Result<Self, BoardError> {
        if raw <= 0 {
            return Err(BoardError::InvalidArgument {
                value: raw.to_string(),
                reason: "must be a positive integer",
            });
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_validates() {
        let post = PostDraft::new("hello", "world", "alice").validate().unwrap();
        assert_eq!(post.title, "hello");
        assert_eq!(post.content, "world");
        assert_eq!(post.writer, "alice");
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = PostDraft::new("   ", "world", "alice").validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn missing_writer_is_rejected() {
        let draft = PostDraft {
            writer: None,
            ..PostDraft::new("hello", "world", "")
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "writer" });
    }

    #[test]
    fn author_alias_binds_writer() {
        let draft: PostDraft =
            serde_json::from_str(r#"{"title":"t","content":"c","author":"alice"}"#).unwrap();
        assert_eq!(draft.writer.as_deref(), Some("alice"));
    }

    #[test]
    fn body_id_is_ignored() {
        let draft: PostDraft =
            serde_json::from_str(r#"{"id":99,"title":"t","content":"c","writer":"w"}"#).unwrap();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn post_serializes_camel_case() {
        let post = Post {
            id: 1,
            title: "t".into(),
            content: "c".into(),
            writer: "w".into(),
            view_count: 3,
            created_at: Utc::now(),
            updated_at: None,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["viewCount"], 3);
        assert!(json.get("createdAt").is_some());
        assert!(json["updatedAt"].is_null());
    }

    #[test]
    fn post_id_must_be_positive() {
        assert_eq!(PostId::new(7).unwrap().get(), 7);
        assert!(matches!(
            PostId::new(0),
            Err(BoardError::InvalidArgument { .. })
        ));
        assert!(matches!(
            PostId::new(-3),
            Err(BoardError::InvalidArgument { .. })
        ));
    }
}
