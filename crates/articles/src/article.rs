//! The article wire model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use newsroom_core::{ArticleId, UserId};

use crate::workflow::ArticleStatus;

/// Abbreviated user reference embedded in article responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
}

/// An article as delivered by the API.
///
/// The authoritative copy lives server-side; instances here are ephemeral
/// read copies, fully replaced on each refetch.
///
/// # Invariants (server-maintained, mirrored here)
/// - `editor_comment` is present only when status = Rejected.
/// - `approved_by` is present only when status = Approved.
/// - `assigned_editor` is set before status can become Submitted.
/// - `author` is set at creation and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Rich/HTML body text.
    pub content: String,
    pub author: UserRef,
    #[serde(default)]
    pub assigned_editor: Option<UserRef>,
    #[serde(default)]
    pub approved_by: Option<UserRef>,
    pub status: ArticleStatus,
    #[serde(default)]
    pub editor_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_shape() {
        let raw = r#"{
            "id": "0192b2f0-0000-7000-8000-000000000001",
            "title": "Field Notes",
            "content": "<p>Body</p>",
            "author": {"id": "0192b2f0-0000-7000-8000-000000000002", "name": "Ada"},
            "assignedEditor": {"id": "0192b2f0-0000-7000-8000-000000000003", "name": "Ed"},
            "status": "Rejected",
            "editorComment": "Needs sources",
            "createdAt": "2026-08-01T10:00:00Z",
            "reviewedAt": "2026-08-02T09:30:00Z"
        }"#;
        let article: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(article.status, ArticleStatus::Rejected);
        assert_eq!(article.editor_comment.as_deref(), Some("Needs sources"));
        assert_eq!(article.assigned_editor.as_ref().unwrap().name, "Ed");
        assert!(article.approved_by.is_none());
        assert!(article.reviewed_at.is_some());
    }

    #[test]
    fn optional_references_default_to_absent() {
        let raw = r#"{
            "id": "0192b2f0-0000-7000-8000-000000000001",
            "title": "Draft",
            "content": "text",
            "author": {"id": "0192b2f0-0000-7000-8000-000000000002", "name": "Ada"},
            "status": "Draft",
            "createdAt": "2026-08-01T10:00:00Z"
        }"#;
        let article: Article = serde_json::from_str(raw).unwrap();
        assert!(article.assigned_editor.is_none());
        assert!(article.approved_by.is_none());
        assert!(article.editor_comment.is_none());
        assert!(article.reviewed_at.is_none());
    }
}
