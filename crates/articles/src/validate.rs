//! Client-side validation gates.
//!
//! A failed validation blocks the request entirely; no network round-trip is
//! made for input the server is guaranteed to refuse.

use newsroom_core::{DomainError, DomainResult, UserId};

/// Form state for creating or editing an article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub assigned_editor: Option<UserId>,
}

impl ArticleDraft {
    /// Validate before a create/update call.
    ///
    /// Title and content must be non-blank; submitting additionally requires
    /// an assigned editor.
    pub fn validate(&self, submit: bool) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::validation("content is required"));
        }
        if submit && self.assigned_editor.is_none() {
            return Err(DomainError::validation(
                "select an editor before submitting",
            ));
        }
        Ok(())
    }

    /// Validate before an edit-and-resubmit call.
    ///
    /// Resubmission always forces Submitted, so it carries the same
    /// requirements as a fresh submit, including an assigned editor.
    pub fn validate_resubmit(&self) -> DomainResult<()> {
        self.validate(true)
    }
}

/// An editor's decision on a submitted article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { comment: String },
}

impl ReviewDecision {
    /// A rejection requires a non-blank comment; approval needs nothing.
    pub fn validate(&self) -> DomainResult<()> {
        match self {
            ReviewDecision::Approve => Ok(()),
            ReviewDecision::Reject { comment } => {
                if comment.trim().is_empty() {
                    Err(DomainError::validation("rejection comment is required"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            title: "Title".into(),
            content: "<p>Body</p>".into(),
            assigned_editor: Some(UserId::new()),
        }
    }

    #[test]
    fn complete_draft_passes_both_modes() {
        let d = draft();
        assert!(d.validate(false).is_ok());
        assert!(d.validate(true).is_ok());
    }

    #[test]
    fn blank_title_or_content_is_refused() {
        let mut d = draft();
        d.title = "   ".into();
        assert!(d.validate(false).is_err());

        let mut d = draft();
        d.content = String::new();
        assert!(d.validate(true).is_err());
    }

    #[test]
    fn submit_requires_an_editor_but_save_draft_does_not() {
        let mut d = draft();
        d.assigned_editor = None;
        assert!(d.validate(false).is_ok());
        assert!(matches!(d.validate(true), Err(DomainError::Validation(_))));
    }

    #[test]
    fn resubmit_requires_an_editor_like_a_fresh_submit() {
        let d = draft();
        assert!(d.validate_resubmit().is_ok());

        let mut d = draft();
        d.assigned_editor = None;
        assert!(matches!(
            d.validate_resubmit(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn approve_needs_no_comment() {
        assert!(ReviewDecision::Approve.validate().is_ok());
    }

    #[test]
    fn reject_with_blank_comment_is_refused() {
        for comment in ["", "   ", "\n\t "] {
            let decision = ReviewDecision::Reject {
                comment: comment.into(),
            };
            assert!(decision.validate().is_err());
        }
    }

    proptest! {
        #[test]
        fn whitespace_only_comments_never_validate(comment in "[ \t\r\n]{0,32}") {
            let decision = ReviewDecision::Reject { comment };
            prop_assert!(decision.validate().is_err());
        }

        #[test]
        fn non_blank_comments_always_validate(comment in "[ ]{0,4}[a-z]{1,16}[ ]{0,4}") {
            let decision = ReviewDecision::Reject { comment };
            prop_assert!(decision.validate().is_ok());
        }
    }
}
