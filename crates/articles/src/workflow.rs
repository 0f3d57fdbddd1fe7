//! Article status lifecycle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of an article in the review workflow.
///
/// Closed set; the server is authoritative, the client mirrors the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Submitted => "Submitted",
            ArticleStatus::Approved => "Approved",
            ArticleStatus::Rejected => "Rejected",
        }
    }

    /// Whether the original writer may edit and resubmit.
    pub fn is_editable(&self) -> bool {
        matches!(self, ArticleStatus::Draft | ArticleStatus::Rejected)
    }

    /// Whether the review has concluded. Rejected loops back into the
    /// machine through a writer resubmission, but the review itself is over.
    pub fn is_reviewed(&self) -> bool {
        matches!(self, ArticleStatus::Approved | ArticleStatus::Rejected)
    }

    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Draft,
        ArticleStatus::Submitted,
        ArticleStatus::Approved,
        ArticleStatus::Rejected,
    ];
}

impl core::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action requested against an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowAction {
    /// Writer saves without submitting.
    SaveDraft,
    /// Writer submits (or resubmits) for review.
    Submit,
    /// Assigned editor approves.
    Approve,
    /// Assigned editor rejects with a comment.
    Reject,
}

impl WorkflowAction {
    pub const ALL: [WorkflowAction; 4] = [
        WorkflowAction::SaveDraft,
        WorkflowAction::Submit,
        WorkflowAction::Approve,
        WorkflowAction::Reject,
    ];
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot {action:?} an article in status {status}")]
pub struct TransitionError {
    pub status: ArticleStatus,
    pub action: WorkflowAction,
}

/// The transition table: current status × action → next status.
///
/// Anything not listed is invalid and refused without a network call.
pub fn transition(
    status: ArticleStatus,
    action: WorkflowAction,
) -> Result<ArticleStatus, TransitionError> {
    use ArticleStatus::*;
    use WorkflowAction::*;

    match (status, action) {
        (Draft, SaveDraft) => Ok(Draft),
        (Draft, Submit) => Ok(Submitted),
        (Rejected, Submit) => Ok(Submitted),
        (Submitted, Approve) => Ok(Approved),
        (Submitted, Reject) => Ok(Rejected),
        (status, action) => Err(TransitionError { status, action }),
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleStatus::*;
    use super::WorkflowAction::*;
    use super::*;

    #[test]
    fn table_is_exhaustive() {
        for status in ArticleStatus::ALL {
            for action in WorkflowAction::ALL {
                let expected = match (status, action) {
                    (Draft, SaveDraft) => Some(Draft),
                    (Draft, Submit) | (Rejected, Submit) => Some(Submitted),
                    (Submitted, Approve) => Some(Approved),
                    (Submitted, Reject) => Some(Rejected),
                    _ => None,
                };
                match expected {
                    Some(next) => assert_eq!(transition(status, action), Ok(next)),
                    None => {
                        let err = transition(status, action).unwrap_err();
                        assert_eq!(err.status, status);
                        assert_eq!(err.action, action);
                    }
                }
            }
        }
    }

    #[test]
    fn approving_a_draft_is_invalid() {
        assert!(transition(Draft, Approve).is_err());
    }

    #[test]
    fn rejected_loops_back_through_resubmission() {
        let next = transition(Rejected, Submit).unwrap();
        assert_eq!(next, Submitted);
        assert_eq!(transition(next, Reject).unwrap(), Rejected);
    }

    #[test]
    fn terminal_states_refuse_review_actions() {
        for status in [Approved, Rejected] {
            assert!(transition(status, Approve).is_err());
            assert!(transition(status, Reject).is_err());
        }
    }

    #[test]
    fn editability_matches_writer_flow() {
        assert!(Draft.is_editable());
        assert!(Rejected.is_editable());
        assert!(!Submitted.is_editable());
        assert!(!Approved.is_editable());
    }

    #[test]
    fn status_serializes_by_canonical_name() {
        assert_eq!(serde_json::to_string(&Submitted).unwrap(), "\"Submitted\"");
        let status: ArticleStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(status, Rejected);
    }
}
