//! `newsroom-articles` — the article entity and its workflow.
//!
//! The status machine is a closed enumeration with an explicit transition
//! table, so invalid transitions are rejected deterministically on the client
//! instead of relying on whatever the remote API happens to refuse.

pub mod article;
pub mod validate;
pub mod workflow;

pub use article::{Article, UserRef};
pub use validate::{ArticleDraft, ReviewDecision};
pub use workflow::{transition, ArticleStatus, TransitionError, WorkflowAction};
