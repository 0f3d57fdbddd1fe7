//! `newsroom-core` — foundation building blocks shared across the workspace.
//!
//! This crate contains **pure** primitives (no I/O, no UI concerns).

pub mod error;
pub mod id;
pub mod inflight;

pub use error::{DomainError, DomainResult};
pub use id::{ArticleId, UserId};
pub use inflight::{OpTracker, SlotPolicy};
