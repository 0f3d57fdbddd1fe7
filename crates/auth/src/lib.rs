//! `newsroom-auth` — roles, capabilities, the access gate, and the session.
//!
//! This crate is intentionally decoupled from HTTP and the browser. The
//! client crate supplies the storage backend and the rendering; everything
//! here is a pure policy or state object, unit-testable in isolation.

pub mod capabilities;
pub mod gate;
pub mod roles;
pub mod session;
pub mod user;

pub use capabilities::{visible_capabilities, Capability};
pub use gate::{evaluate, GateDecision};
pub use roles::Role;
pub use session::{MemoryStorage, Session, SessionStorage, SessionStore};
pub use user::User;
