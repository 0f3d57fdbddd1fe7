//! Shared UI components.

pub mod gate;
pub mod nav;

pub use gate::{RequireRole, Unauthorized};
pub use nav::NavBar;
