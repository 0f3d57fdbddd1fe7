//! The user identity record as delivered by the API.

use serde::{Deserialize, Serialize};

use newsroom_core::UserId;

use crate::Role;

/// An authenticated user's identity.
///
/// Assembled server-side; the client never computes the role, only displays
/// and gates on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}
