//! Role identifiers used for RBAC.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of an authenticated user.
///
/// The set is closed: roles are assigned server-side and the client only
/// displays and gates on them. `Reader` is the implicit default for any
/// authenticated user without an elevated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Reader,
    Writer,
    Editor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "Reader",
            Role::Writer => "Writer",
            Role::Editor => "Editor",
            Role::Admin => "Admin",
        }
    }

    /// All roles, in escalating order of privilege.
    pub const ALL: [Role; 4] = [Role::Reader, Role::Writer, Role::Editor, Role::Admin];

    /// Roles an admin may assign through the role-change UI.
    ///
    /// Admin itself is never offered, and admins cannot be demoted here.
    pub const ASSIGNABLE: [Role; 2] = [Role::Editor, Role::Writer];
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Reader" => Ok(Role::Reader),
            "Writer" => Ok(Role::Writer),
            "Editor" => Ok(Role::Editor),
            "Admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("Superuser".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_canonical_names() {
        assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"Editor\"");
        let role: Role = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn admin_is_not_assignable() {
        assert!(!Role::ASSIGNABLE.contains(&Role::Admin));
        assert!(!Role::ASSIGNABLE.contains(&Role::Reader));
    }
}
