//! The access-gate predicate evaluated before a protected view mounts.
//!
//! - No I/O
//! - No state of its own; re-evaluated on every render
//! - Advisory UI convenience only: the client is fully inspectable, so the
//!   server must enforce authorization independently

use crate::{Role, User};

/// Outcome of evaluating the gate for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Mount the protected content.
    Grant,
    /// No session: send the visitor to the login route.
    RedirectToLogin,
    /// Authenticated but the role is not allowed: render a terminal
    /// Unauthorized view in place (no redirect).
    Deny,
}

/// Evaluate a required-roles list against the current session user.
///
/// An empty `allowed` list means "any authenticated user".
pub fn evaluate(user: Option<&User>, allowed: &[Role]) -> GateDecision {
    let Some(user) = user else {
        return GateDecision::RedirectToLogin;
    };
    if !allowed.is_empty() && !allowed.contains(&user.role) {
        return GateDecision::Deny;
    }
    GateDecision::Grant
}

#[cfg(test)]
mod tests {
    use newsroom_core::UserId;

    use super::*;

    fn user(role: Role) -> User {
        User {
            id: UserId::new(),
            name: "Jo Bloggs".into(),
            email: "jo@example.com".into(),
            role,
        }
    }

    #[test]
    fn anonymous_is_redirected_to_login() {
        assert_eq!(evaluate(None, &[Role::Admin]), GateDecision::RedirectToLogin);
        assert_eq!(evaluate(None, &[]), GateDecision::RedirectToLogin);
    }

    #[test]
    fn disallowed_role_is_denied_in_place() {
        let writer = user(Role::Writer);
        assert_eq!(evaluate(Some(&writer), &[Role::Admin]), GateDecision::Deny);
    }

    #[test]
    fn allowed_role_is_granted() {
        let editor = user(Role::Editor);
        assert_eq!(
            evaluate(Some(&editor), &[Role::Editor, Role::Admin]),
            GateDecision::Grant
        );
    }

    #[test]
    fn empty_list_admits_any_authenticated_user() {
        let reader = user(Role::Reader);
        assert_eq!(evaluate(Some(&reader), &[]), GateDecision::Grant);
    }
}
