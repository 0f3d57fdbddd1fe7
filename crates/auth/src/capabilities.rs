//! Capability visibility, centralized.
//!
//! The navigation shell and each dashboard gate on the same role-to-section
//! mapping; keeping it as one pure function makes the link table testable
//! without any rendering concern.

use crate::Role;

/// A navigable section of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Browse approved articles (open to everyone, including anonymous).
    BrowseArticles,
    /// Author and resubmit articles.
    AuthorArticles,
    /// Review the assigned queue (approve/reject).
    ReviewArticles,
    /// Manage user roles and audit approved content.
    AdministerUsers,
}

impl Capability {
    /// Roles allowed through the access gate for this capability.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Capability::BrowseArticles => &[],
            Capability::AuthorArticles => &[Role::Writer, Role::Editor, Role::Admin],
            Capability::ReviewArticles => &[Role::Editor, Role::Admin],
            Capability::AdministerUsers => &[Role::Admin],
        }
    }
}

/// Compute the set of capabilities visible in navigation for a role.
///
/// `None` is an anonymous visitor. The browse section is always visible.
pub fn visible_capabilities(role: Option<Role>) -> Vec<Capability> {
    let mut caps = vec![Capability::BrowseArticles];
    let Some(role) = role else {
        return caps;
    };
    for cap in [
        Capability::AuthorArticles,
        Capability::ReviewArticles,
        Capability::AdministerUsers,
    ] {
        if cap.allowed_roles().contains(&role) {
            caps.push(cap);
        }
    }
    caps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(role: Option<Role>) -> Vec<Capability> {
        visible_capabilities(role)
    }

    #[test]
    fn anonymous_sees_browse_only() {
        assert_eq!(caps(None), vec![Capability::BrowseArticles]);
    }

    #[test]
    fn reader_sees_browse_only() {
        assert_eq!(caps(Some(Role::Reader)), vec![Capability::BrowseArticles]);
    }

    #[test]
    fn writer_sees_browse_and_author() {
        assert_eq!(
            caps(Some(Role::Writer)),
            vec![Capability::BrowseArticles, Capability::AuthorArticles]
        );
    }

    #[test]
    fn editor_sees_review_but_not_admin() {
        assert_eq!(
            caps(Some(Role::Editor)),
            vec![
                Capability::BrowseArticles,
                Capability::AuthorArticles,
                Capability::ReviewArticles,
            ]
        );
    }

    #[test]
    fn admin_sees_everything() {
        assert_eq!(
            caps(Some(Role::Admin)),
            vec![
                Capability::BrowseArticles,
                Capability::AuthorArticles,
                Capability::ReviewArticles,
                Capability::AdministerUsers,
            ]
        );
    }
}
