//! Access-gate component wrapped around protected routes.

use leptos::*;
use leptos_router::Redirect;

use newsroom_auth::{evaluate, GateDecision, Role};

use crate::session::SessionContext;

/// Guards a route with a required-roles list, re-evaluated on every render.
///
/// Anonymous visitors are redirected to the login route; authenticated users
/// with a disallowed role get a terminal Unauthorized view in place. This is
/// UI convenience only; the server enforces authorization independently.
#[component]
pub fn RequireRole(
    /// Roles admitted to the wrapped content; empty admits any authenticated
    /// user.
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = SessionContext::expect();
    move || {
        let user = session.user();
        match evaluate(user.as_ref(), allowed) {
            GateDecision::Grant => children().into_view(),
            GateDecision::RedirectToLogin => view! { <Redirect path="/login"/> }.into_view(),
            GateDecision::Deny => view! { <Unauthorized/> }.into_view(),
        }
    }
}

/// Terminal unauthorized view (no redirect).
#[component]
pub fn Unauthorized() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"Unauthorized"</h2>
            <p>"You are not authorized to access this page."</p>
        </div>
    }
}
