//! Top navigation shell: brand, role-filtered links, session actions.

use leptos::*;
use leptos_router::A;

use newsroom_auth::{visible_capabilities, Capability};

use crate::session::SessionContext;

fn link_for(cap: Capability) -> (&'static str, &'static str) {
    match cap {
        Capability::BrowseArticles => ("/reader", "Reader"),
        Capability::AuthorArticles => ("/writer", "Writer"),
        Capability::ReviewArticles => ("/editor", "Editor"),
        Capability::AdministerUsers => ("/admin", "Admin"),
    }
}

/// Header shown on every page. Link visibility is driven entirely by
/// [`visible_capabilities`]; the gate still guards the routes themselves.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = SessionContext::expect();

    let links = move || {
        visible_capabilities(session.role())
            .into_iter()
            .map(|cap| {
                let (href, label) = link_for(cap);
                view! { <A href=href class="nav-link">{label}</A> }
            })
            .collect_view()
    };

    view! {
        <header class="topbar">
            <div class="brand">"News Room"</div>
            <nav class="nav-links">{links}</nav>
            <div class="session-box">
                {move || match session.user() {
                    Some(user) => view! {
                        <span class="whoami">
                            {user.name.clone()} " (" {user.role.as_str()} ")"
                        </span>
                        <button class="logout" on:click=move |_| session.logout()>
                            "Logout"
                        </button>
                    }
                    .into_view(),
                    None => view! { <A href="/login" class="nav-link">"Login"</A> }.into_view(),
                }}
            </div>
        </header>
    }
}
