//! Application shell with routing.

use leptos::*;
use leptos_router::*;

use newsroom_auth::Capability;

use crate::components::{NavBar, RequireRole};
use crate::pages::{AdminPage, EditorPage, LoginPage, ReaderPage, WriterPage};
use crate::session::SessionContext;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    SessionContext::provide();

    view! {
        <Router>
            <NavBar/>
            <main class="content">
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/reader"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/reader" view=ReaderPage/>
                    <Route
                        path="/writer"
                        view=|| {
                            view! {
                                <RequireRole allowed=Capability::AuthorArticles.allowed_roles()>
                                    <WriterPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path="/editor"
                        view=|| {
                            view! {
                                <RequireRole allowed=Capability::ReviewArticles.allowed_roles()>
                                    <EditorPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path="/admin"
                        view=|| {
                            view! {
                                <RequireRole allowed=Capability::AdministerUsers.allowed_roles()>
                                    <AdminPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="empty-state">"Not Found"</div> }
}
