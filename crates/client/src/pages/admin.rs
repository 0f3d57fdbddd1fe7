//! Admin view: manage user roles, audit approved articles.

use leptos::*;

use newsroom_articles::Article;
use newsroom_auth::{Role, User};
use newsroom_core::{OpTracker, SlotPolicy, UserId};

use crate::session::SessionContext;

/// Users and approved articles side by side. Role changes are confirmed
/// explicitly and tracked per user id, so different users' changes may be in
/// flight concurrently while each user's own buttons stay disabled.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = SessionContext::expect();

    let users = create_rw_signal(Vec::<User>::new());
    let articles = create_rw_signal(Vec::<Article>::new());
    let loading = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let changing = create_rw_signal(OpTracker::<UserId>::new(SlotPolicy::PerKey));

    let load = move || {
        loading.set(true);
        error.set(None);
        let api = session.api();
        spawn_local(async move {
            let users_res = api.admin_users().await;
            let articles_res = api.admin_approved_articles().await;
            match (users_res, articles_res) {
                (Ok(u), Ok(a)) => {
                    users.set(u);
                    articles.set(a);
                }
                (Err(e), _) | (_, Err(e)) => {
                    error.set(Some(e.user_message("Failed to load admin data.")));
                    users.set(Vec::new());
                    articles.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };

    load();

    let change_role = move |id: UserId, role: Role| {
        let confirmed = window()
            .confirm_with_message(&format!("Change role to \"{role}\"?"))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let mut started = false;
        changing.update(|t| started = t.try_begin(id));
        if !started {
            return;
        }

        let api = session.api();
        spawn_local(async move {
            match api.change_role(id, role).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e.user_message("Role change failed"))),
            }
            changing.update(|t| t.finish(&id));
        });
    };

    view! {
        <div class="page admin">
            <div class="page-head">
                <h2>"Admin Dashboard"</h2>
                <div class="hint">
                    {move || session.user().map(|u| format!("{} ({})", u.name, u.role))}
                </div>
            </div>

            {move || loading.get().then(|| view! { <div class="banner loading">"Loading admin data..."</div> })}
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}

            <div class="admin-grid">
                <section class="card">
                    <div class="page-head">
                        <h3>"Users"</h3>
                        <div class="hint">{move || format!("{} users", users.with(Vec::len))}</div>
                    </div>

                    {move || {
                        (!loading.get() && users.with(Vec::is_empty))
                            .then(|| view! { <div class="empty-state">"No users found."</div> })
                    }}

                    <div class="user-list">
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|u| {
                                    let id = u.id;
                                    let busy = move || changing.with(|t| t.is_active(&id));
                                    let actions = (u.role != Role::Admin).then(|| {
                                        Role::ASSIGNABLE
                                            .into_iter()
                                            .map(|target| {
                                                view! {
                                                    <button
                                                        class="secondary"
                                                        disabled=busy
                                                        on:click=move |_| change_role(id, target)
                                                    >
                                                        {format!("Make {target}")}
                                                    </button>
                                                }
                                            })
                                            .collect_view()
                                    });
                                    view! {
                                        <div class="card-row">
                                            <div>
                                                <div class="card-title">{u.name.clone()}</div>
                                                <div class="hint">{u.email.clone()}</div>
                                            </div>
                                            <div class="form-actions">
                                                <span class="status">{u.role.as_str()}</span>
                                                {actions}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </section>

                <section class="card">
                    <div class="page-head">
                        <h3>"Approved Articles"</h3>
                        <div class="hint">{move || articles.with(Vec::len).to_string()}</div>
                    </div>

                    {move || {
                        (!loading.get() && articles.with(Vec::is_empty))
                            .then(|| view! { <div class="empty-state">"No approved articles yet."</div> })
                    }}

                    <div class="article-list">
                        {move || {
                            articles
                                .get()
                                .into_iter()
                                .map(|a| {
                                    let approved = a
                                        .approved_by
                                        .as_ref()
                                        .map(|e| format!(" — approved by {}", e.name))
                                        .unwrap_or_default();
                                    view! {
                                        <div class="card-row">
                                            <div>
                                                <div class="card-title">{a.title.clone()}</div>
                                                <div class="hint">
                                                    "by " {a.author.name.clone()} {approved}
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </section>
            </div>
        </div>
    }
}
