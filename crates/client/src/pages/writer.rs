//! Writer view: author articles, track their status, resubmit rejections.

use leptos::*;

use newsroom_articles::{Article, ArticleDraft};
use newsroom_auth::User;
use newsroom_core::ArticleId;

use crate::api::{CreateArticleRequest, UpdateArticleRequest};
use crate::session::SessionContext;
use crate::state::WriterData;

/// Two independent data needs on mount: the writer's own articles and the
/// eligible editors. Partial failure is per-source; either list failing
/// leaves the other rendered with an inline error naming the failed source.
#[component]
pub fn WriterPage() -> impl IntoView {
    let session = SessionContext::expect();

    let articles = create_rw_signal(Vec::<Article>::new());
    let editors = create_rw_signal(Vec::<User>::new());
    let load_errors = create_rw_signal(Vec::<String>::new());
    let loading = create_rw_signal(false);

    // Form state.
    let title = create_rw_signal(String::new());
    let content = create_rw_signal(String::new());
    let selected_editor = create_rw_signal(String::new());
    let editing = create_rw_signal(Option::<ArticleId>::None);
    let form_error = create_rw_signal(Option::<String>::None);
    let saving = create_rw_signal(false);

    let load_all = move || {
        load_errors.set(Vec::new());
        loading.set(true);

        let api = session.api();
        spawn_local(async move {
            let data = WriterData::fold(api.my_articles().await, api.editors().await);
            articles.set(data.articles);
            editors.set(data.editors);
            load_errors.set(data.errors);
            loading.set(false);
        });
    };

    load_all();

    let clear_form = move || {
        editing.set(None);
        title.set(String::new());
        content.set(String::new());
        selected_editor.set(String::new());
        form_error.set(None);
    };

    let current_draft = move || ArticleDraft {
        title: title.get(),
        content: content.get(),
        assigned_editor: selected_editor.get().parse().ok(),
    };

    // Create a new article; `submit = false` saves a draft.
    let create = move |submit: bool| {
        if saving.get() {
            return;
        }
        let draft = current_draft();
        if let Err(e) = draft.validate(submit) {
            form_error.set(Some(e.to_string()));
            return;
        }
        form_error.set(None);
        saving.set(true);

        let body = CreateArticleRequest {
            title: draft.title,
            content: draft.content,
            assigned_editor_id: draft.assigned_editor,
            submit,
        };
        let api = session.api();
        spawn_local(async move {
            match api.create_article(&body).await {
                Ok(_) => {
                    clear_form();
                    // Server response is the source of truth post-mutation.
                    load_all();
                }
                Err(e) => form_error.set(Some(e.user_message("Create failed"))),
            }
            saving.set(false);
        });
    };

    // Save an edited Draft/Rejected article; always forces Submitted. The
    // assigned editor cannot change during edit, only title/content.
    let save_edit = move || {
        let Some(id) = editing.get() else {
            return;
        };
        if saving.get() {
            return;
        }
        let draft = current_draft();
        if let Err(e) = draft.validate_resubmit() {
            form_error.set(Some(e.to_string()));
            return;
        }
        form_error.set(None);
        saving.set(true);

        let body = UpdateArticleRequest {
            title: draft.title,
            content: draft.content,
            submit: true,
        };
        let api = session.api();
        spawn_local(async move {
            match api.update_article(id, &body).await {
                Ok(_) => {
                    clear_form();
                    load_all();
                }
                Err(e) => form_error.set(Some(e.user_message("Save failed"))),
            }
            saving.set(false);
        });
    };

    let start_edit = move |a: &Article| {
        editing.set(Some(a.id));
        title.set(a.title.clone());
        content.set(a.content.clone());
        selected_editor.set(
            a.assigned_editor
                .as_ref()
                .map(|e| e.id.to_string())
                .unwrap_or_default(),
        );
        form_error.set(None);
    };

    view! {
        <div class="page writer">
            <div class="page-head">
                <h2>"Writer Dashboard"</h2>
                <div class="hint">
                    {move || session.user().map(|u| format!("{} ({})", u.name, u.role))}
                </div>
            </div>

            {move || loading.get().then(|| view! { <div class="banner loading">"Loading your data..."</div> })}
            {move || {
                let errors = load_errors.get();
                (!errors.is_empty()).then(|| {
                    view! {
                        <div class="banner error">
                            {errors.into_iter().map(|e| view! { <div>{e}</div> }).collect_view()}
                        </div>
                    }
                })
            }}

            <section class="card form-card">
                <h3>
                    {move || if editing.get().is_some() { "Edit & Resubmit" } else { "New Article" }}
                </h3>

                {move || form_error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}

                <input
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Write HTML or plain text here..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>

                <label>
                    "Assign Editor"
                    <select
                        prop:value=move || selected_editor.get()
                        disabled=move || editing.get().is_some()
                        on:change=move |ev| selected_editor.set(event_target_value(&ev))
                    >
                        <option value="">"Select editor"</option>
                        {move || {
                            editors
                                .get()
                                .into_iter()
                                .map(|ed| {
                                    view! {
                                        <option value=ed.id.to_string()>{ed.name.clone()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>

                <div class="form-actions">
                    {move || {
                        if editing.get().is_none() {
                            view! {
                                <button
                                    class="secondary"
                                    disabled=move || saving.get()
                                    on:click=move |_| create(false)
                                >
                                    "Save Draft"
                                </button>
                                <button disabled=move || saving.get() on:click=move |_| create(true)>
                                    "Submit"
                                </button>
                            }
                            .into_view()
                        } else {
                            view! {
                                <button disabled=move || saving.get() on:click=move |_| save_edit()>
                                    "Save & Resubmit"
                                </button>
                                <button class="secondary" on:click=move |_| clear_form()>
                                    "Cancel"
                                </button>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </section>

            <h3>"Your Articles"</h3>

            {move || {
                (!loading.get() && articles.with(Vec::is_empty))
                    .then(|| view! { <div class="empty-state">"No articles yet."</div> })
            }}

            <div class="article-list">
                {move || {
                    articles
                        .get()
                        .into_iter()
                        .map(|a| {
                            let editor_name = a
                                .assigned_editor
                                .as_ref()
                                .map(|e| e.name.clone())
                                .unwrap_or_else(|| "—".to_string());
                            let comment = a.editor_comment.clone();
                            let editable = a.status.is_editable();
                            let status = a.status;
                            let article = a.clone();
                            view! {
                                <div class="card">
                                    <div class="card-row">
                                        <div>
                                            <h4>{a.title.clone()}</h4>
                                            <div class="hint">"Editor: " {editor_name}</div>
                                        </div>
                                        <div class="status">{status.as_str()}</div>
                                    </div>
                                    <div class="article-body" inner_html=a.content.clone()></div>
                                    <div class="card-row">
                                        {comment.map(|c| {
                                            view! {
                                                <div class="reject-comment">
                                                    "Editor comment: " {c}
                                                </div>
                                            }
                                        })}
                                        {editable.then(|| {
                                            view! {
                                                <button
                                                    class="secondary"
                                                    on:click=move |_| start_edit(&article)
                                                >
                                                    "Edit"
                                                </button>
                                            }
                                        })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
