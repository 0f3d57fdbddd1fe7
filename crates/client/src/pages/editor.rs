//! Editor view: review the assigned queue, keep a history of decisions.

use leptos::*;

use newsroom_articles::{Article, ReviewDecision};
use newsroom_core::{ArticleId, OpTracker, SlotPolicy};

use crate::api::ReviewRequest;
use crate::session::SessionContext;

/// Two independent lists: the queue of submitted articles awaiting this
/// editor's decision, and the read-only history of past reviews. One
/// mutating action across the whole queue may be in flight at a time.
#[component]
pub fn EditorPage() -> impl IntoView {
    let session = SessionContext::expect();

    let queue = create_rw_signal(Vec::<Article>::new());
    let reviewed = create_rw_signal(Vec::<Article>::new());
    let loading = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let processing = create_rw_signal(OpTracker::<ArticleId>::new(SlotPolicy::Single));

    // Reject modal state.
    let reject_target = create_rw_signal(Option::<ArticleId>::None);
    let reject_comment = create_rw_signal(String::new());
    let modal_error = create_rw_signal(Option::<String>::None);

    let load_queue = move || {
        loading.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.assigned_articles().await {
                Ok(items) => queue.set(items),
                Err(e) => error.set(Some(e.user_message("Failed to load queue"))),
            }
            loading.set(false);
        });
    };

    let load_reviewed = move || {
        let api = session.api();
        spawn_local(async move {
            match api.reviewed_articles().await {
                Ok(items) => reviewed.set(items),
                Err(e) => error.set(Some(e.user_message("Failed to load reviewed list"))),
            }
        });
    };

    load_queue();
    load_reviewed();

    let review = move |id: ArticleId, decision: ReviewDecision, fallback: &'static str| {
        let mut started = false;
        processing.update(|t| started = t.try_begin(id));
        if !started {
            return;
        }
        error.set(None);

        let body = ReviewRequest::from(decision);
        let api = session.api();
        spawn_local(async move {
            match api.review_article(id, &body).await {
                Ok(_) => {
                    reject_target.set(None);
                    reject_comment.set(String::new());
                    load_queue();
                    load_reviewed();
                }
                Err(e) => error.set(Some(e.user_message(fallback))),
            }
            processing.update(|t| t.finish(&id));
        });
    };

    let approve = move |id: ArticleId| review(id, ReviewDecision::Approve, "Approve failed");

    let open_reject = move |id: ArticleId| {
        reject_target.set(Some(id));
        reject_comment.set(String::new());
        modal_error.set(None);
    };

    let confirm_reject = move || {
        let Some(id) = reject_target.get() else {
            return;
        };
        let decision = ReviewDecision::Reject {
            comment: reject_comment.get(),
        };
        // Validation gate: a blank comment never reaches the network.
        if let Err(e) = decision.validate() {
            modal_error.set(Some(e.to_string()));
            return;
        }
        modal_error.set(None);
        review(id, decision, "Reject failed");
    };

    let blocked = move |id: ArticleId| processing.with(|t| t.is_blocked(&id));
    let active = move |id: ArticleId| processing.with(|t| t.is_active(&id));

    view! {
        <div class="page editor">
            <h2>"Editor Dashboard"</h2>

            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}

            <section>
                <div class="page-head">
                    <h3>"Review Queue"</h3>
                    <button
                        class="secondary"
                        on:click=move |_| {
                            load_queue();
                            load_reviewed();
                        }
                    >
                        "Refresh"
                    </button>
                </div>

                {move || loading.get().then(|| view! { <div class="banner loading">"Loading..."</div> })}
                {move || {
                    (!loading.get() && queue.with(Vec::is_empty))
                        .then(|| view! { <div class="empty-state">"No submitted articles"</div> })
                }}

                <div class="article-list">
                    {move || {
                        queue
                            .get()
                            .into_iter()
                            .map(|a| {
                                let id = a.id;
                                view! {
                                    <article class="card">
                                        <div class="card-row">
                                            <div>
                                                <h4>{a.title.clone()}</h4>
                                                <div class="hint">"By: " {a.author.name.clone()}</div>
                                            </div>
                                            <div class="hint">{a.created_at.to_rfc3339()}</div>
                                        </div>
                                        <div class="article-body" inner_html=a.content.clone()></div>
                                        <div class="form-actions">
                                            <button
                                                disabled=move || blocked(id)
                                                on:click=move |_| approve(id)
                                            >
                                                {move || if active(id) { "Processing..." } else { "Approve" }}
                                            </button>
                                            <button
                                                class="secondary"
                                                disabled=move || blocked(id)
                                                on:click=move |_| open_reject(id)
                                            >
                                                "Reject"
                                            </button>
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <section>
                <h3>"Previously Reviewed"</h3>
                {move || {
                    reviewed
                        .with(Vec::is_empty)
                        .then(|| view! { <div class="empty-state">"No reviewed articles yet"</div> })
                }}
                <div class="article-list">
                    {move || {
                        reviewed
                            .get()
                            .into_iter()
                            .map(|a| {
                                let comment = a
                                    .editor_comment
                                    .as_ref()
                                    .map(|c| format!(" — {c}"))
                                    .unwrap_or_default();
                                let when = a
                                    .reviewed_at
                                    .map(|t| t.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default();
                                view! {
                                    <div class="card card-row">
                                        <div>
                                            <div class="card-title">{a.title.clone()}</div>
                                            <div class="hint">{a.status.as_str()} {comment}</div>
                                        </div>
                                        <div class="hint">{when}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            // Reject modal: confirm stays disabled while the comment is blank
            // or a mutation is already in flight.
            {move || {
                reject_target.get().map(|id| {
                    let confirm_disabled = move || {
                        reject_comment.with(|c| c.trim().is_empty()) || blocked(id)
                    };
                    view! {
                        <div class="modal-backdrop">
                            <div class="modal">
                                <h4>"Reject Article"</h4>
                                <p>"Please add a comment explaining the rejection (required)."</p>

                                {move || {
                                    modal_error
                                        .get()
                                        .map(|msg| view! { <div class="banner error">{msg}</div> })
                                }}

                                <textarea
                                    placeholder="Write rejection reason..."
                                    prop:value=move || reject_comment.get()
                                    on:input=move |ev| reject_comment.set(event_target_value(&ev))
                                ></textarea>

                                <div class="form-actions">
                                    <button
                                        class="secondary"
                                        on:click=move |_| {
                                            reject_target.set(None);
                                            reject_comment.set(String::new());
                                            modal_error.set(None);
                                        }
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        class="danger"
                                        disabled=confirm_disabled
                                        on:click=move |_| confirm_reject()
                                    >
                                        {move || if active(id) { "Rejecting..." } else { "Confirm Reject" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
