//! Reader view: browse approved articles.

use leptos::*;

use newsroom_articles::Article;

use crate::session::SessionContext;
use crate::state::replace_list;

/// Lists approved articles with an optional free-text filter over
/// title/author. Every search is a fresh full fetch whose result fully
/// replaces the prior list; no pagination, no caching.
#[component]
pub fn ReaderPage() -> impl IntoView {
    let session = SessionContext::expect();

    let list = create_rw_signal(Vec::<Article>::new());
    let query = create_rw_signal(String::new());
    let loading = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);

    let load = move |q: String| {
        loading.set(true);
        error.set(None);
        let api = session.api();
        spawn_local(async move {
            let fetched = api.approved_articles(&q).await;
            list.update(|items| error.set(replace_list(items, fetched, "Failed to load articles")));
            loading.set(false);
        });
    };

    // Initial unfiltered fetch on mount.
    load(String::new());

    view! {
        <div class="page reader">
            <div class="page-head">
                <h2>"Approved Articles"</h2>
                <div class="hint">"Browse the latest approved posts"</div>
            </div>

            <div class="search-row">
                <input
                    placeholder="Search title or author"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            load(query.get());
                        }
                    }
                />
                <button on:click=move |_| load(query.get())>"Search"</button>
                <button
                    class="secondary"
                    on:click=move |_| {
                        query.set(String::new());
                        load(String::new());
                    }
                >
                    "Clear"
                </button>
            </div>

            {move || loading.get().then(|| view! { <div class="banner loading">"Loading articles..."</div> })}
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}

            {move || {
                (!loading.get() && list.with(Vec::is_empty) && error.get().is_none())
                    .then(|| view! { <div class="empty-state">"No approved articles yet."</div> })
            }}

            <div class="article-list">
                {move || {
                    list.get()
                        .into_iter()
                        .map(|a| {
                            let byline = a
                                .approved_by
                                .as_ref()
                                .map(|e| format!(" — Approved by: {}", e.name))
                                .unwrap_or_default();
                            view! {
                                <article class="card">
                                    <h3>{a.title.clone()}</h3>
                                    <div class="byline">
                                        "By: " {a.author.name.clone()} {byline}
                                    </div>
                                    <div class="article-body" inner_html=a.content.clone()></div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
