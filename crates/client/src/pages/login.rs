//! Login page.

use std::time::Duration;

use leptos::*;
use leptos_router::use_navigate;

use crate::session::SessionContext;

/// Email/password form. On success the session is stored and the app
/// navigates home after a one-shot delay; on failure the server message (or
/// a generic fallback) is shown inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionContext::expect();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let notice = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let api = session.api();
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(resp) => {
                    session.login(resp.token, resp.user);
                    notice.set(Some("Login successful. Redirecting...".to_string()));
                    set_timeout(
                        move || navigate("/", Default::default()),
                        Duration::from_millis(1500),
                    );
                }
                Err(e) => error.set(Some(e.user_message("Login failed. Try again."))),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-card">
            <h2>"Login"</h2>

            {move || notice.get().map(|msg| view! { <div class="banner notice">{msg}</div> })}
            {move || error.get().map(|msg| view! { <div class="banner error">{msg}</div> })}

            <form on:submit=submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
