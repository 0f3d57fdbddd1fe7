//! Reactive session context over browser `localStorage`.

use leptos::*;

use newsroom_auth::{Role, Session, SessionStorage, SessionStore, User};

use crate::api::{ApiClient, API_BASE};

/// `localStorage`-backed session storage.
///
/// Storage failures (private browsing, quota) degrade to an in-memory-only
/// session rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Copyable handle to the session store; every component observing it
/// re-renders on login/logout.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
}

impl SessionContext {
    /// Restore any persisted session and provide the context at the app
    /// root, before any authenticated view mounts.
    pub fn provide() -> Self {
        let ctx = Self {
            store: create_rw_signal(SessionStore::restore(BrowserStorage)),
        };
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn login(&self, token: String, user: User) {
        self.store.update(|s| s.login(token, user));
    }

    pub fn logout(&self) {
        self.store.update(|s| s.logout());
    }

    pub fn session(&self) -> Option<Session> {
        self.store.with(|s| s.session().cloned())
    }

    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.user().cloned())
    }

    pub fn role(&self) -> Option<Role> {
        self.store.with(|s| s.user().map(|u| u.role))
    }

    /// API client carrying the current bearer token.
    pub fn api(&self) -> ApiClient {
        let token = self.store.with_untracked(|s| s.token().map(str::to_string));
        ApiClient::new(API_BASE, token)
    }
}
