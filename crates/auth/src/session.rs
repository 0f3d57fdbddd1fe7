//! The session: single source of truth for "who is logged in".
//!
//! The store is generic over its durable backend so the policy (atomic
//! token+user lifecycle, restore-on-start, clear-on-logout) can be tested
//! without a browser. The client crate supplies a `localStorage` backend.

use serde::{Deserialize, Serialize};

use crate::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Current authentication token and user identity.
///
/// Invariant: token and user exist together or not at all; the store never
/// persists one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Durable key-value backend for the session.
///
/// Two entries are used: the raw token and the serialized user record.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory backend for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Owner of the current session, backed by durable storage.
///
/// All views read the session; only `login`/`logout` mutate it. No expiry or
/// refresh logic exists client-side: a token stays "valid" until the server
/// rejects a request or the user logs out.
#[derive(Debug, Clone)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a store and restore any persisted session.
    ///
    /// A token without a readable user record (or vice versa) is treated as
    /// absent and cleared, preserving the set-together invariant.
    pub fn restore(storage: S) -> Self {
        let mut store = Self {
            storage,
            session: None,
        };
        let token = store.storage.get(TOKEN_KEY);
        let user = store
            .storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        match (token, user) {
            (Some(token), Some(user)) => {
                tracing::debug!(user = %user.email, "session restored from storage");
                store.session = Some(Session { token, user });
            }
            (None, None) => {}
            _ => {
                tracing::warn!("partial session in storage, clearing");
                store.clear_storage();
            }
        }
        store
    }

    /// Persist and activate a session. Called on successful login.
    pub fn login(&mut self, token: String, user: User) {
        self.storage.set(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => {
                // Keep the invariant rather than persisting a token alone.
                tracing::error!(error = %e, "failed to serialize user, session not persisted");
                self.storage.remove(TOKEN_KEY);
            }
        }
        self.session = Some(Session { token, user });
    }

    /// Clear durable storage and in-memory state.
    pub fn logout(&mut self) {
        self.clear_storage();
        self.session = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn clear_storage(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use newsroom_core::UserId;

    use crate::Role;

    use super::*;

    fn user() -> User {
        User {
            id: UserId::new(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: Role::Writer,
        }
    }

    #[test]
    fn login_sets_token_and_user_together() {
        let mut store = SessionStore::restore(MemoryStorage::new());
        assert!(store.session().is_none());

        store.login("tok-123".into(), user());
        assert_eq!(store.token(), Some("tok-123"));
        assert_eq!(store.user().map(|u| u.role), Some(Role::Writer));
    }

    #[test]
    fn login_then_logout_leaves_nothing_behind() {
        let mut store = SessionStore::restore(MemoryStorage::new());
        store.login("tok-123".into(), user());
        assert!(!store.storage().is_empty());

        store.logout();
        assert!(store.session().is_none());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn restore_picks_up_persisted_session() {
        let mut first = SessionStore::restore(MemoryStorage::new());
        first.login("tok-abc".into(), user());

        // Simulate a reload: a fresh store over the same backend.
        let second = SessionStore::restore(first.storage().clone());
        assert_eq!(second.token(), Some("tok-abc"));
        assert_eq!(second.user().map(|u| u.name.clone()), Some("Ada".to_string()));
    }

    #[test]
    fn malformed_stored_user_yields_empty_session() {
        let mut backend = MemoryStorage::new();
        backend.set(TOKEN_KEY, "tok");
        backend.set(USER_KEY, "{not json");
        let store = SessionStore::restore(backend);
        assert!(store.session().is_none());
    }

    #[test]
    fn token_without_user_is_cleared() {
        let mut backend = MemoryStorage::new();
        backend.set(TOKEN_KEY, "orphan");
        let store = SessionStore::restore(backend);
        assert!(store.session().is_none());
        assert!(store.token().is_none());
    }
}
