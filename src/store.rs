//! Session Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Initialized once
//! at app start; cleared on logout. This replaces the module-level mutable
//! state the rest of the app would otherwise reach for.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::i18n::Lang;

/// Per-session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    /// Demo auth token; `Some` means logged in
    pub token: Option<String>,
    /// Display name of the logged-in user
    pub user_name: String,
    /// E-mail of the logged-in user
    pub user_email: String,
    /// Active UI language
    pub lang: Lang,
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a successful login
pub fn store_set_session(store: &SessionStore, token: String, name: String, email: String) {
    store.token().set(Some(token));
    store.user_name().set(name);
    store.user_email().set(email);
}

/// Log out, keeping the language choice
pub fn store_clear_session(store: &SessionStore) {
    store.token().set(None);
    store.user_name().set(String::new());
    store.user_email().set(String::new());
}
