//! Global Application State Store
//!
//! Uses Leptos reactive_stores; writing to the session notifies every view
//! that reads it, and the session persists each change.

use chrono::Utc;
use leptos::prelude::*;
use log::{debug, error, warn};
use reactive_stores::Store;
use todos_core::{DomainResult, EditCommit, ListEvent, TodoConfig, TodoRepository, TodoSession};

use crate::storage::BrowserStore;

pub type AppSession = TodoSession<BrowserStore>;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The todo list and its storage
    pub session: AppSession,
    pub config: TodoConfig,
}

impl AppState {
    /// Load config and todos from browser storage
    pub fn load() -> Self {
        let backend = BrowserStore::detect();
        let config = TodoConfig::load(&backend).unwrap_or_else(|e| {
            warn!("[STORE] Config unavailable, using defaults: {}", e);
            TodoConfig::default()
        });
        log::set_max_level(config.level_filter());

        let session = TodoSession::open(TodoRepository::new(backend, config.namespace.clone()))
            .unwrap_or_else(|e| {
                error!("[STORE] Could not load todos, starting empty in memory: {}", e);
                TodoSession::new(TodoRepository::new(BrowserStore::memory(), config.namespace.clone()))
            });
        Self { session, config }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn report<T>(action: &str, result: DomainResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("[STORE] {} failed: {}", action, e);
            None
        }
    }
}

/// Create a todo at the end of the list
pub fn store_create_todo(store: &AppStore, title: &str) {
    let result = store.session().write().create(title, Utc::now());
    if let Some(item) = report("create", result) {
        debug!("[STORE] Created #{} at order {}", item.id, item.order);
    }
}

/// Flip a todo's done flag
pub fn store_toggle_todo(store: &AppStore, id: u32) {
    let result = store.session().write().toggle(id, Utc::now());
    report("toggle", result);
}

/// Apply a finished title or notes edit
pub fn store_commit_edit(store: &AppStore, id: u32, commit: EditCommit) {
    let result = store.session().write().commit_edit(id, commit, Utc::now());
    if let Some(ListEvent::Removed(_)) = report("edit", result) {
        debug!("[STORE] #{} removed by empty title", id);
    }
}

/// Remove a todo
pub fn store_destroy_todo(store: &AppStore, id: u32) {
    let result = store.session().write().destroy(id);
    report("destroy", result);
}

/// Remove every completed todo
pub fn store_clear_completed(store: &AppStore) {
    let result = store.session().write().clear_completed();
    if let Some(count) = report("clear completed", result) {
        debug!("[STORE] Cleared {} completed", count);
    }
}

/// Set every todo's done flag to `done`
pub fn store_mark_all(store: &AppStore, done: bool) {
    let result = store.session().write().mark_all(done, Utc::now());
    report("mark all", result);
}
