//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::EntryFilter;
use crate::models::RedirectEntry;
use crate::mutation::AddDraft;
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Login flag and dialog visibility
    pub session: Session,
    /// Last fetched list, in server order
    pub entries: Vec<RedirectEntry>,
    /// Active search queries
    pub filter: EntryFilter,
    /// Pending add form
    pub add_draft: AddDraft,
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

/// Replace the cached list wholesale
pub fn store_set_entries(store: &AppStore, entries: Vec<RedirectEntry>) {
    *store.entries().write() = entries;
}

/// Log out and drop the cached list
pub fn store_logout(store: &AppStore) {
    store.session().write().logout();
    store.entries().write().clear();
    store.add_draft().write().reset();
}
