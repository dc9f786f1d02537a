//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch entries from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch entries from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Server position the table should bring into view - read
    pub scroll_target: ReadSignal<Option<u32>>,
    /// Server position the table should bring into view - write
    set_scroll_target: WriteSignal<Option<u32>>,
    /// Scroll to apply once the next fetch has landed
    pending_scroll: StoredValue<Option<u32>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        scroll_target: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            scroll_target: scroll_target.0,
            set_scroll_target: scroll_target.1,
            pending_scroll: StoredValue::new(None),
        }
    }

    /// Trigger a re-fetch of entries
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Re-fetch, then scroll to `position` once the new list is in place
    pub fn reload_then_scroll(&self, position: Option<u32>) {
        self.pending_scroll.set_value(position);
        self.reload();
    }

    /// Scroll the table to a 1-based server position right away
    pub fn scroll_to(&self, position: u32) {
        self.set_scroll_target.set(Some(position));
    }

    /// Called by the table after each fetch
    pub fn take_pending_scroll(&self) -> Option<u32> {
        let pending = self.pending_scroll.get_value();
        self.pending_scroll.set_value(None);
        pending
    }

    /// Called by the table once a scroll target has been handled
    pub fn clear_scroll_target(&self) {
        self.set_scroll_target.set(None);
    }
}
