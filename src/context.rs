//! Application Context
//!
//! Shared state provided via Leptos Context API: the idea list, the
//! current detail-view selection, and fire-and-forget persistence.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::CONFIG;
use crate::models::Idea;

/// Current time in epoch milliseconds (JS clock)
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The ordered idea list - read
    pub ideas: ReadSignal<Vec<Idea>>,
    /// The ordered idea list - write
    pub set_ideas: WriteSignal<Vec<Idea>>,
    /// Idea open in the detail view (None = list view) - read
    pub current_id: ReadSignal<Option<u64>>,
    /// Idea open in the detail view - write
    pub set_current_id: WriteSignal<Option<u64>>,
}

impl AppContext {
    pub fn new(
        ideas: (ReadSignal<Vec<Idea>>, WriteSignal<Vec<Idea>>),
        current_id: (ReadSignal<Option<u64>>, WriteSignal<Option<u64>>),
    ) -> Self {
        Self {
            ideas: ideas.0,
            set_ideas: ideas.1,
            current_id: current_id.0,
            set_current_id: current_id.1,
        }
    }

    /// Push the full list to the store without awaiting the outcome.
    /// Later local mutations never wait on in-flight saves; failures
    /// are logged and nothing rolls back.
    pub fn persist(&self) {
        let snapshot = self.ideas.get_untracked();
        spawn_local(async move {
            if let Err(e) = api::save_ideas(CONFIG.api_path, &snapshot).await {
                web_sys::console::error_1(&format!("[SYNC] Save failed: {e}").into());
            }
        });
    }

    /// Return to the list view
    pub fn close_details(&self) {
        self.set_current_id.set(None);
    }
}
