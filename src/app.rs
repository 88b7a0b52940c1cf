//! Idea Garden App
//!
//! Root component: applies build-time config, loads the list on mount,
//! and switches between the list view and the detail view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DetailView, IdeaList, NewIdeaForm};
use crate::config::CONFIG;
use crate::context::AppContext;
use crate::models::Idea;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (ideas, set_ideas) = signal(Vec::<Idea>::new());
    let (current_id, set_current_id) = signal::<Option<u64>>(None);

    // Provide context to all children
    provide_context(AppContext::new((ideas, set_ideas), (current_id, set_current_id)));

    // Document title comes from build-time config
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(CONFIG.title);
    }

    // Load the list once on mount; failure leaves local state untouched
    Effect::new(move |_| {
        spawn_local(async move {
            match api::load_ideas(CONFIG.api_path).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} ideas", loaded.len()).into(),
                    );
                    set_ideas.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SYNC] Load failed: {e}").into());
                }
            }
        });
    });

    view! {
        <div class="container">
            <Show when=move || current_id.get().is_none()>
                <main class="main-view">
                    <h1>{CONFIG.heading}</h1>
                    <NewIdeaForm />
                    <IdeaList />
                </main>
            </Show>
            <Show when=move || current_id.get().is_some()>
                <DetailView />
            </Show>
        </div>
    }
}
