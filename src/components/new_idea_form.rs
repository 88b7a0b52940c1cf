//! New Idea Form Component
//!
//! Input plus add button at the top of the list view. Submitting the
//! form (button or Enter) appends a new idea and clears the input;
//! whitespace-only titles are ignored.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::CONFIG;
use crate::context::{now_ms, AppContext};
use crate::ideas;

#[component]
pub fn NewIdeaForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());

    let add_idea = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        let mut added = false;
        ctx.set_ideas.update(|list| {
            added = ideas::add_idea(list, &title, now_ms()).is_some();
        });
        if added {
            ctx.persist();
            set_new_title.set(String::new());
        }
    };

    view! {
        <form class="add-form" on:submit=add_idea>
            <input
                type="text"
                class="idea-input"
                placeholder=CONFIG.placeholder
                prop:value=move || new_title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_title.set(input.value());
                }
            />
            <button type="submit">{CONFIG.add_button}</button>
        </form>
    }
}
