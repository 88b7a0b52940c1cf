//! Detail View Component
//!
//! Full-page view of a single idea: editable title, delete with inline
//! confirmation, and a details textarea that autosaves after 500ms of
//! typing inactivity.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::debounce::DebounceSlot;
use crate::ideas;

const DETAILS_DEBOUNCE_MS: u32 = 500;
const SAVE_STATUS_MS: u32 = 2_000;

#[component]
pub fn DetailView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Seed the draft from the idea open at mount time; the view is
    // remounted on every selection change so this never goes stale
    let initial = ctx
        .current_id
        .get_untracked()
        .and_then(|id| ideas::find(&ctx.ideas.get_untracked(), id).map(|i| i.details.clone()))
        .unwrap_or_default();
    let (draft_details, set_draft_details) = signal(initial);

    let (editing_title, set_editing_title) = signal(false);
    let (title_draft, set_title_draft) = signal(String::new());
    let (save_status, set_save_status) = signal("");

    // Single-slot timers: scheduling cancels whatever is pending
    let save_timer: StoredValue<DebounceSlot<Timeout>, LocalStorage> =
        StoredValue::new_local(DebounceSlot::new());
    let status_timer: StoredValue<DebounceSlot<Timeout>, LocalStorage> =
        StoredValue::new_local(DebounceSlot::new());

    // Write the buffered text through and show the saved indicator.
    // Runs from the debounce timer; a closed view means nothing to save.
    let flush_details = move |text: String| {
        let Some(id) = ctx.current_id.get_untracked() else { return };
        let mut changed = false;
        ctx.set_ideas.update(|list| changed = ideas::set_details(list, id, &text));
        if changed {
            ctx.persist();
            set_save_status.set("Saved ✓");
            status_timer.update_value(|slot| {
                slot.schedule(|| Timeout::new(SAVE_STATUS_MS, move || set_save_status.set("")));
            });
        }
    };

    let on_details_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
        let text = textarea.value();
        set_draft_details.set(text.clone());
        save_timer.update_value(|slot| {
            slot.schedule(|| Timeout::new(DETAILS_DEBOUNCE_MS, move || flush_details(text)));
        });
    };

    // Title
    let current_title = move || {
        ctx.current_id
            .get()
            .and_then(|id| ideas::find(&ctx.ideas.get(), id).map(|i| i.title.clone()))
            .unwrap_or_default()
    };

    let title_input: NodeRef<html::Input> = NodeRef::new();

    let start_title_edit = move |_| {
        set_title_draft.set(current_title());
        set_editing_title.set(true);
    };

    // Focus and select the text once the input exists
    Effect::new(move |_| {
        if editing_title.get() {
            if let Some(input) = title_input.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    // Guarded so the blur fired by closing the input (Escape, or after
    // Enter already committed) does not commit again
    let commit_title = move || {
        if !editing_title.get_untracked() {
            return;
        }
        set_editing_title.set(false);
        if let Some(id) = ctx.current_id.get_untracked() {
            let mut changed = false;
            ctx.set_ideas.update(|list| {
                changed = ideas::rename_idea(list, id, &title_draft.get_untracked());
            });
            if changed {
                ctx.persist();
            }
        }
    };

    let delete_idea = Callback::new(move |_| {
        let Some(id) = ctx.current_id.get_untracked() else { return };
        let mut removed = false;
        ctx.set_ideas.update(|list| removed = ideas::remove_idea(list, id));
        if removed {
            ctx.persist();
        }
        ctx.close_details();
    });

    view! {
        <div class="details-view">
            <div class="details-header">
                <button class="back-btn" on:click=move |_| ctx.close_details()>"← Back"</button>
                <DeleteConfirmButton button_class="delete-btn" label="Delete" on_confirm=delete_idea />
            </div>

            <Show when=move || !editing_title.get()>
                <h2 class="details-title" on:click=start_title_edit>{current_title}</h2>
            </Show>
            <Show when=move || editing_title.get()>
                <input
                    type="text"
                    class="details-title-input"
                    node_ref=title_input
                    prop:value=move || title_draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title_draft.set(input.value());
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            commit_title();
                        } else if ev.key() == "Escape" {
                            set_editing_title.set(false);
                        }
                    }
                    on:blur=move |_| commit_title()
                />
            </Show>

            <textarea
                class="details-textarea"
                placeholder="Add details..."
                prop:value=move || draft_details.get()
                on:input=on_details_input
            ></textarea>

            <div class="save-status">{move || save_status.get()}</div>
        </div>
    }
}
