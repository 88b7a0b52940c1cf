//! Idea List Component
//!
//! Ordered list of idea rows with drag-and-drop reordering.
//! Uses leptos-dnd-list for the drag state; dropping on another row
//! splice-moves the dragged idea to that row's current position.

use leptos::prelude::*;

use crate::config::CONFIG;
use crate::context::{now_ms, AppContext};
use crate::format;
use crate::ideas;
use crate::models::Idea;

use leptos_dnd_list::*;

#[component]
pub fn IdeaList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let dnd = create_dnd_signals();

    // Runs only for drops on a different row; same-row drops never get here
    let on_move = move |from: usize, to: usize| {
        web_sys::console::log_1(&format!("[DND] Drop: from={}, to={}", from, to).into());
        let mut moved = false;
        ctx.set_ideas.update(|list| moved = ideas::reorder(list, from, to));
        if moved {
            ctx.persist();
        }
    };

    let rows = move || ctx.ideas.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <Show when=move || ctx.ideas.get().is_empty()>
            <div class="empty-state">
                <div class="empty-state-icon">"📋"</div>
                <p>{CONFIG.empty_message}</p>
            </div>
        </Show>
        <ul class="idea-list">
            <For
                each=rows
                key=|(index, idea): &(usize, Idea)| {
                    // The DnD handlers capture the row's index, so the index
                    // is part of the key: a reorder re-creates every shifted
                    // row rather than diffing by id, keeping captured indices
                    // in step with rendered positions. Title and details are
                    // keyed too since edits change what the row shows.
                    (*index, idea.id, idea.title.clone(), idea.details.clone())
                }
                children=move |(index, idea)| {
                    let id = idea.id;

                    // DnD handlers for this row
                    let on_dragstart = make_on_dragstart(dnd, index);
                    let on_dragover = make_on_dragover(dnd, index);
                    let on_dragleave = make_on_dragleave(dnd, index);
                    let on_drop = make_on_drop(dnd, index, on_move);
                    let on_dragend = make_on_dragend(dnd);

                    // Visual state
                    let row_class = move || {
                        let mut c = String::from("idea-item");
                        if dnd.is_dragging(index) { c.push_str(" dragging"); }
                        if dnd.is_drop_target(index) { c.push_str(" drag-over"); }
                        c
                    };

                    let preview_text = format::preview(&idea.details);
                    let preview_row = (!preview_text.is_empty()).then(|| view! {
                        <div class="idea-preview">{preview_text}</div>
                    });
                    let created_label = format::relative_date(idea.created, now_ms());
                    let char_count = idea.details.chars().count();

                    view! {
                        <li
                            class=row_class
                            draggable="true"
                            on:dragstart=on_dragstart
                            on:dragover=on_dragover
                            on:dragleave=on_dragleave
                            on:drop=on_drop
                            on:dragend=on_dragend
                        >
                            <div class="idea-content" on:click=move |_| ctx.set_current_id.set(Some(id))>
                                <div class="idea-title">{idea.title.clone()}</div>
                                {preview_row}
                                <div class="idea-meta">
                                    <span>"Created " {created_label}</span>
                                    <span>{char_count} " chars"</span>
                                </div>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
