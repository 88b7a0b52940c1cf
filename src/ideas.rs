//! Idea List Operations
//!
//! Pure mutations on the ordered idea list. Every function here is
//! deterministic and DOM-free; the components layer decides when to
//! persist and re-render.

use crate::models::Idea;

/// Ids derive from the creation timestamp; two adds landing in the same
/// millisecond would collide, so nudge forward past any id already taken.
pub fn allocate_id(ideas: &[Idea], now_ms: u64) -> u64 {
    let mut id = now_ms;
    while ideas.iter().any(|i| i.id == id) {
        id += 1;
    }
    id
}

/// Append a new idea with a fresh id and empty details.
/// Whitespace-only titles are rejected. Returns the new id.
pub fn add_idea(ideas: &mut Vec<Idea>, title: &str, now_ms: u64) -> Option<u64> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let id = allocate_id(ideas, now_ms);
    ideas.push(Idea::new(id, title.to_string(), now_ms));
    Some(id)
}

/// Remove the idea with `id`. Returns whether anything was removed.
pub fn remove_idea(ideas: &mut Vec<Idea>, id: u64) -> bool {
    let before = ideas.len();
    ideas.retain(|i| i.id != id);
    ideas.len() != before
}

/// Retitle the idea with `id`. Empty and unchanged titles are no-ops.
/// Returns whether the list changed.
pub fn rename_idea(ideas: &mut Vec<Idea>, id: u64, new_title: &str) -> bool {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return false;
    }
    match ideas.iter_mut().find(|i| i.id == id) {
        Some(idea) if idea.title != new_title => {
            idea.title = new_title.to_string();
            true
        }
        _ => false,
    }
}

/// Set `details` verbatim (no trimming). Returns whether the idea exists.
pub fn set_details(ideas: &mut Vec<Idea>, id: u64, text: &str) -> bool {
    match ideas.iter_mut().find(|i| i.id == id) {
        Some(idea) => {
            idea.details = text.to_string();
            true
        }
        None => false,
    }
}

/// Move the idea at `from` to `to` (splice semantics: remove, then insert
/// at the target's current position). Out-of-range or same-slot moves are
/// no-ops. Returns whether the order changed.
pub fn reorder(ideas: &mut Vec<Idea>, from: usize, to: usize) -> bool {
    if from == to || from >= ideas.len() || to >= ideas.len() {
        return false;
    }
    let moved = ideas.remove(from);
    ideas.insert(to, moved);
    true
}

pub fn find(ideas: &[Idea], id: u64) -> Option<&Idea> {
    ideas.iter().find(|i| i.id == id)
}
