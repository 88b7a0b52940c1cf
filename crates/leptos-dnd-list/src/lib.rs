//! Leptos DnD List Utilities
//!
//! Drag-and-drop reordering for flat lists using native HTML5 drag events.
//! The transition logic is kept in the plain `DndState` struct so it can be
//! tested without a browser; the `make_on_*` constructors wrap it in Leptos
//! signals for wiring into views.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Drag-reorder state: idle -> dragging -> (over target)* -> dropped/cancelled
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DndState {
    /// Index the current drag started from
    pub source: Option<usize>,
    /// Index currently hovered as a drop target
    pub over: Option<usize>,
}

impl DndState {
    /// Begin dragging the row at `index`
    pub fn drag_start(&mut self, index: usize) {
        self.source = Some(index);
        self.over = None;
    }

    /// Hovering over `index`; the dragged row itself is never a target
    pub fn drag_over(&mut self, index: usize) {
        if let Some(src) = self.source {
            if src != index {
                self.over = Some(index);
            }
        }
    }

    /// Left `index`; only clears the marker if it is still on that row
    pub fn drag_leave(&mut self, index: usize) {
        if self.over == Some(index) {
            self.over = None;
        }
    }

    /// Drop on `index`. Returns `(from, to)` when this is a real move,
    /// `None` when idle or dropping on the dragged row itself.
    pub fn drop_on(&mut self, index: usize) -> Option<(usize, usize)> {
        self.over = None;
        match self.source {
            Some(src) if src != index => Some((src, index)),
            _ => None,
        }
    }

    /// Always returns to idle, whether or not a drop happened
    pub fn drag_end(&mut self) {
        *self = Self::default();
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state_read: ReadSignal<DndState>,
    pub state_write: WriteSignal<DndState>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (state_read, state_write) = signal(DndState::default());
    DndSignals {
        state_read,
        state_write,
    }
}

impl DndSignals {
    /// Is the row at `index` the one being dragged?
    pub fn is_dragging(&self, index: usize) -> bool {
        self.state_read.get().source == Some(index)
    }

    /// Is the row at `index` the current drop target?
    pub fn is_drop_target(&self, index: usize) -> bool {
        self.state_read.get().over == Some(index)
    }
}

/// Create dragstart handler for the row at `index`
pub fn make_on_dragstart(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            let _ = dt.set_data("text/plain", &index.to_string());
        }
        dnd.state_write.update(|s| s.drag_start(index));
    }
}

/// Create dragover handler for the row at `index`.
/// `prevent_default` is required or the browser refuses the drop.
pub fn make_on_dragover(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        dnd.state_write.update(|s| s.drag_over(index));
    }
}

/// Create dragleave handler for the row at `index`
pub fn make_on_dragleave(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.state_write.update(|s| s.drag_leave(index));
    }
}

/// Create drop handler for the row at `index`; `on_move(from, to)` runs
/// only when the drop actually reorders
pub fn make_on_drop<F>(dnd: DndSignals, index: usize, on_move: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(usize, usize) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let mut moved = None;
        dnd.state_write.update(|s| moved = s.drop_on(index));
        if let Some((from, to)) = moved {
            on_move(from, to);
        }
    }
}

/// Create dragend handler; clears every marker regardless of outcome
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.state_write.update(|s| s.drag_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_reorders() {
        let mut s = DndState::default();
        s.drag_start(2);
        s.drag_over(0);
        assert_eq!(s.over, Some(0));
        assert_eq!(s.drop_on(0), Some((2, 0)));
        s.drag_end();
        assert_eq!(s, DndState::default());
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut s = DndState::default();
        s.drag_start(1);
        s.drag_over(1);
        assert_eq!(s.over, None);
        assert_eq!(s.drop_on(1), None);
    }

    #[test]
    fn test_drop_while_idle_is_noop() {
        let mut s = DndState::default();
        assert_eq!(s.drop_on(3), None);
    }

    #[test]
    fn test_drag_leave_only_clears_matching_row() {
        let mut s = DndState::default();
        s.drag_start(0);
        s.drag_over(2);
        s.drag_leave(1);
        assert_eq!(s.over, Some(2));
        s.drag_leave(2);
        assert_eq!(s.over, None);
    }

    #[test]
    fn test_cancelled_drag_returns_to_idle() {
        let mut s = DndState::default();
        s.drag_start(4);
        s.drag_over(0);
        // No drop fired, dragend still cleans up
        s.drag_end();
        assert_eq!(s, DndState::default());
    }
}
