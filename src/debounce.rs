//! Debounce Slot
//!
//! Single-slot scheduled-callback resource: scheduling a new callback
//! cancels the pending one, so a burst of triggers collapses into a
//! single trailing fire. The cancel-and-replace policy is timer-agnostic
//! so it can be tested without a browser clock.

use gloo_timers::callback::Timeout;

/// A scheduled callback that can be revoked before it fires
pub trait Cancelable {
    fn cancel(self);
}

impl Cancelable for Timeout {
    fn cancel(self) {
        Timeout::cancel(self);
    }
}

/// Single-slot debounce state
pub struct DebounceSlot<T: Cancelable> {
    /// The one timer allowed in flight
    pub pending: Option<T>,
}

impl<T: Cancelable> DebounceSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Cancel whatever is pending and start a fresh timer in its place
    pub fn schedule(&mut self, start: impl FnOnce() -> T) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.pending = Some(start());
    }
}

impl<T: Cancelable> Default for DebounceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeTimer {
        text: String,
        cancelled: Rc<RefCell<Vec<String>>>,
    }

    impl Cancelable for FakeTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.text);
        }
    }

    fn keystroke(slot: &mut DebounceSlot<FakeTimer>, text: &str, cancelled: &Rc<RefCell<Vec<String>>>) {
        let timer = FakeTimer {
            text: text.to_string(),
            cancelled: Rc::clone(cancelled),
        };
        slot.schedule(move || timer);
    }

    #[test]
    fn test_burst_fires_once_with_last_text() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slot = DebounceSlot::new();
        for text in ["p", "pl", "plant"] {
            keystroke(&mut slot, text, &cancelled);
        }
        // Quiet period: exactly one timer is left to fire, and it
        // carries the last text; the earlier ones were revoked unfired
        let fired = slot.pending.take().unwrap();
        assert_eq!(fired.text, "plant");
        assert_eq!(*cancelled.borrow(), vec!["p", "pl"]);
    }

    #[test]
    fn test_single_edit_schedules_one_timer() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slot = DebounceSlot::new();
        keystroke(&mut slot, "only", &cancelled);
        assert!(cancelled.borrow().is_empty());
        assert_eq!(slot.pending.take().unwrap().text, "only");
    }

    #[test]
    fn test_next_burst_clears_the_spent_handle() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slot = DebounceSlot::new();
        keystroke(&mut slot, "first", &cancelled);
        // After the first timer fires its spent handle stays in the
        // slot; the next edit cancels it (a no-op, clearTimeout-style)
        // and schedules anew
        keystroke(&mut slot, "second", &cancelled);
        assert_eq!(*cancelled.borrow(), vec!["first"]);
        assert_eq!(slot.pending.take().unwrap().text, "second");
    }
}
