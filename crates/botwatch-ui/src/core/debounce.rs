//! Cancellable single-slot timer resource used by debounced inputs.
//!
//! # Design
//! - The slot owns at most one pending timer handle; the handle cancels on drop
//!   (as `gloo::timers::callback::Timeout` does).
//! - Arming replaces the previous handle, so only the last keystroke inside the
//!   window fires.

/// Slot holding the pending timer of one debounced input.
#[derive(Debug)]
pub struct Debounce<H> {
    pending: Option<H>,
}

impl<H> Default for Debounce<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> Debounce<H> {
    /// Install `handle` as the pending timer, dropping (cancelling) any previous one.
    pub fn arm(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeTimer {
        cancelled: Rc<Cell<u32>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn rearming_cancels_previous_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = Debounce::default();
        slot.arm(FakeTimer {
            cancelled: cancelled.clone(),
        });
        slot.arm(FakeTimer {
            cancelled: cancelled.clone(),
        });
        assert_eq!(cancelled.get(), 1);
        assert!(slot.cancel());
        assert_eq!(cancelled.get(), 2);
    }

    #[test]
    fn cancel_drops_pending_timer_once() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = Debounce::default();
        slot.arm(FakeTimer {
            cancelled: cancelled.clone(),
        });
        assert!(slot.cancel());
        assert!(!slot.cancel());
        assert_eq!(cancelled.get(), 1);
    }
}
