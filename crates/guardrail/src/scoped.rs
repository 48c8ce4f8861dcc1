//! Thread-scoped overrides of process-wide collaborators.
//!
//! Each override slot is a `thread_local!` holding `Option<T>`. Tests running
//! on separate threads never observe each other's overrides.

use std::cell::RefCell;
use std::thread::LocalKey;

type Slot<T> = LocalKey<RefCell<Option<T>>>;

/// Restores the previous slot content on drop, including during unwinding.
struct Restore<T: 'static> {
    slot: &'static Slot<T>,
    previous: Option<T>,
}

impl<T: 'static> Drop for Restore<T> {
    fn drop(&mut self) {
        let previous = self.previous.take();
        self.slot.with(|cell| cell.replace(previous));
    }
}

/// Run `f` with `value` placed in `slot`, restoring the old content afterwards.
pub(crate) fn with_override<T: 'static, R>(
    slot: &'static Slot<T>,
    value: T,
    f: impl FnOnce() -> R,
) -> R {
    let previous = slot.with(|cell| cell.replace(Some(value)));
    let _restore = Restore { slot, previous };
    f()
}

pub(crate) fn overridden<T: Clone + 'static>(slot: &'static Slot<T>) -> Option<T> {
    slot.with(|cell| cell.borrow().clone())
}
