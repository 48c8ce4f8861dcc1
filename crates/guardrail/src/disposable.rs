//! The "can report disposed status" capability.

use std::sync::atomic::{AtomicBool, Ordering};

/// An object that knows whether it has been disposed.
///
/// Consumed by [`verify::not_disposed`](crate::verify::not_disposed).
pub trait DisposableObservable {
    fn is_disposed(&self) -> bool;

    /// Name reported when the object is found disposed.
    ///
    /// Resolves to the implementor's concrete type, also through `dyn`.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A one-way disposed flag, for embedding in types that implement
/// [`DisposableObservable`].
#[derive(Debug, Default)]
pub struct DisposeFlag(AtomicBool);

impl DisposeFlag {
    pub const fn new() -> Self {
        DisposeFlag(AtomicBool::new(false))
    }

    /// Mark disposed. Returns `true` only for the call that flipped the flag.
    pub fn dispose(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }
}

impl DisposableObservable for DisposeFlag {
    fn is_disposed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
