//! Developer-facing signal raised when an internal invariant fails.
//!
//! The signal is a best-effort side channel for local development: it lets a
//! host pause, prompt for a debugger, or just shout in the log before the
//! `InternalError` propagates. It never changes the outcome of a check:
//! handlers run under `catch_unwind`, and a panicking handler is logged and
//! ignored.
//!
//! The signal fires only when both the per-call flag and
//! [`Settings::debug_signal`](crate::config::Settings::debug_signal) are set.

use crate::config;
use crate::scoped::{overridden, with_override};
use parking_lot::{Mutex, RwLock};
use std::cell::RefCell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Callback a host installs to receive developer signals.
pub type SignalCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Receiver of developer signals.
pub enum SignalHandler {
    /// Emit an `error` event under the `guardrail::signal` target (default).
    Tracing,
    /// Record messages in memory.
    Recording(Mutex<Vec<String>>),
    /// Host-supplied callback.
    Custom(SignalCallback),
    /// Ignore signals.
    Silent,
}

impl SignalHandler {
    pub fn recording() -> Self {
        Self::Recording(Mutex::new(Vec::new()))
    }

    pub fn custom(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(callback))
    }

    fn notify(&self, message: &str) {
        match self {
            Self::Tracing => {
                tracing::error!(target: "guardrail::signal", invariant = message, "internal invariant violated");
            }
            Self::Recording(messages) => messages.lock().push(message.to_owned()),
            Self::Custom(callback) => callback(message),
            Self::Silent => {}
        }
    }

    /// Messages recorded so far. Empty for handlers that don't record.
    pub fn recorded(&self) -> Vec<String> {
        match self {
            Self::Recording(messages) => messages.lock().clone(),
            Self::Tracing | Self::Custom(_) | Self::Silent => Vec::new(),
        }
    }
}

impl fmt::Debug for SignalHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tracing => f.write_str("SignalHandler::Tracing"),
            Self::Recording(messages) => {
                write!(f, "SignalHandler::Recording({} messages)", messages.lock().len())
            }
            Self::Custom(_) => f.write_str("SignalHandler::Custom"),
            Self::Silent => f.write_str("SignalHandler::Silent"),
        }
    }
}

/// Signal handler shared between threads.
pub type SharedSignalHandler = Arc<SignalHandler>;

static GLOBAL: RwLock<Option<SharedSignalHandler>> = parking_lot::const_rwlock(None);

thread_local! {
    static OVERRIDE: RefCell<Option<SharedSignalHandler>> = const { RefCell::new(None) };
}

/// Install the process-wide handler.
pub fn install(handler: SignalHandler) {
    *GLOBAL.write() = Some(Arc::new(handler));
}

/// The handler in effect on this thread.
pub fn current() -> SharedSignalHandler {
    if let Some(handler) = overridden(&OVERRIDE) {
        return handler;
    }
    GLOBAL
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(SignalHandler::Tracing))
}

/// Run `f` with `handler` receiving this thread's signals.
pub fn with_handler<R>(handler: SharedSignalHandler, f: impl FnOnce() -> R) -> R {
    with_override(&OVERRIDE, handler, f)
}

/// Notify the current handler, unless signals are switched off.
pub(crate) fn raise(message: &str) {
    if !config::current().debug_signal {
        return;
    }
    let handler = current();
    if catch_unwind(AssertUnwindSafe(|| handler.notify(message))).is_err() {
        tracing::warn!(target: "guardrail::signal", "developer signal handler panicked; ignoring");
    }
}

#[cfg(test)]
mod tests;
