//! Soft reports: checks that never fail.
//!
//! A failed report writes one trace line and raises one non-fatal assertion
//! notification on its [`TraceSink`](crate::sink::TraceSink), then returns
//! normally. Nothing is rendered while the reporter is disabled.
//!
//! Call sites normally use the macros, which go through the process-wide
//! reporter and compile to an `if false` (arguments unevaluated) unless
//! [`COMPILED_IN`] is set:
//!
//! ```text
//! guardrail::report_if_not!(cache.len() <= limit, "cache over limit: {0} > {1}", cache.len(), limit);
//! guardrail::report_if_not_present!(services.get::<Logger>());
//! ```

use crate::config::{self, Settings};
use crate::names::service_type_name;
use crate::scoped::{overridden, with_override};
use crate::sink::{tracing_sink, SharedTraceSink};
use guardrail_error::{Message, Resource};
use parking_lot::RwLock;
use std::cell::RefCell;
use std::sync::Arc;

/// `true` when soft reports are compiled into this build: always with debug
/// assertions, and in release builds with the `diagnostics` feature.
pub const COMPILED_IN: bool = cfg!(any(debug_assertions, feature = "diagnostics"));

/// Writes failed soft checks to a trace sink.
#[derive(Debug)]
pub struct Reporter {
    sink: SharedTraceSink,
    enabled: bool,
}

impl Reporter {
    pub fn new(sink: SharedTraceSink, enabled: bool) -> Self {
        Reporter { sink, enabled }
    }

    /// A reporter writing to `tracing`, enabled when reports are compiled in
    /// and `settings.diagnostics` is set.
    pub fn from_settings(settings: Settings) -> Self {
        Self::new(tracing_sink(), COMPILED_IN && settings.diagnostics)
    }

    pub fn sink(&self) -> &SharedTraceSink {
        &self.sink
    }

    /// Enabled at construction and under the active [`Settings`].
    ///
    /// A thread-scoped `diagnostics: false` silences every reporter on that
    /// thread, including ones installed with [`with_reporter`].
    pub fn is_enabled(&self) -> bool {
        self.enabled && config::current().diagnostics
    }

    /// Report when `condition` is true.
    pub fn report_if<'a>(&self, condition: bool, message: impl Into<Message<'a>>) {
        if condition {
            self.fail(message);
        }
    }

    /// Report when `condition` is false.
    pub fn report_if_not<'a>(&self, condition: bool, message: impl Into<Message<'a>>) {
        if !condition {
            self.fail(message);
        }
    }

    /// Report a missing service, naming its type.
    pub fn report_if_not_present<T: ?Sized>(&self, part: Option<&T>) {
        if part.is_none() && self.is_enabled() {
            let service = service_type_name::<T>();
            self.fail(Message::format(
                Resource::ServiceMissing.template(),
                &[&service],
            ));
        }
    }

    /// Report unconditionally. `Message::Default` reports the generic
    /// recoverable-error text.
    pub fn fail<'a>(&self, message: impl Into<Message<'a>>) {
        if !self.is_enabled() {
            return;
        }
        let message = message.into();
        let text = match message.render(Resource::RecoverableError.template()) {
            Ok(text) => text,
            Err(err) => {
                let raw = message.raw().unwrap_or_default();
                tracing::warn!(%err, template = raw, "malformed report template");
                raw.to_owned()
            }
        };
        self.sink.write_line(&text);
        self.sink.assertion_failed(&text);
    }
}

static GLOBAL: RwLock<Option<Arc<Reporter>>> = parking_lot::const_rwlock(None);

thread_local! {
    static OVERRIDE: RefCell<Option<Arc<Reporter>>> = const { RefCell::new(None) };
}

/// The reporter used by the report macros on this thread.
///
/// Unless one was installed, the process-wide reporter is built from the
/// process-wide [`Settings`] on first use.
pub fn global() -> Arc<Reporter> {
    if let Some(reporter) = overridden(&OVERRIDE) {
        return reporter;
    }
    if let Some(reporter) = GLOBAL.read().as_ref() {
        return Arc::clone(reporter);
    }
    let mut slot = GLOBAL.write();
    Arc::clone(slot.get_or_insert_with(|| Arc::new(Reporter::from_settings(config::process_wide()))))
}

/// Replace the process-wide reporter.
pub fn install(reporter: Reporter) {
    *GLOBAL.write() = Some(Arc::new(reporter));
}

/// Drop the process-wide reporter so the next use rebuilds it from settings.
pub(crate) fn reset_global() {
    *GLOBAL.write() = None;
}

/// Run `f` with `reporter` receiving this thread's macro reports.
pub fn with_reporter<R>(reporter: Arc<Reporter>, f: impl FnOnce() -> R) -> R {
    with_override(&OVERRIDE, reporter, f)
}

/// Report when the condition holds.
///
/// `report_if!(cond)`, `report_if!(cond, message)` or
/// `report_if!(cond, template, args...)`.
#[macro_export]
macro_rules! report_if {
    ($cond:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global()
                .report_if($cond, $crate::Message::format($fmt, &[$(&$arg),+]));
        }
    };
    ($cond:expr, $message:expr $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().report_if($cond, $message);
        }
    };
    ($cond:expr $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().report_if($cond, $crate::Message::Default);
        }
    };
}

/// Report when the condition does not hold. Same forms as [`report_if!`].
#[macro_export]
macro_rules! report_if_not {
    ($cond:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global()
                .report_if_not($cond, $crate::Message::format($fmt, &[$(&$arg),+]));
        }
    };
    ($cond:expr, $message:expr $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().report_if_not($cond, $message);
        }
    };
    ($cond:expr $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().report_if_not($cond, $crate::Message::Default);
        }
    };
}

/// Report when the `Option<&T>` service lookup came back empty.
#[macro_export]
macro_rules! report_if_not_present {
    ($part:expr $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().report_if_not_present($part);
        }
    };
}

/// Report unconditionally: `report_fail!()`, `report_fail!(message)` or
/// `report_fail!(template, args...)`.
#[macro_export]
macro_rules! report_fail {
    () => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().fail($crate::Message::Default);
        }
    };
    ($fmt:expr, $($arg:expr),+ $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().fail($crate::Message::format($fmt, &[$(&$arg),+]));
        }
    };
    ($message:expr $(,)?) => {
        if $crate::report::COMPILED_IN {
            $crate::report::global().fail($message);
        }
    };
}
