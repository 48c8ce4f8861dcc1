#![allow(
    clippy::result_large_err,
    reason = "ValidationError is the one error type of every check; boxing it would add an allocation to each failure"
)]
//! Guard-clause checks for Rust APIs.
//!
//! Four facades share one error type and one message formatter:
//!
//! - [`requires`]: argument preconditions at public boundaries. Failures name
//!   the offending parameter.
//! - [`assumes`]: internal invariants. Failures are `InternalError` and may
//!   notify the developer [`signal`].
//! - [`report`]: soft checks that never fail. They write to a trace sink and
//!   compile away in release builds unless the `diagnostics` feature is on.
//! - [`verify`]: object and operation state (`InvalidOperation`,
//!   `ObjectDisposed`, platform status codes).
//!
//! Hard checks return [`ValidationResult`] and are propagated with `?`:
//!
//! ```text
//! fn resize(&mut self, name: Option<&str>, count: usize) -> ValidationResult<()> {
//!     let name = requires::not_null_or_empty(name, "name")?;
//!     requires::range(count > 0, "count", Message::Default)?;
//!     ...
//! }
//! ```

pub mod assumes;
pub mod config;
mod disposable;
mod enums;
mod logging;
mod names;
mod nullable;
pub mod report;
pub mod requires;
mod scoped;
pub mod signal;
pub mod sink;
pub mod verify;

pub use disposable::{DisposableObservable, DisposeFlag};
pub use enums::{EnumDefinition, EnumRepr};
pub use guardrail_error::{
    format_message, BoxedSource, ErrorData, ErrorKind, FormatError, Message, Resource,
    ValidationError, ValidationResult,
};
pub use logging::init_tracing;
pub use nullable::Nullable;
pub use report::Reporter;
pub use verify::{GenericStatusTranslator, StatusTranslator};

/// Hand a freshly built error back to a failing check.
///
/// Every hard failure passes through here exactly once.
pub(crate) fn raise(err: ValidationError) -> ValidationError {
    tracing::debug!(
        kind = err.kind().name(),
        param = err.param_name().unwrap_or_default(),
        "check failed"
    );
    err
}
