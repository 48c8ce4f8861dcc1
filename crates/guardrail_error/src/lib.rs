#![allow(
    clippy::result_large_err,
    reason = "ValidationError is the one error type of every check; boxing it would add an allocation to each failure"
)]
//! Error object and message formatting shared by the guardrail checks.
//!
//! - [`ValidationError`] / [`ErrorKind`]: what a failed check returns
//! - [`format_message`] / [`Message`]: positional template expansion, done
//!   only on the failure path
//! - [`Resource`]: the compiled-in default message table
//!
//! # Error Invariant
//!
//! Every failure produces exactly one `ValidationError` with a message. When
//! the caller supplies no message the kind's default text is used.

mod error;
mod format;
mod resources;

pub use error::{BoxedSource, ErrorData, ErrorKind, ValidationError, ValidationResult};
pub use format::{format_message, FormatError, Message};
pub use resources::Resource;
