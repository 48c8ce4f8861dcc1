//! Object and operation state checks.
//!
//! The caller passed valid arguments but called at the wrong time, so failures
//! are state errors (`InvalidOperation`, `ObjectDisposed`) rather than
//! argument errors.

use crate::disposable::DisposableObservable;
use crate::raise;
use guardrail_error::{ErrorKind, Message, ValidationError, ValidationResult};

#[cold]
fn invalid_operation(message: Message<'_>) -> ValidationError {
    raise(ValidationError::from_message(ErrorKind::InvalidOperation, message))
}

#[cold]
fn disposed(object_name: &str, message: Message<'_>) -> ValidationError {
    let err = match message {
        Message::Default => ValidationError::object_disposed(object_name, None),
        Message::Literal(text) => ValidationError::object_disposed(object_name, Some(text)),
        Message::Format { .. } => {
            ValidationError::from_message(ErrorKind::ObjectDisposed, message).with_param(object_name)
        }
    };
    raise(err)
}

/// Fail with `InvalidOperation` when `condition` is false.
#[inline]
pub fn operation<'a>(condition: bool, message: impl Into<Message<'a>>) -> ValidationResult<()> {
    if condition {
        Ok(())
    } else {
        Err(invalid_operation(message.into()))
    }
}

/// As [`operation`], attaching `help_link` to the error.
pub fn operation_with_help<'a>(
    condition: bool,
    message: impl Into<Message<'a>>,
    help_link: Option<&str>,
) -> ValidationResult<()> {
    if condition {
        return Ok(());
    }
    Err(invalid_operation(message.into()).with_help_link(help_link))
}

/// Fail with `ObjectDisposed` when `value` has been disposed, naming its type.
pub fn not_disposed<'a, D>(value: &D, message: impl Into<Message<'a>>) -> ValidationResult<()>
where
    D: DisposableObservable + ?Sized,
{
    if value.is_disposed() {
        return Err(disposed(value.type_name(), message.into()));
    }
    Ok(())
}

/// Fail with `ObjectDisposed` when `condition` is false.
///
/// The object is named after the type of `disposed_value`, or left unnamed
/// when it is `None`.
pub fn not_disposed_if<'a, T: ?Sized>(
    condition: bool,
    disposed_value: Option<&T>,
    message: impl Into<Message<'a>>,
) -> ValidationResult<()> {
    if condition {
        return Ok(());
    }
    let object_name = disposed_value.map_or("", |_| std::any::type_name::<T>());
    Err(disposed(object_name, message.into()))
}

/// Fail with an unnamed `ObjectDisposed` when `condition` is false.
pub fn not_disposed_unnamed<'a>(
    condition: bool,
    message: impl Into<Message<'a>>,
) -> ValidationResult<()> {
    not_disposed_if::<()>(condition, None, message)
}

/// Always fails with `InvalidOperation`.
pub fn fail_operation<'a, T>(message: impl Into<Message<'a>>) -> ValidationResult<T> {
    Err(invalid_operation(message.into()))
}

/// Turns a failing platform status code into an error.
///
/// Implement this to map codes onto richer errors, for example a host's own
/// table of well-known codes.
pub trait StatusTranslator: Send + Sync {
    /// Build the error for a negative `code`.
    ///
    /// `ignore_previous_platform_calls` asks the translator not to consult
    /// per-thread error details left behind by earlier platform calls.
    fn translate(&self, code: i32, ignore_previous_platform_calls: bool) -> ValidationError;
}

/// Translator producing `PlatformStatus` errors that carry the raw code.
#[derive(Copy, Clone, Debug, Default)]
pub struct GenericStatusTranslator;

impl StatusTranslator for GenericStatusTranslator {
    fn translate(&self, code: i32, _ignore_previous_platform_calls: bool) -> ValidationError {
        ValidationError::platform_status(
            code,
            format!("platform call failed with status 0x{code:08X}"),
        )
    }
}

/// Fail when `code` is negative. Zero and positive codes, including the
/// "false" success code 1, pass.
pub fn hresult(code: i32, ignore_previous_platform_calls: bool) -> ValidationResult<()> {
    hresult_with(&GenericStatusTranslator, code, ignore_previous_platform_calls)
}

/// As [`hresult`], with a caller-supplied translator.
pub fn hresult_with(
    translator: &dyn StatusTranslator,
    code: i32,
    ignore_previous_platform_calls: bool,
) -> ValidationResult<()> {
    if code >= 0 {
        return Ok(());
    }
    let err = translator.translate(code, ignore_previous_platform_calls);
    tracing::trace!(code, ignore_previous_platform_calls, "translated platform status");
    Err(raise(err))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
