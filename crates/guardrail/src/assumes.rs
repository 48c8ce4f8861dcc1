//! Internal invariants.
//!
//! A failure here means the calling code has a bug, not that its caller passed
//! bad input. Every failure is an `InternalError` and, unless suppressed, first
//! notifies the developer [`signal`](crate::signal).

use crate::names::service_type_name;
use crate::{raise, signal};
use guardrail_error::{BoxedSource, ErrorKind, Message, ValidationError, ValidationResult};
use std::any::Any;
use std::iter::Peekable;

/// Build an `InternalError`, notifying the developer signal when `show_signal`
/// is set.
///
/// The signal is notified before the error is handed back and never affects it.
pub fn internal_error<'a>(
    message: impl Into<Message<'a>>,
    source: Option<BoxedSource>,
    show_signal: bool,
) -> ValidationError {
    let mut err = ValidationError::from_message(ErrorKind::InternalError, message.into());
    if let Some(source) = source {
        err = err.with_source(source);
    }
    if show_signal {
        signal::raise(err.message());
    }
    raise(err)
}

#[cold]
fn broken(message: Message<'_>) -> ValidationError {
    internal_error(message, None, true)
}

/// Fail when `condition` is false.
#[inline]
pub fn is_true<'a>(condition: bool, message: impl Into<Message<'a>>) -> ValidationResult<()> {
    if condition {
        Ok(())
    } else {
        Err(broken(message.into()))
    }
}

/// Fail when `condition` is true.
#[inline]
pub fn is_false<'a>(condition: bool, message: impl Into<Message<'a>>) -> ValidationResult<()> {
    is_true(!condition, message)
}

#[inline]
pub fn not_null<T>(value: Option<T>) -> ValidationResult<T> {
    value.ok_or_else(|| broken(Message::Default))
}

pub fn is_none<T>(value: &Option<T>) -> ValidationResult<()> {
    is_true(value.is_none(), Message::Default)
}

/// Fail when `value` is absent, empty, or starts with NUL.
pub fn not_null_or_empty(value: Option<&str>) -> ValidationResult<&str> {
    let text = not_null(value)?;
    is_true(!text.is_empty() && !text.starts_with('\0'), Message::Default)?;
    Ok(text)
}

/// Fail when `values` is absent or yields nothing. The peeked element stays
/// in the returned iterator.
pub fn not_null_or_empty_seq<I: IntoIterator>(
    values: Option<I>,
) -> ValidationResult<Peekable<I::IntoIter>> {
    let mut iter = not_null(values)?.into_iter().peekable();
    is_true(iter.peek().is_some(), Message::Default)?;
    Ok(iter)
}

/// Fail unless `value` is a `T`. Returns it downcast.
pub fn is_type<T: Any>(value: &dyn Any) -> ValidationResult<&T> {
    value.downcast_ref::<T>().ok_or_else(|| broken(Message::Default))
}

/// Mark a path the author believes cannot run.
///
/// ```text
/// let slot = match state {
///     State::Ready(slot) => slot,
///     State::Closed => return assumes::not_reachable(),
/// };
/// ```
pub fn not_reachable<T>() -> ValidationResult<T> {
    Err(broken(Message::Default))
}

/// Fail when a required service `component` was never registered.
///
/// The message names the service type, looking through one `Arc`, `Rc` or
/// `Box` wrapper.
pub fn present<T>(component: Option<T>) -> ValidationResult<T> {
    match component {
        Some(component) => Ok(component),
        None => {
            let service = service_type_name::<T>();
            let message = guardrail_error::Resource::ServiceMissing.render(&[&service]);
            Err(broken(Message::Literal(&message)))
        }
    }
}

/// Always fails.
pub fn fail<'a, T>(message: impl Into<Message<'a>>) -> ValidationResult<T> {
    Err(broken(message.into()))
}

/// Always fails, wrapping `source`.
pub fn fail_with_source<'a, T>(
    message: impl Into<Message<'a>>,
    source: impl Into<BoxedSource>,
) -> ValidationResult<T> {
    Err(internal_error(message, Some(source.into()), true))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
