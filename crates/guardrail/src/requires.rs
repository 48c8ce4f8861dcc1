//! Argument preconditions.
//!
//! Checks for values handed in by a caller. Every failure is an argument
//! error naming the offending parameter, except [`fail`] and its variants
//! which report against no parameter at all.
//!
//! Absence is `None`. Value-returning checks hand the validated value back so
//! they can be used inline:
//!
//! ```text
//! let name = requires::not_null_or_empty(name, "name")?;
//! let color: Color = requires::defined(raw, "color")?;
//! ```

use crate::enums::{EnumDefinition, EnumRepr};
use crate::names::short_type_name;
use crate::nullable::Nullable;
use crate::raise;
use guardrail_error::{
    BoxedSource, ErrorKind, Message, Resource, ValidationError, ValidationResult,
};
use std::iter::Peekable;

/// Empty or starting with NUL. A leading NUL counts as empty for
/// compatibility with callers that pass NUL-terminated buffers.
fn is_empty_text(text: &str) -> bool {
    text.is_empty() || text.starts_with('\0')
}

#[cold]
fn null(param_name: &str) -> ValidationError {
    raise(ValidationError::argument_null(param_name))
}

#[cold]
fn invalid_with(resource: Resource, param_name: &str) -> ValidationError {
    raise(ValidationError::argument_invalid(
        resource.render(&[&param_name]),
        param_name,
    ))
}

#[cold]
fn invalid(param_name: &str, message: Message<'_>) -> ValidationError {
    raise(ValidationError::from_message(ErrorKind::ArgumentInvalid, message).with_param(param_name))
}

/// Fail with `ArgumentNull` when `value` is absent.
#[inline]
pub fn not_null<T>(value: Option<T>, param_name: &str) -> ValidationResult<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(null(param_name)),
    }
}

/// Fail when `value` is absent, empty, or starts with NUL.
pub fn not_null_or_empty<'v>(value: Option<&'v str>, param_name: &str) -> ValidationResult<&'v str> {
    let text = not_null(value, param_name)?;
    if is_empty_text(text) {
        return Err(invalid_with(Resource::EmptyString, param_name));
    }
    Ok(text)
}

/// As [`not_null_or_empty`], and also fail when `value` is all white space.
pub fn not_null_or_white_space<'v>(
    value: Option<&'v str>,
    param_name: &str,
) -> ValidationResult<&'v str> {
    let text = not_null_or_empty(value, param_name)?;
    if text.trim().is_empty() {
        return Err(invalid_with(Resource::Whitespace, param_name));
    }
    Ok(text)
}

/// Fail when `values` is absent or yields nothing.
///
/// Pulls at most one element, and keeps it: the returned iterator still yields
/// every element, so single-pass producers are not drained.
pub fn not_null_or_empty_seq<I: IntoIterator>(
    values: Option<I>,
    param_name: &str,
) -> ValidationResult<Peekable<I::IntoIter>> {
    let mut iter = not_null(values, param_name)?.into_iter().peekable();
    if iter.peek().is_none() {
        return Err(invalid_with(Resource::EmptyArray, param_name));
    }
    Ok(iter)
}

/// Fail when `values` is absent, empty, or contains an absent element.
///
/// Scans the whole sequence.
pub fn not_null_empty_or_null_elements<I>(values: Option<I>, param_name: &str) -> ValidationResult<()>
where
    I: IntoIterator,
    I::Item: Nullable,
{
    let mut has_elements = false;
    for value in not_null(values, param_name)? {
        has_elements = true;
        if value.is_null() {
            return Err(invalid_with(Resource::NullElement, param_name));
        }
    }
    if !has_elements {
        return Err(invalid_with(Resource::EmptyArray, param_name));
    }
    Ok(())
}

/// Fail when `values` contains an absent element. An absent `values` passes.
pub fn null_or_not_null_elements<I>(values: Option<I>, param_name: &str) -> ValidationResult<()>
where
    I: IntoIterator,
    I::Item: Nullable,
{
    let Some(values) = values else {
        return Ok(());
    };
    for value in values {
        if value.is_null() {
            return Err(invalid_with(Resource::NullElement, param_name));
        }
    }
    Ok(())
}

/// Fail with `ArgumentOutOfRange` when `condition` is false.
#[inline]
pub fn range<'a>(
    condition: bool,
    param_name: &str,
    message: impl Into<Message<'a>>,
) -> ValidationResult<()> {
    if condition {
        Ok(())
    } else {
        fail_range(param_name, message)
    }
}

/// Always fails with `ArgumentOutOfRange`. An empty literal message uses the
/// default text.
pub fn fail_range<'a, T>(param_name: &str, message: impl Into<Message<'a>>) -> ValidationResult<T> {
    let err = match message.into() {
        Message::Default => ValidationError::out_of_range(param_name, None),
        Message::Literal(text) => ValidationError::out_of_range(param_name, Some(text)),
        message @ Message::Format { .. } => {
            ValidationError::from_message(ErrorKind::ArgumentOutOfRange, message).with_param(param_name)
        }
    };
    Err(raise(err))
}

/// Fail with `ArgumentInvalid` when `condition` is false.
#[inline]
pub fn argument<'a>(
    condition: bool,
    param_name: &str,
    message: impl Into<Message<'a>>,
) -> ValidationResult<()> {
    if condition {
        Ok(())
    } else {
        Err(invalid(param_name, message.into()))
    }
}

/// Decode `raw` into `E`, failing with `InvalidEnumValue` when it names no member.
///
/// The raw value is rendered in full for every width. `i32`-backed enums
/// report the enum's short name and carry `param_name`; every other
/// representation reports the full type path and names no parameter.
pub fn defined<E: EnumDefinition>(raw: E::Repr, param_name: &str) -> ValidationResult<E> {
    if let Some(value) = E::from_repr(raw) {
        return Ok(value);
    }
    let err = if <E::Repr as EnumRepr>::INT32 {
        let message = Resource::InvalidEnumArgument.render(&[
            &param_name,
            &raw,
            &short_type_name(E::enum_name()),
        ]);
        ValidationError::new(ErrorKind::InvalidEnumValue, message).with_param(param_name)
    } else {
        let message = Resource::NotEnum.render(&[&param_name, &raw, &E::enum_name()]);
        ValidationError::new(ErrorKind::InvalidEnumValue, message)
    };
    Err(raise(err))
}

/// Fail with `ArgumentInvalid` when `value` equals `T::default()`.
pub fn not_default<T: Default + PartialEq>(value: T, param_name: &str) -> ValidationResult<T> {
    if value == T::default() {
        let message =
            Resource::StructIsDefault.render(&[&param_name, &std::any::type_name::<T>()]);
        return Err(raise(ValidationError::argument_invalid(message, param_name)));
    }
    Ok(value)
}

/// Fail with `ArgumentInvalid` on the first element rejected by `predicate`.
///
/// An absent `values` or `predicate` is `ArgumentNull` naming `"values"` or
/// `"predicate"`. A panicking predicate unwinds through this call.
pub fn valid_elements<'a, I, P>(
    values: Option<I>,
    predicate: Option<P>,
    param_name: &str,
    message: impl Into<Message<'a>>,
) -> ValidationResult<()>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let values = not_null(values, "values")?;
    let mut predicate = not_null(predicate, "predicate")?;
    let message = message.into();
    for value in values {
        if !predicate(&value) {
            return Err(invalid(param_name, message));
        }
    }
    Ok(())
}

/// Always fails with `ArgumentInvalid`, naming no parameter.
///
/// ```text
/// let port: u16 = match scheme {
///     "http" => 80,
///     other => requires::fail(Message::format("unknown scheme {0}", &[&other]))?,
/// };
/// ```
pub fn fail<'a, T>(message: impl Into<Message<'a>>) -> ValidationResult<T> {
    Err(raise(ValidationError::from_message(
        ErrorKind::ArgumentInvalid,
        message.into(),
    )))
}

/// Always fails with `ArgumentInvalid` caused by `source`.
pub fn fail_with_source<'a, T>(
    source: impl Into<BoxedSource>,
    message: impl Into<Message<'a>>,
) -> ValidationResult<T> {
    Err(raise(
        ValidationError::from_message(ErrorKind::ArgumentInvalid, message.into())
            .with_source(source),
    ))
}

/// Fail with `InvalidOperation` when `condition` is false.
pub fn valid_state<'a>(condition: bool, message: impl Into<Message<'a>>) -> ValidationResult<()> {
    if condition {
        return Ok(());
    }
    Err(raise(ValidationError::from_message(
        ErrorKind::InvalidOperation,
        message.into(),
    )))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
