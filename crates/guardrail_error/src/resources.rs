//! Compiled-in default message templates.

use crate::format::format_message;
use std::fmt;

/// Key into the default message table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    EmptyArray,
    EmptyString,
    EnumNotDefined,
    NotEnum,
    NullElement,
    StructIsDefault,
    Whitespace,
    InternalError,
    InvalidEnumArgument,
    ServiceMissing,
    ArgumentNull,
    ArgumentInvalid,
    ArgumentOutOfRange,
    InvalidOperation,
    ObjectDisposed,
    RecoverableError,
}

impl Resource {
    /// Every key, in declaration order.
    pub const ALL: [Resource; 16] = [
        Resource::EmptyArray,
        Resource::EmptyString,
        Resource::EnumNotDefined,
        Resource::NotEnum,
        Resource::NullElement,
        Resource::StructIsDefault,
        Resource::Whitespace,
        Resource::InternalError,
        Resource::InvalidEnumArgument,
        Resource::ServiceMissing,
        Resource::ArgumentNull,
        Resource::ArgumentInvalid,
        Resource::ArgumentOutOfRange,
        Resource::InvalidOperation,
        Resource::ObjectDisposed,
        Resource::RecoverableError,
    ];

    pub const fn template(self) -> &'static str {
        match self {
            Resource::EmptyArray => "'{0}' must contain at least one element.",
            Resource::EmptyString => {
                "'{0}' cannot be an empty string (\"\") or start with the null character."
            }
            Resource::EnumNotDefined => "'{0}' must be set to a value defined by the enum '{1}'.",
            Resource::NotEnum | Resource::InvalidEnumArgument => {
                "The value of argument '{0}' ({1}) is invalid for Enum type '{2}'."
            }
            Resource::NullElement => "'{0}' cannot contain a null (None) element.",
            Resource::StructIsDefault => "'{0}' cannot be the default value defined by '{1}'.",
            Resource::Whitespace => {
                "The argument cannot consist entirely of white space characters."
            }
            Resource::InternalError => {
                "An internal error occurred. Please contact customer support."
            }
            Resource::ServiceMissing => "Cannot find an instance of the {0} service.",
            Resource::ArgumentNull => "Value cannot be null.",
            Resource::ArgumentInvalid => "Value does not fall within the expected range.",
            Resource::ArgumentOutOfRange => {
                "Specified argument was out of the range of valid values."
            }
            Resource::InvalidOperation => {
                "Operation is not valid due to the current state of the object."
            }
            Resource::ObjectDisposed => "Cannot access a disposed object.",
            Resource::RecoverableError => "A recoverable error has been detected.",
        }
    }

    /// Number of arguments the template expects.
    pub fn arity(self) -> usize {
        let template = self.template();
        template
            .match_indices('{')
            .filter_map(|(at, _)| template[at + 1..].chars().next()?.to_digit(10))
            .map(|digit| digit as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Expand the template. Falls back to the raw template when `args` is
    /// shorter than [`Resource::arity`].
    pub fn render(self, args: &[&dyn fmt::Display]) -> String {
        format_message(self.template(), args).unwrap_or_else(|_| self.template().to_owned())
    }
}

#[cfg(test)]
mod tests;
