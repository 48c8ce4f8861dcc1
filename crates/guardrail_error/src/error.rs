//! The error object produced by every failed check.
//!
//! # Structured Error Categories
//!
//! `ErrorKind` tags what went wrong so callers can match on the category
//! instead of parsing messages. The constructors below populate both `kind`
//! and `message`, falling back to the kind's fixed default text when the
//! caller supplied none, so a failure always carries a message.

use crate::format::Message;
use crate::resources::Resource;
use std::error::Error;
use std::fmt;

/// Result of a check that yields `T` on success.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Boxed cause attached to a [`ValidationError`].
pub type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Category of a failed check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // Argument errors, raised by precondition checks
    /// A required value was absent.
    ArgumentNull,
    /// A value was present but broke a stated rule.
    ArgumentInvalid,
    /// A value fell outside its accepted range.
    ArgumentOutOfRange,
    /// A raw value is not a named member of its enum.
    InvalidEnumValue,

    // Invariant errors
    /// An internal invariant did not hold.
    InternalError,

    // State errors
    /// An operation was invoked in the wrong state.
    InvalidOperation,
    /// An operation was invoked after disposal.
    ObjectDisposed,
    /// A negative platform status code was translated into an error.
    PlatformStatus,
}

impl ErrorKind {
    /// `true` for the four kinds that blame a caller-supplied argument.
    pub fn is_argument_error(self) -> bool {
        matches!(
            self,
            Self::ArgumentNull
                | Self::ArgumentInvalid
                | Self::ArgumentOutOfRange
                | Self::InvalidEnumValue
        )
    }

    /// Stable kebab-case name, used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Self::ArgumentNull => "argument-null",
            Self::ArgumentInvalid => "argument-invalid",
            Self::ArgumentOutOfRange => "argument-out-of-range",
            Self::InvalidEnumValue => "invalid-enum-value",
            Self::InternalError => "internal-error",
            Self::InvalidOperation => "invalid-operation",
            Self::ObjectDisposed => "object-disposed",
            Self::PlatformStatus => "platform-status",
        }
    }

    /// Message used when the caller supplied none.
    pub fn default_message(self) -> &'static str {
        let resource = match self {
            Self::ArgumentNull => Resource::ArgumentNull,
            Self::ArgumentInvalid | Self::InvalidEnumValue => Resource::ArgumentInvalid,
            Self::ArgumentOutOfRange => Resource::ArgumentOutOfRange,
            Self::InternalError => Resource::InternalError,
            Self::InvalidOperation | Self::PlatformStatus => Resource::InvalidOperation,
            Self::ObjectDisposed => Resource::ObjectDisposed,
        };
        resource.template()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extra key/values attached to an error for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorData {
    pub key: String,
    pub values: Vec<String>,
}

/// A failed check.
///
/// Built once on the failure path and handed back to the caller in `Err`.
/// Never shared or mutated after the check returns.
#[derive(Debug)]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
    /// Offending parameter, or the disposed object's type for `ObjectDisposed`.
    param_name: Option<String>,
    help_link: Option<String>,
    status_code: Option<i32>,
    data: Vec<ErrorData>,
    source: Option<BoxedSource>,
}

impl ValidationError {
    /// Create an error with an explicit message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            kind,
            message: message.into(),
            param_name: None,
            help_link: None,
            status_code: None,
            data: Vec::new(),
            source: None,
        }
    }

    /// Create an error carrying the kind's default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    /// Create an error by rendering a caller-supplied [`Message`].
    ///
    /// A malformed template does not change the kind: the raw template becomes
    /// the message and the [`FormatError`](crate::FormatError) becomes the source.
    pub fn from_message(kind: ErrorKind, message: Message<'_>) -> Self {
        match message.render(kind.default_message()) {
            Ok(text) => Self::new(kind, text),
            Err(err) => {
                let raw = message.raw().unwrap_or_default();
                tracing::warn!(%err, template = raw, kind = kind.name(), "malformed message template");
                Self::new(kind, raw).with_source(err)
            }
        }
    }

    /// A required argument was absent.
    pub fn argument_null(param_name: &str) -> Self {
        Self::from_kind(ErrorKind::ArgumentNull).with_param(param_name)
    }

    /// An argument broke a rule described by `message`.
    pub fn argument_invalid(message: impl Into<String>, param_name: &str) -> Self {
        Self::new(ErrorKind::ArgumentInvalid, message).with_param(param_name)
    }

    /// An argument was out of range. `None` or empty `message` uses the default.
    pub fn out_of_range(param_name: &str, message: Option<&str>) -> Self {
        let err = match message {
            Some(text) if !text.is_empty() => Self::new(ErrorKind::ArgumentOutOfRange, text),
            _ => Self::from_kind(ErrorKind::ArgumentOutOfRange),
        };
        err.with_param(param_name)
    }

    /// An internal invariant failed. `None` uses the default message.
    pub fn internal(message: Option<&str>) -> Self {
        message.map_or_else(
            || Self::from_kind(ErrorKind::InternalError),
            |text| Self::new(ErrorKind::InternalError, text),
        )
    }

    /// An operation ran after `object_name` was disposed.
    pub fn object_disposed(object_name: &str, message: Option<&str>) -> Self {
        message
            .map_or_else(
                || Self::from_kind(ErrorKind::ObjectDisposed),
                |text| Self::new(ErrorKind::ObjectDisposed, text),
            )
            .with_param(object_name)
    }

    /// A negative platform status code.
    pub fn platform_status(code: i32, message: impl Into<String>) -> Self {
        let mut err = Self::new(ErrorKind::PlatformStatus, message);
        err.status_code = Some(code);
        err
    }

    /// Attach the offending parameter's name.
    #[must_use]
    pub fn with_param(mut self, param_name: &str) -> Self {
        self.param_name = Some(param_name.to_owned());
        self
    }

    /// Attach a help-link reference for tooling.
    #[must_use]
    pub fn with_help_link(mut self, help_link: Option<&str>) -> Self {
        self.help_link = help_link.map(str::to_owned);
        self
    }

    /// Wrap a causal error.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach diagnostic values under `key`. Nothing is attached when
    /// `values` is empty.
    #[must_use]
    pub fn with_data(mut self, key: &str, values: &[&dyn fmt::Display]) -> Self {
        if !values.is_empty() {
            self.data.push(ErrorData {
                key: key.to_owned(),
                values: values.iter().map(ToString::to_string).collect(),
            });
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message without parameter or object decoration.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// Name of the disposed object, for `ObjectDisposed` errors.
    pub fn object_name(&self) -> Option<&str> {
        match self.kind {
            ErrorKind::ObjectDisposed => self.param_name(),
            _ => None,
        }
    }

    pub fn help_link(&self) -> Option<&str> {
        self.help_link.as_deref()
    }

    pub fn status_code(&self) -> Option<i32> {
        self.status_code
    }

    pub fn data(&self) -> &[ErrorData] {
        &self.data
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        match self.param_name.as_deref() {
            Some(name) if !name.is_empty() && self.kind.is_argument_error() => {
                write!(f, " (Parameter '{name}')")
            }
            Some(name) if !name.is_empty() && self.kind == ErrorKind::ObjectDisposed => {
                write!(f, "\nObject name: '{name}'.")
            }
            _ => Ok(()),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}
