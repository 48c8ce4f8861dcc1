//! Positional message templates.
//!
//! Templates use numbered placeholders: `{0}`, `{1}`, ... Each placeholder may
//! carry an alignment (`{0,8}` right-aligns to eight columns, `{0,-8}`
//! left-aligns). Literal braces are written doubled (`{{` and `}}`).
//!
//! Arguments are rendered with their `Display` impl. There is no ambient
//! culture: a number renders the way its type displays it.
//!
//! [`Message`] is the single formatting path shared by every check: a check
//! receives a `Message` and only renders it once the check has failed.

use std::fmt;

/// Why a template could not be expanded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A `{` with no matching `}`.
    #[error("unclosed placeholder starting at byte {offset}")]
    UnclosedPlaceholder { offset: usize },
    /// A lone `}` that is not part of `}}`.
    #[error("unexpected '}}' at byte {offset}")]
    UnexpectedClosingBrace { offset: usize },
    /// Placeholder body is not `N` or `N,W`, or `W` is wider than 999999.
    #[error("invalid placeholder at byte {offset}")]
    InvalidPlaceholder { offset: usize },
    /// Placeholder refers to an argument that was not supplied.
    #[error("placeholder {{{index}}} at byte {offset} has no argument ({count} supplied)")]
    IndexOutOfRange {
        index: usize,
        count: usize,
        offset: usize,
    },
    /// Placeholder carries a `:spec` suffix.
    #[error("format specifier in placeholder at byte {offset} is not supported")]
    UnsupportedFormatSpec { offset: usize },
}

/// A parsed `{index[,alignment]}` placeholder.
/// Widest alignment a placeholder may request.
const MAX_WIDTH: usize = 999_999;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Placeholder {
    index: usize,
    width: usize,
    left_align: bool,
}

impl Placeholder {
    fn parse(body: &str, offset: usize) -> Result<Self, FormatError> {
        if body.contains(':') {
            return Err(FormatError::UnsupportedFormatSpec { offset });
        }

        let (index, alignment) = match body.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (body, None),
        };

        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::InvalidPlaceholder { offset });
        }
        let index = index
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidPlaceholder { offset })?;

        let (width, left_align) = match alignment {
            Some(alignment) => {
                let alignment = alignment
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| FormatError::InvalidPlaceholder { offset })?;
                let width = alignment.unsigned_abs() as usize;
                if width > MAX_WIDTH {
                    return Err(FormatError::InvalidPlaceholder { offset });
                }
                (width, alignment < 0)
            }
            None => (0, false),
        };

        Ok(Placeholder {
            index,
            width,
            left_align,
        })
    }

    fn write(self, out: &mut String, arg: &dyn fmt::Display) {
        let text = arg.to_string();
        let pad = self.width.saturating_sub(text.chars().count());
        if self.left_align {
            out.push_str(&text);
            out.extend(std::iter::repeat(' ').take(pad));
        } else {
            out.extend(std::iter::repeat(' ').take(pad));
            out.push_str(&text);
        }
    }
}

/// Expand `template`, substituting `args` into its positional placeholders.
///
/// A template without placeholders is returned verbatim (after collapsing
/// doubled braces), whatever `args` holds.
pub fn format_message(template: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let close = template[offset..]
                    .find('}')
                    .map(|rel| offset + rel)
                    .ok_or(FormatError::UnclosedPlaceholder { offset })?;
                let placeholder = Placeholder::parse(&template[offset + 1..close], offset)?;
                let arg = args
                    .get(placeholder.index)
                    .ok_or(FormatError::IndexOutOfRange {
                        index: placeholder.index,
                        count: args.len(),
                        offset,
                    })?;
                placeholder.write(&mut out, *arg);

                while chars.next_if(|&(at, _)| at <= close).is_some() {}
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_some() {
                    out.push('}');
                    continue;
                }
                return Err(FormatError::UnexpectedClosingBrace { offset });
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Message supplied to a check, rendered only if the check fails.
#[derive(Clone, Copy)]
pub enum Message<'a> {
    /// Use the failing operation's fixed default message.
    Default,
    /// Use the text verbatim. Braces are not interpreted.
    Literal(&'a str),
    /// Expand `template` with `args`.
    Format {
        template: &'a str,
        args: &'a [&'a dyn fmt::Display],
    },
}

impl<'a> Message<'a> {
    /// A template with positional arguments.
    ///
    /// An empty `args` slice still parses the template, so `{{` collapses.
    pub fn format(template: &'a str, args: &'a [&'a dyn fmt::Display]) -> Self {
        Message::Format { template, args }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Message::Default)
    }

    /// The caller-supplied text before expansion, if any.
    pub fn raw(&self) -> Option<&'a str> {
        match *self {
            Message::Default => None,
            Message::Literal(text) => Some(text),
            Message::Format { template, .. } => Some(template),
        }
    }

    /// Render the message, substituting `default` for [`Message::Default`].
    pub fn render(&self, default: &str) -> Result<String, FormatError> {
        match *self {
            Message::Default => Ok(default.to_owned()),
            Message::Literal(text) => Ok(text.to_owned()),
            Message::Format { template, args } => format_message(template, args),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Default => write!(f, "Message::Default"),
            Message::Literal(text) => write!(f, "Message::Literal({text:?})"),
            Message::Format { template, args } => {
                write!(f, "Message::Format({template:?}, {} args)", args.len())
            }
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Literal(text)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::Literal(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Message<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Message::Default, Message::Literal)
    }
}

#[cfg(test)]
mod tests;
