//! Delimited-literal helpers.
//!
//! Each helper reads directly from a [`RuneReader`] and leaves it positioned
//! just after the consumed text, so the caller can keep scanning whether the
//! helper succeeded or not.

use std::error::Error;
use std::fmt;
use std::io::Read;

use crate::{is_ident_char, Pos, RuneReader};

/// How [`scan_delimited`] treats an escape missing from its escape table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EscapePolicy {
    /// Unknown escapes are errors.
    #[default]
    Strict,
    /// Unknown escapes are kept verbatim, backslash included (`\d` stays `\d`).
    PassThrough,
}

/// Why a delimited literal could not be scanned.
///
/// Every variant that consumed body text carries it as `partial`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DelimitedError {
    /// End of stream or a raw newline before the closing delimiter.
    Unterminated { partial: String },
    /// Escape sequence not allowed here. `pos` is the backslash.
    BadEscape { partial: String, pos: Pos },
    /// The literal did not start with the opening delimiter.
    MissingOpen { found: Option<char> },
}

impl DelimitedError {
    /// Body text consumed before the error.
    pub fn into_partial(self) -> String {
        match self {
            DelimitedError::Unterminated { partial } | DelimitedError::BadEscape { partial, .. } => {
                partial
            }
            DelimitedError::MissingOpen { .. } => String::new(),
        }
    }
}

impl fmt::Display for DelimitedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimitedError::Unterminated { .. } => write!(f, "unterminated literal"),
            DelimitedError::BadEscape { pos, .. } => write!(f, "bad escape sequence at {pos}"),
            DelimitedError::MissingOpen { found: Some(ch) } => {
                write!(f, "expected opening delimiter, found {ch:?}")
            }
            DelimitedError::MissingOpen { found: None } => {
                write!(f, "expected opening delimiter, found end of input")
            }
        }
    }
}

impl Error for DelimitedError {}

/// Scan a quoted string. The next rune is taken as the quote and must
/// appear again to close the string.
///
/// Supported escapes: `\n`, `\\`, `\"` and `\'`.
pub fn scan_string<R: Read>(reader: &mut RuneReader<R>) -> Result<String, DelimitedError> {
    let (Some(quote), _) = reader.read() else {
        return Err(DelimitedError::Unterminated {
            partial: String::new(),
        });
    };

    let mut buf = String::new();
    loop {
        match reader.read() {
            (Some(ch), _) if ch == quote => return Ok(buf),
            (None | Some('\n'), _) => return Err(DelimitedError::Unterminated { partial: buf }),
            (Some('\\'), pos) => match reader.read().0 {
                Some('n') => buf.push('\n'),
                Some(ch @ ('\\' | '"' | '\'')) => buf.push(ch),
                None => return Err(DelimitedError::Unterminated { partial: buf }),
                Some(_) => return Err(DelimitedError::BadEscape { partial: buf, pos }),
            },
            (Some(ch), _) => buf.push(ch),
        }
    }
}

/// Scan text enclosed by `start` and `end`.
///
/// `escapes` maps the character after a backslash to the character written
/// to the body. Escapes missing from the table are handled per `policy`.
/// The body may not contain a raw newline.
pub fn scan_delimited<R: Read>(
    reader: &mut RuneReader<R>,
    start: char,
    end: char,
    escapes: &[(char, char)],
    policy: EscapePolicy,
) -> Result<String, DelimitedError> {
    match reader.read().0 {
        Some(ch) if ch == start => {}
        found => return Err(DelimitedError::MissingOpen { found }),
    }

    let mut buf = String::new();
    loop {
        match reader.read() {
            (Some(ch), _) if ch == end => return Ok(buf),
            (None | Some('\n'), _) => return Err(DelimitedError::Unterminated { partial: buf }),
            (Some('\\'), pos) => {
                let Some(escaped) = reader.read().0 else {
                    return Err(DelimitedError::Unterminated { partial: buf });
                };
                if let Some(&(_, to)) = escapes.iter().find(|(from, _)| *from == escaped) {
                    buf.push(to);
                    continue;
                }
                match policy {
                    EscapePolicy::PassThrough => {
                        // Keep the backslash; the escaped rune is scanned as body.
                        reader.unread();
                        buf.push('\\');
                    }
                    EscapePolicy::Strict => {
                        return Err(DelimitedError::BadEscape { partial: buf, pos });
                    }
                }
            }
            (Some(ch), _) => buf.push(ch),
        }
    }
}

/// Read the maximal run of identifier characters.
pub fn scan_bare_ident<R: Read>(reader: &mut RuneReader<R>) -> String {
    let mut buf = String::new();
    loop {
        match reader.read().0 {
            Some(ch) if is_ident_char(ch) => buf.push(ch),
            _ => {
                reader.unread();
                return buf;
            }
        }
    }
}

#[cfg(test)]
mod tests;
