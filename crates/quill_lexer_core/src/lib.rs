//! Character layer for the quill scanner.
//!
//! This crate sits underneath `quill_lexer` and knows nothing about token
//! kinds. It provides:
//!
//! - [`Pos`]: zero-based line/character positions.
//! - [`RuneReader`]: a UTF-8 decoding reader over any [`std::io::Read`] with
//!   a small pushback ring, used for one- and two-character lookahead.
//! - Character classes ([`is_whitespace`], [`is_letter`], [`is_digit`],
//!   [`is_ident_char`]).
//! - Delimited-literal helpers ([`scan_string`], [`scan_delimited`],
//!   [`scan_bare_ident`]) shared by string, quoted-identifier and regex
//!   scanning.
//!
//! # End of Stream
//!
//! The reader reports end of input as `None`. Read failures from the
//! underlying source are folded into end of stream; the first failure is
//! kept and can be inspected with [`RuneReader::io_error`].

mod chars;
mod delimited;
mod position;
mod reader;

pub use chars::{is_digit, is_ident_char, is_letter, is_whitespace};
pub use delimited::{scan_bare_ident, scan_delimited, scan_string, DelimitedError, EscapePolicy};
pub use position::Pos;
pub use reader::{RuneReader, PUSHBACK_DEPTH};
