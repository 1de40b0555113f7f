//! Token scanner for hand-written DSL parsers.
//!
//! Turns a character stream into `(kind, position, literal)` triples
//! ([`ScanResult`]) and offers a bounded replay buffer ([`TokenBuffer`]) so a
//! recursive-descent parser can push tokens back while it decides what it is
//! looking at.
//!
//! # Layers
//!
//! - `quill_lexer_core`: positions, the pushback rune reader, and the
//!   delimited-literal helpers.
//! - [`token`]: the closed set of built-in [`TokenKind`]s, their categories,
//!   canonical strings and binary-operator precedence.
//! - [`Vocabulary`]: the case-insensitive keyword table, extensible with
//!   host keywords ([`KeywordId`]).
//! - [`Scanner`]: the scanning state machine.
//! - [`TokenBuffer`]: replay buffer over a scanner.
//!
//! # Errors
//!
//! Lexical errors are tokens (`Illegal`, `BadString`, `BadEscape`,
//! `BadRegex`); the scanner stays usable after emitting one. Misuse of the
//! API ([`VocabularyError`], [`ScanError`]) is reported through `Result`.
//!
//! # Example
//!
//! ```
//! use quill_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("cpu > 10s".as_bytes());
//! let kinds: Vec<TokenKind> = scanner.tokens().map(|tok| tok.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Ident, TokenKind::Ws, TokenKind::Gt, TokenKind::Ws, TokenKind::Duration]
//! );
//! assert!(scanner.scan().is_eof());
//! ```

mod buffer;
mod error;
mod options;
mod scanner;
pub mod token;
mod vocabulary;

use std::sync::Once;

pub use buffer::TokenBuffer;
pub use error::{ScanError, VocabularyError};
pub use options::ScanOptions;
pub use quill_lexer_core::{EscapePolicy, Pos};
pub use scanner::{tokenize, Scanner};
pub use token::{KeywordId, ScanResult, TokenCategory, TokenKind};
pub use vocabulary::Vocabulary;

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`, if that variable is
/// set. Later calls do nothing.
///
/// Enable with `RUST_LOG=quill_lexer=debug` (errors, replays, registration)
/// or `RUST_LOG=quill_lexer=trace` (every token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_some() {
            // A host may already have installed a subscriber.
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        }
    });
}
