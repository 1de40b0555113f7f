//! API misuse errors.
//!
//! Lexical problems in the input are not errors at this level: they come
//! back as tokens (`Illegal`, `BadString`, `BadEscape`, `BadRegex`).

use thiserror::Error;

/// Rejected keyword registration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// Host keyword ids must lie above the built-in token band.
    #[error("keyword id {0} is reserved for built-in tokens")]
    ReservedId(u32),
}

/// Misuse of a [`TokenBuffer`](crate::TokenBuffer).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// More consecutive unscans than buffered results.
    #[error("cannot unscan more than the {capacity} most recent tokens")]
    UnscanOverflow { capacity: usize },
}
