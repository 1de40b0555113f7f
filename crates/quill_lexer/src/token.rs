//! Token model: kinds, categories, and the scanned token triple.

mod kind;

use std::fmt;

pub use kind::{KeywordId, TokenCategory, TokenKind};
use quill_lexer_core::Pos;

use crate::Vocabulary;

/// One scanned token: kind, start position and literal text.
///
/// The literal is empty for fixed-form tokens (punctuation, operators,
/// recognized keywords), whose canonical string stands in for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanResult {
    pub kind: TokenKind,
    pub pos: Pos,
    pub literal: String,
}

impl ScanResult {
    #[inline]
    pub fn new(kind: TokenKind, pos: Pos, literal: impl Into<String>) -> Self {
        ScanResult {
            kind,
            pos,
            literal: literal.into(),
        }
    }

    /// A fixed-form token with an empty literal.
    #[inline]
    pub fn fixed(kind: TokenKind, pos: Pos) -> Self {
        ScanResult {
            kind,
            pos,
            literal: String::new(),
        }
    }

    /// The literal if there is one, otherwise the kind's canonical string.
    pub fn text<'a>(&'a self, vocab: &'a Vocabulary) -> &'a str {
        if self.literal.is_empty() {
            vocab.render(self.kind)
        } else {
            &self.literal
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_empty() {
            write!(f, "{} @ {}", self.kind, self.pos)
        } else {
            write!(f, "{} {:?} @ {}", self.kind, self.literal, self.pos)
        }
    }
}
