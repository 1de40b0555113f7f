//! Keyword and rendering tables.
//!
//! A [`Vocabulary`] maps lower-cased words to token kinds and host keyword
//! ids to their display strings. It starts with the built-in keywords
//! (`and`, `or`, `true`, `false`) and grows through [`Vocabulary::register`].
//!
//! # Lifecycle
//!
//! Build the vocabulary first, then hand it to scanners behind an `Arc`.
//! Scanners only read it, so scanners sharing one vocabulary, or using
//! different ones, can run on different threads.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::token::{KeywordId, TokenKind};

/// Built-in words resolved to keyword kinds.
const BUILTIN_KEYWORDS: [(&str, TokenKind); 4] = [
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// Case-insensitive keyword table plus display strings for host keywords.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    /// Lower-cased word to kind.
    keywords: FxHashMap<String, TokenKind>,
    /// Display string of each registered host keyword.
    names: FxHashMap<KeywordId, String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            keywords: BUILTIN_KEYWORDS
                .iter()
                .map(|&(word, kind)| (word.to_string(), kind))
                .collect(),
            names: FxHashMap::default(),
        }
    }
}

impl Vocabulary {
    /// Vocabulary holding only the built-in keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in keywords plus `entries`.
    pub fn with_keywords<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (KeywordId, S)>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        vocab.register(entries);
        vocab
    }

    /// Merge host keywords into the table.
    ///
    /// Each display string is also registered, lower-cased, as a keyword.
    /// Last write wins: re-registering an id replaces its display string and
    /// drops the keyword it was previously reachable by; registering a word
    /// already taken (even a built-in one) takes it over.
    pub fn register<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (KeywordId, S)>,
        S: Into<String>,
    {
        for (id, name) in entries {
            let name = name.into();
            let kind = TokenKind::Custom(id);
            if let Some(old) = self.names.insert(id, name.clone()) {
                let old_word = old.to_lowercase();
                if self.keywords.get(&old_word) == Some(&kind) {
                    self.keywords.remove(&old_word);
                }
            }
            debug!(id = id.get(), name = %name, "registered keyword");
            self.keywords.insert(name.to_lowercase(), kind);
        }
    }

    /// Kind of `ident`, compared case-insensitively. `Ident` if it is not a
    /// keyword.
    pub fn lookup(&self, ident: &str) -> TokenKind {
        self.keywords
            .get(&ident.to_lowercase())
            .copied()
            .unwrap_or(TokenKind::Ident)
    }

    /// Canonical string of `kind`; empty for unregistered host keywords.
    pub fn render(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Custom(id) => self.names.get(&id).map_or("", String::as_str),
            builtin => builtin.lexeme(),
        }
    }

    /// Number of words resolved to keywords, built-ins included.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
