//! Scanner options.

use quill_lexer_core::EscapePolicy;

/// Knobs that change how a [`Scanner`](crate::Scanner) reads its input.
///
/// The vocabulary is not an option: it is passed to the scanner directly so
/// several scanners can share one table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptions {
    /// Treatment of escapes other than `\/` inside regex literals.
    pub regex_escapes: EscapePolicy,
}

impl ScanOptions {
    #[must_use]
    pub fn with_regex_escapes(mut self, policy: EscapePolicy) -> Self {
        self.regex_escapes = policy;
        self
    }
}
