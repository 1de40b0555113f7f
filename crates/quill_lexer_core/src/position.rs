//! Source positions.

use std::fmt;

/// Line and character position of a rune, both zero-based.
///
/// `char` counts runes, not bytes: `µ` advances it by one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub line: u32,
    pub char: u32,
}

impl Pos {
    /// Position of the first rune of any input.
    pub const START: Pos = Pos { line: 0, char: 0 };

    #[inline]
    pub const fn new(line: u32, char: u32) -> Self {
        Pos { line, char }
    }

    /// Move past `ch`. A newline starts the next line.
    #[inline]
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.char = 0;
        } else {
            self.char += 1;
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.char)
    }
}
