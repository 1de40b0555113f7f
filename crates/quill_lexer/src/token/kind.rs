//! Token kinds.

use std::fmt;

use crate::VocabularyError;

/// Identifier of a host-registered keyword.
///
/// Host ids live in their own band, starting at [`KeywordId::FIRST`]; the
/// ids below it belong to the built-in kinds. Uniqueness among host ids is
/// the host's business: registering an id twice overwrites the first entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordId(u32);

impl KeywordId {
    /// Lowest id available to hosts.
    pub const FIRST: u32 = 1024;

    pub const fn new(id: u32) -> Result<Self, VocabularyError> {
        if id < Self::FIRST {
            return Err(VocabularyError::ReservedId(id));
        }
        Ok(KeywordId(id))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Broad class of a token kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenCategory {
    /// `Illegal`, `Eof`, `Ws`.
    Special,
    Punctuation,
    /// Variable-content kinds, their error variants, and `true`/`false`.
    Literal,
    Operator,
    /// Host-registered keywords.
    Keyword,
}

/// Classification of a lexeme.
///
/// Built-in kinds carry stable numeric ids (see [`TokenKind::id`]) laid out
/// in bands:
///
/// | Ids     | Category    |
/// |---------|-------------|
/// | 0-2     | Special     |
/// | 3-15    | Punctuation |
/// | 32-41   | Literal     |
/// | 64-85   | Operator    |
/// | 1024-   | Keyword (host) |
///
/// The category of a kind comes from [`TokenKind::category`], never from
/// its id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Special ===
    Illegal,
    Eof,
    Ws,

    // === Punctuation ===
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LCurly,    // {
    RCurly,    // }
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    Percent,   // %
    Dollar,    // $
    Hash,      // #
    AtSign,    // @

    // === Literals ===
    Ident,
    Number,
    Duration,
    String,
    BadString,
    BadEscape,
    True,
    False,
    Regex,
    BadRegex,

    // === Operators ===
    Plus,      // +
    Minus,     // -
    Mul,       // *
    Div,       // /
    Ampersand, // &
    Xor,       // ^
    Pipe,      // |
    LShift,    // <<
    RShift,    // >>
    // Never scanned: `**`, `->` and `=>` come out as two single-character
    // operators. Parsers that fold such pairs can use these kinds.
    Pow,       // **
    Arrow,     // ->
    EqArrow,   // =>
    And,       // AND
    Or,        // OR
    Eq,        // =
    Neq,       // != or <>
    EqRegex,   // =~
    NeqRegex,  // !~
    Lt,        // <
    Lte,       // <=
    Gt,        // >
    Gte,       // >=

    // === Host keywords ===
    Custom(KeywordId),
}

impl TokenKind {
    /// Stable numeric identifier.
    pub const fn id(self) -> u32 {
        match self {
            Self::Illegal => 0,
            Self::Eof => 1,
            Self::Ws => 2,
            Self::LParen => 3,
            Self::RParen => 4,
            Self::LBracket => 5,
            Self::RBracket => 6,
            Self::LCurly => 7,
            Self::RCurly => 8,
            Self::Comma => 9,
            Self::Semicolon => 10,
            Self::Colon => 11,
            Self::Percent => 12,
            Self::Dollar => 13,
            Self::Hash => 14,
            Self::AtSign => 15,
            Self::Ident => 32,
            Self::Number => 33,
            Self::Duration => 34,
            Self::String => 35,
            Self::BadString => 36,
            Self::BadEscape => 37,
            Self::True => 38,
            Self::False => 39,
            Self::Regex => 40,
            Self::BadRegex => 41,
            Self::Plus => 64,
            Self::Minus => 65,
            Self::Mul => 66,
            Self::Div => 67,
            Self::Ampersand => 68,
            Self::Xor => 69,
            Self::Pipe => 70,
            Self::LShift => 71,
            Self::RShift => 72,
            Self::Pow => 73,
            Self::Arrow => 74,
            Self::EqArrow => 75,
            Self::And => 76,
            Self::Or => 77,
            Self::Eq => 78,
            Self::Neq => 79,
            Self::EqRegex => 80,
            Self::NeqRegex => 81,
            Self::Lt => 82,
            Self::Lte => 83,
            Self::Gt => 84,
            Self::Gte => 85,
            Self::Custom(id) => id.get(),
        }
    }

    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Illegal | Self::Eof | Self::Ws => TokenCategory::Special,
            Self::LParen
            | Self::RParen
            | Self::LBracket
            | Self::RBracket
            | Self::LCurly
            | Self::RCurly
            | Self::Comma
            | Self::Semicolon
            | Self::Colon
            | Self::Percent
            | Self::Dollar
            | Self::Hash
            | Self::AtSign => TokenCategory::Punctuation,
            Self::Ident
            | Self::Number
            | Self::Duration
            | Self::String
            | Self::BadString
            | Self::BadEscape
            | Self::True
            | Self::False
            | Self::Regex
            | Self::BadRegex => TokenCategory::Literal,
            Self::Plus
            | Self::Minus
            | Self::Mul
            | Self::Div
            | Self::Ampersand
            | Self::Xor
            | Self::Pipe
            | Self::LShift
            | Self::RShift
            | Self::Pow
            | Self::Arrow
            | Self::EqArrow
            | Self::And
            | Self::Or
            | Self::Eq
            | Self::Neq
            | Self::EqRegex
            | Self::NeqRegex
            | Self::Lt
            | Self::Lte
            | Self::Gt
            | Self::Gte => TokenCategory::Operator,
            Self::Custom(_) => TokenCategory::Keyword,
        }
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self.category(), TokenCategory::Operator)
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self.category(), TokenCategory::Literal)
    }

    #[inline]
    pub const fn is_punctuation(self) -> bool {
        matches!(self.category(), TokenCategory::Punctuation)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), TokenCategory::Keyword)
    }

    /// Whether tokens of this kind carry their text in the literal.
    ///
    /// `True` and `False` are fixed-form: their canonical string is the text.
    pub const fn has_literal(self) -> bool {
        matches!(
            self,
            Self::Illegal
                | Self::Ws
                | Self::Ident
                | Self::Number
                | Self::Duration
                | Self::String
                | Self::BadString
                | Self::BadEscape
                | Self::Regex
                | Self::BadRegex
        )
    }

    /// Binding power of a binary operator; 0 for everything else.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::Neq
            | Self::EqRegex
            | Self::NeqRegex
            | Self::Lt
            | Self::Lte
            | Self::Gt
            | Self::Gte => 3,
            Self::Plus | Self::Minus => 4,
            Self::Mul | Self::Div => 5,
            Self::Pipe | Self::Xor | Self::RShift | Self::LShift | Self::Pow => 6,
            _ => 0,
        }
    }

    /// Canonical string of a built-in kind. Empty for host keywords, whose
    /// strings live in the [`Vocabulary`](crate::Vocabulary).
    pub const fn lexeme(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ws => "WS",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LCurly => "{",
            Self::RCurly => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Percent => "%",
            Self::Dollar => "$",
            Self::Hash => "#",
            Self::AtSign => "@",
            Self::Ident => "IDENT",
            Self::Number => "NUMBER",
            Self::Duration => "DURATION",
            Self::String => "STRING",
            Self::BadString => "BADSTRING",
            Self::BadEscape => "BADESCAPE",
            Self::True => "true",
            Self::False => "false",
            Self::Regex => "REGEX",
            Self::BadRegex => "BADREGEX",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Ampersand => "&",
            Self::Xor => "^",
            Self::Pipe => "|",
            Self::LShift => "<<",
            Self::RShift => ">>",
            Self::Pow => "**",
            Self::Arrow => "->",
            Self::EqArrow => "=>",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::EqRegex => "=~",
            Self::NeqRegex => "!~",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Custom(_) => "",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(id) => write!(f, "KEYWORD({})", id.get()),
            kind => f.write_str(kind.lexeme()),
        }
    }
}
