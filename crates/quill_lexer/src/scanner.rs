//! Scanning state machine.
//!
//! [`Scanner::scan`] reads one rune and dispatches on it:
//!
//! | First rune                  | Routine            |
//! |-----------------------------|--------------------|
//! | space, tab, newline         | whitespace run     |
//! | letter, `_`, `"`            | identifier         |
//! | digit, `.`, `+`, `-`        | number / duration  |
//! | `'`                         | string             |
//! | end of stream               | `Eof`              |
//! | anything else               | operator table     |
//!
//! Regex literals are never produced by `scan`: `/` is division there.
//! A parser that expects a regex (say, after `=~`) calls
//! [`Scanner::scan_regex`] instead.

use std::io::Read;
use std::sync::Arc;

use quill_lexer_core::{
    is_digit, is_ident_char, is_letter, is_whitespace, scan_bare_ident, scan_delimited,
    scan_string, DelimitedError, Pos, RuneReader,
};
use tracing::{debug, trace};

use crate::token::{ScanResult, TokenKind};
use crate::{ScanOptions, Vocabulary};

/// Two-rune operators, keyed by (first, second).
const PAIRS: [(char, char, TokenKind); 8] = [
    ('=', '~', TokenKind::EqRegex),
    ('!', '=', TokenKind::Neq),
    ('!', '~', TokenKind::NeqRegex),
    ('>', '=', TokenKind::Gte),
    ('>', '>', TokenKind::RShift),
    ('<', '=', TokenKind::Lte),
    ('<', '>', TokenKind::Neq),
    ('<', '<', TokenKind::LShift),
];

/// Escapes recognized inside regex literals.
const REGEX_ESCAPES: [(char, char); 1] = [('/', '/')];

/// One-rune punctuation and operators.
fn single(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '{' => TokenKind::LCurly,
        '}' => TokenKind::RCurly,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '%' => TokenKind::Percent,
        '$' => TokenKind::Dollar,
        '#' => TokenKind::Hash,
        '@' => TokenKind::AtSign,
        '*' => TokenKind::Mul,
        '/' => TokenKind::Div,
        '&' => TokenKind::Ampersand,
        '^' => TokenKind::Xor,
        '|' => TokenKind::Pipe,
        '=' => TokenKind::Eq,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        _ => return None,
    };
    Some(kind)
}

#[inline]
fn digit(ch: Option<char>) -> bool {
    ch.is_some_and(is_digit)
}

/// Lexical scanner over a rune stream.
///
/// Not `Sync`-shared: every call advances the reader, so use one scanner per
/// input.
pub struct Scanner<R> {
    reader: RuneReader<R>,
    vocab: Arc<Vocabulary>,
    options: ScanOptions,
}

impl<R: Read> Scanner<R> {
    /// Scanner with the built-in vocabulary and default options.
    pub fn new(source: R) -> Self {
        Self::with_vocabulary(source, Arc::new(Vocabulary::default()))
    }

    pub fn with_vocabulary(source: R, vocab: Arc<Vocabulary>) -> Self {
        Self::with_options(source, vocab, ScanOptions::default())
    }

    pub fn with_options(source: R, vocab: Arc<Vocabulary>, options: ScanOptions) -> Self {
        Scanner {
            reader: RuneReader::new(source),
            vocab,
            options,
        }
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// The underlying reader, e.g. to check [`RuneReader::io_error`].
    pub fn reader(&self) -> &RuneReader<R> {
        &self.reader
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` once the input is exhausted, and keeps returning it.
    pub fn scan(&mut self) -> ScanResult {
        let tok = self.next_token();
        log_token(&tok);
        tok
    }

    /// Scan a `/`-delimited regex literal starting at the next rune.
    ///
    /// `\/` stands for `/`. Other escapes follow
    /// [`ScanOptions::regex_escapes`]: `BadEscape` at the backslash under
    /// the strict policy, kept verbatim under pass-through. A missing
    /// opening `/`, a raw newline, or end of input before the closing `/`
    /// gives `BadRegex` with the body read so far.
    pub fn scan_regex(&mut self) -> ScanResult {
        let (_, pos) = self.reader.read();
        self.reader.unread();

        let tok = match scan_delimited(
            &mut self.reader,
            '/',
            '/',
            &REGEX_ESCAPES,
            self.options.regex_escapes,
        ) {
            Ok(body) => ScanResult::new(TokenKind::Regex, pos, body),
            Err(DelimitedError::BadEscape { partial, pos }) => {
                ScanResult::new(TokenKind::BadEscape, pos, partial)
            }
            Err(err) => ScanResult::new(TokenKind::BadRegex, pos, err.into_partial()),
        };
        log_token(&tok);
        tok
    }

    /// Iterator over the remaining tokens, stopping before `Eof`.
    ///
    /// Borrows the scanner, so scanning can resume with [`Scanner::scan`]
    /// once the iterator is dropped.
    pub fn tokens(&mut self) -> impl Iterator<Item = ScanResult> + '_ {
        std::iter::from_fn(move || {
            let tok = self.scan();
            (!tok.is_eof()).then_some(tok)
        })
    }

    /// The next rune, without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let (ch, _) = self.reader.read();
        self.reader.unread();
        ch
    }

    fn next_token(&mut self) -> ScanResult {
        let (ch0, pos) = self.reader.read();
        let Some(ch0) = ch0 else {
            return ScanResult::fixed(TokenKind::Eof, pos);
        };

        match ch0 {
            c if is_whitespace(c) => self.whitespace(c, pos),
            c if is_letter(c) || c == '_' || c == '"' => {
                self.reader.unread();
                self.identifier(pos)
            }
            c if is_digit(c) || matches!(c, '.' | '+' | '-') => self.number(c, pos),
            '\'' => self.string(pos),
            c => self.operator(c, pos),
        }
    }

    // ─── Whitespace ─────────────────────────────────────────────────────

    /// One token for the whole run, literal included.
    fn whitespace(&mut self, first: char, pos: Pos) -> ScanResult {
        let mut run = String::from(first);
        loop {
            match self.reader.read().0 {
                Some(ch) if is_whitespace(ch) => run.push(ch),
                _ => {
                    self.reader.unread();
                    break;
                }
            }
        }
        ScanResult::new(TokenKind::Ws, pos, run)
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    /// Bare or quoted identifier, or a keyword.
    ///
    /// A `"` ends the bare part: whatever was accumulated is dropped and the
    /// quoted text becomes the identifier, still positioned at `pos`.
    /// Quoted identifiers are never looked up as keywords.
    fn identifier(&mut self, pos: Pos) -> ScanResult {
        let mut text = String::new();
        loop {
            match self.reader.read() {
                (Some('"'), quote_pos) => {
                    let quoted = self.string(quote_pos);
                    return match quoted.kind {
                        TokenKind::BadString | TokenKind::BadEscape => quoted,
                        _ => ScanResult::new(TokenKind::Ident, pos, quoted.literal),
                    };
                }
                (Some(ch), _) if is_ident_char(ch) => {
                    self.reader.unread();
                    text.push_str(&scan_bare_ident(&mut self.reader));
                }
                _ => {
                    self.reader.unread();
                    break;
                }
            }
        }

        match self.vocab.lookup(&text) {
            TokenKind::Ident => ScanResult::new(TokenKind::Ident, pos, text),
            keyword => ScanResult::fixed(keyword, pos),
        }
    }

    // ─── Strings ────────────────────────────────────────────────────────

    /// Quoted string; the opening quote at `pos` has just been read.
    fn string(&mut self, pos: Pos) -> ScanResult {
        self.reader.unread();
        match scan_string(&mut self.reader) {
            Ok(body) => ScanResult::new(TokenKind::String, pos, body),
            Err(DelimitedError::BadEscape { partial, pos }) => {
                ScanResult::new(TokenKind::BadEscape, pos, partial)
            }
            Err(err) => ScanResult::new(TokenKind::BadString, pos, err.into_partial()),
        }
    }

    // ─── Numbers & Durations ────────────────────────────────────────────

    /// Anything that looks like the start of a number.
    ///
    /// May yield a non-number: a sign not followed by a digit (or `.` and a
    /// digit) is an operator, and a `.` not followed by a digit is illegal.
    fn number(&mut self, first: char, pos: Pos) -> ScanResult {
        let mut text = String::new();

        match first {
            '+' | '-' => {
                let (ch1, _) = self.reader.read();
                let (ch2, _) = self.reader.read();
                self.reader.unread();
                self.reader.unread();

                if digit(ch1) || (ch1 == Some('.') && digit(ch2)) {
                    text.push(first);
                } else if first == '+' {
                    return ScanResult::fixed(TokenKind::Plus, pos);
                } else {
                    return ScanResult::fixed(TokenKind::Minus, pos);
                }
            }
            '.' => {
                let (ch1, _) = self.reader.read();
                self.reader.unread();
                if !digit(ch1) {
                    return ScanResult::new(TokenKind::Illegal, pos, ".");
                }
                // Re-read the `.` as the fraction below.
                self.reader.unread();
            }
            _ => self.reader.unread(),
        }

        text.push_str(&self.digits());

        match self.reader.read().0 {
            Some('.') => match self.reader.read().0 {
                Some(d) if is_digit(d) => {
                    text.push('.');
                    text.push(d);
                    text.push_str(&self.digits());
                    // Fractional numbers never take a duration unit.
                    return ScanResult::new(TokenKind::Number, pos, text);
                }
                _ => {
                    self.reader.unread();
                    self.reader.unread();
                }
            },
            _ => self.reader.unread(),
        }

        match self.reader.read().0 {
            Some(unit @ ('u' | 'µ' | 's' | 'h' | 'd' | 'w')) => {
                text.push(unit);
                ScanResult::new(TokenKind::Duration, pos, text)
            }
            Some('m') => {
                text.push('m');
                if self.reader.read().0 == Some('s') {
                    text.push('s');
                } else {
                    self.reader.unread();
                }
                ScanResult::new(TokenKind::Duration, pos, text)
            }
            _ => {
                self.reader.unread();
                ScanResult::new(TokenKind::Number, pos, text)
            }
        }
    }

    fn digits(&mut self) -> String {
        let mut buf = String::new();
        loop {
            match self.reader.read().0 {
                Some(ch) if is_digit(ch) => buf.push(ch),
                _ => {
                    self.reader.unread();
                    return buf;
                }
            }
        }
    }

    // ─── Operators & Punctuation ────────────────────────────────────────

    fn operator(&mut self, first: char, pos: Pos) -> ScanResult {
        if PAIRS.iter().any(|&(a, _, _)| a == first) {
            let (second, _) = self.reader.read();
            if let Some(&(_, _, kind)) = PAIRS
                .iter()
                .find(|&&(a, b, _)| a == first && Some(b) == second)
            {
                return ScanResult::fixed(kind, pos);
            }
            self.reader.unread();
        }

        match single(first) {
            Some(kind) => ScanResult::fixed(kind, pos),
            None => ScanResult::new(TokenKind::Illegal, pos, first.to_string()),
        }
    }
}

fn log_token(tok: &ScanResult) {
    match tok.kind {
        TokenKind::Illegal | TokenKind::BadString | TokenKind::BadEscape | TokenKind::BadRegex => {
            debug!(kind = %tok.kind, pos = %tok.pos, literal = %tok.literal, "lexical error");
        }
        _ => trace!(kind = %tok.kind, pos = %tok.pos, literal = %tok.literal, "scanned"),
    }
}

/// Convenience function: scan a source string with the built-in vocabulary
/// and collect every token except the final `Eof`.
pub fn tokenize(source: &str) -> Vec<ScanResult> {
    Scanner::new(source.as_bytes()).tokens().collect()
}
