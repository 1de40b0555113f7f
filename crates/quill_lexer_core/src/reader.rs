//! Pushback-capable rune reader.
//!
//! Decodes UTF-8 from any [`Read`] source one character at a time and keeps
//! the last few characters, each stamped with its position, in a small ring.
//! [`RuneReader::unread`] steps back through the ring; the following
//! [`RuneReader::read`] calls replay the stored characters with their
//! original positions before pulling anything new from the source.
//!
//! # Line Endings
//!
//! `\r\n` and a lone `\r` both decode to a single `\n`, so position tracking
//! and the scanner only ever see `\n`.
//!
//! # Errors
//!
//! Invalid UTF-8 decodes to U+FFFD. An I/O error ends the stream: every later
//! read returns `None`. The error is kept for [`RuneReader::io_error`].

use std::io::{self, BufRead, BufReader, Read};

use crate::Pos;

/// Number of consecutive [`RuneReader::unread`] calls the reader honors.
pub const PUSHBACK_DEPTH: usize = 3;

const RING: usize = PUSHBACK_DEPTH + 1;

#[derive(Copy, Clone, Debug)]
struct Slot {
    ch: Option<char>,
    pos: Pos,
}

const EMPTY: Slot = Slot {
    ch: None,
    pos: Pos::START,
};

/// Rune reader with [`PUSHBACK_DEPTH`] levels of pushback.
pub struct RuneReader<R> {
    inner: BufReader<R>,
    /// Position the next rune pulled from the source will be stamped with.
    pos: Pos,
    ring: [Slot; RING],
    /// Slot holding the most recently pulled rune.
    head: usize,
    /// Runes pushed back and not yet replayed.
    pending: usize,
    /// Total runes pulled so far, saturating at `RING`.
    filled: usize,
    eof: bool,
    io_error: Option<io::Error>,
}

impl<R: Read> RuneReader<R> {
    pub fn new(source: R) -> Self {
        RuneReader {
            inner: BufReader::new(source),
            pos: Pos::START,
            ring: [EMPTY; RING],
            head: 0,
            pending: 0,
            filled: 0,
            eof: false,
            io_error: None,
        }
    }

    /// Read the next rune and its position.
    ///
    /// Returns `(None, pos)` at end of stream, where `pos` is the position
    /// just past the last rune. End of stream is sticky.
    pub fn read(&mut self) -> (Option<char>, Pos) {
        if self.pending > 0 {
            self.pending -= 1;
            return self.current();
        }

        let ch = self.next_char();
        let pos = self.pos;
        if let Some(ch) = ch {
            self.pos.advance(ch);
        }

        self.head = (self.head + 1) % RING;
        self.ring[self.head] = Slot { ch, pos };
        self.filled = (self.filled + 1).min(RING);
        (ch, pos)
    }

    /// Push back the most recently read rune.
    ///
    /// Calls beyond [`PUSHBACK_DEPTH`], or beyond the number of runes read
    /// so far, are ignored.
    pub fn unread(&mut self) {
        debug_assert!(
            self.pending < PUSHBACK_DEPTH,
            "unread beyond pushback depth {PUSHBACK_DEPTH}"
        );
        if self.pending < self.filled.min(PUSHBACK_DEPTH) {
            self.pending += 1;
        }
    }

    /// The rune most recently returned by [`RuneReader::read`], taking
    /// pushback into account. `(None, Pos::START)` before the first read.
    pub fn current(&self) -> (Option<char>, Pos) {
        let slot = self.ring[(self.head + RING - self.pending) % RING];
        (slot.ch, slot.pos)
    }

    /// The first I/O error seen, if the stream ended because of one.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.io_error.as_ref()
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    fn next_char(&mut self) -> Option<char> {
        if self.eof {
            return None;
        }
        let Some(ch) = self.decode() else {
            self.eof = true;
            return None;
        };
        if ch == '\r' {
            if self.peek_byte() == Some(b'\n') {
                self.inner.consume(1);
            }
            return Some('\n');
        }
        Some(ch)
    }

    fn decode(&mut self) -> Option<char> {
        let first = self.next_byte()?;
        let width = utf8_width(first);
        match width {
            0 => return Some(char::REPLACEMENT_CHARACTER),
            1 => return Some(char::from(first)),
            _ => {}
        }

        let mut bytes = [first, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            match self.peek_byte() {
                Some(b) if b & 0xC0 == 0x80 => {
                    self.inner.consume(1);
                    *slot = b;
                }
                // Truncated sequence: the offending byte starts the next rune.
                _ => return Some(char::REPLACEMENT_CHARACTER),
            }
        }
        let ch = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Some(ch)
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = self.peek_byte()?;
        self.inner.consume(1);
        Some(b)
    }

    fn peek_byte(&mut self) -> Option<u8> {
        if self.eof {
            return None;
        }
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    self.eof = true;
                    self.io_error = Some(err);
                    return None;
                }
            }
        }
    }
}

/// Encoded length announced by a UTF-8 lead byte, or 0 for a byte that
/// cannot start a sequence.
const fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
