//! Bounded token replay.
//!
//! [`TokenBuffer`] remembers the last few results its scanner produced.
//! [`TokenBuffer::unscan`] moves a cursor back through that history and the
//! next calls to [`TokenBuffer::scan`] replay it in the original order before
//! the scanner is advanced again.

use std::collections::VecDeque;
use std::io::Read;

use tracing::debug;

use crate::{ScanError, ScanResult, Scanner};

/// Replay buffer owning one [`Scanner`].
pub struct TokenBuffer<R> {
    scanner: Scanner<R>,
    /// Most recent results, oldest first.
    history: VecDeque<ScanResult>,
    capacity: usize,
    /// Results unscanned and not yet replayed.
    pending: usize,
}

impl<R: Read> TokenBuffer<R> {
    /// History size used by [`TokenBuffer::new`].
    pub const DEFAULT_CAPACITY: usize = 6;

    pub fn new(scanner: Scanner<R>) -> Self {
        Self::with_capacity(scanner, Self::DEFAULT_CAPACITY)
    }

    /// Buffer remembering up to `capacity` results (at least one).
    pub fn with_capacity(scanner: Scanner<R>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        TokenBuffer {
            scanner,
            history: VecDeque::with_capacity(capacity),
            capacity,
            pending: 0,
        }
    }

    /// Next result: a replayed one if any are pending, otherwise a fresh scan.
    pub fn scan(&mut self) -> ScanResult {
        self.scan_with(Scanner::scan)
    }

    /// Like [`TokenBuffer::scan`], but a fresh result comes from
    /// [`Scanner::scan_regex`]. A pending replay is returned as recorded.
    pub fn scan_regex(&mut self) -> ScanResult {
        self.scan_with(Scanner::scan_regex)
    }

    /// Step back one result. Fails once every buffered result is pending.
    pub fn unscan(&mut self) -> Result<(), ScanError> {
        if self.pending >= self.history.len() {
            debug!(
                pending = self.pending,
                capacity = self.capacity,
                "unscan overflow"
            );
            return Err(ScanError::UnscanOverflow {
                capacity: self.capacity,
            });
        }
        self.pending += 1;
        Ok(())
    }

    /// The result most recently returned by a scan, taking unscans into
    /// account. `None` before the first scan or after unscanning everything.
    pub fn current(&self) -> Option<&ScanResult> {
        let returned = self.history.len() - self.pending;
        returned.checked_sub(1).and_then(|i| self.history.get(i))
    }

    /// Next raw character of the underlying scanner.
    ///
    /// Ignores pending replays: it looks past the buffered results.
    pub fn peek(&mut self) -> Option<char> {
        self.scanner.peek()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn scanner(&self) -> &Scanner<R> {
        &self.scanner
    }

    pub fn into_inner(self) -> Scanner<R> {
        self.scanner
    }

    fn scan_with(&mut self, fresh: impl FnOnce(&mut Scanner<R>) -> ScanResult) -> ScanResult {
        if self.pending > 0 {
            let index = self.history.len() - self.pending;
            self.pending -= 1;
            if let Some(tok) = self.history.get(index) {
                debug!(kind = %tok.kind, pos = %tok.pos, pending = self.pending, "replay");
                return tok.clone();
            }
        }

        let tok = fresh(&mut self.scanner);
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(tok.clone());
        tok
    }
}
