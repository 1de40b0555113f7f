//! End-to-end properties of the scanner and replay buffer.
//!
//! Unit tests next to each module cover individual routines; these tests go
//! through the public API only, the way a parser would.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::{self, Read};
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quill_lexer::{
    init_tracing, tokenize, KeywordId, Pos, ScanError, ScanResult, Scanner, TokenBuffer,
    TokenKind, Vocabulary,
};

fn non_ws(source: &str, vocab: &Arc<Vocabulary>) -> Vec<ScanResult> {
    let mut scanner = Scanner::with_vocabulary(source.as_bytes(), Arc::clone(vocab));
    scanner
        .tokens()
        .filter(|tok| tok.kind != TokenKind::Ws)
        .collect()
}

fn query_vocabulary() -> (Arc<Vocabulary>, KeywordId, KeywordId, KeywordId) {
    let select = KeywordId::new(1024).unwrap();
    let from = KeywordId::new(1025).unwrap();
    let where_ = KeywordId::new(1026).unwrap();
    let vocab = Vocabulary::with_keywords([(select, "SELECT"), (from, "FROM"), (where_, "WHERE")]);
    (Arc::new(vocab), select, from, where_)
}

#[test]
fn scans_a_query() {
    init_tracing();
    let (vocab, select, from, where_) = query_vocabulary();
    let toks = non_ws(
        "SELECT mean(\"usage idle\") FROM cpu WHERE host = 'a' AND time > now() - 10m",
        &vocab,
    );
    let rendered: Vec<(TokenKind, &str)> =
        toks.iter().map(|t| (t.kind, t.text(&vocab))).collect();
    assert_eq!(
        rendered,
        vec![
            (TokenKind::Custom(select), "SELECT"),
            (TokenKind::Ident, "mean"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "usage idle"),
            (TokenKind::RParen, ")"),
            (TokenKind::Custom(from), "FROM"),
            (TokenKind::Ident, "cpu"),
            (TokenKind::Custom(where_), "WHERE"),
            (TokenKind::Ident, "host"),
            (TokenKind::Eq, "="),
            (TokenKind::String, "a"),
            (TokenKind::And, "AND"),
            (TokenKind::Ident, "time"),
            (TokenKind::Gt, ">"),
            (TokenKind::Ident, "now"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::Minus, "-"),
            (TokenKind::Duration, "10m"),
        ]
    );
}

#[test]
fn fixed_form_tokens_carry_no_literal() {
    let (vocab, ..) = query_vocabulary();
    for tok in non_ws("select ( ) , ; =~ !~ AND or true false", &vocab) {
        assert!(!tok.kind.has_literal(), "{tok}");
        assert_eq!(tok.literal, "", "{tok}");
    }
}

#[test]
fn variable_tokens_carry_their_text() {
    let toks = tokenize("cpu 12 5s 'x' ?");
    for tok in toks {
        assert!(tok.kind.has_literal(), "{tok}");
        assert!(!tok.literal.is_empty(), "{tok}");
    }
}

#[test]
fn lexical_errors_do_not_stop_scanning() {
    let kinds: Vec<TokenKind> = tokenize("a ! 'b\nc")
        .into_iter()
        .map(|t| t.kind)
        .filter(|&k| k != TokenKind::Ws)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Illegal,
            TokenKind::BadString,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn parser_style_backtracking() {
    // A parser reads `a`, then decides to back up and reread the whole
    // comparison.
    let mut buf = TokenBuffer::new(Scanner::new("a >= 5 AND b".as_bytes()));
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(buf.scan());
    }
    for _ in 0..5 {
        buf.unscan().unwrap();
    }
    assert_eq!(buf.pending(), 5);
    for expected in &seen {
        assert_eq!(&buf.scan(), expected);
    }
    assert_eq!(buf.scan().kind, TokenKind::Ws);
    assert_eq!(buf.scan().kind, TokenKind::And);
}

#[test]
fn overflow_leaves_buffer_untouched() {
    let mut buf = TokenBuffer::with_capacity(Scanner::new("a b c".as_bytes()), 2);
    for _ in 0..5 {
        buf.scan();
    }
    buf.unscan().unwrap();
    buf.unscan().unwrap();
    assert_eq!(buf.unscan(), Err(ScanError::UnscanOverflow { capacity: 2 }));
    assert_eq!(buf.pending(), 2);
    assert_eq!(buf.scan().literal, " ");
    assert_eq!(buf.scan().literal, "c");
    assert!(buf.scan().is_eof());
}

#[test]
fn overflow_message() {
    let err = ScanError::UnscanOverflow { capacity: 6 };
    assert_eq!(
        err.to_string(),
        "cannot unscan more than the 6 most recent tokens"
    );
    let err = KeywordId::new(7).unwrap_err();
    assert_eq!(err.to_string(), "keyword id 7 is reserved for built-in tokens");
}

#[test]
fn scanners_share_a_vocabulary_across_threads() {
    let (vocab, select, ..) = query_vocabulary();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let vocab = Arc::clone(&vocab);
            thread::spawn(move || {
                let source = format!("select f{i}");
                non_ws(&source, &vocab)
                    .into_iter()
                    .map(|t| t.kind)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            vec![TokenKind::Custom(select), TokenKind::Ident]
        );
    }
}

#[test]
fn scanners_with_different_vocabularies_run_concurrently() {
    let (with_keywords, select, ..) = query_vocabulary();
    let plain = Arc::new(Vocabulary::new());

    let a = thread::spawn(move || non_ws("select", &with_keywords)[0].kind);
    let b = thread::spawn(move || non_ws("select", &plain)[0].kind);
    assert_eq!(a.join().unwrap(), TokenKind::Custom(select));
    assert_eq!(b.join().unwrap(), TokenKind::Ident);
}

/// Yields `data`, then fails.
struct Truncated {
    data: io::Cursor<Vec<u8>>,
}

impl Read for Truncated {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone")),
            n => Ok(n),
        }
    }
}

#[test]
fn read_failure_ends_the_stream() {
    let source = Truncated {
        data: io::Cursor::new(b"ab".to_vec()),
    };
    let mut scanner = Scanner::new(source);
    assert_eq!(
        scanner.scan(),
        ScanResult::new(TokenKind::Ident, Pos::START, "ab")
    );
    assert!(scanner.scan().is_eof());
    let err = scanner.reader().io_error().expect("error recorded");
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

proptest! {
    #[test]
    fn disjoint_registration_order_is_irrelevant(
        words in prop::collection::hash_set("[a-z]{3,8}", 1..8),
    ) {
        let entries: Vec<(KeywordId, String)> = words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let id = KeywordId::FIRST + u32::try_from(i).unwrap();
                (KeywordId::new(id).unwrap(), w.clone())
            })
            .collect();

        let mut forward = Vocabulary::new();
        forward.register(entries.iter().cloned());
        let mut backward = Vocabulary::new();
        backward.register(entries.iter().rev().cloned());

        for word in &words {
            prop_assert_eq!(forward.lookup(word), backward.lookup(word));
            prop_assert_eq!(forward.lookup(&word.to_uppercase()), backward.lookup(word));
        }
    }

    #[test]
    fn scanning_never_panics_and_ends(source in "\\PC{0,80}") {
        let toks = tokenize(&source);
        prop_assert!(toks.len() <= source.chars().count());
    }
}
