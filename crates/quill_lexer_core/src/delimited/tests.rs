use super::*;
use pretty_assertions::assert_eq;

const REGEX_ESCAPES: &[(char, char)] = &[('/', '/')];

fn reader(source: &str) -> RuneReader<&[u8]> {
    RuneReader::new(source.as_bytes())
}

// === scan_string ===

#[test]
fn string_strips_quotes() {
    let mut r = reader("'hello world' rest");
    assert_eq!(scan_string(&mut r), Ok("hello world".to_string()));
    assert_eq!(r.read().0, Some(' '));
}

#[test]
fn string_closes_on_its_own_quote() {
    let mut r = reader(r#""it's""#);
    assert_eq!(scan_string(&mut r), Ok("it's".to_string()));
}

#[test]
fn string_escapes_decode_into_partial_text() {
    // The trailing `\'` is escaped, so the string never closes.
    let mut r = reader(r"'a\'b\\c\nd\'");
    assert_eq!(
        scan_string(&mut r),
        Err(DelimitedError::Unterminated {
            partial: "a'b\\c\nd'".to_string()
        })
    );
}

#[test]
fn string_escaped_quote_then_close() {
    let mut r = reader(r"'don\'t'");
    assert_eq!(scan_string(&mut r), Ok("don't".to_string()));
}

#[test]
fn string_unterminated_at_eof() {
    let mut r = reader("'abc");
    assert_eq!(
        scan_string(&mut r),
        Err(DelimitedError::Unterminated {
            partial: "abc".to_string()
        })
    );
}

#[test]
fn string_unterminated_at_newline() {
    let mut r = reader("'ab\ncd'");
    assert_eq!(
        scan_string(&mut r),
        Err(DelimitedError::Unterminated {
            partial: "ab".to_string()
        })
    );
    assert_eq!(r.read(), (Some('c'), Pos::new(1, 0)));
}

#[test]
fn string_bad_escape_reports_backslash() {
    let mut r = reader(r"'ab\qc'");
    assert_eq!(
        scan_string(&mut r),
        Err(DelimitedError::BadEscape {
            partial: "ab".to_string(),
            pos: Pos::new(0, 3),
        })
    );
    // The reader has moved past the escape.
    assert_eq!(r.read().0, Some('c'));
}

#[test]
fn string_backslash_at_eof_is_unterminated() {
    let mut r = reader(r"'ab\");
    assert_eq!(
        scan_string(&mut r),
        Err(DelimitedError::Unterminated {
            partial: "ab".to_string()
        })
    );
}

// === scan_delimited ===

#[test]
fn delimited_regex_body() {
    let mut r = reader("/^cpu.*$/ x");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::Strict),
        Ok("^cpu.*$".to_string())
    );
}

#[test]
fn delimited_mapped_escape() {
    let mut r = reader(r"/a\/b/");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::Strict),
        Ok("a/b".to_string())
    );
}

#[test]
fn delimited_strict_rejects_unknown_escape() {
    let mut r = reader(r"/a\db/");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::Strict),
        Err(DelimitedError::BadEscape {
            partial: "a".to_string(),
            pos: Pos::new(0, 2),
        })
    );
}

#[test]
fn delimited_pass_through_keeps_unknown_escape() {
    let mut r = reader(r"/\d+\/x/");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::PassThrough),
        Ok(r"\d+/x".to_string())
    );
}

#[test]
fn delimited_pass_through_double_backslash() {
    // `\\` is not in the table: the first backslash is kept and the second
    // starts a new escape, which here maps `\/` to `/`.
    let mut r = reader(r"/a\\/b/");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::PassThrough),
        Ok(r"a\/b".to_string())
    );
}

#[test]
fn delimited_missing_open() {
    let mut r = reader("abc/");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::Strict),
        Err(DelimitedError::MissingOpen { found: Some('a') })
    );
}

#[test]
fn delimited_missing_open_at_eof() {
    let mut r = reader("");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::Strict),
        Err(DelimitedError::MissingOpen { found: None })
    );
}

#[test]
fn delimited_unterminated() {
    let mut r = reader("/abc");
    assert_eq!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::Strict),
        Err(DelimitedError::Unterminated {
            partial: "abc".to_string()
        })
    );
}

#[test]
fn delimited_rejects_newline() {
    let mut r = reader("/ab\nc/");
    assert!(matches!(
        scan_delimited(&mut r, '/', '/', REGEX_ESCAPES, EscapePolicy::Strict),
        Err(DelimitedError::Unterminated { .. })
    ));
}

#[test]
fn partial_text_of_errors() {
    let err = DelimitedError::BadEscape {
        partial: "ab".to_string(),
        pos: Pos::START,
    };
    assert_eq!(err.into_partial(), "ab");
    assert_eq!(
        DelimitedError::MissingOpen { found: None }.into_partial(),
        ""
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        DelimitedError::BadEscape {
            partial: String::new(),
            pos: Pos::new(1, 4),
        }
        .to_string(),
        "bad escape sequence at 1:4"
    );
    assert_eq!(
        DelimitedError::MissingOpen { found: Some('x') }.to_string(),
        "expected opening delimiter, found 'x'"
    );
}

// === scan_bare_ident ===

#[test]
fn bare_ident_stops_at_non_ident() {
    let mut r = reader("cpu_01.value");
    assert_eq!(scan_bare_ident(&mut r), "cpu_01");
    assert_eq!(r.read().0, Some('.'));
}

#[test]
fn bare_ident_at_eof() {
    let mut r = reader("host");
    assert_eq!(scan_bare_ident(&mut r), "host");
    assert_eq!(r.read().0, None);
}
