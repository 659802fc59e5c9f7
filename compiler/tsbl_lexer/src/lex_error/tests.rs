use super::*;
use pretty_assertions::assert_eq;

fn pos(line: u32, column: u32) -> Position {
    Position { line, column }
}

// === Codes ===

#[test]
fn legacy_codes() {
    assert_eq!(LexErrorKind::UnknownSymbol.code(), -1);
    assert_eq!(LexErrorKind::BadEncoding.code(), -3);
    assert_eq!(LexErrorKind::UnexpectedStringEol.code(), -4);
    assert_eq!(LexErrorKind::UnexpectedStringEof.code(), -5);
    assert_eq!(LexErrorKind::BadEscapeHexDigit.code(), -6);
    assert_eq!(LexErrorKind::UnexpectedEscapeEol.code(), -7);
    assert_eq!(LexErrorKind::UnexpectedEscapeEof.code(), -8);
}

#[test]
fn codes_are_unique_and_skip_end_of_file() {
    let mut codes: Vec<_> = LexErrorKind::ALL.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), LexErrorKind::ALL.len());
    assert!(!codes.contains(&-2));
    assert!(codes.iter().all(|&c| c < 0));
}

#[test]
fn from_code_round_trip() {
    for kind in LexErrorKind::ALL {
        assert_eq!(LexErrorKind::from_code(kind.code()), Some(kind));
    }
    assert_eq!(LexErrorKind::from_code(-2), None);
    assert_eq!(LexErrorKind::from_code(0), None);
    assert_eq!(LexErrorKind::from_code(-13), None);
}

#[test]
fn names() {
    assert_eq!(LexErrorKind::BadEncoding.name(), "BadEncoding");
    assert_eq!(LexErrorKind::UnexpectedStringEof.name(), "UnexpectedStringEOF");
    assert_eq!(LexErrorKind::UnexpectedEscapeEol.name(), "UnexpectedEscapeEOL");
}

// === Constructors ===

#[test]
fn constructors_set_kind_and_position() {
    let p = pos(3, 7);
    let cases = [
        (LexError::bad_encoding(p), LexErrorKind::BadEncoding),
        (
            LexError::unexpected_string_eol(p),
            LexErrorKind::UnexpectedStringEol,
        ),
        (
            LexError::unexpected_string_eof(p),
            LexErrorKind::UnexpectedStringEof,
        ),
        (
            LexError::unexpected_escape_eol(p),
            LexErrorKind::UnexpectedEscapeEol,
        ),
        (
            LexError::unexpected_escape_eof(p),
            LexErrorKind::UnexpectedEscapeEof,
        ),
        (
            LexError::invalid_escape_scalar(p),
            LexErrorKind::InvalidEscapeScalar,
        ),
        (LexError::integer_overflow(p), LexErrorKind::IntegerOverflow),
        (LexError::empty_exponent(p), LexErrorKind::EmptyExponent),
        (LexError::real_overflow(p), LexErrorKind::RealOverflow),
    ];
    for (err, kind) in cases {
        assert_eq!(err.kind, kind);
        assert_eq!(err.position, p);
        assert_eq!(err.found, None);
        assert_eq!(err.code(), kind.code());
    }
}

#[test]
fn constructors_with_found_char() {
    let err = LexError::unknown_symbol(pos(0, 4), '@');
    assert_eq!(err.kind, LexErrorKind::UnknownSymbol);
    assert_eq!(err.found, Some('@'));

    let err = LexError::bad_escape_hex_digit(pos(1, 0), 'g');
    assert_eq!(err.kind, LexErrorKind::BadEscapeHexDigit);
    assert_eq!(err.found, Some('g'));
}

// === Display ===

#[test]
fn display() {
    let err = LexError::unexpected_string_eof(pos(2, 5));
    assert_eq!(err.to_string(), "unexpected end of file in string at 2:5");
    assert_eq!(LexErrorKind::UnknownSymbol.to_string(), "unknown symbol");
}
