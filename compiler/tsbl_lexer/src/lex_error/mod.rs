//! Lexical error types.
//!
//! Every error carries the position of the lexeme that failed and, where it
//! helps, the offending character. Errors never abort the process: the
//! lexer returns them from `next_token` and the caller decides whether to
//! keep pulling.

use crate::Position;

/// A lexical error at a source position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Where the offending lexeme starts.
    pub position: Position,
    /// The character that triggered the error, when there is one.
    pub found: Option<char>,
}

/// What kind of lexical error occurred.
///
/// Each kind has a stable negative [`code`](Self::code), disjoint from
/// token ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A code point that cannot start any lexeme.
    #[error("unknown symbol")]
    UnknownSymbol,
    /// The source is not well-formed UTF-8, or could not be read.
    #[error("bad encoding")]
    BadEncoding,

    // === String Errors ===
    /// A raw newline inside a single-line string.
    #[error("unexpected end of line in string")]
    UnexpectedStringEol,
    /// The source ended before the closing quote.
    #[error("unexpected end of file in string")]
    UnexpectedStringEof,
    /// A non-hex character inside a `\x`, `\u` or `\U` escape.
    #[error("bad hex digit in escape")]
    BadEscapeHexDigit,
    /// A newline cut a hex escape short.
    #[error("unexpected end of line in escape")]
    UnexpectedEscapeEol,
    /// The source ended inside a hex escape.
    #[error("unexpected end of file in escape")]
    UnexpectedEscapeEof,
    /// A hex escape names a surrogate or a value above `U+10FFFF`.
    #[error("escape is not a unicode scalar value")]
    InvalidEscapeScalar,

    // === Numeric Errors ===
    /// Integer literal above `u64::MAX`.
    #[error("integer literal too large")]
    IntegerOverflow,
    /// `e`/`E` not followed by exponent digits (e.g. `1.5e`).
    #[error("empty exponent in real literal")]
    EmptyExponent,
    /// Real literal too large to represent.
    #[error("real literal out of range")]
    RealOverflow,
}

impl LexErrorKind {
    /// Every kind, ordered by descending code.
    pub const ALL: [LexErrorKind; 11] = [
        LexErrorKind::UnknownSymbol,
        LexErrorKind::BadEncoding,
        LexErrorKind::UnexpectedStringEol,
        LexErrorKind::UnexpectedStringEof,
        LexErrorKind::BadEscapeHexDigit,
        LexErrorKind::UnexpectedEscapeEol,
        LexErrorKind::UnexpectedEscapeEof,
        LexErrorKind::IntegerOverflow,
        LexErrorKind::EmptyExponent,
        LexErrorKind::RealOverflow,
        LexErrorKind::InvalidEscapeScalar,
    ];

    /// Stable negative id. `-2` is reserved for `EndOfFile`.
    pub const fn code(self) -> i32 {
        match self {
            LexErrorKind::UnknownSymbol => -1,
            LexErrorKind::BadEncoding => -3,
            LexErrorKind::UnexpectedStringEol => -4,
            LexErrorKind::UnexpectedStringEof => -5,
            LexErrorKind::BadEscapeHexDigit => -6,
            LexErrorKind::UnexpectedEscapeEol => -7,
            LexErrorKind::UnexpectedEscapeEof => -8,
            LexErrorKind::IntegerOverflow => -9,
            LexErrorKind::EmptyExponent => -10,
            LexErrorKind::RealOverflow => -11,
            LexErrorKind::InvalidEscapeScalar => -12,
        }
    }

    pub fn from_code(code: i32) -> Option<LexErrorKind> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Short identifier-style name, e.g. `"BadEncoding"`.
    pub const fn name(self) -> &'static str {
        match self {
            LexErrorKind::UnknownSymbol => "UnknownSymbol",
            LexErrorKind::BadEncoding => "BadEncoding",
            LexErrorKind::UnexpectedStringEol => "UnexpectedStringEOL",
            LexErrorKind::UnexpectedStringEof => "UnexpectedStringEOF",
            LexErrorKind::BadEscapeHexDigit => "BadEscapeHexDigit",
            LexErrorKind::UnexpectedEscapeEol => "UnexpectedEscapeEOL",
            LexErrorKind::UnexpectedEscapeEof => "UnexpectedEscapeEOF",
            LexErrorKind::IntegerOverflow => "IntegerOverflow",
            LexErrorKind::EmptyExponent => "EmptyExponent",
            LexErrorKind::RealOverflow => "RealOverflow",
            LexErrorKind::InvalidEscapeScalar => "InvalidEscapeScalar",
        }
    }
}

impl LexError {
    fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError {
            kind,
            position,
            found: None,
        }
    }

    #[cold]
    pub fn unknown_symbol(position: Position, found: char) -> Self {
        LexError {
            found: Some(found),
            ..Self::new(LexErrorKind::UnknownSymbol, position)
        }
    }

    #[cold]
    pub fn bad_encoding(position: Position) -> Self {
        Self::new(LexErrorKind::BadEncoding, position)
    }

    #[cold]
    pub fn unexpected_string_eol(position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedStringEol, position)
    }

    #[cold]
    pub fn unexpected_string_eof(position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedStringEof, position)
    }

    #[cold]
    pub fn bad_escape_hex_digit(position: Position, found: char) -> Self {
        LexError {
            found: Some(found),
            ..Self::new(LexErrorKind::BadEscapeHexDigit, position)
        }
    }

    #[cold]
    pub fn unexpected_escape_eol(position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedEscapeEol, position)
    }

    #[cold]
    pub fn unexpected_escape_eof(position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedEscapeEof, position)
    }

    #[cold]
    pub fn invalid_escape_scalar(position: Position) -> Self {
        Self::new(LexErrorKind::InvalidEscapeScalar, position)
    }

    #[cold]
    pub fn integer_overflow(position: Position) -> Self {
        Self::new(LexErrorKind::IntegerOverflow, position)
    }

    #[cold]
    pub fn empty_exponent(position: Position) -> Self {
        Self::new(LexErrorKind::EmptyExponent, position)
    }

    #[cold]
    pub fn real_overflow(position: Position) -> Self {
        Self::new(LexErrorKind::RealOverflow, position)
    }

    /// Stable negative id of the error kind.
    pub fn code(&self) -> i32 {
        self.kind.code()
    }
}

#[cfg(test)]
mod tests;
