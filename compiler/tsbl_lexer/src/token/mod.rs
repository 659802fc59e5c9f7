//! Tokens and their values.
//!
//! A [`Token`] owns its [`TokenValue`] outright. Cloning deep-copies a
//! string payload; moving a token moves it. Values leave a token through
//! [`Token::take_string`] / [`Token::take_value`], which put the empty
//! value for the kind back in its place.

use std::fmt;
use std::mem;

use crate::TokenKind;

/// Source position of the first code point of a lexeme.
///
/// Both fields are 0-based. Columns count code points, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Payload of a token.
///
/// Which arm is live follows from the token kind: string-bearing kinds use
/// `Str`, `IntegerLiteral` uses `Integer`, `RealLiteral` uses `Real`, and
/// everything else carries `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TokenValue {
    #[default]
    None,
    Str(String),
    Integer(u64),
    Real(f64),
}

impl TokenValue {
    /// The empty value for `kind`: `""`, `0`, `0.0`, or `None`.
    pub fn empty_for(kind: TokenKind) -> Self {
        match kind {
            TokenKind::IntegerLiteral => TokenValue::Integer(0),
            TokenKind::RealLiteral => TokenValue::Real(0.0),
            k if k.carries_string() => TokenValue::Str(String::new()),
            _ => TokenValue::None,
        }
    }

    /// Whether this value has the representation `kind` expects.
    pub fn fits(&self, kind: TokenKind) -> bool {
        match self {
            TokenValue::None => {
                !kind.carries_string()
                    && !matches!(kind, TokenKind::IntegerLiteral | TokenKind::RealLiteral)
            }
            TokenValue::Str(_) => kind.carries_string(),
            TokenValue::Integer(_) => kind == TokenKind::IntegerLiteral,
            TokenValue::Real(_) => kind == TokenKind::RealLiteral,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match *self {
            TokenValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match *self {
            TokenValue::Real(v) => Some(v),
            _ => None,
        }
    }
}

/// A classified, positioned lexical unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    position: Position,
    value: TokenValue,
}

impl Token {
    /// A token of `kind` at `position` holding the empty value for its kind.
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token {
            kind,
            position,
            value: TokenValue::empty_for(kind),
        }
    }

    /// A token with an explicit value.
    ///
    /// Callers inside the crate guarantee `value.fits(kind)`.
    pub(crate) fn with_value(kind: TokenKind, position: Position, value: TokenValue) -> Self {
        debug_assert!(value.fits(kind), "{value:?} does not fit {kind:?}");
        Token {
            kind,
            position,
            value,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// String payload of identifiers and string literals.
    pub fn string(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Mutable access to the string payload.
    pub fn string_mut(&mut self) -> Option<&mut String> {
        match &mut self.value {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self) -> Option<u64> {
        self.value.as_integer()
    }

    pub fn real(&self) -> Option<f64> {
        self.value.as_real()
    }

    /// Move the string payload out, leaving an empty string behind.
    ///
    /// A second call yields `Some("")`. `None` for kinds without a string.
    pub fn take_string(&mut self) -> Option<String> {
        self.string_mut().map(mem::take)
    }

    /// Move the value out, leaving the empty value for the kind behind.
    pub fn take_value(&mut self) -> TokenValue {
        mem::replace(&mut self.value, TokenValue::empty_for(self.kind))
    }

    pub fn into_value(self) -> TokenValue {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.kind.name())?;
        match &self.value {
            TokenValue::None => Ok(()),
            TokenValue::Str(s) => write!(f, " {s:?}"),
            TokenValue::Integer(v) => write!(f, " {v}"),
            TokenValue::Real(v) => write!(f, " {v:?}"),
        }
    }
}
