//! String literals.
//!
//! `"..."` and `'...'` are single-line strings; `"""..."""` and `'''...'''`
//! are long strings that may span lines. Both resolve escapes while they
//! scan, so the token value is the final text.
//!
//! # Escapes
//!
//! | Escape        | Result                         |
//! |---------------|--------------------------------|
//! | `\a \b \t \n` | BEL, BS, TAB, LF               |
//! | `\v \r`       | VT, CR                         |
//! | `\' \" \\ \0` | quote, double quote, `\`, NUL  |
//! | `\xNN`        | code point from 2 hex digits   |
//! | `\uNNNN`      | code point from 4 hex digits   |
//! | `\UNNNNNNNN`  | code point from 8 hex digits   |
//!
//! Any other escaped character is kept as written, backslash included.

use tsbl_lexer_core::CodePointSource;

use super::Lexer;
use crate::token::TokenValue;
use crate::{LexError, Position, Token, TokenKind};

impl<S: CodePointSource> Lexer<S> {
    /// Consume a string literal opened by `quote` at `current`.
    pub(super) fn string(&mut self, start: Position, quote: char) -> Result<Token, LexError> {
        self.bump();
        if self.current.is(quote) {
            if self.next.is(quote) {
                self.bump();
                self.bump();
                return self.long_string(start, quote);
            }
            self.bump();
            return Ok(Self::string_token(TokenKind::StringLiteral, start, String::new()));
        }

        let mut text = String::new();
        loop {
            let Some(c) = self.current.as_char() else {
                return Err(self.cut_short(start, LexError::unexpected_string_eof));
            };
            match c {
                c if c == quote => {
                    self.bump();
                    return Ok(Self::string_token(TokenKind::StringLiteral, start, text));
                }
                '\n' | '\r' => return Err(LexError::unexpected_string_eol(start)),
                '\\' => {
                    self.bump();
                    self.escape(start, &mut text)?;
                }
                c => {
                    text.push(c);
                    self.bump();
                }
            }
        }
    }

    /// Body of a long string; the opening triple quote is consumed.
    fn long_string(&mut self, start: Position, quote: char) -> Result<Token, LexError> {
        let mut text = String::new();
        loop {
            let Some(c) = self.current.as_char() else {
                return Err(self.cut_short(start, LexError::unexpected_string_eof));
            };
            match c {
                c if c == quote => {
                    self.bump();
                    if self.current.is(quote) && self.next.is(quote) {
                        self.bump();
                        self.bump();
                        return Ok(Self::string_token(
                            TokenKind::LongStringLiteral,
                            start,
                            text,
                        ));
                    }
                    text.push(quote);
                }
                '\n' | '\r' => text.push_str(self.bump_newline()),
                '\\' => {
                    self.bump();
                    self.escape(start, &mut text)?;
                }
                c => {
                    text.push(c);
                    self.bump();
                }
            }
        }
    }

    /// Resolve the escape whose backslash was just consumed.
    fn escape(&mut self, start: Position, text: &mut String) -> Result<(), LexError> {
        let Some(c) = self.current.as_char() else {
            return Err(self.cut_short(start, LexError::unexpected_escape_eof));
        };
        let resolved = match c {
            'a' => '\u{07}',
            'b' => '\u{08}',
            't' => '\t',
            'n' => '\n',
            'v' => '\u{0B}',
            'r' => '\r',
            '\'' => '\'',
            '"' => '"',
            '\\' => '\\',
            '0' => '\0',
            'x' => return self.hex_escape(start, 2, text),
            'u' => return self.hex_escape(start, 4, text),
            'U' => return self.hex_escape(start, 8, text),
            // Unknown escape: keep the backslash, let the caller handle `c`.
            _ => {
                text.push('\\');
                return Ok(());
            }
        };
        text.push(resolved);
        self.bump();
        Ok(())
    }

    /// Read exactly `digits` hex digits after `\x`, `\u` or `\U`.
    fn hex_escape(
        &mut self,
        start: Position,
        digits: usize,
        text: &mut String,
    ) -> Result<(), LexError> {
        self.bump();
        let mut value: u32 = 0;
        for _ in 0..digits {
            if self.at_newline() {
                return Err(LexError::unexpected_escape_eol(start));
            }
            let Some(c) = self.current.as_char() else {
                return Err(self.cut_short(start, LexError::unexpected_escape_eof));
            };
            let Some(digit) = c.to_digit(16) else {
                self.bump();
                return Err(LexError::bad_escape_hex_digit(start, c));
            };
            value = (value << 4) | digit;
            self.bump();
        }
        match char::from_u32(value) {
            Some(ch) => {
                text.push(ch);
                Ok(())
            }
            None => Err(LexError::invalid_escape_scalar(start)),
        }
    }

    fn string_token(kind: TokenKind, start: Position, text: String) -> Token {
        Token::with_value(kind, start, TokenValue::Str(text))
    }
}
