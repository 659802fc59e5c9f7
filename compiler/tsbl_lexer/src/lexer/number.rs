//! Integer and real literals.
//!
//! ```text
//! integer = digit+
//! real    = digit+ '.' digit* exponent?
//!         | digit+ exponent
//! exponent = ('e' | 'E') ('+' | '-')? digit+
//! ```
//!
//! Integers accumulate exactly in a `u64`. Reals are converted from their
//! full lexeme text, which gives the correctly rounded `f64` of
//! `mantissa * 10^exponent`.

use tsbl_lexer_core::CodePointSource;

use super::Lexer;
use crate::token::TokenValue;
use crate::{LexError, Position, Token, TokenKind};

impl<S: CodePointSource> Lexer<S> {
    pub(super) fn number(&mut self, start: Position) -> Result<Token, LexError> {
        let mut text = String::new();
        let mut value = Some(0u64);
        while let Some(digit) = self.current_digit() {
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(u64::from(digit)));
            self.push_current(&mut text);
        }

        let mut is_real = false;
        if self.current.is('.') {
            is_real = true;
            self.push_current(&mut text);
            while self.current_digit().is_some() {
                self.push_current(&mut text);
            }
        }
        if self.current.is('e') || self.current.is('E') {
            is_real = true;
            self.push_current(&mut text);
            if self.current.is('+') || self.current.is('-') {
                self.push_current(&mut text);
            }
            if self.current_digit().is_none() {
                return Err(LexError::empty_exponent(start));
            }
            while self.current_digit().is_some() {
                self.push_current(&mut text);
            }
        }

        if is_real {
            match text.parse::<f64>() {
                Ok(real) if real.is_finite() => Ok(Token::with_value(
                    TokenKind::RealLiteral,
                    start,
                    TokenValue::Real(real),
                )),
                _ => Err(LexError::real_overflow(start)),
            }
        } else {
            match value {
                Some(v) => Ok(Token::with_value(
                    TokenKind::IntegerLiteral,
                    start,
                    TokenValue::Integer(v),
                )),
                None => Err(LexError::integer_overflow(start)),
            }
        }
    }

    /// Value of `current` as a decimal digit.
    #[inline]
    fn current_digit(&self) -> Option<u32> {
        self.current.as_char().and_then(|c| c.to_digit(10))
    }

    /// Append `current` to `text` and consume it.
    #[inline]
    fn push_current(&mut self, text: &mut String) {
        if let Some(c) = self.current.as_char() {
            text.push(c);
        }
        self.bump();
    }
}
