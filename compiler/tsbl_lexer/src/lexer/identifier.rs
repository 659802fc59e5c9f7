//! Identifiers and keywords.

use tsbl_lexer_core::{is_identifier_continue, CodePointSource};

use super::Lexer;
use crate::keywords::KeywordMatcher;
use crate::token::TokenValue;
use crate::{Position, Token, TokenKind};

impl<S: CodePointSource> Lexer<S> {
    /// Consume a maximal run of identifier code points.
    ///
    /// The keyword matcher is fed the same code points as they are
    /// consumed. If the finished lexeme spells a keyword exactly, the
    /// keyword wins; a keyword followed by more identifier code points
    /// (`tryx`) is an identifier.
    pub(super) fn identifier(&mut self, start: Position) -> Token {
        let mut text = String::new();
        let mut matcher = KeywordMatcher::new();
        while let Some(c) = self.current.as_char().filter(|&c| is_identifier_continue(c)) {
            if matcher.is_live() {
                matcher.step(c);
            }
            text.push(c);
            self.bump();
        }
        match matcher.accepted() {
            Some(kind) => Token::new(kind, start),
            None => Token::with_value(TokenKind::Identifier, start, TokenValue::Str(text)),
        }
    }
}
