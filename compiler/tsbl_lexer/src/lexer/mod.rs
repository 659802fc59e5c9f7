//! The tokenizer state machine.
//!
//! The lexer pulls code points from a [`CodePointSource`] and keeps two of
//! them in view: `current`, the next unconsumed code point, and `next`, the
//! one after it. That is enough lookahead for every lexeme in the language:
//! two-character operators, newline pairs, and the triple quote that opens
//! a long string.
//!
//! # Design
//!
//! [`Lexer::next_token`] skips blanks, records the start position, and
//! dispatches on `current` to a focused method that consumes one lexeme.
//! Literal and identifier scanning live in sibling modules:
//!
//! - `identifier`: identifiers, with keywords matched in lockstep
//! - `number`: integer and real literals
//! - `string`: quoted strings, long strings, escapes
//!
//! # Errors
//!
//! Errors are returned, never raised. After an error the lexer sits just
//! past the offending code point (before it, for newlines), and callers may
//! keep pulling; what follows is not guaranteed to be meaningful. A decoding
//! failure is permanent: the source is stuck, so every later call reports
//! `BadEncoding` again, always at the position of the bad bytes.

mod identifier;
mod number;
mod string;

use tsbl_lexer_core::{is_identifier_start, CodePoint, CodePointSource};

use crate::{LexError, LexerConfig, Position, Token, TokenKind};

/// Single-pass tokenizer over a code point source.
pub struct Lexer<S> {
    source: S,
    config: LexerConfig,
    /// Next unconsumed code point.
    current: CodePoint,
    /// The code point after `current`.
    next: CodePoint,
    /// Position of `current`.
    pos: Position,
    /// The iterator has yielded its last item.
    fused: bool,
}

impl<S: CodePointSource> Lexer<S> {
    /// Bind a lexer to `source` with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(mut source: S, config: LexerConfig) -> Self {
        let current = source.advance();
        let next = source.advance();
        Lexer {
            source,
            config,
            current,
            next,
            pos: Position::default(),
            fused: false,
        }
    }

    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Line of the next unconsumed code point (0-based).
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    /// Column of the next unconsumed code point (0-based, in code points).
    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// Release the source. Any lookahead already pulled is lost.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Produce the next token.
    ///
    /// Returns an `EndOfFile` token once the source is exhausted, and again
    /// on every later call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_blanks();
        let start = self.pos;
        let result = self.dispatch(start);
        if let Err(err) = &result {
            tracing::debug!(
                kind = %err.kind,
                line = err.position.line,
                column = err.position.column,
                found = ?err.found,
                "lexical error"
            );
        }
        result
    }

    fn dispatch(&mut self, start: Position) -> Result<Token, LexError> {
        let Some(c) = self.current.as_char() else {
            return if self.current.is_decode_invalid() {
                Err(LexError::bad_encoding(start))
            } else {
                Ok(Token::new(TokenKind::EndOfFile, start))
            };
        };
        match c {
            '\n' | '\r' => {
                self.bump_newline();
                Ok(Token::new(TokenKind::NewLine, start))
            }
            '0'..='9' => self.number(start),
            '"' | '\'' => self.string(start, c),
            c if is_identifier_start(c) => Ok(self.identifier(start)),
            c => match self.operator(c) {
                Some(kind) => Ok(Token::new(kind, start)),
                None => {
                    self.bump();
                    Err(LexError::unknown_symbol(start, c))
                }
            },
        }
    }

    // ─── Operators ─────────────────────────────────────────────────────

    /// Consume an operator starting with `c`, longest match first.
    fn operator(&mut self, c: char) -> Option<TokenKind> {
        let second = self.next.as_char();
        let (kind, len) = match (c, second) {
            ('+', Some('+')) => (TokenKind::Increment, 2),
            ('-', Some('-')) => (TokenKind::Decrement, 2),
            ('*', Some('*')) => (TokenKind::Power, 2),
            ('=', Some('=')) => (TokenKind::Equals, 2),
            ('!', Some('=')) => (TokenKind::NotEquals, 2),
            ('>', Some('=')) => (TokenKind::GreaterEquals, 2),
            ('>', Some('>')) => (TokenKind::RShift, 2),
            ('<', Some('=')) => (TokenKind::LessEquals, 2),
            ('<', Some('<')) => (TokenKind::LShift, 2),
            ('+', _) => (TokenKind::Plus, 1),
            ('-', _) => (TokenKind::Minus, 1),
            ('/', _) => (TokenKind::Divide, 1),
            ('*', _) => (TokenKind::Multiply, 1),
            ('(', _) => (TokenKind::OpenParen, 1),
            (')', _) => (TokenKind::CloseParen, 1),
            ('[', _) => (TokenKind::OpenBracket, 1),
            (']', _) => (TokenKind::CloseBracket, 1),
            ('{', _) => (TokenKind::OpenBrace, 1),
            ('}', _) => (TokenKind::CloseBrace, 1),
            ('.', _) => (TokenKind::Access, 1),
            ('=', _) => (TokenKind::Assign, 1),
            ('!', _) => (TokenKind::Not, 1),
            ('>', _) => (TokenKind::Greater, 1),
            ('<', _) => (TokenKind::Less, 1),
            _ => return None,
        };
        for _ in 0..len {
            self.bump();
        }
        Some(kind)
    }

    // ─── Cursor ────────────────────────────────────────────────────────

    fn skip_blanks(&mut self) {
        while self.current.as_char().is_some_and(|c| self.config.is_blank(c)) {
            self.bump();
        }
    }

    /// Pull the next code point into the lookahead window.
    #[inline]
    fn shift(&mut self) {
        self.current = self.next;
        self.next = self.source.advance();
    }

    /// Consume `current`, which must not be a line break.
    #[inline]
    fn bump(&mut self) {
        self.shift();
        self.pos.column = self.pos.column.saturating_add(1);
    }

    /// Consume a line break at `current` and return the text consumed.
    ///
    /// `\n\r` and `\r\n` are a single line break.
    fn bump_newline(&mut self) -> &'static str {
        let seq = match (self.current.as_char(), self.next.as_char()) {
            (Some('\n'), Some('\r')) => "\n\r",
            (Some('\r'), Some('\n')) => "\r\n",
            (Some('\r'), _) => "\r",
            _ => "\n",
        };
        for _ in 0..seq.len() {
            self.shift();
        }
        self.pos = Position::new(self.pos.line.saturating_add(1), 0);
        seq
    }

    /// Whether `current` is a line break.
    #[inline]
    fn at_newline(&self) -> bool {
        self.current.is('\n') || self.current.is('\r')
    }

    /// The error for running out of code points inside a lexeme.
    ///
    /// A decoding failure is reported where the bad bytes are, matching the
    /// `BadEncoding` every later call returns. Plain end of input is
    /// reported at the lexeme start via `at_end`.
    #[cold]
    fn cut_short(&self, start: Position, at_end: fn(Position) -> LexError) -> LexError {
        if self.current.is_decode_invalid() {
            LexError::bad_encoding(self.pos)
        } else {
            at_end(start)
        }
    }
}

impl<S: CodePointSource> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, `EndOfFile`.
    ///
    /// A decoding failure is yielded once and ends iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.next_token() {
            Ok(tok) if tok.kind() == TokenKind::EndOfFile => {
                self.fused = true;
                None
            }
            Err(err) if err.kind == crate::LexErrorKind::BadEncoding => {
                self.fused = true;
                Some(Err(err))
            }
            other => Some(other),
        }
    }
}

impl<S: CodePointSource> std::iter::FusedIterator for Lexer<S> {}

impl<S> std::fmt::Debug for Lexer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("current", &self.current)
            .field("next", &self.next)
            .field("pos", &self.pos)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
