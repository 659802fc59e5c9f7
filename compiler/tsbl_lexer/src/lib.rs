//! Tokenizer for the TSBL language.
//!
//! Turns a stream of code points into classified, positioned tokens.
//! Decoding and Unicode classification come from `tsbl_lexer_core`; this
//! crate owns the token model and the lexer state machine.
//!
//! ```text
//! bytes ─► CodePointSource ─► Lexer ─► Result<Token, LexError>
//! ```
//!
//! # Example
//!
//! ```
//! use tsbl_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("x = 1 + 2")
//!     .into_iter()
//!     .filter_map(Result::ok)
//!     .map(|tok| tok.kind())
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::IntegerLiteral,
//!         TokenKind::Plus,
//!         TokenKind::IntegerLiteral,
//!     ]
//! );
//! ```

mod config;
pub mod keywords;
mod lex_error;
mod lexer;
mod token;
mod token_kind;

use std::sync::Once;

pub use config::LexerConfig;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use token::{Position, Token, TokenValue};
pub use token_kind::{name_of, TokenKind};

pub use tsbl_lexer_core::{
    BufferSource, CodePoint, CodePointSource, SourceBuffer, StreamConfig, StreamSource,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at program start. Controlled by `RUST_LOG` env var:
/// - `RUST_LOG=tsbl_lexer=debug`: lexical errors as they are produced
/// - `RUST_LOG=tsbl_lexer_core=trace`: stream refills
///
/// Does nothing if `RUST_LOG` is unset or a subscriber is already installed
/// by this function.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be global (tests, embedding).
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Tokenize an in-memory string.
///
/// Collects every token up to, not including, `EndOfFile`. Errors are kept
/// in place; lexing continues after them.
pub fn tokenize(source: &str) -> Vec<Result<Token, LexError>> {
    tokenize_bytes(source.as_bytes())
}

/// Tokenize raw bytes, which need not be valid UTF-8.
pub fn tokenize_bytes(source: &[u8]) -> Vec<Result<Token, LexError>> {
    let buffer = SourceBuffer::new(source);
    Lexer::new(buffer.source()).collect()
}
