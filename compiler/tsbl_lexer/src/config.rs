//! Lexer configuration.

use tsbl_lexer_core::is_space_separator;

/// Options controlling how the lexer treats its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Also skip horizontal tab, vertical tab and form feed between tokens.
    ///
    /// Off by default: only space separators (`Zs`) are skipped, and a tab
    /// is reported as an unknown symbol.
    pub skip_control_whitespace: bool,
}

impl LexerConfig {
    #[must_use]
    pub fn with_control_whitespace(mut self, skip: bool) -> Self {
        self.skip_control_whitespace = skip;
        self
    }

    /// Whether `c` separates tokens without producing one.
    #[inline]
    pub(crate) fn is_blank(self, c: char) -> bool {
        is_space_separator(c)
            || (self.skip_control_whitespace && matches!(c, '\t' | '\u{0B}' | '\u{0C}'))
    }
}
