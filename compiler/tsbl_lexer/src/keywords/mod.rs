//! Reserved keyword recognition.
//!
//! Keywords are matched incrementally while the lexer consumes an
//! identifier. [`KeywordMatcher`] tracks the range of [`KEYWORDS`] entries
//! that share the prefix consumed so far; each [`step`](KeywordMatcher::step)
//! narrows that range by binary search on the byte at the current depth.
//! When the range empties, the prefix is no keyword's prefix and the lexer
//! simply keeps going as an identifier: nothing is re-scanned.
//!
//! Because the table is sorted, an exact match (a keyword exactly `depth`
//! bytes long) is always the first entry of the live range.

use crate::TokenKind;

/// Every reserved keyword, sorted by spelling.
pub static KEYWORDS: [(&str, TokenKind); 35] = [
    ("break", TokenKind::Break),
    ("catch", TokenKind::Catch),
    ("char", TokenKind::Char),
    ("class", TokenKind::Class),
    ("continue", TokenKind::Continue),
    ("def", TokenKind::Def),
    ("double", TokenKind::Double),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("float", TokenKind::Float),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("int16", TokenKind::Int16),
    ("int32", TokenKind::Int32),
    ("int64", TokenKind::Int64),
    ("int8", TokenKind::Int8),
    ("null", TokenKind::Null),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("public", TokenKind::Public),
    ("pure", TokenKind::Pure),
    ("return", TokenKind::Return),
    ("string", TokenKind::String),
    ("struct", TokenKind::Struct),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("uint16", TokenKind::Uint16),
    ("uint32", TokenKind::Uint32),
    ("uint64", TokenKind::Uint64),
    ("uint8", TokenKind::Uint8),
    ("while", TokenKind::While),
];

/// Incremental keyword matcher over [`KEYWORDS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordMatcher {
    lo: usize,
    hi: usize,
    depth: usize,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordMatcher {
    pub fn new() -> Self {
        KeywordMatcher {
            lo: 0,
            hi: KEYWORDS.len(),
            depth: 0,
        }
    }

    /// Feed the next code point of the lexeme.
    ///
    /// Returns `false` once no keyword has the consumed prefix; further
    /// steps keep returning `false`.
    pub fn step(&mut self, c: char) -> bool {
        if self.lo >= self.hi {
            return false;
        }
        let Ok(byte) = u8::try_from(c) else {
            self.lo = self.hi;
            return false;
        };
        let depth = self.depth;
        let live = &KEYWORDS[self.lo..self.hi];
        let start = live.partition_point(|(kw, _)| kw.as_bytes().get(depth) < Some(&byte));
        let end = live.partition_point(|(kw, _)| kw.as_bytes().get(depth) <= Some(&byte));
        self.hi = self.lo + end;
        self.lo += start;
        self.depth += 1;
        self.lo < self.hi
    }

    /// Whether some keyword still has the consumed prefix.
    pub fn is_live(&self) -> bool {
        self.lo < self.hi
    }

    /// The keyword spelled exactly by the consumed prefix, if any.
    pub fn accepted(&self) -> Option<TokenKind> {
        match KEYWORDS[self.lo..self.hi].first() {
            Some(&(kw, kind)) if kw.len() == self.depth => Some(kind),
            _ => None,
        }
    }
}

/// Look up a complete word.
pub fn lookup(text: &str) -> Option<TokenKind> {
    let mut matcher = KeywordMatcher::new();
    for c in text.chars() {
        if !matcher.step(c) {
            return None;
        }
    }
    matcher.accepted()
}
