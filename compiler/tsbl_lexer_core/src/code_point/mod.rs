//! Code points and stream sentinels.
//!
//! A [`CodePoint`] is either a Unicode scalar value (non-negative) or one of
//! three negative sentinels describing the state of the source it was pulled
//! from. Scalar values never exceed `0x10FFFF`, so the two ranges cannot
//! collide.

use std::fmt;

use crate::category::{category, Category};

/// A decoded Unicode scalar value, or a negative stream sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePoint(i32);

impl CodePoint {
    /// No code point has been pulled yet.
    pub const START_OF_STREAM: CodePoint = CodePoint(-2);
    /// The source is exhausted.
    pub const END_OF_STREAM: CodePoint = CodePoint(-1);
    /// The bytes at the current position are not well-formed UTF-8.
    pub const DECODE_INVALID: CodePoint = CodePoint(-3);

    /// Raw integer value. Negative for sentinels.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The scalar value, or `None` for a sentinel.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_end_of_stream(self) -> bool {
        self.0 == Self::END_OF_STREAM.0
    }

    #[inline]
    pub const fn is_decode_invalid(self) -> bool {
        self.0 == Self::DECODE_INVALID.0
    }

    /// Returns `true` if this code point is exactly `c`.
    #[inline]
    pub const fn is(self, c: char) -> bool {
        self.0 == c as i32
    }

    /// General category of the scalar value, `None` for sentinels.
    pub fn category(self) -> Option<Category> {
        self.as_char().map(category)
    }
}

impl From<char> for CodePoint {
    #[inline]
    #[allow(
        clippy::cast_possible_wrap,
        reason = "char is at most 0x10FFFF and always fits i32"
    )]
    fn from(c: char) -> Self {
        CodePoint(c as i32)
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::START_OF_STREAM => f.write_str("StartOfStream"),
            Self::END_OF_STREAM => f.write_str("EndOfStream"),
            Self::DECODE_INVALID => f.write_str("DecodeInvalid"),
            other => match other.as_char() {
                Some(c) => write!(f, "{c:?}"),
                None => write!(f, "CodePoint({})", other.0),
            },
        }
    }
}
