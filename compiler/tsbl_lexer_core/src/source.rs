//! The pull interface shared by all code point sources.

use crate::CodePoint;

/// A producer of code points, pulled one at a time.
///
/// Once a source has returned [`CodePoint::END_OF_STREAM`] or
/// [`CodePoint::DECODE_INVALID`], every later [`advance`](Self::advance)
/// returns that same sentinel. There is no resynchronization after a
/// decoding failure.
pub trait CodePointSource {
    /// Pull the next code point.
    fn advance(&mut self) -> CodePoint;

    /// The value most recently returned by [`advance`](Self::advance), or
    /// [`CodePoint::START_OF_STREAM`] before the first pull.
    fn current(&self) -> CodePoint;
}

impl<S: CodePointSource + ?Sized> CodePointSource for &mut S {
    #[inline]
    fn advance(&mut self) -> CodePoint {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> CodePoint {
        (**self).current()
    }
}

impl<S: CodePointSource + ?Sized> CodePointSource for Box<S> {
    #[inline]
    fn advance(&mut self) -> CodePoint {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> CodePoint {
        (**self).current()
    }
}
