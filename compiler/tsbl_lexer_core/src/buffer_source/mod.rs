//! Code point source over a terminated in-memory buffer.
//!
//! The source walks a borrowed byte slice whose last byte is `0x00`. The
//! terminator (or an earlier null byte) ends the stream. A multi-byte
//! sequence cut short by the terminator is a decoding failure, detected by
//! the continuation check on the `0x00` byte itself, so the source never
//! reads beyond the terminator.

use crate::utf8::{decode_step, DecodeStep};
use crate::{CodePoint, CodePointSource, SourceBuffer};

/// The byte slice handed to [`BufferSource::new`] does not end with `0x00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("source buffer is not terminated by a null byte")]
pub struct MissingTerminator;

/// Decodes code points from a borrowed, terminated byte slice.
#[derive(Clone, Debug)]
pub struct BufferSource<'a> {
    /// `[bytes..., 0x00]`, terminator guaranteed.
    bytes: &'a [u8],
    /// Offset of the next undecoded byte.
    pos: usize,
    current: CodePoint,
}

impl<'a> BufferSource<'a> {
    /// Create a source over caller-provided bytes ending in `0x00`.
    pub fn new(bytes: &'a [u8]) -> Result<Self, MissingTerminator> {
        match bytes.last() {
            Some(0) => Ok(Self::from_terminated(bytes)),
            _ => Err(MissingTerminator),
        }
    }

    pub(crate) fn from_buffer(buffer: &'a SourceBuffer) -> Self {
        Self::from_terminated(buffer.as_terminated_bytes())
    }

    fn from_terminated(bytes: &'a [u8]) -> Self {
        BufferSource {
            bytes,
            pos: 0,
            current: CodePoint::START_OF_STREAM,
        }
    }

    /// Byte offset of the next undecoded byte.
    pub fn byte_pos(&self) -> usize {
        self.pos
    }

    fn decode(&mut self) -> CodePoint {
        let window = &self.bytes[self.pos..];
        if window.first() == Some(&0) {
            return CodePoint::END_OF_STREAM;
        }
        match decode_step(window) {
            DecodeStep::Scalar { ch, len } => {
                self.pos += len as usize;
                CodePoint::from(ch)
            }
            // The terminator can only leave a sequence incomplete if it was
            // missing, which construction rules out.
            DecodeStep::Invalid | DecodeStep::Incomplete => CodePoint::DECODE_INVALID,
        }
    }
}

impl CodePointSource for BufferSource<'_> {
    fn advance(&mut self) -> CodePoint {
        if self.current.is_end_of_stream() || self.current.is_decode_invalid() {
            return self.current;
        }
        self.current = self.decode();
        self.current
    }

    #[inline]
    fn current(&self) -> CodePoint {
        self.current
    }
}
