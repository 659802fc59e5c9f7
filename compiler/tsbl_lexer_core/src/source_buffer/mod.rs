//! Terminator-ended in-memory source buffer.
//!
//! The buffer owns a copy of the input followed by a single `0x00`
//! terminator byte. [`BufferSource`] decodes up to that terminator and never
//! looks past it, so it needs no separate length bookkeeping.
//!
//! # Interior Null Bytes
//!
//! A terminator-driven reader cannot tell an interior `0x00` from the real
//! terminator: everything after the first null byte is unreachable. The
//! buffer records where that happens (see [`SourceBuffer::interior_null`])
//! so callers can report the truncation.

use crate::BufferSource;

/// Owned source bytes plus a `0x00` terminator.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00]
///  ^                ^
///  0            source_len (terminator)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00]`.
    buf: Vec<u8>,
    /// Byte offset of the first null byte inside the source content.
    interior_null: Option<usize>,
}

impl SourceBuffer {
    /// Copy `source` into a new terminated buffer.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let source = source.as_ref();
        let mut buf = Vec::with_capacity(source.len() + 1);
        buf.extend_from_slice(source);
        buf.push(0);

        let interior_null = memchr::memchr(0, source);
        if let Some(pos) = interior_null {
            tracing::warn!(
                pos,
                len = source.len(),
                "interior null byte truncates source buffer"
            );
        }

        Self { buf, interior_null }
    }

    /// The source bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// The source bytes followed by the `0x00` terminator.
    pub fn as_terminated_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Length of the source content in bytes (excludes the terminator).
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the first interior null byte, if any.
    ///
    /// Decoding stops there; the rest of the content is never produced.
    pub fn interior_null(&self) -> Option<usize> {
        self.interior_null
    }

    /// Create a [`BufferSource`] positioned at byte 0.
    pub fn source(&self) -> BufferSource<'_> {
        BufferSource::from_buffer(self)
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests;
