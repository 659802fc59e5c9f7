//! Code point source over any [`Read`] implementation.
//!
//! Bytes are pulled into a fixed-size window. Before each decode step the
//! window is topped up so that at least [`MAX_LEN`] unconsumed bytes are
//! available, unless the reader has reported end of input: any sequence
//! that straddles a read boundary is therefore always seen whole.
//!
//! # Refill
//!
//! ```text
//! before:  [consumed...|u u|free.........]
//!                       ^start ^end
//! after:   [u u|new bytes......|free.....]
//!           ^start             ^end
//! ```
//!
//! Unconsumed bytes are shifted to the front, then the reader fills the
//! rest. `Interrupted` reads are retried.
//!
//! # Failure
//!
//! A read error is logged and kept (see [`StreamSource::take_io_error`]);
//! the source then reports [`CodePoint::DECODE_INVALID`] forever, like any
//! other decoding failure.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::utf8::{decode_step, DecodeStep, MAX_LEN};
use crate::{CodePoint, CodePointSource};

/// Window configuration for [`StreamSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    /// Window size in bytes. Values below [`MAX_LEN`] are raised to it.
    pub capacity: usize,
}

impl StreamConfig {
    /// Default window size (8 KiB).
    pub const DEFAULT_CAPACITY: usize = 8 * 1024;

    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }
}

/// Decodes code points from a byte reader through a sliding window.
pub struct StreamSource<R> {
    reader: R,
    buf: Box<[u8]>,
    /// First unconsumed byte in `buf`.
    start: usize,
    /// One past the last filled byte in `buf`.
    end: usize,
    /// The reader has returned `Ok(0)`.
    exhausted: bool,
    /// Total bytes consumed by decoding.
    consumed: u64,
    current: CodePoint,
    io_error: Option<io::Error>,
}

impl StreamSource<File> {
    /// Open `path` for reading with the default window.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "opened stream source");
        Ok(Self::new(file))
    }
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, StreamConfig::default())
    }

    pub fn with_config(reader: R, config: StreamConfig) -> Self {
        let capacity = config.capacity.max(MAX_LEN);
        StreamSource {
            reader,
            buf: vec![0u8; capacity].into_boxed_slice(),
            start: 0,
            end: 0,
            exhausted: false,
            consumed: 0,
            current: CodePoint::START_OF_STREAM,
            io_error: None,
        }
    }

    /// Total number of bytes decoded so far.
    pub fn byte_pos(&self) -> u64 {
        self.consumed
    }

    /// Window size in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The read error that stopped this source, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.io_error.as_ref()
    }

    /// Take ownership of the read error that stopped this source.
    ///
    /// The source stays stuck at [`CodePoint::DECODE_INVALID`].
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    /// Release the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    #[inline]
    fn available(&self) -> usize {
        self.end - self.start
    }

    /// Shift unconsumed bytes to the front and read until at least
    /// [`MAX_LEN`] bytes are buffered or the reader is exhausted.
    fn refill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        while self.available() < MAX_LEN && !self.exhausted {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => self.exhausted = true,
                Ok(n) => {
                    self.end += n;
                    tracing::trace!(read = n, buffered = self.end, "refilled stream window");
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn decode(&mut self) -> CodePoint {
        if self.available() < MAX_LEN && !self.exhausted {
            if let Err(e) = self.refill() {
                tracing::error!(error = %e, pos = self.consumed, "stream source read failed");
                self.io_error = Some(e);
                return CodePoint::DECODE_INVALID;
            }
        }

        let window = &self.buf[self.start..self.end];
        if window.is_empty() {
            return CodePoint::END_OF_STREAM;
        }
        match decode_step(window) {
            DecodeStep::Scalar { ch, len } => {
                self.start += len as usize;
                self.consumed += u64::from(len);
                CodePoint::from(ch)
            }
            // Incomplete only happens once the reader is exhausted: the
            // input ends inside a sequence.
            DecodeStep::Invalid | DecodeStep::Incomplete => CodePoint::DECODE_INVALID,
        }
    }
}

impl<R: Read> CodePointSource for StreamSource<R> {
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

impl<R> std::fmt::Debug for StreamSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSource")
            .field("capacity", &self.buf.len())
            .field("buffered", &(self.end - self.start))
            .field("exhausted", &self.exhausted)
            .field("consumed", &self.consumed)
            .field("current", &self.current)
            .field("io_error", &self.io_error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
