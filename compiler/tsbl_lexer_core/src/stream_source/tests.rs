use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Cursor;

/// Reader that hands out at most `chunk` bytes per call.
struct Trickle<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(out.len()).min(self.data.len());
        out[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that yields `prefix`, then fails.
struct Failing<'a> {
    prefix: &'a [u8],
    interrupted_once: bool,
}

impl Read for Failing<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted_once {
            self.interrupted_once = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        if self.prefix.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        let n = out.len().min(self.prefix.len());
        out[..n].copy_from_slice(&self.prefix[..n]);
        self.prefix = &self.prefix[n..];
        Ok(n)
    }
}

fn drain<R: Read>(source: &mut StreamSource<R>) -> Vec<CodePoint> {
    let mut out = Vec::new();
    loop {
        let cp = source.advance();
        out.push(cp);
        if cp.is_sentinel() {
            return out;
        }
    }
}

fn expected(s: &str, last: CodePoint) -> Vec<CodePoint> {
    let mut v: Vec<_> = s.chars().map(CodePoint::from).collect();
    v.push(last);
    v
}

// === Configuration ===

#[test]
fn default_capacity() {
    let source = StreamSource::new(Cursor::new(Vec::<u8>::new()));
    assert_eq!(source.capacity(), StreamConfig::DEFAULT_CAPACITY);
}

#[test]
fn capacity_is_raised_to_max_len() {
    let config = StreamConfig::default().with_capacity(1);
    let source = StreamSource::with_config(Cursor::new(Vec::<u8>::new()), config);
    assert_eq!(source.capacity(), MAX_LEN);
}

// === Decoding ===

#[test]
fn empty_reader() {
    let mut source = StreamSource::new(Cursor::new(Vec::<u8>::new()));
    assert_eq!(source.current(), CodePoint::START_OF_STREAM);
    assert_eq!(drain(&mut source), vec![CodePoint::END_OF_STREAM]);
}

#[test]
fn decodes_whole_input() {
    let text = "let \u{3B1} = \"\u{1F600}\"\n";
    let mut source = StreamSource::new(Cursor::new(text.as_bytes()));
    assert_eq!(drain(&mut source), expected(text, CodePoint::END_OF_STREAM));
    assert_eq!(source.byte_pos(), text.len() as u64);
}

#[test]
fn sequences_split_across_reads() {
    let text = "\u{E9}\u{20AC}\u{1F600}\u{10FFFF}";
    for chunk in 1..=5 {
        let reader = Trickle {
            data: text.as_bytes(),
            chunk,
        };
        let mut source = StreamSource::new(reader);
        assert_eq!(
            drain(&mut source),
            expected(text, CodePoint::END_OF_STREAM),
            "chunk size {chunk}"
        );
    }
}

#[test]
fn minimum_window_sliding() {
    let text = "ab\u{1F600}cd\u{20AC}";
    let config = StreamConfig::default().with_capacity(MAX_LEN);
    let mut source = StreamSource::with_config(Cursor::new(text.as_bytes()), config);
    assert_eq!(drain(&mut source), expected(text, CodePoint::END_OF_STREAM));
}

#[test]
fn null_byte_is_a_code_point() {
    let mut source = StreamSource::new(Cursor::new(b"a\0b".to_vec()));
    assert_eq!(drain(&mut source), expected("a\0b", CodePoint::END_OF_STREAM));
}

#[test]
fn invalid_byte() {
    let mut source = StreamSource::new(Cursor::new(vec![b'x', 0xFF, b'y']));
    assert_eq!(
        drain(&mut source),
        vec![CodePoint::from('x'), CodePoint::DECODE_INVALID]
    );
}

#[test]
fn truncated_sequence_at_end_of_input() {
    let mut source = StreamSource::new(Cursor::new(vec![b'x', 0xF0, 0x9F, 0x98]));
    assert_eq!(
        drain(&mut source),
        vec![CodePoint::from('x'), CodePoint::DECODE_INVALID]
    );
}

// === Stuck Sentinels ===

#[test]
fn end_of_stream_repeats() {
    let mut source = StreamSource::new(Cursor::new(b"z".to_vec()));
    source.advance();
    for _ in 0..3 {
        assert_eq!(source.advance(), CodePoint::END_OF_STREAM);
    }
}

#[test]
fn decode_invalid_repeats() {
    let mut source = StreamSource::new(Cursor::new(vec![0xC1, b'a']));
    for _ in 0..3 {
        assert_eq!(source.advance(), CodePoint::DECODE_INVALID);
    }
}

// === Read Errors ===

#[test]
fn read_error_sticks_as_decode_invalid() {
    let reader = Failing {
        prefix: b"ok",
        interrupted_once: false,
    };
    let config = StreamConfig::default().with_capacity(MAX_LEN);
    let mut source = StreamSource::with_config(reader, config);
    // The interrupted read is retried; the first refill gets "ok" and then
    // trips over the failure while topping up the window.
    assert_eq!(source.advance(), CodePoint::DECODE_INVALID);
    assert_eq!(source.advance(), CodePoint::DECODE_INVALID);
    assert!(source.io_error().is_some());

    let err = source.take_io_error();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::Other));
    assert!(source.io_error().is_none());
    assert_eq!(source.advance(), CodePoint::DECODE_INVALID);
}

#[test]
fn into_inner_returns_reader() {
    let source = StreamSource::new(Cursor::new(vec![1u8, 2, 3]));
    assert_eq!(source.into_inner().into_inner(), vec![1, 2, 3]);
}

#[test]
fn open_missing_file_fails() {
    let result = StreamSource::open("/nonexistent/definitely/not/here.tsbl");
    assert!(result.is_err());
}

proptest! {
    #[test]
    fn chunking_does_not_change_output(
        s in any::<String>(),
        chunk in 1usize..9,
        capacity in 4usize..16,
    ) {
        let reader = Trickle { data: s.as_bytes(), chunk };
        let config = StreamConfig::default().with_capacity(capacity);
        let mut source = StreamSource::with_config(reader, config);
        prop_assert_eq!(drain(&mut source), expected(&s, CodePoint::END_OF_STREAM));
    }
}
