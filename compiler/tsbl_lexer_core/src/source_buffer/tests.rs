use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.as_terminated_bytes(), &[0]);
    assert_eq!(buf.interior_null(), None);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
    assert_eq!(buf.as_terminated_bytes(), b"hello\0");
}

#[test]
fn utf8_multibyte_source() {
    let source = "hello \u{1F600} world";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len(), source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

#[test]
fn invalid_utf8_is_kept_verbatim() {
    let buf = SourceBuffer::new([b'a', 0xFF, b'b']);
    assert_eq!(buf.as_bytes(), &[b'a', 0xFF, b'b']);
    assert_eq!(buf.interior_null(), None);
}

#[test]
fn from_conversions() {
    let from_str = SourceBuffer::from("xy");
    let from_bytes = SourceBuffer::from(&b"xy"[..]);
    assert_eq!(from_str, from_bytes);
}

// === Interior Nulls ===

#[test]
fn detects_first_interior_null() {
    let buf = SourceBuffer::new(b"ab\0cd\0");
    assert_eq!(buf.interior_null(), Some(2));
    // Content is untouched; only decoding stops early.
    assert_eq!(buf.len(), 6);
}

#[test]
fn leading_null() {
    let buf = SourceBuffer::new(b"\0");
    assert_eq!(buf.interior_null(), Some(0));
}
