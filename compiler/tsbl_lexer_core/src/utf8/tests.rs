use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn scalar(ch: char) -> DecodeStep {
    DecodeStep::Scalar {
        ch,
        len: ch.len_utf8() as u32,
    }
}

// === Well-Formed Sequences ===

#[test]
fn one_byte() {
    assert_eq!(decode_step(b"a"), scalar('a'));
    assert_eq!(decode_step(b"\x7F"), scalar('\u{7F}'));
    assert_eq!(decode_step(b"\0rest"), scalar('\0'));
}

#[test]
fn multi_byte_boundaries() {
    for ch in [
        '\u{80}',
        '\u{7FF}',
        '\u{800}',
        '\u{D7FF}',
        '\u{E000}',
        '\u{FFFF}',
        '\u{10000}',
        '\u{10FFFF}',
    ] {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        assert_eq!(decode_step(encoded.as_bytes()), scalar(ch), "{ch:?}");
    }
}

#[test]
fn decodes_only_the_first_scalar() {
    assert_eq!(decode_step("éa".as_bytes()), scalar('é'));
}

// === Ill-Formed Sequences ===

#[test]
fn stray_continuation_byte() {
    assert_eq!(decode_step(&[0x80]), DecodeStep::Invalid);
    assert_eq!(decode_step(&[0xBF, b'a']), DecodeStep::Invalid);
}

#[test]
fn forbidden_leads() {
    for lead in [0xC0, 0xC1, 0xF5, 0xF8, 0xFE, 0xFF] {
        assert_eq!(decode_step(&[lead, 0x80, 0x80, 0x80]), DecodeStep::Invalid);
    }
}

#[test]
fn overlong_forms() {
    assert_eq!(decode_step(&[0xE0, 0x80, 0x80]), DecodeStep::Invalid);
    assert_eq!(decode_step(&[0xF0, 0x80, 0x80, 0x80]), DecodeStep::Invalid);
}

#[test]
fn surrogates_rejected() {
    // U+D800 encoded as ED A0 80
    assert_eq!(decode_step(&[0xED, 0xA0, 0x80]), DecodeStep::Invalid);
}

#[test]
fn above_max_scalar() {
    // U+110000 encoded as F4 90 80 80
    assert_eq!(decode_step(&[0xF4, 0x90, 0x80, 0x80]), DecodeStep::Invalid);
}

#[test]
fn bad_continuation_mid_sequence() {
    assert_eq!(decode_step(&[0xE2, 0x82, b'a']), DecodeStep::Invalid);
    assert_eq!(decode_step(&[0xC3, 0x00]), DecodeStep::Invalid);
}

// === Short Windows ===

#[test]
fn empty_window_is_incomplete() {
    assert_eq!(decode_step(&[]), DecodeStep::Incomplete);
}

#[test]
fn truncated_prefix_is_incomplete() {
    assert_eq!(decode_step(&[0xE2, 0x82]), DecodeStep::Incomplete);
    assert_eq!(decode_step(&[0xF0, 0x9F, 0x98]), DecodeStep::Incomplete);
}

#[test]
fn truncated_invalid_prefix_is_invalid() {
    // The second byte already rules the sequence out.
    assert_eq!(decode_step(&[0xE0, 0x80]), DecodeStep::Invalid);
}

#[test]
fn sequence_lengths() {
    assert_eq!(sequence_len(b'a'), Some(1));
    assert_eq!(sequence_len(0xC2), Some(2));
    assert_eq!(sequence_len(0xEF), Some(3));
    assert_eq!(sequence_len(0xF4), Some(4));
    assert_eq!(sequence_len(0x80), None);
    assert_eq!(sequence_len(0xC1), None);
    assert_eq!(sequence_len(0xF5), None);
}

// === Agreement With std ===

proptest! {
    #[test]
    fn agrees_with_std_on_valid_text(s in any::<String>()) {
        let bytes = s.as_bytes();
        let mut pos = 0;
        for expected in s.chars() {
            prop_assert_eq!(decode_step(&bytes[pos..]), scalar(expected));
            pos += expected.len_utf8();
        }
        prop_assert_eq!(pos, bytes.len());
    }

    #[test]
    fn agrees_with_std_on_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 1..8)) {
        let std_first = match std::str::from_utf8(&bytes) {
            Ok(s) => s.chars().next(),
            Err(e) if e.valid_up_to() > 0 => {
                std::str::from_utf8(&bytes[..e.valid_up_to()]).ok().and_then(|s| s.chars().next())
            }
            Err(_) => None,
        };
        match decode_step(&bytes) {
            DecodeStep::Scalar { ch, len } => {
                prop_assert_eq!(Some(ch), std_first);
                prop_assert_eq!(len as usize, ch.len_utf8());
            }
            DecodeStep::Invalid | DecodeStep::Incomplete => prop_assert_eq!(std_first, None),
        }
    }
}
