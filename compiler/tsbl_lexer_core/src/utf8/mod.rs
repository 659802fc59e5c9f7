//! Single-step strict UTF-8 decoding.
//!
//! [`decode_step`] looks at the front of a byte window and decodes exactly
//! one scalar value. Both sources build on it: the in-memory source hands it
//! the rest of its buffer, the stream source its refilled window.
//!
//! Decoding follows RFC 3629 (Table 3-7 of the Unicode Standard):
//!
//! | Lead      | 2nd byte  | 3rd/4th   |
//! |-----------|-----------|-----------|
//! | `00..7F`  |           |           |
//! | `C2..DF`  | `80..BF`  |           |
//! | `E0`      | `A0..BF`  | `80..BF`  |
//! | `E1..EC`  | `80..BF`  | `80..BF`  |
//! | `ED`      | `80..9F`  | `80..BF`  |
//! | `EE..EF`  | `80..BF`  | `80..BF`  |
//! | `F0`      | `90..BF`  | `80..BF`  |
//! | `F1..F3`  | `80..BF`  | `80..BF`  |
//! | `F4`      | `80..8F`  | `80..BF`  |
//!
//! Anything else (stray continuation bytes, `C0`/`C1`, `F5..FF`, overlong
//! forms, surrogates) is invalid.

/// Longest encoded scalar value, in bytes.
pub const MAX_LEN: usize = 4;

/// Outcome of decoding one scalar value from the front of a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStep {
    /// A complete scalar value occupying `len` bytes.
    Scalar { ch: char, len: u32 },
    /// The bytes at the front of the window are not valid UTF-8.
    Invalid,
    /// The window ends inside a sequence that is valid so far.
    Incomplete,
}

/// Sequence length announced by a lead byte, `0` for bytes that cannot lead.
static SEQUENCE_LEN: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = match i {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        };
        i += 1;
    }
    table
};

/// Sequence length for `lead`, or `None` if it cannot start a sequence.
#[inline]
pub fn sequence_len(lead: u8) -> Option<usize> {
    match SEQUENCE_LEN[usize::from(lead)] {
        0 => None,
        n => Some(usize::from(n)),
    }
}

/// Decode one scalar value from the front of `window`.
///
/// An empty window is [`DecodeStep::Incomplete`].
pub fn decode_step(window: &[u8]) -> DecodeStep {
    let Some(&lead) = window.first() else {
        return DecodeStep::Incomplete;
    };
    let Some(len) = sequence_len(lead) else {
        return DecodeStep::Invalid;
    };
    if len == 1 {
        return DecodeStep::Scalar {
            ch: char::from(lead),
            len: 1,
        };
    }

    let mut value = u32::from(lead) & (0x7F >> len);
    for i in 1..len {
        let Some(&byte) = window.get(i) else {
            return DecodeStep::Incomplete;
        };
        let (lo, hi) = if i == 1 {
            second_byte_range(lead)
        } else {
            (0x80, 0xBF)
        };
        if !(lo..=hi).contains(&byte) {
            return DecodeStep::Invalid;
        }
        value = (value << 6) | u32::from(byte & 0x3F);
    }

    // The range checks above exclude surrogates and values past 0x10FFFF.
    match char::from_u32(value) {
        Some(ch) => DecodeStep::Scalar {
            ch,
            len: u32::from(SEQUENCE_LEN[usize::from(lead)]),
        },
        None => DecodeStep::Invalid,
    }
}

/// Valid range for the second byte of a multi-byte sequence.
#[inline]
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

#[cfg(test)]
mod tests;
