//! Lookup tables shared by the encoder and decoder.
//!
//! Both tables are built by `const` evaluation, so they live in read-only
//! memory and need no runtime initialization.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// Reverse table entry for bytes outside the alphabet.
pub(crate) const INVALID: i8 = -1;

/// Reverse table entry for the padding character.
pub(crate) const PADDING: i8 = -2;

/// Two-character lookup table for encoding.
///
/// Entry `i` holds the alphabet characters for the high and low six bits of
/// the 12-bit value `i`, so one lookup emits two output characters.
pub(crate) static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Reverse lookup table for decoding, indexed by input byte.
///
/// Alphabet bytes map to their sextet (0..=63), `=` maps to [`PADDING`],
/// everything else (control characters, bytes >= 0x80) maps to [`INVALID`].
pub(crate) static DECODE_TABLE: [i8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table[PAD_BYTE as usize] = PADDING;
    table
};

/// Returns the sextet for `byte`, or `None` if it is not an alphabet character.
///
/// The padding character is not an alphabet character; callers that accept it
/// at the tail of the input check for it separately.
#[inline]
pub(crate) fn sextet(byte: u8) -> Option<u8> {
    let value = DECODE_TABLE[byte as usize];
    if value < 0 {
        None
    } else {
        Some(value as u8)
    }
}
