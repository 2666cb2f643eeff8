//! Standard base64 decoding with strict validation.

use crate::table::{sextet, DECODE_TABLE, PADDING};
use crate::Base64Error;

/// Counts the trailing padding characters of a non-empty, length-checked input.
///
/// Only the last two positions can hold padding. A third `=` in front of them is
/// left for the group decoder, which rejects it as an illegal character.
fn padding_of(encoded: &[u8]) -> usize {
    let is_pad = |byte: u8| DECODE_TABLE[byte as usize] == PADDING;
    let length = encoded.len();
    if !is_pad(encoded[length - 1]) {
        0
    } else if !is_pad(encoded[length - 2]) {
        1
    } else {
        2
    }
}

/// Returns the exact number of bytes `encoded` decodes to.
///
/// Only the length and the trailing padding are inspected; the characters
/// themselves are validated by [`decode_bin`]. So `====` reports 1 here even
/// though decoding it fails.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] if `encoded` is non-empty and its
/// length is not a multiple of 4.
///
/// # Example
///
/// ```
/// use base64_coder::decoded_len;
///
/// assert_eq!(decoded_len(b"").unwrap(), 0);
/// assert_eq!(decoded_len(b"YQ==").unwrap(), 1);
/// assert_eq!(decoded_len(b"YWE=").unwrap(), 2);
/// assert!(decoded_len(b"YQ=").is_err());
/// ```
pub fn decoded_len(encoded: &[u8]) -> Result<usize, Base64Error> {
    if encoded.is_empty() {
        return Ok(0);
    }
    if encoded.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }
    Ok(encoded.len() / 4 * 3 - padding_of(encoded))
}

/// Decodes base64 from a byte slice of ASCII characters.
///
/// Validation happens in this order:
///
/// 1. Non-empty input whose length is not a multiple of 4 fails with
///    [`Base64Error::InvalidLength`].
/// 2. Every byte must be an alphabet character, except that the last one or
///    two bytes of the final group may be `=`. Anything else, including `=`
///    in any other position and bytes >= 0x80, fails with
///    [`Base64Error::IllegalCharacter`].
///
/// Bits left over in a padded final group are discarded without checking that
/// they are zero, so `YR==` decodes like `YQ==`.
///
/// # Example
///
/// ```
/// use base64_coder::decode_bin;
///
/// assert_eq!(decode_bin(b"aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn decode_bin(encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let buffer_length = decoded_len(encoded)?;
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let padding = padding_of(encoded);
    let main_length = if padding > 0 {
        encoded.len() - 4
    } else {
        encoded.len()
    };

    let mut buf = Vec::with_capacity(buffer_length);

    for quartet in encoded[..main_length].chunks_exact(4) {
        let (Some(sextet0), Some(sextet1), Some(sextet2), Some(sextet3)) = (
            sextet(quartet[0]),
            sextet(quartet[1]),
            sextet(quartet[2]),
            sextet(quartet[3]),
        ) else {
            return Err(Base64Error::IllegalCharacter);
        };

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push((sextet1 << 4) | (sextet2 >> 2));
        buf.push((sextet2 << 6) | sextet3);
    }

    let tail = &encoded[main_length..];
    match padding {
        1 => {
            let (Some(sextet0), Some(sextet1), Some(sextet2)) =
                (sextet(tail[0]), sextet(tail[1]), sextet(tail[2]))
            else {
                return Err(Base64Error::IllegalCharacter);
            };
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
        }
        2 => {
            let (Some(sextet0), Some(sextet1)) = (sextet(tail[0]), sextet(tail[1])) else {
                return Err(Base64Error::IllegalCharacter);
            };
            buf.push((sextet0 << 2) | (sextet1 >> 4));
        }
        _ => {}
    }

    Ok(buf)
}

/// Decodes a standard base64 string.
///
/// The length rule counts characters, not UTF-8 bytes, so `"©WE="` is four
/// characters long and fails on the illegal `©` rather than on its length.
/// A character outside the Basic Multilingual Plane also counts once, so
/// `"\u{1F600}WE="` is four characters and fails with
/// [`Base64Error::IllegalCharacter`]; a length measured in UTF-16 code units
/// would make it five and report [`Base64Error::InvalidLength`] instead.
/// Apart from that the rules are those of [`decode_bin`].
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the input is non-empty and its length
///   is not a multiple of 4.
/// - [`Base64Error::IllegalCharacter`] if a character is outside the alphabet
///   or a padding character is misplaced.
///
/// # Example
///
/// ```
/// use base64_coder::{decode, Base64Error};
///
/// assert_eq!(decode("QWxhZGRpbjpvcGVuIHNlc2FtZQ==").unwrap(), b"Aladdin:open sesame");
/// assert_eq!(decode("").unwrap(), b"");
/// assert_eq!(decode("YQ="), Err(Base64Error::InvalidLength));
/// assert_eq!(decode("YW\t="), Err(Base64Error::IllegalCharacter));
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    if encoded.is_ascii() {
        return decode_bin(encoded.as_bytes());
    }

    // At least one character lies outside the single-byte range; once the
    // length rule has been checked, the input can only be illegal.
    if encoded.chars().count() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }
    Err(Base64Error::IllegalCharacter)
}
