//! Standard base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};
use crate::table::TABLE2;

/// Returns the length of the padded base64 encoding of `length` input bytes.
///
/// # Example
///
/// ```
/// use base64_coder::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Feeds each 4-character group of the encoding of `uint8` to `emit`, left to right.
fn for_each_quartet(uint8: &[u8], mut emit: impl FnMut([u8; 4])) {
    let mut chunks = uint8.chunks_exact(3);
    for chunk in &mut chunks {
        let (o1, o2, o3) = (chunk[0], chunk[1], chunk[2]);
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);
        emit([TABLE2[v1][0], TABLE2[v1][1], TABLE2[v2][0], TABLE2[v2][1]]);
    }

    match *chunks.remainder() {
        [o1] => {
            // 8 bits: 6 + 2, the last sextet right-padded with zeros.
            let v1 = (o1 as usize) << 4;
            emit([TABLE2[v1][0], TABLE2[v1][1], PAD_BYTE, PAD_BYTE]);
        }
        [o1, o2] => {
            // 16 bits: 6 + 6 + 4, the last sextet right-padded with zeros.
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            emit([TABLE2[v1][0], TABLE2[v1][1], ALPHABET_BYTES[v2], PAD_BYTE]);
        }
        _ => {}
    }
}

/// Encodes a byte slice to a standard base64 string.
///
/// Every byte sequence is encodable, so this never fails. The output length is
/// always a multiple of 4; empty input gives an empty string.
///
/// # Example
///
/// ```
/// use base64_coder::encode;
///
/// assert_eq!(encode(b"Aladdin:open sesame"), "QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
/// assert_eq!(encode(b"a"), "YQ==");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(uint8.len()));
    for_each_quartet(uint8, |quartet| {
        for c in quartet {
            out.push(c as char);
        }
    });
    out
}

/// Appends the base64 encoding of `uint8` to `out` as ASCII bytes.
///
/// Returns the number of bytes appended. To encode part of a buffer, pass a
/// sub-slice.
///
/// # Example
///
/// ```
/// use base64_coder::encode_into;
///
/// let mut out = b"data:".to_vec();
/// let written = encode_into(&b"xhello"[1..], &mut out);
/// assert_eq!(written, 8);
/// assert_eq!(out, b"data:aGVsbG8=");
/// ```
pub fn encode_into(uint8: &[u8], out: &mut Vec<u8>) -> usize {
    let start = out.len();
    out.reserve(encoded_len(uint8.len()));
    for_each_quartet(uint8, |quartet| out.extend_from_slice(&quartet));
    out.len() - start
}
