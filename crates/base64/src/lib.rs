//! Standard base64 encoding and decoding (RFC 4648).
//!
//! The codec is a pair of pure functions over constant lookup tables:
//! [`encode`] turns any byte sequence into padded base64 text, and [`decode`]
//! turns it back, rejecting malformed input with a [`Base64Error`] that says
//! which rule was broken. There is no encoder state to construct or share;
//! every function can be called from any thread.
//!
//! On top of that sit a few string helpers ([`encode_string`],
//! [`decode_string`] and their `_with` variants taking a [`Charset`] name).
//!
//! # Example
//!
//! ```
//! use base64_coder::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod charset;
mod constants;
mod decode;
mod encode;
mod table;
mod text;

pub use charset::Charset;
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use decode::{decode, decode_bin, decoded_len};
pub use encode::{encode, encode_into, encoded_len};
pub use text::{
    decode_string, decode_string_with, encode_string, encode_string_with, DecodeFailure,
    TextError,
};

/// Error type for base64 decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// Non-empty input whose length is not a multiple of 4.
    #[error("Length of Base64 encoded input string is not a multiple of 4.")]
    InvalidLength,
    /// A character outside the alphabet, or padding outside the final two positions.
    #[error("Illegal character in Base64 encoded data.")]
    IllegalCharacter,
}
