//! String helpers layered over [`encode`] and [`decode`].
//!
//! The codec itself only moves between bytes and base64 characters. These
//! helpers add the text step: UTF-8 by default, or any [`Charset`] by name.

use std::string::{FromUtf16Error, FromUtf8Error};

use thiserror::Error;

use crate::charset::Charset;
use crate::{decode, encode, Base64Error};

/// Why base64 data could not be turned back into text.
#[derive(Debug, Error)]
pub enum DecodeFailure {
    #[error(transparent)]
    Base64(#[from] Base64Error),
    #[error("decoded bytes are not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
    #[error("decoded bytes are not valid UTF-16")]
    Utf16(#[from] FromUtf16Error),
    #[error("byte {byte:#04x} at offset {offset} is not valid {charset}")]
    InvalidByte {
        charset: Charset,
        byte: u8,
        offset: usize,
    },
    #[error("{charset} data must have an even length, got {length} bytes")]
    OddLength { charset: Charset, length: usize },
}

/// Error type for the string helpers.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("Unsupported character encoding: {0}")]
    UnsupportedEncoding(String),
    #[error("Base64 encoded data cannot be decoded to text.")]
    Decoding(#[from] DecodeFailure),
}

impl From<Base64Error> for TextError {
    fn from(err: Base64Error) -> Self {
        TextError::Decoding(DecodeFailure::Base64(err))
    }
}

fn decode_as(encoded: &str, charset: Charset) -> Result<String, TextError> {
    let bytes = decode(encoded)?;
    charset.decode_text(bytes).map_err(|err| {
        tracing::debug!(%charset, error = %err, "decoded base64 payload is not valid text");
        TextError::Decoding(err)
    })
}

fn resolve(charset: &str) -> Result<Charset, TextError> {
    charset.parse().inspect_err(|_| {
        tracing::debug!(charset, "unsupported charset requested");
    })
}

/// Encodes the UTF-8 bytes of `text`.
///
/// # Example
///
/// ```
/// use base64_coder::encode_string;
///
/// assert_eq!(encode_string("apple"), "YXBwbGU=");
/// ```
pub fn encode_string(text: &str) -> String {
    encode(text.as_bytes())
}

/// Decodes `encoded` and interprets the bytes as UTF-8.
///
/// # Errors
///
/// Returns [`TextError::Decoding`] if `encoded` is not valid base64 or the
/// decoded bytes are not valid UTF-8. The underlying [`DecodeFailure`] is
/// available as the error source.
///
/// # Example
///
/// ```
/// use base64_coder::decode_string;
///
/// assert_eq!(decode_string("b3Jhbmdl").unwrap(), "orange");
/// assert!(decode_string("/w==").is_err());
/// ```
pub fn decode_string(encoded: &str) -> Result<String, TextError> {
    decode_as(encoded, Charset::Utf8)
}

/// Converts `text` to bytes under the named charset and encodes them.
///
/// # Errors
///
/// Returns [`TextError::UnsupportedEncoding`] if `charset` does not name a
/// known [`Charset`].
///
/// # Example
///
/// ```
/// use base64_coder::{encode_string_with, TextError};
///
/// assert_eq!(encode_string_with("caf\u{e9}", "ISO-8859-1").unwrap(), "Y2Fm6Q==");
/// assert!(matches!(
///     encode_string_with("apple", "UTF_8"),
///     Err(TextError::UnsupportedEncoding(_))
/// ));
/// ```
pub fn encode_string_with(text: &str, charset: &str) -> Result<String, TextError> {
    let charset = resolve(charset)?;
    Ok(encode(&charset.encode_text(text)))
}

/// Decodes `encoded` and converts the bytes to text under the named charset.
///
/// # Errors
///
/// - [`TextError::UnsupportedEncoding`] if `charset` is not recognized. The
///   name is checked before the data.
/// - [`TextError::Decoding`] if `encoded` is not valid base64 or the bytes
///   are malformed for the charset.
pub fn decode_string_with(encoded: &str, charset: &str) -> Result<String, TextError> {
    let charset = resolve(charset)?;
    decode_as(encoded, charset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_decoding_error_keeps_base64_cause() {
        let err = decode_string("YQ=").unwrap_err();
        let source = err.source().expect("decoding error has a source");
        assert_eq!(
            source.to_string(),
            "Length of Base64 encoded input string is not a multiple of 4."
        );
        assert!(matches!(
            err,
            TextError::Decoding(DecodeFailure::Base64(Base64Error::InvalidLength))
        ));
    }

    #[test]
    fn test_decoding_error_reports_cause_once() {
        let err = decode_string("YQ=").unwrap_err();
        assert_eq!(err.to_string(), "Base64 encoded data cannot be decoded to text.");

        let mut chain = Vec::new();
        let mut current: Option<&dyn std::error::Error> = Some(&err);
        while let Some(e) = current {
            chain.push(e.to_string());
            current = e.source();
        }
        let cause = "Length of Base64 encoded input string is not a multiple of 4.";
        assert_eq!(chain.iter().filter(|m| m.contains(cause)).count(), 1);
    }

    #[test]
    fn test_utf8_cause_is_source_not_message() {
        let err = decode_string("/w==").unwrap_err();
        let source = err.source().expect("decoding error has a source");
        assert_eq!(source.to_string(), "decoded bytes are not valid UTF-8");
        assert!(source.source().is_some());
    }

    #[test]
    fn test_decoding_error_keeps_utf8_cause() {
        let err = decode_string("/w==").unwrap_err();
        assert!(matches!(err, TextError::Decoding(DecodeFailure::Utf8(_))));
    }

    #[test]
    fn test_unsupported_charset_checked_first() {
        let err = decode_string_with("!", "UTF_8").unwrap_err();
        assert!(matches!(err, TextError::UnsupportedEncoding(ref name) if name == "UTF_8"));
        assert_eq!(err.to_string(), "Unsupported character encoding: UTF_8");
    }
}
