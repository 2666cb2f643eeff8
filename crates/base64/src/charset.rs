//! Named character sets used by the string helpers to turn text into bytes and back.

use std::fmt;
use std::str::FromStr;

use crate::text::{DecodeFailure, TextError};

/// Byte substituted for characters a charset cannot represent.
const REPLACEMENT: u8 = b'?';

/// A character set the string helpers can convert through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Utf8,
    UsAscii,
    Iso8859_1,
    Utf16Be,
    Utf16Le,
}

impl Charset {
    /// Canonical name, as accepted by [`FromStr`] and printed by [`Display`](fmt::Display).
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
        }
    }

    /// Converts `text` to bytes.
    ///
    /// Characters the charset cannot represent become `?`; only US-ASCII and
    /// ISO-8859-1 ever need that.
    pub fn encode_text(self, text: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::UsAscii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { REPLACEMENT })
                .collect(),
            Charset::Iso8859_1 => text
                .chars()
                .map(|c| u8::try_from(c).unwrap_or(REPLACEMENT))
                .collect(),
            Charset::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Charset::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }

    /// Converts `bytes` back to text, rejecting anything malformed for this charset.
    pub fn decode_text(self, bytes: Vec<u8>) -> Result<String, DecodeFailure> {
        match self {
            Charset::Utf8 => Ok(String::from_utf8(bytes)?),
            Charset::UsAscii => {
                if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(DecodeFailure::InvalidByte {
                        charset: self,
                        byte: bytes[offset],
                        offset,
                    });
                }
                Ok(String::from_utf8(bytes)?)
            }
            Charset::Iso8859_1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Utf16Be | Charset::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(DecodeFailure::OddLength {
                        charset: self,
                        length: bytes.len(),
                    });
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| {
                        let pair = [pair[0], pair[1]];
                        if self == Charset::Utf16Be {
                            u16::from_be_bytes(pair)
                        } else {
                            u16::from_le_bytes(pair)
                        }
                    })
                    .collect();
                Ok(String::from_utf16(&units)?)
            }
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = TextError;

    /// Resolves a charset by canonical name or alias, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let charset = match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Charset::Utf8,
            "us-ascii" | "ascii" | "us" | "iso646-us" | "iso_646.irv:1991" | "ansi_x3.4-1968"
            | "ansi_x3.4-1986" | "cp367" | "ibm367" | "csascii" | "646" | "ascii7" => {
                Charset::UsAscii
            }
            "iso-8859-1" | "iso8859-1" | "iso8859_1" | "iso_8859-1" | "iso_8859-1:1987"
            | "iso-ir-100" | "latin1" | "l1" | "cp819" | "ibm819" | "ibm-819" | "819"
            | "csisolatin1" => Charset::Iso8859_1,
            "utf-16be" | "utf_16be" | "x-utf-16be" | "iso-10646-ucs-2" | "unicodebigunmarked" => {
                Charset::Utf16Be
            }
            "utf-16le" | "utf_16le" | "x-utf-16le" | "unicodelittleunmarked" => Charset::Utf16Le,
            _ => return Err(TextError::UnsupportedEncoding(name.to_string())),
        };
        tracing::trace!(requested = name, resolved = %charset, "resolved charset");
        Ok(charset)
    }
}
