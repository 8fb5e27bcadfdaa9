//! Utility functions used across the library.

use crate::error::HexError;

/// Decodes a run of hex digits into bytes (Python's `binascii.unhexlify`).
///
/// Upper- and lower-case digits are both accepted. An odd length is reported
/// before any non-hex character and carries the length of the whole run in
/// characters.
#[inline]
pub fn unhexlify(hex_digits: &str) -> Result<Vec<u8>, HexError> {
    let len = hex_digits.chars().count();
    if len % 2 != 0 {
        return Err(HexError::OddLength(len));
    }

    // `hex` reports bytes, not chars; scan first so multi-byte input is named correctly.
    if let Some(c) = hex_digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidCharacter(c));
    }

    hex::decode(hex_digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, .. } => HexError::InvalidCharacter(c),
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            HexError::OddLength(len)
        }
    })
}

/// Decodes a run of hex digits and reads the bytes as UTF-8 text.
///
/// Invalid UTF-8 sequences become U+FFFD rather than failing, so a damaged
/// separator shows up later as a wrong part count.
#[inline]
pub fn unhexlify_to_string(hex_digits: &str) -> Result<String, HexError> {
    let raw = unhexlify(hex_digits)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
