//! # Envelope Parsing
//!
//! A vault text is the header line followed by lines of hex digits. Once the
//! line breaks are removed and the digits decoded, the result is itself text:
//! three hex strings (salt, HMAC, ciphertext) separated by `\n`.
//!
//! ```text
//! $ANSIBLE_VAULT;1.1;AES256
//! hex( hex(salt) \n hex(hmac) \n hex(ciphertext) )   wrapped at 80 columns
//! ```

use crate::consts::{PAYLOAD_PART_COUNT, SUPPORTED_HEADER};
use crate::error::VaultError;
use crate::utils::{unhexlify, unhexlify_to_string};
use tracing::trace;

/// The three raw byte sequences carried by a vault text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPayload {
    pub salt: Vec<u8>,
    pub expected_tag: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

/// Validate a vault text and decompose it into a [`VaultPayload`].
///
/// # Errors
///
/// - [`VaultError::Blank`] - empty or whitespace-only input
/// - [`VaultError::UnsupportedHeader`] - anything but `$ANSIBLE_VAULT;1.1;AES256\n`
/// - [`VaultError::Corrupted`] - a non-hex character or an odd-length run
/// - [`VaultError::WrongPartCount`] - the decoded body is not three parts
/// - [`VaultError::EmptyPart`] - salt, HMAC or ciphertext is empty
pub fn parse(text: &str) -> Result<VaultPayload, VaultError> {
    if text.trim().is_empty() {
        return Err(VaultError::Blank);
    }

    let body = text
        .strip_prefix(SUPPORTED_HEADER)
        .ok_or(VaultError::UnsupportedHeader)?;

    let hex_body: String = body.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    let decoded = unhexlify_to_string(&hex_body)?;

    let [salt, expected_tag, ciphertext] = split_parts(&decoded)?;
    let payload = VaultPayload {
        salt: decode_part(salt, "salt")?,
        expected_tag: decode_part(expected_tag, "HMAC")?,
        ciphertext: decode_part(ciphertext, "cipher text")?,
    };

    trace!(
        salt_len = payload.salt.len(),
        tag_len = payload.expected_tag.len(),
        ciphertext_len = payload.ciphertext.len(),
        "vault payload parsed"
    );
    Ok(payload)
}

/// Split on `\n`, ignoring trailing empty segments. An empty body is a
/// single empty part.
fn split_parts(decoded: &str) -> Result<[&str; PAYLOAD_PART_COUNT], VaultError> {
    let mut parts: Vec<&str> = decoded.split('\n').collect();
    if !decoded.is_empty() {
        while parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
    }

    let count = parts.len();
    <[&str; PAYLOAD_PART_COUNT]>::try_from(parts).map_err(|_| VaultError::WrongPartCount(count))
}

fn decode_part(part: &str, name: &'static str) -> Result<Vec<u8>, VaultError> {
    if part.is_empty() {
        return Err(VaultError::EmptyPart(name));
    }
    Ok(unhexlify(part)?)
}
