// src/crypto/hmac.rs

//! HMAC-SHA256 ciphertext authentication.
//!
//! The tag is compared with [`Mac::verify_slice`], which runs in constant time
//! with respect to the expected tag.

use crate::aliases::{HmacKey32, HmacSha256};
use crate::crypto::MessageAuthenticator;
use crate::error::VaultError;
use hmac::Mac;
use secrecy::ExposeSecret;

/// Recompute HMAC-SHA256 over `message` and compare it with `expected_tag`.
///
/// A tag of the wrong length is a mismatch, not a separate error.
#[inline]
pub fn verify_hmac_sha256(
    message: &[u8],
    key: &HmacKey32,
    expected_tag: &[u8],
) -> Result<(), VaultError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key.expose_secret())
        .map_err(|e| VaultError::Crypto(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    mac.verify_slice(expected_tag)
        .map_err(|_| VaultError::WrongSignature)
}

/// HMAC-SHA256 [`MessageAuthenticator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HmacSha256Verifier;

impl MessageAuthenticator for HmacSha256Verifier {
    #[inline]
    fn verify(
        &self,
        message: &[u8],
        key: &HmacKey32,
        expected_tag: &[u8],
    ) -> Result<(), VaultError> {
        verify_hmac_sha256(message, key, expected_tag)
    }
}
