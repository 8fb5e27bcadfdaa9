// src/crypto/ctr.rs

//! AES-256 in counter mode.
//!
//! The 16-byte IV is the initial counter block and is incremented as one
//! 128-bit big-endian integer, as PyCryptodome's `Counter.new(128, ...)` does.
//! No padding at the algorithm level; any buffer length is accepted.

use crate::aliases::{Aes256Ctr, Aes256Key32, Iv16};
use crate::crypto::KeystreamCipher;
use crate::error::VaultError;
use ctr::cipher::{KeyIvInit, StreamCipher};
use secrecy::ExposeSecret;

/// XOR the AES-256-CTR keystream into `buffer` in place.
#[inline]
pub fn apply_aes256_ctr(key: &Aes256Key32, iv: &Iv16, buffer: &mut [u8]) {
    let mut cipher = Aes256Ctr::new(key.expose_secret().into(), iv.expose_secret().into());
    cipher.apply_keystream(buffer);
}

/// AES-256-CTR [`KeystreamCipher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aes256CtrCipher;

impl KeystreamCipher for Aes256CtrCipher {
    #[inline]
    fn apply_keystream(
        &self,
        key: &Aes256Key32,
        iv: &Iv16,
        buffer: &mut [u8],
    ) -> Result<(), VaultError> {
        apply_aes256_ctr(key, iv, buffer);
        Ok(())
    }
}
