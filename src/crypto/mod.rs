// src/crypto/mod.rs

//! Low-level crypto primitives and the capability traits the
//! [`Decryptor`](crate::Decryptor) is built on.
//!
//! Each stage of the pipeline goes through a trait so it can be swapped for a
//! fixed-vector double in tests or for another backend:
//!
//! | Trait | Default backend | Primitive |
//! |---|---|---|
//! | [`KeyDeriver`] | [`Pbkdf2Sha256`] | PBKDF2-HMAC-SHA256, 10 000 iterations |
//! | [`MessageAuthenticator`] | [`HmacSha256Verifier`] | HMAC-SHA256, constant-time compare |
//! | [`KeystreamCipher`] | [`Aes256CtrCipher`] | AES-256-CTR, 128-bit big-endian counter |

pub mod ctr;
pub mod hmac;
pub mod kdf;

pub use self::ctr::Aes256CtrCipher;
pub use self::hmac::HmacSha256Verifier;
pub use self::kdf::pbkdf2::Pbkdf2Sha256;
pub use self::kdf::DerivedKeys;

use crate::aliases::{Aes256Key32, HmacKey32, Iv16, KeyMaterial80, PassphraseString};
use crate::error::VaultError;

/// Stretches a passphrase and salt into the 80-byte key material block.
pub trait KeyDeriver: Send + Sync {
    /// Fill `out` with key material for `(passphrase, salt)`. Must be deterministic.
    fn derive(
        &self,
        passphrase: &PassphraseString,
        salt: &[u8],
        out: &mut KeyMaterial80,
    ) -> Result<(), VaultError>;
}

/// Checks the authentication tag of a ciphertext.
pub trait MessageAuthenticator: Send + Sync {
    /// `Ok(())` if `expected_tag` authenticates `message` under `key`,
    /// [`VaultError::WrongSignature`] otherwise.
    fn verify(
        &self,
        message: &[u8],
        key: &HmacKey32,
        expected_tag: &[u8],
    ) -> Result<(), VaultError>;
}

/// A stream cipher: decryption and encryption are the same keystream XOR.
pub trait KeystreamCipher: Send + Sync {
    /// XOR the keystream for `(key, iv)` into `buffer` in place.
    fn apply_keystream(
        &self,
        key: &Aes256Key32,
        iv: &Iv16,
        buffer: &mut [u8],
    ) -> Result<(), VaultError>;
}
