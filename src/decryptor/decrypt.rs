//! src/decryptor/decrypt.rs
//! Ansible Vault 1.1 decryption pipeline

use crate::aliases::PassphraseString;
use crate::crypto::{
    Aes256CtrCipher, DerivedKeys, HmacSha256Verifier, KeyDeriver, KeystreamCipher,
    MessageAuthenticator, Pbkdf2Sha256,
};
use crate::decryptor::padding::strip_legacy_padding;
use crate::envelope;
use crate::error::VaultError;
use std::fmt;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// Decrypts vault texts with one passphrase.
///
/// Immutable after construction and `Send + Sync`: share it freely and call
/// [`decrypt`](Decryptor::decrypt) from as many threads as you like. Each
/// call derives its own keys; nothing is cached between calls.
///
/// The type parameters are the crypto backends (see [`crate::crypto`]);
/// [`Decryptor::new`] uses the standard ones.
///
/// # Example
///
/// ```
/// use ansible_vault_rs::Decryptor;
///
/// let vault_text = "$ANSIBLE_VAULT;1.1;AES256
/// 33376630363236353839326136323337616663396463656632623265363339343537653937616139
/// 6430356636313138366364643337653765383231656234630a613732363764383865613361656331
/// 30323763636135383930323538356537326133613736633737343361373035626239653738393562
/// 3062313433373737330a363931323135336163656337393630353536396530383366663030613738
/// 3833
/// ";
///
/// let decryptor = Decryptor::new("the-secret-vault-key");
/// assert_eq!(decryptor.decrypt(vault_text)?, "original secret");
/// # Ok::<(), ansible_vault_rs::VaultError>(())
/// ```
pub struct Decryptor<K = Pbkdf2Sha256, M = HmacSha256Verifier, C = Aes256CtrCipher> {
    passphrase: PassphraseString,
    kdf: K,
    mac: M,
    cipher: C,
}

impl Decryptor {
    /// Create a decryptor with the standard PBKDF2 / HMAC / AES-CTR backends.
    #[must_use]
    pub fn new(passphrase: impl Into<PassphraseString>) -> Self {
        Self::with_backends(
            passphrase,
            Pbkdf2Sha256::new(),
            HmacSha256Verifier,
            Aes256CtrCipher,
        )
    }
}

impl<K, M, C> Decryptor<K, M, C>
where
    K: KeyDeriver,
    M: MessageAuthenticator,
    C: KeystreamCipher,
{
    /// Create a decryptor with explicit crypto backends.
    #[must_use]
    pub fn with_backends(
        passphrase: impl Into<PassphraseString>,
        kdf: K,
        mac: M,
        cipher: C,
    ) -> Self {
        Self {
            passphrase: passphrase.into(),
            kdf,
            mac,
            cipher,
        }
    }

    /// Decrypt one vault text.
    ///
    /// Stages run in order and the first failure aborts:
    /// parse → derive keys → verify HMAC → decrypt → strip padding → UTF-8.
    /// The ciphertext is only decrypted after its HMAC has been verified.
    /// Bytes that are not valid UTF-8 come back as U+FFFD.
    ///
    /// # Errors
    ///
    /// Every malformed input maps to a [`VaultError`] variant (see
    /// [`envelope::parse`]); an HMAC mismatch is [`VaultError::WrongSignature`].
    pub fn decrypt(&self, vault_text: &str) -> Result<String, VaultError> {
        let payload = envelope::parse(vault_text)?;

        trace!("deriving key material");
        let keys = DerivedKeys::derive(&self.kdf, &self.passphrase, &payload.salt)?;

        self.mac
            .verify(&payload.ciphertext, keys.auth_key(), &payload.expected_tag)?;
        trace!("ciphertext authenticated");

        let mut buffer = Zeroizing::new(payload.ciphertext);
        self.cipher
            .apply_keystream(keys.cipher_key(), keys.iv(), &mut buffer)?;

        let plaintext = String::from_utf8_lossy(strip_legacy_padding(&buffer)).into_owned();

        debug!(plaintext_len = plaintext.len(), "vault text decrypted");
        Ok(plaintext)
    }
}

impl<K, M, C> fmt::Debug for Decryptor<K, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decryptor")
            .field("passphrase", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// One-shot convenience: build a [`Decryptor`] and decrypt a single vault text.
pub fn decrypt(passphrase: &str, vault_text: &str) -> Result<String, VaultError> {
    Decryptor::new(passphrase).decrypt(vault_text)
}
