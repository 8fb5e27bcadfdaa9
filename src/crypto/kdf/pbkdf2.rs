//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{HmacSha256, KeyMaterial80, PassphraseString};
use crate::consts::VAULT_PBKDF2_ITERATIONS;
use crate::crypto::KeyDeriver;
use crate::error::VaultError;

use pbkdf2::pbkdf2;
use secrecy::{ExposeSecret, ExposeSecretMut};

/// Derive PBKDF2-HMAC-SHA256 directly into a key material buffer
///
/// # Security
/// - Output buffer is zeroized on drop
/// - The passphrase is only exposed to the PRF
#[inline]
pub fn derive_vault_key_material(
    passphrase: &PassphraseString,
    salt: &[u8],
    iterations: u32,
    out: &mut KeyMaterial80,
) -> Result<(), VaultError> {
    if iterations == 0 {
        return Err(VaultError::Crypto("PBKDF2 iterations must be ≥1".into()));
    }

    pbkdf2::<HmacSha256>(
        passphrase.expose_secret().as_bytes(),
        salt,
        iterations,
        out.expose_secret_mut(),
    )
    .map_err(|e| VaultError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}

/// PBKDF2-HMAC-SHA256 [`KeyDeriver`]
///
/// Defaults to the 10 000 iterations the vault format mandates (uses
/// [`VAULT_PBKDF2_ITERATIONS`]). Other counts only make sense for tests and
/// benchmarks: texts written by `ansible-vault` will fail their HMAC check.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`) and holds no secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Sha256 {
    iterations: u32,
}

impl Pbkdf2Sha256 {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: VAULT_PBKDF2_ITERATIONS,
        }
    }

    /// Set a custom iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for Pbkdf2Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDeriver for Pbkdf2Sha256 {
    #[inline]
    fn derive(
        &self,
        passphrase: &PassphraseString,
        salt: &[u8],
        out: &mut KeyMaterial80,
    ) -> Result<(), VaultError> {
        derive_vault_key_material(passphrase, salt, self.iterations, out)
    }
}
