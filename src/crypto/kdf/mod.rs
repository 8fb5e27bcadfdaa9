//! # Key Derivation
//!
//! Ansible Vault derives all key material from one PBKDF2 call and slices it:
//!
//! ```text
//! PBKDF2-HMAC-SHA256(passphrase, salt, 10 000, 80 bytes)
//! ├── [ 0..32) cipher key  (AES-256)
//! ├── [32..64) auth key    (HMAC-SHA256)
//! └── [64..80) iv          (CTR initial counter block)
//! ```

pub mod pbkdf2;

use crate::aliases::{Aes256Key32, HmacKey32, Iv16, KeyMaterial80, PassphraseString};
use crate::consts::{AUTH_KEY_LENGTH, CIPHER_KEY_LENGTH, KEY_MATERIAL_LENGTH};
use crate::crypto::KeyDeriver;
use crate::error::VaultError;
use secrecy::{ExposeSecret, SecretBox};

/// The three keys of one decrypt call. Never cached; zeroized on drop.
#[derive(Debug)]
pub struct DerivedKeys {
    cipher_key: Aes256Key32,
    auth_key: HmacKey32,
    iv: Iv16,
}

impl DerivedKeys {
    /// Run `deriver` once and slice its output.
    pub fn derive<K: KeyDeriver + ?Sized>(
        deriver: &K,
        passphrase: &PassphraseString,
        salt: &[u8],
    ) -> Result<Self, VaultError> {
        let mut material = zeroed_key_material();
        deriver.derive(passphrase, salt, &mut material)?;
        Ok(Self::from_material(&material))
    }

    /// Slice an 80-byte key material block into cipher key, auth key and IV.
    #[must_use]
    pub fn from_material(material: &KeyMaterial80) -> Self {
        let (cipher_key, rest) = material.expose_secret().split_at(CIPHER_KEY_LENGTH);
        let (auth_key, iv) = rest.split_at(AUTH_KEY_LENGTH);

        Self {
            cipher_key: SecretBox::init_with_mut(|k: &mut [u8; 32]| k.copy_from_slice(cipher_key)),
            auth_key: SecretBox::init_with_mut(|k: &mut [u8; 32]| k.copy_from_slice(auth_key)),
            iv: SecretBox::init_with_mut(|v: &mut [u8; 16]| v.copy_from_slice(iv)),
        }
    }

    #[must_use]
    pub fn cipher_key(&self) -> &Aes256Key32 {
        &self.cipher_key
    }

    #[must_use]
    pub fn auth_key(&self) -> &HmacKey32 {
        &self.auth_key
    }

    #[must_use]
    pub fn iv(&self) -> &Iv16 {
        &self.iv
    }
}

/// A zeroed key material block, the output buffer a [`KeyDeriver`] fills.
#[must_use]
pub fn zeroed_key_material() -> KeyMaterial80 {
    KeyMaterial80::new(Box::new([0u8; KEY_MATERIAL_LENGTH]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecretMut;

    #[test]
    fn slices_in_fixed_order() {
        let mut material = zeroed_key_material();
        for (i, b) in material.expose_secret_mut().iter_mut().enumerate() {
            *b = i as u8;
        }
        let keys = DerivedKeys::from_material(&material);

        assert_eq!(keys.cipher_key().expose_secret()[0], 0);
        assert_eq!(keys.cipher_key().expose_secret()[31], 31);
        assert_eq!(keys.auth_key().expose_secret()[0], 32);
        assert_eq!(keys.auth_key().expose_secret()[31], 63);
        assert_eq!(keys.iv().expose_secret()[0], 64);
        assert_eq!(keys.iv().expose_secret()[15], 79);
    }

    #[test]
    fn zeroed_material_is_all_zero() {
        assert!(zeroed_key_material().expose_secret().iter().all(|&b| b == 0));
    }

    #[test]
    fn debug_is_redacted() {
        let mut material = zeroed_key_material();
        material.expose_secret_mut().fill(0xAB);
        let keys = DerivedKeys::from_material(&material);
        let debug = format!("{keys:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("171"));
    }
}
