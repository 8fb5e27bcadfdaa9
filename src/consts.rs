//! # Constants
//!
//! This module defines the constants of the Ansible Vault 1.1 format: the
//! envelope header, PBKDF2 parameters, key material layout and block size.

/// The only envelope header this library decrypts, including its line break.
pub const SUPPORTED_HEADER: &str = "$ANSIBLE_VAULT;1.1;AES256\n";

/// Prefix shared by every Ansible Vault header, whatever its version.
pub const VAULT_HEADER_PREFIX: &str = "$ANSIBLE_VAULT";

/// Field separator inside the header line.
pub const HEADER_SEPARATOR: char = ';';

/// Format version of [`SUPPORTED_HEADER`].
pub const SUPPORTED_VERSION: &str = "1.1";

/// Cipher name of [`SUPPORTED_HEADER`].
pub const SUPPORTED_CIPHER: &str = "AES256";

/// PBKDF2-HMAC-SHA256 iteration count fixed by the vault format.
pub const VAULT_PBKDF2_ITERATIONS: u32 = 10_000;

/// AES-256 key length (bytes 0–31 of the key material).
pub const CIPHER_KEY_LENGTH: usize = 32;

/// HMAC-SHA256 key length (bytes 32–63 of the key material).
pub const AUTH_KEY_LENGTH: usize = 32;

/// CTR initial counter block length (bytes 64–79 of the key material).
pub const IV_LENGTH: usize = 16;

/// Total PBKDF2 output: 32 + 32 + 16 = 80 bytes (640 bits).
pub const KEY_MATERIAL_LENGTH: usize = CIPHER_KEY_LENGTH + AUTH_KEY_LENGTH + IV_LENGTH;

/// AES block size. Upper bound for the legacy padding strip.
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of newline-separated parts in a decoded body: salt, HMAC, ciphertext.
pub const PAYLOAD_PART_COUNT: usize = 3;

/// YAML tag that marks a configuration value as vault-encrypted.
pub const VAULT_TAG: &str = "!vault";

/// Property that holds the vault passphrase for [`VaultProcessor`](crate::processor::VaultProcessor).
pub const DEFAULT_PASSWORD_PROPERTY: &str = "vault.password";
