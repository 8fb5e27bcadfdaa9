//! # Secret Type Aliases
//!
//! This module provides type aliases for secret material, built on
//! [`secrecy`](https://docs.rs/secrecy). Every type here is zeroized on drop
//! and prints `[REDACTED]` from its `Debug` impl.
//!
//! ## Type Categories
//!
//! ### Primitives
//! - [`HmacSha256`] - HMAC-SHA256 for PBKDF2 and ciphertext authentication
//! - [`Aes256Ctr`] - AES-256 in CTR mode with a 128-bit big-endian counter
//!
//! ### Dynamic Secrets
//! - [`PassphraseString`] - the vault passphrase
//!
//! ### Fixed-Size Secrets
//! - [`KeyMaterial80`] - raw 80-byte PBKDF2 output
//! - [`Aes256Key32`] - 32-byte AES-256 key
//! - [`HmacKey32`] - 32-byte HMAC-SHA256 key
//! - [`Iv16`] - 16-byte initial counter block
//!
//! Access always goes through [`ExposeSecret`](secrecy::ExposeSecret) /
//! [`ExposeSecretMut`](secrecy::ExposeSecretMut), so every read of a secret
//! is visible at the call site.

use hmac::Hmac;
use secrecy::{SecretBox, SecretString};
use sha2::Sha256;

// ─────────────────────────────────────────────────────────────────────────────
// Primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;
pub type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PassphraseString = SecretString;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets — alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
pub type Aes256Key32 = SecretBox<[u8; 32]>; // cipher key
pub type HmacKey32 = SecretBox<[u8; 32]>; // auth key
pub type Iv16 = SecretBox<[u8; 16]>; // CTR initial counter block
pub type KeyMaterial80 = SecretBox<[u8; 80]>; // cipher key ‖ auth key ‖ iv
