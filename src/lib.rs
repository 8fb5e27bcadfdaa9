// src/lib.rs

//! Decrypt [Ansible Vault](https://docs.ansible.com/ansible/latest/vault_guide/index.html)
//! `$ANSIBLE_VAULT;1.1;AES256` texts.
//!
//! ```text
//! vault text ─ parse ─▶ salt, HMAC, ciphertext
//! passphrase + salt ─ PBKDF2-HMAC-SHA256 ×10 000 ─▶ cipher key ‖ auth key ‖ iv
//! HMAC-SHA256(auth key, ciphertext) == HMAC ?
//! AES-256-CTR(cipher key, iv, ciphertext) ─ strip padding ─▶ UTF-8 plaintext
//! ```
//!
//! There is no write path: this crate only decrypts.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod envelope;
pub mod error;
pub mod header;
pub mod processor;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, Decryptor};
pub use error::{HexError, ProcessorError, VaultError};

pub use envelope::{parse, VaultPayload};
pub use header::{is_vault_text, read_header, VaultHeader};
pub use processor::VaultProcessor;

#[cfg(feature = "batch-ops")]
pub use batch_ops::decrypt_batch;
