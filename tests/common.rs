//! tests/common.rs
//! Common constants and utilities shared across test files

use serde::Deserialize;
use std::path::Path;

/// Passphrase of the canonical vector and most of `tests/vector/data/`.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSPHRASE: &str = "the-secret-vault-key";

/// `ansible-vault encrypt_string 'original secret'` with [`TEST_PASSPHRASE`].
#[allow(dead_code)] // Used across multiple test files
pub const ORIGINAL_SECRET_VAULT_TEXT: &str = "$ANSIBLE_VAULT;1.1;AES256
33376630363236353839326136323337616663396463656632623265363339343537653937616139
6430356636313138366364643337653765383231656234630a613732363764383865613361656331
30323763636135383930323538356537326133613736633737343361373035626239653738393562
3062313433373737330a363931323135336163656337393630353536396530383366663030613738
3833
";

#[allow(dead_code)] // Used across multiple test files
pub const ORIGINAL_SECRET: &str = "original secret";

/// Hex-encoded salt of [`ORIGINAL_SECRET_VAULT_TEXT`].
#[allow(dead_code)] // Used across multiple test files
pub const ORIGINAL_SECRET_SALT_HEX: &str =
    "37f06265892a6237afc9dcef2b2e639457e97aa9d05f61186cdd37e7e821eb4c";

/// Fast iteration count for tests that do not need real vault texts.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // Used across multiple test files
pub struct VaultVector {
    pub name: String,
    pub passphrase: String,
    pub vault_text: String,
    pub plaintext: String,
}

/// Known-answer vectors written by the reference encryptor.
#[allow(dead_code)] // Used across multiple test files
pub fn load_vectors() -> Vec<VaultVector> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vector")
        .join("data")
        .join("vault_vectors.json");

    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}
