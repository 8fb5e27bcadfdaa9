//! tests/batch_ops_tests.rs
//! Parallel decryption of many vault texts

#![cfg(feature = "batch-ops")]

mod common;

use ansible_vault_rs::{decrypt_batch, Decryptor, VaultError};
use common::{load_vectors, ORIGINAL_SECRET, ORIGINAL_SECRET_VAULT_TEXT, TEST_PASSPHRASE};

#[test]
fn batch_decrypts_in_input_order() {
    let vectors: Vec<_> = load_vectors()
        .into_iter()
        .filter(|v| v.passphrase == TEST_PASSPHRASE)
        .collect();
    let texts: Vec<&str> = vectors.iter().map(|v| v.vault_text.as_str()).collect();

    let results = decrypt_batch(&Decryptor::new(TEST_PASSPHRASE), &texts);

    assert_eq!(results.len(), vectors.len());
    for (result, v) in results.into_iter().zip(&vectors) {
        assert_eq!(result.unwrap(), v.plaintext, "vector {}", v.name);
    }
}

#[test]
fn batch_empty_batch() {
    let texts: [&str; 0] = [];
    assert!(decrypt_batch(&Decryptor::new(TEST_PASSPHRASE), &texts).is_empty());
}

#[test]
fn batch_failures_are_isolated() {
    let texts = vec![
        ORIGINAL_SECRET_VAULT_TEXT.to_owned(),
        String::new(),
        ORIGINAL_SECRET_VAULT_TEXT.replacen("1.1", "1.0", 1),
        ORIGINAL_SECRET_VAULT_TEXT.to_owned(),
    ];

    let results = decrypt_batch(&Decryptor::new(TEST_PASSPHRASE), &texts);

    assert_eq!(results[0].as_deref(), Ok(ORIGINAL_SECRET));
    assert_eq!(results[1], Err(VaultError::Blank));
    assert_eq!(results[2], Err(VaultError::UnsupportedHeader));
    assert_eq!(results[3].as_deref(), Ok(ORIGINAL_SECRET));
}

#[test]
fn batch_large_batch() {
    let texts = vec![ORIGINAL_SECRET_VAULT_TEXT; 32];
    let results = decrypt_batch(&Decryptor::new(TEST_PASSPHRASE), &texts);
    assert!(results.iter().all(|r| r.as_deref() == Ok(ORIGINAL_SECRET)));
}
