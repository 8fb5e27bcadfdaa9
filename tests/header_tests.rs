//! tests/header_tests.rs
//! Header inspection against the real vault vectors and other Ansible formats

mod common;

use ansible_vault_rs::{is_vault_text, read_header, Decryptor, VaultError};
use common::{load_vectors, ORIGINAL_SECRET_VAULT_TEXT, TEST_PASSPHRASE};

#[test]
fn read_header_against_all_vault_vectors() {
    for v in load_vectors() {
        assert!(is_vault_text(&v.vault_text), "vector {}", v.name);

        let header = read_header(&v.vault_text)
            .unwrap_or_else(|e| panic!("read_header failed on vector {}: {e}", v.name));
        assert_eq!(header.version, "1.1", "vector {}", v.name);
        assert_eq!(header.cipher, "AES256", "vector {}", v.name);
        assert!(header.is_supported(), "vector {}", v.name);
    }
}

#[test]
fn vault_id_header_is_read_but_not_supported() {
    let vault_text =
        ORIGINAL_SECRET_VAULT_TEXT.replacen("1.1;AES256", "1.2;AES256;production", 1);

    let header = read_header(&vault_text).unwrap();
    assert_eq!(header.version, "1.2");
    assert_eq!(header.vault_id.as_deref(), Some("production"));
    assert!(!header.is_supported());

    assert_eq!(
        Decryptor::new(TEST_PASSPHRASE).decrypt(&vault_text).unwrap_err(),
        VaultError::UnsupportedHeader
    );
}

#[test]
fn legacy_header_is_read_but_not_supported() {
    let header = read_header("$ANSIBLE_VAULT;1.0;AES\n3132\n").unwrap();
    assert_eq!(header.version, "1.0");
    assert_eq!(header.cipher, "AES");
    assert!(!header.is_supported());
}

#[test]
fn malformed_headers() {
    let cases = [
        ("plain text value", "missing $ANSIBLE_VAULT marker"),
        ("$ANSIBLE_VAULT\n3132", "missing format version"),
        ("$ANSIBLE_VAULT;1.1\n3132", "missing cipher name"),
        ("$ANSIBLE_VAULT;1.1;\n3132", "missing cipher name"),
        ("$ANSIBLE_VAULT;1.2;AES256;id;extra\n", "too many fields"),
        ("$ANSIBLE_VAULT;1.2;AES256;\n3132", "empty vault id"),
    ];

    for (text, reason) in cases {
        assert_eq!(
            read_header(text).unwrap_err(),
            VaultError::MalformedHeader(reason),
            "input {text:?}"
        );
    }
}

#[test]
fn blank_text_has_no_header() {
    assert_eq!(read_header("  \n").unwrap_err(), VaultError::Blank);
    assert!(!is_vault_text(""));
    assert!(!is_vault_text("$ANSIBLE_VAULTX"));
}
