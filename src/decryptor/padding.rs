//! src/decryptor/padding.rs
//! Legacy padding strip applied after CTR decryption
//!
//! `ansible-vault` PKCS#7-pads the plaintext before encrypting even though
//! CTR mode does not need it. The strip below is the same heuristic its
//! readers use: it looks only at the last byte and never validates the
//! padding run. A genuine plaintext ending in a byte in `1..=16` that was
//! written without padding loses that many bytes. Kept for compatibility.

use crate::consts::AES_BLOCK_SIZE;

/// Remove trailing padding according to the last byte `p`.
///
/// - `1 <= p <= 16` → the last `p` bytes are dropped (everything, if `p`
///   exceeds the length)
/// - `p == 0` or `p > 16` → unchanged
#[inline]
#[must_use]
pub fn strip_legacy_padding(plaintext: &[u8]) -> &[u8] {
    match plaintext.last() {
        Some(&p) if (1..=AES_BLOCK_SIZE).contains(&usize::from(p)) => {
            &plaintext[..plaintext.len().saturating_sub(usize::from(p))]
        }
        _ => plaintext,
    }
}
