use rayon::prelude::*;

use crate::crypto::{KeyDeriver, KeystreamCipher, MessageAuthenticator};
use crate::{Decryptor, VaultError};

/// Decrypt many vault texts in parallel with one [`Decryptor`].
///
/// Results are in input order; one failure does not affect the others.
pub fn decrypt_batch<S, K, M, C>(
    decryptor: &Decryptor<K, M, C>,
    vault_texts: &[S],
) -> Vec<Result<String, VaultError>>
where
    S: AsRef<str> + Sync,
    K: KeyDeriver,
    M: MessageAuthenticator,
    C: KeystreamCipher,
{
    vault_texts
        .par_iter()
        .map(|text| decryptor.decrypt(text.as_ref()))
        .collect()
}
