//! # Header Parsing
//!
//! This module inspects the first line of a vault text without touching the
//! encrypted body. It accepts every header Ansible writes so tools can report
//! *why* a text cannot be decrypted; only [`VaultHeader::is_supported`]
//! headers are decryptable.

use crate::consts::{HEADER_SEPARATOR, SUPPORTED_CIPHER, SUPPORTED_VERSION, VAULT_HEADER_PREFIX};
use crate::error::VaultError;

/// The fields of a `$ANSIBLE_VAULT;<version>;<cipher>[;<vault-id>]` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultHeader {
    pub version: String,
    pub cipher: String,
    /// Label written by format 1.2 (`ansible-vault --vault-id label@source`).
    pub vault_id: Option<String>,
}

impl VaultHeader {
    /// `true` for exactly `$ANSIBLE_VAULT;1.1;AES256`.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.version == SUPPORTED_VERSION
            && self.cipher == SUPPORTED_CIPHER
            && self.vault_id.is_none()
    }
}

/// Cheap check whether `text` looks like vault text at all.
///
/// # Example
///
/// ```
/// use ansible_vault_rs::header::is_vault_text;
///
/// assert!(is_vault_text("$ANSIBLE_VAULT;1.1;AES256\n3132"));
/// assert!(!is_vault_text("plain value"));
/// ```
#[must_use]
pub fn is_vault_text(text: &str) -> bool {
    text.trim_start()
        .strip_prefix(VAULT_HEADER_PREFIX)
        .is_some_and(|rest| rest.starts_with(HEADER_SEPARATOR))
}

/// Read and validate the header line of a vault text.
///
/// # Thread Safety
///
/// Pure function; safe to call concurrently.
///
/// # Errors
///
/// - [`VaultError::Blank`] - if `text` is empty or whitespace
/// - [`VaultError::MalformedHeader`] - if the first line is not a vault header,
///   or names an empty vault id
///
/// # Example
///
/// ```
/// use ansible_vault_rs::header::read_header;
///
/// let header = read_header("$ANSIBLE_VAULT;1.2;AES256;prod\n3132")?;
/// assert_eq!(header.version, "1.2");
/// assert_eq!(header.vault_id.as_deref(), Some("prod"));
/// assert!(!header.is_supported());
/// # Ok::<(), ansible_vault_rs::VaultError>(())
/// ```
pub fn read_header(text: &str) -> Result<VaultHeader, VaultError> {
    if text.trim().is_empty() {
        return Err(VaultError::Blank);
    }

    let line = text.lines().next().unwrap_or_default().trim_end();
    let mut fields = line.split(HEADER_SEPARATOR);

    if fields.next() != Some(VAULT_HEADER_PREFIX) {
        return Err(VaultError::MalformedHeader("missing $ANSIBLE_VAULT marker"));
    }

    let version = fields
        .next()
        .filter(|v| !v.is_empty())
        .ok_or(VaultError::MalformedHeader("missing format version"))?;
    let cipher = fields
        .next()
        .filter(|c| !c.is_empty())
        .ok_or(VaultError::MalformedHeader("missing cipher name"))?;
    let vault_id = match fields.next() {
        Some("") => return Err(VaultError::MalformedHeader("empty vault id")),
        label => label.map(str::to_owned),
    };

    if fields.next().is_some() {
        return Err(VaultError::MalformedHeader("too many fields"));
    }

    Ok(VaultHeader {
        version: version.to_owned(),
        cipher: cipher.to_owned(),
        vault_id,
    })
}
