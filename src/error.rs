//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All decryption operations return [`Result<T, VaultError>`](VaultError).
//!
//! The variants fall into two kinds:
//!
//! - **invalid vault text** — the input is malformed and was rejected before
//!   any cryptographic check ([`VaultError::is_invalid_vault_text`]);
//! - **wrong signature** — the input parsed and keys were derived, but the HMAC
//!   did not match ([`VaultError::is_wrong_signature`]). A wrong passphrase and
//!   a corrupted ciphertext cannot be told apart.

use crate::consts::SUPPORTED_HEADER;
use thiserror::Error;

/// The error type for all vault decryption operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// The vault text is empty or only whitespace.
    #[error("The vault text is blank.")]
    Blank,

    /// The vault text does not start with `$ANSIBLE_VAULT;1.1;AES256\n`.
    #[error(
        "Cannot decrypt vault text because only {} is supported.",
        SUPPORTED_HEADER.trim_end()
    )]
    UnsupportedHeader,

    /// The first line is not a well-formed `$ANSIBLE_VAULT;<version>;<cipher>` header.
    #[error("The vault header is malformed: {0}.")]
    MalformedHeader(&'static str),

    /// A hex run could not be decoded. The source names the offending
    /// character or the odd length.
    #[error("The vault text is corrupted.")]
    Corrupted(#[source] HexError),

    /// The decoded body does not split into salt, HMAC and ciphertext.
    #[error(
        "The vault text is not valid because it has {0} parts instead of 3 (salt, HMAC, cipher text)."
    )]
    WrongPartCount(usize),

    /// One of the three decoded parts is empty.
    #[error("The vault text is not valid because its {0} is empty.")]
    EmptyPart(&'static str),

    /// The recomputed HMAC does not match the one stored in the vault text.
    #[error(
        "The vault password is wrong or the vault text is corrupt because the HMAC does not match."
    )]
    WrongSignature,

    /// A cryptographic backend rejected its parameters.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl VaultError {
    /// `true` for an HMAC mismatch: wrong passphrase or corrupted data.
    #[must_use]
    pub const fn is_wrong_signature(&self) -> bool {
        matches!(self, Self::WrongSignature)
    }

    /// `true` for every rejection of the vault text itself, signature
    /// mismatches included. Only backend failures ([`VaultError::Crypto`])
    /// are excluded.
    #[must_use]
    pub const fn is_invalid_vault_text(&self) -> bool {
        !matches!(self, Self::Crypto(_))
    }
}

/// Why a run of hex digits could not be decoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// A character outside `0-9`, `a-f`, `A-F`.
    #[error("The vault text is not valid because it contains a character '{0}'.")]
    InvalidCharacter(char),

    /// The run has an odd number of digits.
    #[error("The vault text is corrupt because it has an odd length of {0} characters.")]
    OddLength(usize),
}

impl From<HexError> for VaultError {
    fn from(err: HexError) -> Self {
        VaultError::Corrupted(err)
    }
}

/// Failures of [`VaultProcessor`](crate::processor::VaultProcessor). Each is
/// fatal for the configuration being loaded and names the offending property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    /// A secret was found but no passphrase is configured.
    #[error("Cannot decrypt secrets because property '{property}' is not set.")]
    MissingPassword { property: String },

    /// The HMAC of a secret did not match.
    #[error(
        "Cannot decrypt property '{name}'. Either the vault password is wrong or the property's value is corrupt."
    )]
    WrongPassword {
        name: String,
        #[source]
        source: VaultError,
    },

    /// Any other decryption failure.
    #[error("Cannot decrypt property '{name}'.")]
    Decrypt {
        name: String,
        #[source]
        source: VaultError,
    },
}

impl ProcessorError {
    /// Wrap a [`VaultError`] raised while decrypting property `name`.
    pub fn for_property(name: impl Into<String>, source: VaultError) -> Self {
        let name = name.into();
        if source.is_wrong_signature() {
            ProcessorError::WrongPassword { name, source }
        } else {
            ProcessorError::Decrypt { name, source }
        }
    }

    /// The underlying vault error, if any.
    #[must_use]
    pub fn vault_error(&self) -> Option<&VaultError> {
        match self {
            ProcessorError::MissingPassword { .. } => None,
            ProcessorError::WrongPassword { source, .. } | ProcessorError::Decrypt { source, .. } => {
                Some(source)
            }
        }
    }
}
