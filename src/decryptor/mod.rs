// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: [`Decryptor::decrypt`] (or the one-shot [`decrypt`]).
//! Helper: [`strip_legacy_padding`] for custom pipelines.

pub(crate) mod decrypt;
pub(crate) mod padding;

pub use decrypt::{decrypt, Decryptor};
pub use padding::strip_legacy_padding;
