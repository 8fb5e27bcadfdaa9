//! # Property Processor
//!
//! Swaps vault-encrypted configuration values for their plaintext.
//!
//! A configuration loader hands over values as [`PropertyValue`]s: anything
//! tagged `!vault` becomes a [`PropertyValue::Secret`] holding the raw vault
//! text. [`VaultProcessor::process`] then walks an [`Environment`], decrypts
//! every secret with the passphrase found under `vault.password`, and replaces
//! each affected [`PropertySource`] with a decrypted copy.
//!
//! ```
//! use ansible_vault_rs::processor::{Environment, PropertySource, PropertyValue, VaultProcessor};
//!
//! let vault_text = "$ANSIBLE_VAULT;1.1;AES256
//! 33376630363236353839326136323337616663396463656632623265363339343537653937616139
//! 6430356636313138366364643337653765383231656234630a613732363764383865613361656331
//! 30323763636135383930323538356537326133613736633737343361373035626239653738393562
//! 3062313433373737330a363931323135336163656337393630353536396530383366663030613738
//! 3833
//! ";
//!
//! let mut env = Environment::new();
//! env.add_last(
//!     PropertySource::new("application.yml")
//!         .with_property("vault.password", PropertyValue::Plain("the-secret-vault-key".into()))
//!         .with_property("db.password", PropertyValue::from_tagged(Some("!vault"), vault_text)),
//! );
//!
//! VaultProcessor::new().process(&mut env)?;
//! assert_eq!(env.get_property("db.password"), Some("original secret"));
//! # Ok::<(), ansible_vault_rs::ProcessorError>(())
//! ```

use crate::consts::{DEFAULT_PASSWORD_PROPERTY, VAULT_TAG};
use crate::decryptor::Decryptor;
use crate::error::ProcessorError;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A configuration value as delivered by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Plain(String),
    /// Raw vault text, passed to the decryptor unchanged.
    Secret(String),
}

impl PropertyValue {
    /// Classify a scalar by its YAML tag: `!vault` marks a secret.
    pub fn from_tagged(tag: Option<&str>, raw: impl Into<String>) -> Self {
        match tag {
            Some(VAULT_TAG) => PropertyValue::Secret(raw.into()),
            _ => PropertyValue::Plain(raw.into()),
        }
    }

    #[must_use]
    pub fn is_secret(&self) -> bool {
        matches!(self, PropertyValue::Secret(_))
    }

    #[must_use]
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            PropertyValue::Plain(value) => Some(value),
            PropertyValue::Secret(_) => None,
        }
    }
}

/// A named set of properties, e.g. one loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    name: String,
    properties: BTreeMap<String, PropertyValue>,
}

impl PropertySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.insert(key.into(), value);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn has_secrets(&self) -> bool {
        self.properties.values().any(PropertyValue::is_secret)
    }
}

/// Property sources in precedence order, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    sources: Vec<PropertySource>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with the highest precedence.
    pub fn add_first(&mut self, source: PropertySource) {
        self.sources.insert(0, source);
    }

    /// Insert with the lowest precedence.
    pub fn add_last(&mut self, source: PropertySource) {
        self.sources.push(source);
    }

    #[must_use]
    pub fn sources(&self) -> &[PropertySource] {
        &self.sources
    }

    #[must_use]
    pub fn source(&self, name: &str) -> Option<&PropertySource> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// First plain value for `key` across all sources. Secrets are skipped.
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.sources
            .iter()
            .find_map(|s| s.get(key).and_then(PropertyValue::as_plain))
    }
}

/// Decrypts `!vault` secrets in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultProcessor {
    password_property: String,
}

impl VaultProcessor {
    /// Processor reading the passphrase from `vault.password`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_password_property(DEFAULT_PASSWORD_PROPERTY)
    }

    #[must_use]
    pub fn with_password_property(property: impl Into<String>) -> Self {
        Self {
            password_property: property.into(),
        }
    }

    #[must_use]
    pub fn password_property(&self) -> &str {
        &self.password_property
    }

    /// Decrypt every secret in `env`.
    ///
    /// Each source holding at least one secret is replaced, at the same
    /// position, by a source named `"<name> decrypted"` with only plain
    /// values. Sources without secrets are untouched and need no passphrase.
    ///
    /// # Errors
    ///
    /// The first failure aborts processing; `env` keeps the sources replaced
    /// so far.
    pub fn process(&self, env: &mut Environment) -> Result<(), ProcessorError> {
        let pending: Vec<usize> = env
            .sources
            .iter()
            .enumerate()
            .filter(|(_, source)| source.has_secrets())
            .map(|(index, _)| index)
            .collect();
        if pending.is_empty() {
            return Ok(());
        }

        let decryptor = self.create_decryptor(env)?;

        for index in pending {
            let decrypted = decrypt_source(&env.sources[index], &decryptor)?;
            info!(
                source = %env.sources[index].name,
                "replaced property source with decrypted copy"
            );
            env.sources[index] = decrypted;
        }
        Ok(())
    }

    fn create_decryptor(&self, env: &Environment) -> Result<Decryptor, ProcessorError> {
        env.get_property(&self.password_property)
            .map(Decryptor::new)
            .ok_or_else(|| ProcessorError::MissingPassword {
                property: self.password_property.clone(),
            })
    }
}

impl Default for VaultProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn decrypt_source(
    source: &PropertySource,
    decryptor: &Decryptor,
) -> Result<PropertySource, ProcessorError> {
    let mut decrypted = PropertySource::new(format!("{} decrypted", source.name));

    for (name, value) in &source.properties {
        let plain = match value {
            PropertyValue::Secret(vault_text) => {
                let plaintext = decryptor
                    .decrypt(vault_text)
                    .map_err(|e| ProcessorError::for_property(name.as_str(), e))?;
                debug!(property = %name, "decrypted vault property");
                plaintext
            }
            PropertyValue::Plain(value) => value.clone(),
        };
        decrypted.insert(name.as_str(), PropertyValue::Plain(plain));
    }
    Ok(decrypted)
}
