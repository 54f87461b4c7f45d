//! The static table of known translators.
//!
//! Each [`RegistryEntry`] pairs a translator plugin identifier with the
//! external toolkit it wraps. The registry preserves declaration order, which
//! is also the default order the router tries plugins in.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_REGISTRY_TOML: &str = include_str!("../../resources/default.registry.toml");

static DEFAULT_REGISTRY: OnceLock<Registry> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryEntry {
    /// Translator plugin identifier, e.g. `mmic_mda`.
    pub plugin: String,
    /// Name of the wrapped toolkit, e.g. `mdanalysis`.
    pub toolkit: String,
}

impl RegistryEntry {
    pub fn new(plugin: impl Into<String>, toolkit: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            toolkit: toolkit.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    registry: Vec<RegistryEntry>,
}

/// Ordered, immutable mapping `plugin → toolkit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Builds a registry, rejecting duplicate plugin identifiers.
    pub fn new(entries: impl IntoIterator<Item = RegistryEntry>) -> Result<Self> {
        let entries: Vec<RegistryEntry> = entries.into_iter().collect();
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.plugin.as_str()) {
                return Err(Error::DuplicatePlugin(entry.plugin.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parses a `[[registry]]` array of tables.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(toml)?;
        Self::new(file.registry)
    }

    /// The translators shipped with the framework.
    pub fn default_registry() -> &'static Registry {
        DEFAULT_REGISTRY.get_or_init(|| {
            Registry::from_toml(DEFAULT_REGISTRY_TOML)
                .expect("Failed to parse embedded default registry. This is a library bug.")
        })
    }

    /// Toolkit wrapped by `plugin`.
    ///
    /// Fails with [`Error::NotFound`] for unregistered identifiers.
    pub fn toolkit_for(&self, plugin: &str) -> Result<&str> {
        self.get(plugin)
            .map(|entry| entry.toolkit.as_str())
            .ok_or_else(|| Error::not_found(plugin, self.plugins()))
    }

    /// First plugin, in declaration order, wrapping `toolkit`.
    ///
    /// Fails with [`Error::Resolution`] if no entry matches.
    pub fn plugin_for_toolkit(&self, toolkit: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|entry| entry.toolkit == toolkit)
            .map(|entry| entry.plugin.as_str())
            .ok_or_else(|| Error::Resolution(format!("{toolkit} objects")))
    }

    pub fn get(&self, plugin: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.plugin == plugin)
    }

    pub fn contains(&self, plugin: &str) -> bool {
        self.get(plugin).is_some()
    }

    pub fn plugins(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.plugin.as_str())
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
