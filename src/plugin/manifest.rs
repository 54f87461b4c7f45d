use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::{DeclaredPlugin, Environment, TranslatorPlugin};
use crate::error::{Error, Result};
use crate::model::axis::ModelKind;
use crate::model::capability::CapabilitySet;

/// Declarations of one installed plugin, as written in a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginManifest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelKind>,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub model_types: Vec<String>,
    #[serde(default)]
    pub extensions: CapabilitySet,
}

/// Environment described by data: the installed plugins with their
/// declarations, and the toolkits that can be loaded.
///
/// ```toml
/// toolkits = ["mdanalysis"]
///
/// [plugins.mmic_mda]
/// models = ["Molecule", "Trajectory"]
///
/// [plugins.mmic_mda.extensions]
/// mol-read = { pdb = "PDB", gro = "GRO" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEnvironment {
    #[serde(default)]
    pub toolkits: BTreeSet<String>,
    #[serde(default)]
    pub plugins: BTreeMap<String, PluginManifest>,
}

impl ManifestEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn with_toolkit(mut self, name: impl Into<String>) -> Self {
        self.toolkits.insert(name.into());
        self
    }

    pub fn with_plugin(mut self, name: impl Into<String>, manifest: PluginManifest) -> Self {
        self.plugins.insert(name.into(), manifest);
        self
    }
}

impl Environment for ManifestEnvironment {
    fn is_importable(&self, name: &str) -> Result<bool> {
        Ok(self.plugins.contains_key(name) || self.toolkits.contains(name))
    }

    fn load(&self, plugin: &str) -> Result<Arc<dyn TranslatorPlugin>> {
        let manifest = self
            .plugins
            .get(plugin)
            .ok_or_else(|| Error::plugin_load(plugin, "no manifest entry"))?;

        debug!(plugin = plugin, models = manifest.models.len(), "loaded plugin manifest");

        let mut declared = DeclaredPlugin::new(plugin)
            .with_models(manifest.models.iter().copied())
            .with_components(manifest.components.iter().cloned())
            .with_model_types(manifest.model_types.iter().cloned())
            .with_capabilities(manifest.extensions.clone());
        if let Some(version) = &manifest.version {
            declared = declared.with_version(version.clone());
        }
        Ok(Arc::new(declared))
    }
}
