//! Router configuration files.
//!
//! A single TOML document can override the registry, pin a resolution
//! priority, and describe the installed environment:
//!
//! ```toml
//! priority = ["mmic_parmed"]
//!
//! [[registry]]
//! plugin = "mmic_mda"
//! toolkit = "mdanalysis"
//!
//! [environment]
//! toolkits = ["mdanalysis"]
//!
//! [environment.plugins.mmic_mda]
//! models = ["Molecule", "Trajectory"]
//!
//! [environment.plugins.mmic_mda.extensions]
//! mol-read = { pdb = "PDB", gro = "GRO" }
//! ```
//!
//! Without a `registry` array the embedded default registry is used. Without
//! an `environment` table nothing is installed.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::plugin::ManifestEnvironment;
use crate::registry::{Registry, RegistryEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Plugins tried before the registry's declaration order.
    #[serde(default)]
    pub priority: Vec<String>,
    #[serde(default)]
    pub registry: Option<Vec<RegistryEntry>>,
    #[serde(default)]
    pub environment: Option<ManifestEnvironment>,
}

impl RouterConfig {
    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let config = Self::from_toml(&std::fs::read_to_string(path)?)?;
        debug!(
            path = %path.display(),
            custom_registry = config.registry.is_some(),
            priority = config.priority.len(),
            "loaded router configuration"
        );
        Ok(config)
    }

    /// The configured registry, or the default one.
    pub fn registry(&self) -> Result<Registry> {
        match &self.registry {
            Some(entries) => Registry::new(entries.iter().cloned()),
            None => Ok(Registry::default_registry().clone()),
        }
    }

    /// The configured environment; empty when absent.
    pub fn environment(&self) -> ManifestEnvironment {
        self.environment.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::axis::Axis;
    use crate::plugin::Environment;
    use crate::router::TransComponent;
    use std::io::Write;

    const CONFIG: &str = r#"
        priority = ["mmic_parmed"]

        [environment]
        toolkits = ["mdanalysis", "parmed"]

        [environment.plugins.mmic_mda]
        models = ["Molecule"]

        [environment.plugins.mmic_mda.extensions]
        mol-read = { pdb = "PDB", gro = "GRO" }

        [environment.plugins.mmic_parmed]
        models = ["Molecule", "ForceField"]

        [environment.plugins.mmic_parmed.extensions]
        mol-read = { pdb = "PDB" }
    "#;

    #[test]
    fn empty_config_uses_defaults() {
        let config = RouterConfig::from_toml("").unwrap();
        assert_eq!(&config.registry().unwrap(), Registry::default_registry());
        assert!(config.priority.is_empty());
        assert!(!config.environment().is_importable("mmic_mda").unwrap());
    }

    #[test]
    fn custom_registry_replaces_default() {
        let config = RouterConfig::from_toml(
            r#"
            [[registry]]
            plugin = "mmic_rdkit"
            toolkit = "rdkit"
            "#,
        )
        .unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry.plugins().collect::<Vec<_>>(), vec!["mmic_rdkit"]);
    }

    #[test]
    fn duplicate_registry_entries_fail_on_build() {
        let config = RouterConfig::from_toml(
            r#"
            [[registry]]
            plugin = "P1"
            toolkit = "a"

            [[registry]]
            plugin = "P1"
            toolkit = "b"
            "#,
        )
        .unwrap();
        assert!(matches!(config.registry(), Err(Error::DuplicatePlugin(_))));
    }

    #[test]
    fn priority_drives_resolution() {
        let config = RouterConfig::from_toml(CONFIG).unwrap();
        let registry = config.registry().unwrap();
        let env = config.environment();

        let router = TransComponent::new(&registry, &env);
        assert_eq!(
            router.resolve_plugin(Axis::MolRead, "pdb", None).unwrap().as_deref(),
            Some("mmic_mda")
        );

        let router = router.with_priority(config.priority.iter().cloned());
        assert_eq!(
            router.resolve_plugin(Axis::MolRead, "pdb", None).unwrap().as_deref(),
            Some("mmic_parmed")
        );
    }

    #[test]
    fn reads_config_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = RouterConfig::from_path(file.path()).unwrap();
        assert_eq!(config.priority, vec!["mmic_parmed"]);
        assert!(config.environment().is_importable("parmed").unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RouterConfig::from_path(Path::new("/nonexistent/mmtrans.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        assert!(matches!(
            RouterConfig::from_toml("priorities = []"),
            Err(Error::Config(_))
        ));
    }
}
