//! Translator discovery and format routing.
//!
//! [`TransComponent`] answers the questions a conversion pipeline asks before
//! it can do any work: which translators are installed, which of them provide
//! a given model kind, and which one should read or write a given file
//! extension. Every answer is computed from the [`Registry`] and the current
//! [`Environment`]; nothing is cached between calls, because plugins and
//! toolkits may be installed or removed at any time.
//!
//! # Resolution order
//!
//! When several installed plugins claim the same extension, the first one in
//! resolution order wins. That order is the explicit priority list (see
//! [`TransComponent::with_priority`]) in listed order, followed by the
//! remaining registry entries in declaration order. Candidates that are not
//! registered come last, in the order the caller gave them. A priority entry
//! takes part only if it is registered or named among the candidates.
//!
//! # Example
//!
//! ```
//! use mmic_translator::{
//!     Axis, DeclaredPlugin, ModelKind, PluginTable, Registry, RegistryEntry, TransComponent,
//! };
//!
//! let registry = Registry::new([
//!     RegistryEntry::new("mmic_mda", "mdanalysis"),
//!     RegistryEntry::new("mmic_parmed", "parmed"),
//! ])?;
//!
//! let mut env = PluginTable::new();
//! env.register_plugin(
//!     DeclaredPlugin::new("mmic_mda")
//!         .with_models([ModelKind::Molecule])
//!         .with_capability(Axis::MolWrite, [("gro", "GRO")]),
//! )
//! .provide_toolkit("mdanalysis");
//!
//! let router = TransComponent::new(&registry, &env);
//! assert_eq!(router.resolve_plugin(Axis::MolWrite, "gro", None)?.as_deref(), Some("mmic_mda"));
//! assert_eq!(router.resolve_plugin(Axis::MolWrite, "pdb", None)?, None);
//! # Ok::<(), mmic_translator::Error>(())
//! ```

mod maps;

pub use maps::CapabilityMaps;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::Result;
use crate::model::axis::{Axis, ModelKind};
use crate::model::capability::{extension_of, normalize_extension};
use crate::plugin::Environment;
use crate::registry::Registry;

/// Routing engine over a registry and an environment.
pub struct TransComponent<'a> {
    registry: &'a Registry,
    env: &'a dyn Environment,
    priority: Vec<String>,
}

impl<'a> TransComponent<'a> {
    pub fn new(registry: &'a Registry, env: &'a dyn Environment) -> Self {
        Self {
            registry,
            env,
            priority: Vec::new(),
        }
    }

    /// Sets plugins to try before the registry's declaration order.
    pub fn with_priority<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = plugins.into_iter().map(Into::into).collect();
        self
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Every registered translator identifier.
    pub fn tactic_comps(&self) -> BTreeSet<String> {
        self.registry.plugins().map(str::to_string).collect()
    }

    /// Candidates in resolution order, without duplicates.
    ///
    /// `None` means every registered plugin.
    pub fn resolution_order(&self, candidates: Option<&[&str]>) -> Vec<String> {
        let allowed = |id: &str| candidates.is_none_or(|c| c.contains(&id));

        let mut ordered: Vec<String> = Vec::new();
        let mut push = |id: &str| {
            if allowed(id) && !ordered.iter().any(|o| o == id) {
                ordered.push(id.to_string());
            }
        };

        // Priority ids that are neither registered nor named as candidates
        // are ignored.
        let eligible = |id: &str| {
            self.registry.contains(id) || candidates.is_some_and(|c| c.contains(&id))
        };
        for id in &self.priority {
            if eligible(id.as_str()) {
                push(id.as_str());
            }
        }
        for id in self.registry.plugins() {
            push(id);
        }
        for id in candidates.unwrap_or_default().iter().copied() {
            push(id);
        }
        ordered
    }

    fn installed_ordered(&self, candidates: Option<&[&str]>) -> Result<Vec<String>> {
        let mut installed = Vec::new();
        for id in self.resolution_order(candidates) {
            if self.env.is_importable(&id)? {
                installed.push(id);
            } else {
                trace!(plugin = %id, "translator not installed");
            }
        }
        Ok(installed)
    }

    /// Candidates whose plugin can be loaded in the current environment.
    pub fn installed(&self, candidates: Option<&[&str]>) -> Result<BTreeSet<String>> {
        Ok(self.installed_ordered(candidates)?.into_iter().collect())
    }

    /// Installed candidates that provide a model class for `kind`.
    ///
    /// Fails with [`Error::PluginLoad`](crate::Error::PluginLoad) if an
    /// installed plugin cannot be loaded.
    pub fn installed_supporting(
        &self,
        kind: ModelKind,
        candidates: Option<&[&str]>,
    ) -> Result<BTreeSet<String>> {
        let mut supporting = BTreeSet::new();
        for id in self.installed_ordered(candidates)? {
            let plugin = self.env.load(&id)?;
            if plugin.supports_model(kind) {
                supporting.insert(id);
            }
        }
        Ok(supporting)
    }

    /// Toolkit wrapped by `plugin`; see [`Registry::toolkit_for`].
    pub fn toolkit_for(&self, plugin: &str) -> Result<&'a str> {
        self.registry.toolkit_for(plugin)
    }

    /// Plugin wrapping `toolkit`; see [`Registry::plugin_for_toolkit`].
    pub fn plugin_for_toolkit(&self, toolkit: &str) -> Result<&'a str> {
        self.registry.plugin_for_toolkit(toolkit)
    }

    /// Extension maps declared for `axis` by every installed candidate.
    ///
    /// Plugins without a declaration for the axis are left out. Load failures
    /// of installed plugins propagate.
    pub fn capability_maps(
        &self,
        axis: Axis,
        candidates: Option<&[&str]>,
    ) -> Result<CapabilityMaps> {
        let mut maps = CapabilityMaps::default();
        for id in self.installed_ordered(candidates)? {
            let plugin = self.env.load(&id)?;
            match plugin.capabilities().get(axis) {
                Some(map) => maps.push(id, map.clone()),
                None => trace!(plugin = %id, %axis, "no declaration for axis"),
            }
        }
        Ok(maps)
    }

    /// Picks the plugin that handles `extension` on `axis`.
    ///
    /// Returns the first plugin, in resolution order, that declares the
    /// extension and whose toolkit is importable. `Ok(None)` means no
    /// installed plugin can do it.
    pub fn resolve_plugin(
        &self,
        axis: Axis,
        extension: &str,
        candidates: Option<&[&str]>,
    ) -> Result<Option<String>> {
        let extension = normalize_extension(extension);
        let maps = self.capability_maps(axis, candidates)?;

        for (plugin, _) in maps.claiming(&extension) {
            let toolkit = self.registry.toolkit_for(plugin)?;
            if self.env.is_importable(toolkit)? {
                debug!(%axis, extension = %extension, plugin, toolkit, "resolved translator");
                return Ok(Some(plugin.to_string()));
            }
            debug!(plugin, toolkit, "toolkit unavailable, trying next translator");
        }

        debug!(%axis, extension = %extension, "no translator found");
        Ok(None)
    }

    /// Like [`resolve_plugin`](Self::resolve_plugin), with the extension
    /// taken from `path`. Paths without an extension resolve to `None`.
    pub fn resolve_path(
        &self,
        axis: Axis,
        path: &Path,
        candidates: Option<&[&str]>,
    ) -> Result<Option<String>> {
        match extension_of(path) {
            Some(ext) => self.resolve_plugin(axis, &ext, candidates),
            None => Ok(None),
        }
    }

    /// Sorted extensions any installed candidate declares for `axis`.
    pub fn supported_extensions(
        &self,
        axis: Axis,
        candidates: Option<&[&str]>,
    ) -> Result<Vec<String>> {
        let maps = self.capability_maps(axis, candidates)?;
        let extensions: BTreeSet<&str> = maps.iter().flat_map(|(_, m)| m.extensions()).collect();
        Ok(extensions.into_iter().map(str::to_string).collect())
    }
}
