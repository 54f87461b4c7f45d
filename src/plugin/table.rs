use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use super::{DeclaredPlugin, Environment, TranslatorPlugin};
use crate::error::{Error, Result};

type AvailabilityCheck = Box<dyn Fn() -> Result<bool> + Send + Sync>;
type Loader = Box<dyn Fn() -> Result<Arc<dyn TranslatorPlugin>> + Send + Sync>;

struct Slot {
    available: AvailabilityCheck,
    loader: Loader,
    loaded: OnceLock<Arc<dyn TranslatorPlugin>>,
}

/// Explicit plugin table: identifier → availability check → loader.
///
/// Loaded plugins are memoized per slot, so repeated loads return the same
/// instance.
#[derive(Default)]
pub struct PluginTable {
    plugins: HashMap<String, Slot>,
    toolkits: HashMap<String, AvailabilityCheck>,
}

impl PluginTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin with custom availability and loading logic.
    pub fn register<A, L>(&mut self, id: impl Into<String>, available: A, loader: L) -> &mut Self
    where
        A: Fn() -> Result<bool> + Send + Sync + 'static,
        L: Fn() -> Result<Arc<dyn TranslatorPlugin>> + Send + Sync + 'static,
    {
        self.plugins.insert(
            id.into(),
            Slot {
                available: Box::new(available),
                loader: Box::new(loader),
                loaded: OnceLock::new(),
            },
        );
        self
    }

    /// Registers an always-available plugin from its declarations.
    pub fn register_plugin(&mut self, plugin: DeclaredPlugin) -> &mut Self {
        let id = plugin.name().to_string();
        let plugin: Arc<dyn TranslatorPlugin> = Arc::new(plugin);
        self.register(id, || Ok(true), move || Ok(Arc::clone(&plugin)))
    }

    /// Registers a toolkit with a custom availability check.
    pub fn register_toolkit<A>(&mut self, name: impl Into<String>, available: A) -> &mut Self
    where
        A: Fn() -> Result<bool> + Send + Sync + 'static,
    {
        self.toolkits.insert(name.into(), Box::new(available));
        self
    }

    /// Registers an always-available toolkit.
    pub fn provide_toolkit(&mut self, name: impl Into<String>) -> &mut Self {
        self.register_toolkit(name, || Ok(true))
    }
}

impl Environment for PluginTable {
    fn is_importable(&self, name: &str) -> Result<bool> {
        let check = match (self.plugins.get(name), self.toolkits.get(name)) {
            (Some(slot), _) => &slot.available,
            (None, Some(check)) => check,
            (None, None) => {
                trace!(entry = name, "not present in plugin table");
                return Ok(false);
            }
        };
        check()
    }

    fn load(&self, plugin: &str) -> Result<Arc<dyn TranslatorPlugin>> {
        let slot = self
            .plugins
            .get(plugin)
            .ok_or_else(|| Error::plugin_load(plugin, "not present in plugin table"))?;

        if let Some(loaded) = slot.loaded.get() {
            return Ok(Arc::clone(loaded));
        }

        let loaded = (slot.loader)().map_err(|e| match e {
            Error::PluginLoad { .. } => e,
            other => Error::plugin_load(plugin, other.to_string()),
        })?;
        debug!(plugin = plugin, "loaded translator plugin");
        Ok(Arc::clone(slot.loaded.get_or_init(|| loaded)))
    }
}

impl fmt::Debug for PluginTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut plugins: Vec<_> = self.plugins.keys().collect();
        plugins.sort();
        let mut toolkits: Vec<_> = self.toolkits.keys().collect();
        toolkits.sort();
        f.debug_struct("PluginTable")
            .field("plugins", &plugins)
            .field("toolkits", &toolkits)
            .finish()
    }
}
