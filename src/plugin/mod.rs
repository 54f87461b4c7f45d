//! Translator plugins and the environment they are discovered in.
//!
//! A plugin is identified by the same string the [`Registry`](crate::Registry)
//! uses. What the router needs from it is captured by [`TranslatorPlugin`]:
//! the model kinds it provides classes for, and the extension maps it
//! publishes per [`Axis`](crate::Axis).
//!
//! Whether a plugin or a toolkit is present is answered by an
//! [`Environment`]. Two implementations ship with the crate:
//!
//! - [`PluginTable`] — an explicit table of availability checks and loader
//!   closures, for plugins compiled into the host program.
//! - [`ManifestEnvironment`] — a TOML description of installed plugins and
//!   toolkits, used by the `mmtrans` binary.

mod declared;
mod manifest;
mod table;

pub use declared::DeclaredPlugin;
pub use manifest::{ManifestEnvironment, PluginManifest};
pub use table::PluginTable;

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::model::axis::ModelKind;
use crate::model::capability::CapabilitySet;

/// Declarations a translator plugin publishes to the router.
pub trait TranslatorPlugin: Send + Sync + fmt::Debug {
    /// Plugin identifier, e.g. `mmic_mda`.
    fn name(&self) -> &str;

    /// Model kinds the plugin provides model classes for.
    fn models(&self) -> &[ModelKind];

    /// Extension maps for every axis the plugin supports.
    fn capabilities(&self) -> &CapabilitySet;

    /// Normalized plugin version, when known.
    fn version(&self) -> Option<&str> {
        None
    }

    /// Names of the conversion components the plugin exports,
    /// e.g. `MolToSchemaComponent`.
    fn components(&self) -> &[String] {
        &[]
    }

    /// Names of the [`ToolkitModel`](crate::ToolkitModel) types the plugin
    /// exports, e.g. `MolModel`.
    fn model_types(&self) -> &[String] {
        &[]
    }

    fn supports_model(&self, kind: ModelKind) -> bool {
        self.models().contains(&kind)
    }
}

/// Read-only oracle over the installed-package state.
///
/// Implementations must be idempotent: loading the same plugin twice yields
/// the same declarations.
pub trait Environment: Send + Sync {
    /// Whether `name` (a plugin identifier or a toolkit name) can be loaded.
    ///
    /// Errors mean the question itself could not be answered.
    fn is_importable(&self, name: &str) -> Result<bool>;

    /// Loads an installed plugin.
    ///
    /// Fails with [`Error::PluginLoad`](crate::Error::PluginLoad).
    fn load(&self, plugin: &str) -> Result<Arc<dyn TranslatorPlugin>>;
}
