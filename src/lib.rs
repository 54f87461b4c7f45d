//! Plugin registry and format routing for molecular-modeling schema translators.
//!
//! Translators convert between standardized molecular schemas and the native
//! objects of external toolkits (MDAnalysis, ParmEd, QCSchema, ...). Each one
//! lives in its own plugin and declares which file extensions it can read and
//! write for molecules, force fields and trajectories. This crate decides
//! which plugin handles a given request.
//!
//! # Features
//!
//! - **Registry** — Ordered `plugin → toolkit` table with an embedded default
//! - **Discovery** — Installed-plugin queries against a pluggable [`Environment`]
//! - **Routing** — Extension-based plugin resolution per [`Axis`], with an
//!   optional priority override for shared extensions
//! - **Translator contract** — [`ToolkitModel`] and the I/O envelopes that
//!   concrete translators implement
//!
//! # Quick Start
//!
//! ```
//! use mmic_translator::{Axis, ManifestEnvironment, Registry, TransComponent};
//!
//! let env = ManifestEnvironment::from_toml(
//!     r#"
//!     toolkits = ["parmed"]
//!
//!     [plugins.mmic_parmed]
//!     models = ["Molecule", "ForceField"]
//!
//!     [plugins.mmic_parmed.extensions]
//!     ff-read = { top = "TOP", prmtop = "PRMTOP" }
//!     "#,
//! )?;
//!
//! let router = TransComponent::new(Registry::default_registry(), &env);
//!
//! assert_eq!(
//!     router.resolve_plugin(Axis::FfRead, ".prmtop", None)?.as_deref(),
//!     Some("mmic_parmed")
//! );
//! assert_eq!(router.resolve_plugin(Axis::FfWrite, "top", None)?, None);
//! # Ok::<(), mmic_translator::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`registry`] — Known translators and the toolkits they wrap
//! - [`plugin`] — Plugin declarations and environment implementations
//! - [`router`] — [`TransComponent`], the routing engine
//! - [`model`] — Axes, capability maps, envelopes and [`ToolkitModel`]
//! - [`config`] — TOML configuration for the registry, priority and environment

pub mod config;
pub mod model;
pub mod plugin;
pub mod registry;
pub mod router;

mod error;

pub use error::{Error, Result};

pub use config::RouterConfig;
pub use registry::{Registry, RegistryEntry};
pub use router::{CapabilityMaps, TransComponent};

pub use plugin::{
    DeclaredPlugin, Environment, ManifestEnvironment, PluginManifest, PluginTable,
    TranslatorPlugin,
};

pub use model::axis::{Axis, Direction, ModelKind};
pub use model::capability::{CapabilitySet, ExtensionMap, FormatDescriptor};
pub use model::directional::{
    FromSchemaInput, FromSchemaOutput, MolInFromSchema, MolInToSchema, MolOutFromSchema,
    MolOutToSchema, ToSchemaInput, ToSchemaOutput, TrajInFromSchema, TrajInToSchema,
    TrajOutFromSchema, TrajOutToSchema,
};
pub use model::envelope::{Options, Payload, TransInput, TransOutput, Units};
pub use model::toolkit::{ToolkitData, ToolkitModel};
