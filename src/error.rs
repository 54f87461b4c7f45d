//! Error types for translator routing and the translator contract.
//!
//! A single error type covers both sides of the crate: the routing layer
//! (registry lookups, environment introspection, plugin loading) and the
//! failures every concrete translator reports through [`ToolkitModel`]
//! and the I/O envelopes.
//!
//! [`ToolkitModel`]: crate::ToolkitModel

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the registry, the router and translator implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// A plugin identifier is not present in the registry.
    #[error("translator '{plugin}' not found in the registry (known: {known})")]
    NotFound {
        /// The requested identifier.
        plugin: String,
        /// Comma-separated list of registered identifiers.
        known: String,
    },

    /// No registered translator matches a toolkit or extension query.
    #[error("could not find an appropriate translator for {0}")]
    Resolution(String),

    /// A plugin reported as installed failed to load.
    ///
    /// This points at an inconsistent environment and is never degraded to
    /// "not installed".
    #[error("failed to load translator '{plugin}': {detail}")]
    PluginLoad {
        /// Identifier of the plugin that failed.
        plugin: String,
        /// Description of the failure.
        detail: String,
    },

    /// The environment could not answer an availability query.
    #[error("environment introspection failed for '{name}': {detail}")]
    Environment {
        /// Module or toolkit name being inspected.
        name: String,
        /// Description of the failure.
        detail: String,
    },

    /// The same plugin identifier was registered twice.
    #[error("translator '{0}' is registered more than once")]
    DuplicatePlugin(String),

    /// Wrapped toolkit data failed the model's validity check.
    #[error("invalid toolkit data: {0}")]
    Validation(String),

    /// An envelope was given both a toolkit object and a schema object.
    #[error("data_object and schema_object cannot be simultaneously defined")]
    MutualExclusion,

    /// A file could not be interpreted in the given or inferred format.
    #[error("failed to parse {format} data: {details}")]
    Parse {
        /// Format the parser was using.
        format: String,
        /// Description of the problem.
        details: String,
    },

    /// Serializing toolkit data to a file failed.
    #[error("failed to write '{path}': {details}")]
    Write {
        /// Target path.
        path: String,
        /// Description of the problem.
        details: String,
    },

    /// A schema object does not have the shape expected for a schema version.
    #[error("schema object does not match version {version}: {details}")]
    SchemaMismatch {
        /// Requested schema version, or `latest`.
        version: String,
        /// Description of the mismatch.
        details: String,
    },

    /// Toolkit data cannot be mapped onto the canonical schema.
    #[error("failed to convert toolkit data to schema: {0}")]
    Conversion(String),

    /// A model kind string was not recognised.
    #[error("unknown model kind: '{0}'")]
    UnknownModel(String),

    /// An axis string was not recognised.
    #[error("unknown capability axis: '{0}'")]
    UnknownAxis(String),

    /// Failed to parse a TOML configuration.
    #[error("failed to parse translator configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Underlying I/O failure.
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a [`NotFound`](Error::NotFound) error listing the known identifiers.
    pub fn not_found<'a>(plugin: &str, known: impl IntoIterator<Item = &'a str>) -> Self {
        Self::NotFound {
            plugin: plugin.to_string(),
            known: known.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Creates a [`PluginLoad`](Error::PluginLoad) error.
    pub fn plugin_load(plugin: &str, detail: impl Into<String>) -> Self {
        Self::PluginLoad {
            plugin: plugin.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates an [`Environment`](Error::Environment) error.
    pub fn environment(name: &str, detail: impl Into<String>) -> Self {
        Self::Environment {
            name: name.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates a [`Parse`](Error::Parse) error.
    pub fn parse(format: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            details: details.into(),
        }
    }

    /// Creates a [`Write`](Error::Write) error.
    pub fn write(path: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Creates a [`SchemaMismatch`](Error::SchemaMismatch) error.
    ///
    /// A missing version is reported as `latest`.
    pub fn schema_mismatch(version: Option<&str>, details: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            version: version.unwrap_or("latest").to_string(),
            details: details.into(),
        }
    }
}
