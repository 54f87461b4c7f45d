use crate::model::axis::{Axis, ModelKind};
use crate::model::capability::{CapabilitySet, FormatDescriptor};

use super::TranslatorPlugin;

/// Plugin declarations held as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredPlugin {
    name: String,
    version: Option<String>,
    models: Vec<ModelKind>,
    components: Vec<String>,
    model_types: Vec<String>,
    capabilities: CapabilitySet,
}

impl DeclaredPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_models(mut self, models: impl IntoIterator<Item = ModelKind>) -> Self {
        for model in models {
            if !self.models.contains(&model) {
                self.models.push(model);
            }
        }
        self
    }

    pub fn with_components<S>(mut self, names: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        self.components.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_model_types<S>(mut self, names: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        self.model_types.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_capability<E, F>(
        mut self,
        axis: Axis,
        formats: impl IntoIterator<Item = (E, F)>,
    ) -> Self
    where
        E: AsRef<str>,
        F: Into<FormatDescriptor>,
    {
        self.capabilities = self.capabilities.with(axis, formats);
        self
    }

    pub fn with_capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.capabilities = capabilities;
        self
    }
}

impl TranslatorPlugin for DeclaredPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn models(&self) -> &[ModelKind] {
        &self.models
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn components(&self) -> &[String] {
        &self.components
    }

    fn model_types(&self) -> &[String] {
        &self.model_types
    }
}
