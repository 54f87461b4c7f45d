//! Intermediate input/output envelopes passed into and out of translators.
//!
//! An envelope carries at most one representation of the data being
//! converted: either the toolkit-native object or the canonical schema
//! object. [`Payload`] makes the "both populated" state unrepresentable;
//! the `from_parts` constructors exist for callers holding two optional
//! values and reject that state with [`Error::MutualExclusion`].

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Units of the physical properties stored in a toolkit object,
/// e.g. `length → angstrom`.
pub type Units = BTreeMap<String, String>;

/// Extra keyword options forwarded to translator constructors.
pub type Options = toml::Table;

/// Exactly one representation of the data being translated.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<N, S> {
    /// Toolkit-native object, e.g. a loaded universe or structure.
    Native(N),
    /// Canonical schema object.
    Schema(S),
}

impl<N, S> Payload<N, S> {
    fn from_options(native: Option<N>, schema: Option<S>) -> Result<Option<Self>> {
        match (native, schema) {
            (Some(_), Some(_)) => Err(Error::MutualExclusion),
            (Some(n), None) => Ok(Some(Payload::Native(n))),
            (None, Some(s)) => Ok(Some(Payload::Schema(s))),
            (None, None) => Ok(None),
        }
    }

    pub fn native(&self) -> Option<&N> {
        match self {
            Payload::Native(n) => Some(n),
            Payload::Schema(_) => None,
        }
    }

    pub fn schema(&self) -> Option<&S> {
        match self {
            Payload::Schema(s) => Some(s),
            Payload::Native(_) => None,
        }
    }
}

/// Translation procedure input.
#[derive(Debug, Clone, PartialEq)]
pub struct TransInput<N, S> {
    payload: Option<Payload<N, S>>,
    pub data_units: Option<Units>,
    /// Specification the schema object conforms to.
    pub schema_name: Option<String>,
    /// Version of `schema_name`, e.g. `<= 0.1.1`. Carried opaquely.
    pub schema_version: Option<String>,
    /// Supported toolkit version, e.g. `>= 3.4.0`. Carried opaquely.
    pub tk_version: Option<String>,
    pub options: Options,
}

impl<N, S> TransInput<N, S> {
    fn with_payload(payload: Option<Payload<N, S>>) -> Self {
        Self {
            payload,
            data_units: None,
            schema_name: None,
            schema_version: None,
            tk_version: None,
            options: Options::new(),
        }
    }

    pub fn empty() -> Self {
        Self::with_payload(None)
    }

    pub fn native(data_object: N) -> Self {
        Self::with_payload(Some(Payload::Native(data_object)))
    }

    pub fn schema(schema_object: S) -> Self {
        Self::with_payload(Some(Payload::Schema(schema_object)))
    }

    /// Builds an input from two optional representations.
    ///
    /// Fails with [`Error::MutualExclusion`] if both are given.
    pub fn from_parts(data_object: Option<N>, schema_object: Option<S>) -> Result<Self> {
        Ok(Self::with_payload(Payload::from_options(
            data_object,
            schema_object,
        )?))
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.data_units = Some(units);
        self
    }

    pub fn with_schema_spec(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.schema_name = Some(name.into());
        self.schema_version = Some(version.into());
        self
    }

    pub fn with_tk_version(mut self, version: impl Into<String>) -> Self {
        self.tk_version = Some(version.into());
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn payload(&self) -> Option<&Payload<N, S>> {
        self.payload.as_ref()
    }

    pub fn data_object(&self) -> Option<&N> {
        self.payload.as_ref().and_then(Payload::native)
    }

    pub fn schema_object(&self) -> Option<&S> {
        self.payload.as_ref().and_then(Payload::schema)
    }

    pub fn into_payload(self) -> Option<Payload<N, S>> {
        self.payload
    }
}

/// Translation procedure output.
#[derive(Debug, Clone, PartialEq)]
pub struct TransOutput<N, S> {
    payload: Option<Payload<N, S>>,
    pub data_units: Option<Units>,
    pub schema_name: Option<String>,
    pub schema_version: Option<String>,
    /// Non-fatal messages accumulated during the conversion.
    pub warnings: Vec<String>,
    /// The input that produced this output.
    pub proc_input: Option<Box<TransInput<N, S>>>,
}

impl<N, S> TransOutput<N, S> {
    fn with_payload(payload: Option<Payload<N, S>>) -> Self {
        Self {
            payload,
            data_units: None,
            schema_name: None,
            schema_version: None,
            warnings: Vec::new(),
            proc_input: None,
        }
    }

    pub fn empty() -> Self {
        Self::with_payload(None)
    }

    pub fn native(data_object: N) -> Self {
        Self::with_payload(Some(Payload::Native(data_object)))
    }

    pub fn schema(schema_object: S) -> Self {
        Self::with_payload(Some(Payload::Schema(schema_object)))
    }

    /// Builds an output from two optional representations.
    ///
    /// Fails with [`Error::MutualExclusion`] if both are given.
    pub fn from_parts(data_object: Option<N>, schema_object: Option<S>) -> Result<Self> {
        Ok(Self::with_payload(Payload::from_options(
            data_object,
            schema_object,
        )?))
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.data_units = Some(units);
        self
    }

    pub fn with_schema_spec(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.schema_name = Some(name.into());
        self.schema_version = Some(version.into());
        self
    }

    pub fn with_input(mut self, input: TransInput<N, S>) -> Self {
        self.proc_input = Some(Box::new(input));
        self
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn payload(&self) -> Option<&Payload<N, S>> {
        self.payload.as_ref()
    }

    pub fn data_object(&self) -> Option<&N> {
        self.payload.as_ref().and_then(Payload::native)
    }

    pub fn schema_object(&self) -> Option<&S> {
        self.payload.as_ref().and_then(Payload::schema)
    }

    pub fn into_payload(self) -> Option<Payload<N, S>> {
        self.payload
    }
}
