//! Direction-specific envelopes with a required payload.
//!
//! Where [`TransInput`](super::envelope::TransInput) allows either
//! representation, these types fix the direction of the conversion at the
//! type level: converting a toolkit object *to* the schema, or building a
//! toolkit object *from* the schema. Molecule and trajectory aliases name
//! the common instantiations.

use super::envelope::{Options, Units};

/// Input for converting a toolkit object to the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ToSchemaInput<N> {
    pub tk_object: N,
    pub tk_units: Option<Units>,
    pub tk_version: Option<String>,
    pub schema_version: Option<String>,
    pub options: Options,
}

impl<N> ToSchemaInput<N> {
    pub fn new(tk_object: N) -> Self {
        Self {
            tk_object,
            tk_units: None,
            tk_version: None,
            schema_version: None,
            options: Options::new(),
        }
    }
}

/// Input for building a toolkit object from the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FromSchemaInput<S> {
    pub schema_object: S,
    pub schema_version: Option<String>,
    pub tk_version: Option<String>,
    pub options: Options,
}

impl<S> FromSchemaInput<S> {
    pub fn new(schema_object: S) -> Self {
        Self {
            schema_object,
            schema_version: None,
            tk_version: None,
            options: Options::new(),
        }
    }
}

/// Result of converting a toolkit object to the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ToSchemaOutput<S> {
    pub schema_object: S,
    pub schema_version: Option<String>,
    pub warnings: Vec<String>,
}

impl<S> ToSchemaOutput<S> {
    pub fn new(schema_object: S) -> Self {
        Self {
            schema_object,
            schema_version: None,
            warnings: Vec::new(),
        }
    }
}

/// Result of building a toolkit object from the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FromSchemaOutput<N> {
    pub tk_object: N,
    pub tk_units: Option<Units>,
    pub tk_version: Option<String>,
    pub warnings: Vec<String>,
}

impl<N> FromSchemaOutput<N> {
    pub fn new(tk_object: N) -> Self {
        Self {
            tk_object,
            tk_units: None,
            tk_version: None,
            warnings: Vec::new(),
        }
    }
}

pub type MolInToSchema<N> = ToSchemaInput<N>;
pub type MolInFromSchema<S> = FromSchemaInput<S>;
pub type MolOutToSchema<S> = ToSchemaOutput<S>;
pub type MolOutFromSchema<N> = FromSchemaOutput<N>;

pub type TrajInToSchema<N> = ToSchemaInput<N>;
pub type TrajInFromSchema<S> = FromSchemaInput<S>;
pub type TrajOutToSchema<S> = ToSchemaOutput<S>;
pub type TrajOutFromSchema<N> = FromSchemaOutput<N>;
