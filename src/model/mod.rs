//! Data types shared by the router and by translator implementations.
//!
//! - [`axis`] – Model kinds, read/write directions and the six capability axes.
//! - [`capability`] – Extension → format maps that plugins declare per axis.
//! - [`envelope`] – Generic conversion input/output envelopes.
//! - [`directional`] – Envelopes specialized to one conversion direction.
//! - [`toolkit`] – The [`ToolkitModel`](toolkit::ToolkitModel) contract every
//!   translator model satisfies.

pub mod axis;
pub mod capability;
pub mod directional;
pub mod envelope;
pub mod toolkit;
