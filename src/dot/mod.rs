//! DOT module - Graph document model and text serializer
//!
//! A small, append-only model of a Graphviz DOT document together with its
//! deterministic text rendering. Graph construction lives elsewhere; this
//! module only knows about nodes, edges, attributes, and label markup.

pub mod label;
pub mod model;
pub mod render;

pub use label::{Table, TableCell, TableRow};
pub use model::{AttrValue, DotEdge, DotGraph, DotNode};
