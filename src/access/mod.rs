//! Access graph module - transaction/account dependency graphs
//!
//! Two entry points feed the same DOT model. The invoke path classifies raw
//! call traces into per-account access records; the relationship path ingests
//! a relationship graph the replay engine already built.

pub mod classify;
pub mod invoke;
pub mod record;
pub mod registry;
pub mod relationship;
mod style;

pub use classify::{classify_entry, KeyOpcode};
pub use invoke::{build_invoke_graph, InvokeGraphBuilder};
pub use record::{AccessKind, AccessRecord, EdgeAccumulator};
pub use registry::AccountRegistry;
pub use relationship::{
    build_relationship_graph, AccountNode, Operation, RelationEdge, RelationshipGraph,
    RelationshipInput, TxNode,
};
