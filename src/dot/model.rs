//! Attributed directed graph model
//!
//! An ordered, append-only representation of a DOT document: scope-level
//! attribute blocks, nodes, and edges, each carrying an ordered attribute
//! list. Everything preserves insertion order so the rendered text is
//! deterministic.

use super::label::Table;

/// Attribute value of a node, edge, or scope block
///
/// String values starting with `<` are treated as label markup by the
/// renderer and emitted without quoting.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&Table> for AttrValue {
    fn from(value: &Table) -> Self {
        Self::Str(value.to_markup())
    }
}

impl From<Table> for AttrValue {
    fn from(value: Table) -> Self {
        Self::Str(value.to_markup())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// A named node with its ordered attribute list
#[derive(Debug, Clone)]
pub struct DotNode {
    name: String,
    attrs: Vec<(String, AttrValue)>,
}

impl DotNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[(String, AttrValue)] {
        &self.attrs
    }
}

/// A directed edge with its ordered attribute list
#[derive(Debug, Clone)]
pub struct DotEdge {
    from: String,
    to: String,
    attrs: Vec<(String, AttrValue)>,
}

impl DotEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn attrs(&self) -> &[(String, AttrValue)] {
        &self.attrs
    }
}

/// A directed graph document
#[derive(Debug, Clone)]
pub struct DotGraph {
    name: String,
    graph_attrs: Vec<(String, AttrValue)>,
    node_defaults: Vec<(String, AttrValue)>,
    edge_defaults: Vec<(String, AttrValue)>,
    nodes: Vec<DotNode>,
    edges: Vec<DotEdge>,
}

impl DotGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph_attrs: Vec::new(),
            node_defaults: Vec::new(),
            edge_defaults: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a graph-scope attribute
    pub fn add_graph_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.graph_attrs.push((key.into(), value.into()));
    }

    /// Append a default attribute applied to every node
    pub fn add_node_default(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.node_defaults.push((key.into(), value.into()));
    }

    /// Append a default attribute applied to every edge
    pub fn add_edge_default(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.edge_defaults.push((key.into(), value.into()));
    }

    pub fn add_node(&mut self, node: DotNode) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: DotEdge) {
        self.edges.push(edge);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph_attrs(&self) -> &[(String, AttrValue)] {
        &self.graph_attrs
    }

    pub fn node_defaults(&self) -> &[(String, AttrValue)] {
        &self.node_defaults
    }

    pub fn edge_defaults(&self) -> &[(String, AttrValue)] {
        &self.edge_defaults
    }

    pub fn nodes(&self) -> &[DotNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DotEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
