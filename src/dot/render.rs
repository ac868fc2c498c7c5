//! Deterministic DOT text rendering
//!
//! Serializes a [`DotGraph`] into Graphviz DOT text. Output is a pure
//! function of the model: blocks appear in a fixed order and attribute lists
//! render in insertion order.

use super::model::{AttrValue, DotGraph};

impl DotGraph {
    /// Render the graph as DOT text
    pub fn to_dot(&self) -> String {
        render(self)
    }
}

/// Render `graph` as a DOT document
pub fn render(graph: &DotGraph) -> String {
    let mut dot = format!("digraph {} {{\n", graph.name());

    render_scope_block(&mut dot, "graph", graph.graph_attrs());
    render_scope_block(&mut dot, "node", graph.node_defaults());
    render_scope_block(&mut dot, "edge", graph.edge_defaults());

    for node in graph.nodes() {
        if node.attrs().is_empty() {
            dot.push_str(&format!("\t{};\n", node.name()));
        } else {
            dot.push_str(&format!(
                "\t{} [{}];\n",
                node.name(),
                render_attrs(node.attrs())
            ));
        }
    }

    for edge in graph.edges() {
        if edge.attrs().is_empty() {
            dot.push_str(&format!("\t{} -> {};\n", edge.from(), edge.to()));
        } else {
            dot.push_str(&format!(
                "\t{} -> {} [{}];\n",
                edge.from(),
                edge.to(),
                render_attrs(edge.attrs())
            ));
        }
    }

    dot.push_str("}\n");
    dot
}

/// Render one scope-level attribute block, or nothing when it is empty
fn render_scope_block(dot: &mut String, scope: &str, attrs: &[(String, AttrValue)]) {
    if attrs.is_empty() {
        return;
    }
    dot.push_str(&format!("\t{} [{}];\n", scope, render_attrs(attrs)));
}

fn render_attrs(attrs: &[(String, AttrValue)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{}={}", key, render_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote an attribute value
///
/// Integers render bare. Strings starting with `<` are label markup and are
/// wrapped in `<...>` instead of quotes; all other strings are quoted
/// verbatim.
fn render_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Int(i) => i.to_string(),
        AttrValue::Str(s) if s.starts_with('<') => format!("<{}>", s),
        AttrValue::Str(s) => format!("\"{}\"", s),
    }
}
