//! Shared node styling for rendered graphs
//!
//! Transaction nodes carry a two-row table caption; account nodes a plain
//! grey record. Both graph builders go through these constructors so the two
//! entry points render identically.

use crate::config::GraphConfig;
use crate::dot::{DotGraph, DotNode, Table, TableCell, TableRow};

const FONT_NAME: &str = "Courier New";

/// Seed `graph` with the graph-scope attributes from configuration
pub(super) fn apply_graph_attrs(graph: &mut DotGraph, config: &GraphConfig) {
    graph.add_graph_attr("fontsize", config.fontsize);
    graph.add_graph_attr("labelloc", "t");
    graph.add_graph_attr("label", "");
    graph.add_graph_attr("splines", bool_attr(config.splines));
    graph.add_graph_attr("overlap", bool_attr(config.overlap));
    graph.add_graph_attr("rankdir", config.rankdir.as_str());
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Transaction node with its two-row table caption
pub(super) fn transaction_node(
    name: &str,
    title: &str,
    from: &str,
    to: &str,
    value: &str,
) -> DotNode {
    let mut table = Table::new();
    table.add_attr("border", "0");
    table.add_attr("cellborder", "0");
    table.add_attr("cellpadding", "3");
    table.add_attr("bgcolor", "white");

    let mut title_cell = TableCell::new(title);
    title_cell.add_attr("bgcolor", "black");
    title_cell.add_attr("colspan", "2");
    title_cell.add_font_attr("color", "white");
    let mut title_row = TableRow::new();
    title_row.add_cell(title_cell);
    table.add_row(title_row);

    let mut info_cell = TableCell::new(format!(
        "<b>From: </b>{}<br/><b>To: </b>{}<br/><b>Value: </b>{}",
        from, to, value
    ));
    info_cell.add_attr("bgcolor", "white");
    info_cell.add_attr("colspan", "2");
    info_cell.add_font_attr("color", "black");
    let mut info_row = TableRow::new();
    info_row.add_cell(info_cell);
    table.add_row(info_row);

    DotNode::new(name)
        .with_attr("style", "filled")
        .with_attr("shape", "Mrecord")
        .with_attr("penwidth", 1)
        .with_attr("fillcolor", "white")
        .with_attr("fontname", FONT_NAME)
        .with_attr("label", table)
}

/// Account node labelled with its raw address
pub(super) fn account_node(name: &str, address: &str) -> DotNode {
    DotNode::new(name)
        .with_attr("style", "filled")
        .with_attr("shape", "Mrecord")
        .with_attr("penwidth", 1)
        .with_attr("fillcolor", "grey")
        .with_attr("fontname", FONT_NAME)
        .with_attr("label", format!("Account Address: {}", address))
}
