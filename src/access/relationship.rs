//! Relationship graph ingestion and filtering
//!
//! A relationship graph arrives pre-built from the replay engine as three
//! ordered lists: transaction nodes, account nodes, and labelled edges. This
//! module loads it into an indexed petgraph, derives the shared-account
//! subgraph, and renders either form through the same DOT model as the
//! invoke path.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use petgraph::prelude::EdgeRef;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::dot::{DotEdge, DotGraph};
use crate::error::{Error, Result};

use super::style;

/// Operation label carried by a relationship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Read,
    Write,
    Create,
    #[serde(rename = "Read & Write")]
    ReadWrite,
    SelfDestruct,
    Transfer,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "Read",
            Operation::Write => "Write",
            Operation::Create => "Create",
            Operation::ReadWrite => "Read & Write",
            Operation::SelfDestruct => "SelfDestruct",
            Operation::Transfer => "Transfer",
        }
    }

    /// Edge color in the rendered graph
    pub fn color(&self) -> &'static str {
        match self {
            Operation::Read => "green",
            Operation::Write => "cyan",
            Operation::Create => "pink",
            Operation::ReadWrite => "blue",
            Operation::SelfDestruct => "red",
            Operation::Transfer => "black",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction node of a relationship graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxNode {
    pub id: u64,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
}

/// Account node of a relationship graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountNode {
    pub address: String,
}

/// Edge of a relationship graph: transaction `tx` performed `op` on `account`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationEdge {
    pub tx: u64,
    pub account: String,
    pub op: Operation,
}

/// Wire form of a pre-built relationship graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipInput {
    pub transactions: Vec<TxNode>,
    pub accounts: Vec<AccountNode>,
    pub edges: Vec<RelationEdge>,
}

impl RelationshipInput {
    /// Load a relationship graph document from disk
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        tracing::debug!("Reading relationship graph from {:?}", path);
        let contents = std::fs::read_to_string(&path)?;
        let input: RelationshipInput = serde_json::from_str(&contents)?;
        Ok(input)
    }
}

/// Node weight inside the indexed graph
#[derive(Debug, Clone)]
enum RelNode {
    Transaction(TxNode),
    Account(AccountNode),
}

/// Indexed relationship graph
///
/// Transaction nodes are inserted before account nodes, each list in input
/// order, so walking node indices recovers the input ordering per kind.
pub struct RelationshipGraph {
    graph: StableGraph<RelNode, Operation>,
    tx_index: HashMap<u64, NodeIndex>,
    account_index: HashMap<String, NodeIndex>,
}

impl RelationshipGraph {
    /// Index a wire-form relationship graph
    ///
    /// Duplicate ids or addresses and edges naming unknown endpoints are
    /// malformed input.
    pub fn from_input(input: RelationshipInput) -> Result<Self> {
        let mut graph = StableGraph::new();
        let mut tx_index = HashMap::new();
        let mut account_index = HashMap::new();

        for tx in input.transactions {
            let id = tx.id;
            let node = graph.add_node(RelNode::Transaction(tx));
            if tx_index.insert(id, node).is_some() {
                return Err(Error::relationship(format!(
                    "duplicate transaction id {}",
                    id
                )));
            }
        }
        for account in input.accounts {
            let address = account.address.clone();
            let node = graph.add_node(RelNode::Account(account));
            if account_index.insert(address.clone(), node).is_some() {
                return Err(Error::relationship(format!(
                    "duplicate account node {}",
                    address
                )));
            }
        }
        for edge in input.edges {
            let from = *tx_index.get(&edge.tx).ok_or_else(|| {
                Error::relationship(format!("edge references unknown transaction {}", edge.tx))
            })?;
            let to = *account_index.get(&edge.account).ok_or_else(|| {
                Error::relationship(format!("edge references unknown account {}", edge.account))
            })?;
            graph.add_edge(from, to, edge.op);
        }

        Ok(Self {
            graph,
            tx_index,
            account_index,
        })
    }

    pub fn transaction_count(&self) -> usize {
        self.tx_index.len()
    }

    pub fn account_count(&self) -> usize {
        self.account_index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Transaction nodes in input order
    fn transactions(&self) -> impl Iterator<Item = &TxNode> {
        self.graph.node_indices().filter_map(|index| {
            match self.graph.node_weight(index) {
                Some(RelNode::Transaction(tx)) => Some(tx),
                _ => None,
            }
        })
    }

    /// Account nodes in input order
    fn accounts(&self) -> impl Iterator<Item = &AccountNode> {
        self.graph.node_indices().filter_map(|index| {
            match self.graph.node_weight(index) {
                Some(RelNode::Account(account)) => Some(account),
                _ => None,
            }
        })
    }

    /// Wire-form edges in insertion order
    fn edges(&self) -> Vec<RelationEdge> {
        let mut edges = Vec::new();
        for edge_index in self.graph.edge_indices() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge_index)
                && let Some(RelNode::Transaction(tx)) = self.graph.node_weight(from)
                && let Some(RelNode::Account(account)) = self.graph.node_weight(to)
                && let Some(op) = self.graph.edge_weight(edge_index)
            {
                edges.push(RelationEdge {
                    tx: tx.id,
                    account: account.address.clone(),
                    op: *op,
                });
            }
        }
        edges
    }

    /// Distinct transactions with an edge into `node`
    fn tx_membership(&self, node: NodeIndex) -> HashSet<NodeIndex> {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .map(|edge| edge.source())
            .collect()
    }

    /// Subgraph of accounts referenced by two or more distinct transactions
    ///
    /// Transaction nodes are kept unchanged; only edges into retained
    /// accounts survive. `self` is left untouched.
    pub fn shared_accounts(&self) -> RelationshipGraph {
        let shared: HashSet<String> = self
            .graph
            .node_indices()
            .filter_map(|index| match self.graph.node_weight(index) {
                Some(RelNode::Account(account)) if self.tx_membership(index).len() >= 2 => {
                    Some(account.address.clone())
                }
                _ => None,
            })
            .collect();

        let mut graph = StableGraph::new();
        let mut tx_index = HashMap::new();
        let mut account_index = HashMap::new();

        for tx in self.transactions() {
            let id = tx.id;
            let node = graph.add_node(RelNode::Transaction(tx.clone()));
            tx_index.insert(id, node);
        }
        for account in self.accounts() {
            if shared.contains(&account.address) {
                let address = account.address.clone();
                let node = graph.add_node(RelNode::Account(account.clone()));
                account_index.insert(address, node);
            }
        }
        for edge in self.edges() {
            if let Some(&from) = tx_index.get(&edge.tx)
                && let Some(&to) = account_index.get(&edge.account)
            {
                graph.add_edge(from, to, edge.op);
            }
        }

        RelationshipGraph {
            graph,
            tx_index,
            account_index,
        }
    }

    /// Render to the DOT model
    pub fn to_dot_graph(&self, config: &GraphConfig) -> DotGraph {
        let mut dot = DotGraph::new(config.name.clone());
        style::apply_graph_attrs(&mut dot, config);
        dot.add_graph_attr("ordering", "in");

        for tx in self.transactions() {
            dot.add_node(style::transaction_node(
                &format!("port_tx{}", tx.id),
                &format!("Tx_{}", tx.id),
                &tx.from,
                tx.to.as_deref().unwrap_or("none"),
                &tx.value,
            ));
        }
        for account in self.accounts() {
            dot.add_node(style::account_node(
                &format!("port_account{}", account.address),
                &account.address,
            ));
        }
        for edge in self.edges() {
            dot.add_edge(
                DotEdge::new(
                    format!("port_tx{}", edge.tx),
                    format!("port_account{}", edge.account),
                )
                .with_attr("label", edge.op.as_str())
                .with_attr("color", edge.op.color()),
            );
        }
        dot
    }
}

/// Build the DOT graph for a relationship document, optionally keeping only
/// accounts shared between transactions
pub fn build_relationship_graph(
    input: RelationshipInput,
    shared_only: bool,
    config: &GraphConfig,
) -> Result<DotGraph> {
    let graph = RelationshipGraph::from_input(input)?;
    if shared_only {
        Ok(graph.shared_accounts().to_dot_graph(config))
    } else {
        Ok(graph.to_dot_graph(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: u64, from: &str, to: &str) -> TxNode {
        TxNode {
            id,
            from: from.to_string(),
            to: Some(to.to_string()),
            value: "0".to_string(),
        }
    }

    fn account(address: &str) -> AccountNode {
        AccountNode {
            address: address.to_string(),
        }
    }

    fn edge(tx: u64, account: &str, op: Operation) -> RelationEdge {
        RelationEdge {
            tx,
            account: account.to_string(),
            op,
        }
    }

    fn sample_input() -> RelationshipInput {
        RelationshipInput {
            transactions: vec![tx(0, "0xA", "0xB"), tx(1, "0xC", "0xB"), tx(2, "0xA", "0xE")],
            accounts: vec![account("0xB"), account("0xD"), account("0xE")],
            edges: vec![
                edge(0, "0xB", Operation::ReadWrite),
                edge(0, "0xD", Operation::Read),
                edge(1, "0xB", Operation::Write),
                edge(2, "0xE", Operation::Create),
                edge(2, "0xB", Operation::Transfer),
            ],
        }
    }

    #[test]
    fn test_operation_labels_and_colors() {
        assert_eq!(Operation::Read.color(), "green");
        assert_eq!(Operation::Write.color(), "cyan");
        assert_eq!(Operation::Create.color(), "pink");
        assert_eq!(Operation::ReadWrite.color(), "blue");
        assert_eq!(Operation::SelfDestruct.color(), "red");
        assert_eq!(Operation::Transfer.color(), "black");
        assert_eq!(Operation::ReadWrite.as_str(), "Read & Write");
    }

    #[test]
    fn test_operation_wire_names() {
        let op: Operation = serde_json::from_str("\"Read & Write\"").unwrap();
        assert_eq!(op, Operation::ReadWrite);
        let op: Operation = serde_json::from_str("\"SelfDestruct\"").unwrap();
        assert_eq!(op, Operation::SelfDestruct);
        assert!(serde_json::from_str::<Operation>("\"Touch\"").is_err());
        assert_eq!(
            serde_json::to_string(&Operation::ReadWrite).unwrap(),
            "\"Read & Write\""
        );
    }

    #[test]
    fn test_from_input_counts() {
        let graph = RelationshipGraph::from_input(sample_input()).unwrap();
        assert_eq!(graph.transaction_count(), 3);
        assert_eq!(graph.account_count(), 3);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_from_input_rejects_duplicates() {
        let mut input = sample_input();
        input.accounts.push(account("0xB"));
        assert!(RelationshipGraph::from_input(input).is_err());

        let mut input = sample_input();
        input.transactions.push(tx(1, "0xF", "0xB"));
        assert!(RelationshipGraph::from_input(input).is_err());
    }

    #[test]
    fn test_from_input_rejects_dangling_edges() {
        let mut input = sample_input();
        input.edges.push(edge(9, "0xB", Operation::Read));
        assert!(RelationshipGraph::from_input(input).is_err());

        let mut input = sample_input();
        input.edges.push(edge(0, "0xF", Operation::Read));
        assert!(RelationshipGraph::from_input(input).is_err());
    }

    #[test]
    fn test_to_dot_graph_layout() {
        let graph = RelationshipGraph::from_input(sample_input()).unwrap();
        let dot = graph.to_dot_graph(&GraphConfig::default()).to_dot();

        assert!(dot.contains("ordering=\"in\""));
        assert!(dot.contains("port_tx0 [style=\"filled\""));
        assert!(dot.contains("<font color=\"white\">Tx_0</font>"));
        assert!(dot.contains("port_account0xB [style=\"filled\""));
        assert!(dot.contains("label=\"Account Address: 0xB\""));
        assert!(dot.contains("port_tx0 -> port_account0xB [label=\"Read & Write\" color=\"blue\"];"));
        assert!(dot.contains("port_tx1 -> port_account0xB [label=\"Write\" color=\"cyan\"];"));
        assert!(dot.contains("port_tx2 -> port_account0xE [label=\"Create\" color=\"pink\"];"));
        assert!(dot.contains("port_tx2 -> port_account0xB [label=\"Transfer\" color=\"black\"];"));

        // Nodes keep input order: transactions first, then accounts
        let tx0 = dot.find("port_tx0 [").unwrap();
        let tx2 = dot.find("port_tx2 [").unwrap();
        let acct_b = dot.find("port_account0xB [").unwrap();
        assert!(tx0 < tx2 && tx2 < acct_b);
    }

    #[test]
    fn test_shared_accounts_filter() {
        let graph = RelationshipGraph::from_input(sample_input()).unwrap();
        let filtered = graph.shared_accounts();

        // 0xB is shared by tx0, tx1, and tx2; 0xD and 0xE are private
        assert_eq!(filtered.transaction_count(), 3);
        assert_eq!(filtered.account_count(), 1);
        assert_eq!(filtered.edge_count(), 3);

        // Source graph is untouched
        assert_eq!(graph.account_count(), 3);
        assert_eq!(graph.edge_count(), 5);

        let dot = filtered.to_dot_graph(&GraphConfig::default()).to_dot();
        assert!(dot.contains("port_account0xB"));
        assert!(!dot.contains("port_account0xD"));
        assert!(!dot.contains("port_account0xE"));
        // Private-account edges vanish with their accounts
        assert!(!dot.contains("label=\"Create\""));
    }

    #[test]
    fn test_shared_filter_counts_distinct_transactions() {
        // Two edges from the same transaction do not make an account shared
        let input = RelationshipInput {
            transactions: vec![tx(0, "0xA", "0xB")],
            accounts: vec![account("0xB")],
            edges: vec![
                edge(0, "0xB", Operation::Read),
                edge(0, "0xB", Operation::Write),
            ],
        };
        let graph = RelationshipGraph::from_input(input).unwrap();
        let filtered = graph.shared_accounts();
        assert_eq!(filtered.account_count(), 0);
        assert_eq!(filtered.edge_count(), 0);
    }

    #[test]
    fn test_shared_filter_is_idempotent() {
        let graph = RelationshipGraph::from_input(sample_input()).unwrap();
        let once = graph.shared_accounts();
        let twice = once.shared_accounts();
        assert_eq!(once.account_count(), twice.account_count());
        assert_eq!(once.edge_count(), twice.edge_count());
        assert_eq!(
            once.to_dot_graph(&GraphConfig::default()).to_dot(),
            twice.to_dot_graph(&GraphConfig::default()).to_dot()
        );
    }

    #[test]
    fn test_parse_relationship_document() {
        let json = r#"{
            "transactions": [
                { "id": 0, "from": "0xA", "to": "0xB", "value": "5" },
                { "id": 1, "from": "0xC", "to": null, "value": "0" }
            ],
            "accounts": [ { "address": "0xB" } ],
            "edges": [ { "tx": 0, "account": "0xB", "op": "Transfer" } ]
        }"#;
        let input: RelationshipInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.transactions.len(), 2);
        assert!(input.transactions[1].to.is_none());
        assert_eq!(input.edges[0].op, Operation::Transfer);

        let dot = build_relationship_graph(input, false, &GraphConfig::default()).unwrap();
        assert!(dot.to_dot().contains("<b>To: </b>none<br/>"));
    }
}
