//! Invoke graph construction
//!
//! Builds the transaction/account access graph for one block trace. All
//! identity and accumulation state lives on the builder, so repeated builds
//! never share account ids.

use crate::config::GraphConfig;
use crate::dot::{DotEdge, DotGraph};
use crate::error::{Error, Result};
use crate::trace::{BlockTrace, TxTrace};

use super::classify::classify_entry;
use super::record::{AccessRecord, EdgeAccumulator};
use super::registry::AccountRegistry;
use super::style;

/// One-shot builder for a block's access graph
pub struct InvokeGraphBuilder {
    registry: AccountRegistry,
    graph: DotGraph,
}

impl InvokeGraphBuilder {
    /// Fresh builder rendering with the given graph attributes
    pub fn new(config: &GraphConfig) -> Self {
        let mut graph = DotGraph::new(config.name.clone());
        style::apply_graph_attrs(&mut graph, config);
        Self {
            registry: AccountRegistry::new(),
            graph,
        }
    }

    /// Consume the builder, producing the graph for `trace`
    pub fn build(mut self, trace: &BlockTrace) -> Result<DotGraph> {
        for (index, tx) in trace.transactions.iter().enumerate() {
            self.add_transaction(index, tx)?;
        }
        Ok(self.graph)
    }

    fn add_transaction(&mut self, index: usize, tx: &TxTrace) -> Result<()> {
        let tx_port = format!("port_tx{}", index);
        self.graph.add_node(style::transaction_node(
            &tx_port,
            &format!("TX_{}", index),
            &tx.from,
            tx.to_display(),
            &tx.value,
        ));

        let mut records = EdgeAccumulator::new();

        // The sender's nonce and balance are always touched.
        records.observe(&tx.from, AccessRecord::READ_WRITE);

        match &tx.to {
            None => {
                let created = tx.new_contract.as_deref().ok_or_else(|| {
                    Error::trace(format!(
                        "creation transaction {} has no new_contract address",
                        index
                    ))
                })?;
                records.observe(created, AccessRecord::CREATE);
            }
            Some(to) => {
                if tx.has_positive_value()? {
                    records.observe(to, AccessRecord::READ_WRITE);
                }
            }
        }

        for entry in &tx.calls {
            classify_entry(entry, &mut records)?;
        }

        tracing::debug!(
            "Transaction {} touched {} account(s)",
            index,
            records.len()
        );

        for (address, record) in records.iter() {
            let Some(kind) = record.resolve() else {
                tracing::error!(
                    "Account {} reached edge emission with no access bits set, skipping",
                    address
                );
                continue;
            };
            let account_port = self.account_port(address);
            self.graph.add_edge(
                DotEdge::new(&tx_port, account_port)
                    .with_attr("label", format!("[{}]", kind))
                    .with_attr("color", "black"),
            );
        }

        Ok(())
    }

    /// Node identifier for `address`, adding its account node on first sight
    fn account_port(&mut self, address: &str) -> String {
        if let Some(id) = self.registry.id_of(address) {
            return format!("port_{}", id);
        }
        let id = self.registry.register(address);
        let name = format!("port_{}", id);
        self.graph.add_node(style::account_node(&name, address));
        name
    }
}

/// Build the access graph for one block trace
pub fn build_invoke_graph(trace: &BlockTrace, config: &GraphConfig) -> Result<DotGraph> {
    InvokeGraphBuilder::new(config).build(trace)
}
