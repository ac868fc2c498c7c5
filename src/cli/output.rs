//! Output formatting module
//!
//! This module handles formatting block trace summaries for inspection
//! without going through the graph pipeline.

use crate::error::Result;
use crate::trace::BlockTrace;
use serde_json::json;
use std::io::Write;

/// Output a block trace summary as JSON
pub fn output_json(w: &mut impl Write, trace: &BlockTrace) -> Result<()> {
    let output = json!({
        "summary": {
            "block_hash": trace.block_hash,
            "total_transactions": trace.transactions.len(),
            "total_calls": trace
                .transactions
                .iter()
                .map(|tx| tx.calls.len())
                .sum::<usize>(),
        },
        "transactions": trace
            .transactions
            .iter()
            .enumerate()
            .map(|(index, tx)| {
                json!({
                    "index": index,
                    "from": tx.from,
                    "to": tx.to,
                    "value": tx.value,
                    "new_contract": tx.new_contract,
                    "calls": tx.calls.len(),
                })
            })
            .collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?;
    Ok(())
}

/// Output a block trace summary as a text table
pub fn output_table(w: &mut impl Write, trace: &BlockTrace) -> Result<()> {
    writeln!(w, "Block Execution Trace")?;
    writeln!(w, "{}", "=".repeat(70))?;
    if let Some(hash) = &trace.block_hash {
        writeln!(w, "Block: {}", hash)?;
    }
    writeln!(w, "Transactions: {}", trace.transactions.len())?;
    writeln!(w)?;

    for (index, tx) in trace.transactions.iter().enumerate() {
        writeln!(w, "Transaction {}", index)?;
        writeln!(w, "  From:  {}", tx.from)?;
        writeln!(w, "  To:    {}", tx.to_display())?;
        writeln!(w, "  Value: {}", tx.value)?;
        if let Some(contract) = &tx.new_contract {
            writeln!(w, "  New contract: {}", contract)?;
        }
        for call in &tx.calls {
            writeln!(w, "  Call (layer {}) on {}", call.layer, call.contract)?;
            for event in &call.events {
                if event.operands.is_empty() {
                    writeln!(w, "    {}", event.opcode)?;
                } else {
                    writeln!(w, "    {} {}", event.opcode, event.operands.join(" "))?;
                }
            }
        }
        writeln!(w)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::mock;

    #[test]
    fn test_output_json() {
        let trace = mock::sample_block_trace();
        let mut buffer = Vec::new();
        output_json(&mut buffer, &trace).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["summary"]["total_transactions"], 4);
        assert_eq!(parsed["transactions"][2]["to"], serde_json::Value::Null);
        assert_eq!(
            parsed["transactions"][2]["new_contract"],
            mock::MOCK_FACTORY
        );
    }

    #[test]
    fn test_output_table() {
        let trace = mock::sample_block_trace();
        let mut buffer = Vec::new();
        output_table(&mut buffer, &trace).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Transactions: 4"));
        assert!(text.contains("Transaction 0"));
        assert!(text.contains("To:    none"));
        assert!(text.contains("SELFDESTRUCT"));
        assert!(text.contains(mock::MOCK_HEIR));
    }
}
