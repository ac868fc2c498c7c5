//! Mock trace source for testing and development
//!
//! Provides a small deterministic block that exercises every access
//! classification rule: a plain value transfer, a token interaction with
//! storage traffic and a value-bearing call, a contract creation, and a
//! self-destruct.

use super::models::{BlockTrace, CallEntry, OpcodeEvent, TxTrace, TRANSFER_OCCURRED};

pub const MOCK_BLOCK_HASH: &str =
    "0x1f1a9048e3ee0b384da43a2e8220bdbb8fc0ac85de9b51b370c6a1e1c6bd60b8";

pub const MOCK_SENDER: &str = "0x7a36010265a40f0fa3d9d061f8a07ef82b3a69c4";
pub const MOCK_RECEIVER: &str = "0x91b29f077e5ad2a8345b03d55ed049c39f85ca46";
pub const MOCK_TRADER: &str = "0x23a982d63c59a45e813d8f4b0ef2737d5f2b3edc";
pub const MOCK_TOKEN: &str = "0x52908400098527886e0f7030069857d2e4169ee7";
pub const MOCK_VAULT: &str = "0x8617e340b3d01fa5f11f306f4090fd50e238070d";
pub const MOCK_DEPLOYER: &str = "0xde709f2102306220921060314715629080e2fb77";
pub const MOCK_FACTORY: &str = "0x27b1fdb04752bbc536007a920d24acb045561c26";
pub const MOCK_CHILD: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
pub const MOCK_MORTAL: &str = "0xdbf03b407c01e7cd3cbea99509d93f8dddc8c6fb";
pub const MOCK_HEIR: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";

/// Generate the sample block trace
pub fn sample_block_trace() -> BlockTrace {
    BlockTrace {
        block_hash: Some(MOCK_BLOCK_HASH.to_string()),
        transactions: vec![
            plain_transfer(),
            token_swap(),
            factory_deployment(),
            contract_teardown(),
        ],
    }
}

/// Value transfer with no code execution
fn plain_transfer() -> TxTrace {
    TxTrace {
        from: MOCK_SENDER.to_string(),
        to: Some(MOCK_RECEIVER.to_string()),
        value: "5000000000000000000".to_string(),
        new_contract: None,
        calls: vec![],
    }
}

/// Token call that reads and writes storage, probes a balance, and forwards
/// value to a vault contract
fn token_swap() -> TxTrace {
    TxTrace {
        from: MOCK_TRADER.to_string(),
        to: Some(MOCK_TOKEN.to_string()),
        value: "0".to_string(),
        new_contract: None,
        calls: vec![
            CallEntry {
                contract: MOCK_TOKEN.to_string(),
                layer: 1,
                events: vec![
                    OpcodeEvent::new("SLOAD"),
                    OpcodeEvent::new("SSTORE"),
                    OpcodeEvent::new("BALANCE").with_operand(MOCK_VAULT),
                    OpcodeEvent::new("CALL")
                        .with_operand(MOCK_VAULT)
                        .with_operand(TRANSFER_OCCURRED),
                ],
            },
            CallEntry {
                contract: MOCK_VAULT.to_string(),
                layer: 2,
                events: vec![OpcodeEvent::new("SLOAD")],
            },
        ],
    }
}

/// Contract creation whose constructor writes storage and deploys a child
fn factory_deployment() -> TxTrace {
    TxTrace {
        from: MOCK_DEPLOYER.to_string(),
        to: None,
        value: "0".to_string(),
        new_contract: Some(MOCK_FACTORY.to_string()),
        calls: vec![CallEntry {
            contract: MOCK_FACTORY.to_string(),
            layer: 1,
            events: vec![
                OpcodeEvent::new("SSTORE"),
                OpcodeEvent::new("CREATE")
                    .with_operand(MOCK_CHILD)
                    .with_operand("doTransfer_false"),
            ],
        }],
    }
}

/// Self-destruct sweeping the contract balance to an heir
fn contract_teardown() -> TxTrace {
    TxTrace {
        from: MOCK_SENDER.to_string(),
        to: Some(MOCK_MORTAL.to_string()),
        value: "0".to_string(),
        new_contract: None,
        calls: vec![CallEntry {
            contract: MOCK_MORTAL.to_string(),
            layer: 1,
            events: vec![OpcodeEvent::new("SELFDESTRUCT").with_operand(MOCK_HEIR)],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_block_shape() {
        let trace = sample_block_trace();
        assert_eq!(trace.transactions.len(), 4);
        assert!(trace.transactions[0].calls.is_empty());
        assert!(trace.transactions[2].is_creation());
        assert_eq!(
            trace.transactions[2].new_contract.as_deref(),
            Some(MOCK_FACTORY)
        );
    }

    #[test]
    fn test_sample_block_round_trips_through_json() {
        let trace = sample_block_trace();
        let json = serde_json::to_string(&trace).unwrap();
        let parsed: BlockTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.transactions.len(), trace.transactions.len());
        assert_eq!(parsed.transactions[1].calls[0].events.len(), 4);
    }
}
