//! Core data models for block execution traces
//!
//! This module defines the data structures of the per-block trace document
//! produced by the replay engine: transactions, their nested call traces, and
//! the opcode events recorded inside each call.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Operand literal marking that an opcode moved value between accounts
pub const TRANSFER_OCCURRED: &str = "doTransfer_true";

/// Execution trace of one block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockTrace {
    /// Hash of the traced block
    #[serde(default)]
    pub block_hash: Option<String>,

    /// Transactions in block order
    pub transactions: Vec<TxTrace>,
}

/// Execution trace of one transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxTrace {
    /// Sender address
    pub from: String,

    /// Destination address; `None` marks a contract creation
    pub to: Option<String>,

    /// Transferred value in wei, as a decimal string
    pub value: String,

    /// Address of the created contract, set for creation transactions
    #[serde(default)]
    pub new_contract: Option<String>,

    /// Nested call trace in execution order
    #[serde(default)]
    pub calls: Vec<CallEntry>,
}

/// One call-trace node: a contract plus the opcode events it executed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallEntry {
    /// Address of the executing contract
    pub contract: String,

    /// Call nesting depth, informational only
    #[serde(default)]
    pub layer: u32,

    /// Recorded opcode events in execution order
    #[serde(default)]
    pub events: Vec<OpcodeEvent>,
}

/// One recorded opcode event with its operand strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpcodeEvent {
    /// Opcode name as recorded by the tracer (e.g. "SLOAD", "CALL")
    pub opcode: String,

    /// Operand strings (addresses or flags); layout depends on the opcode
    #[serde(default)]
    pub operands: Vec<String>,
}

impl TxTrace {
    /// Whether this transaction creates a contract
    pub fn is_creation(&self) -> bool {
        self.to.is_none()
    }

    /// Destination as shown in captions; creations display the `none` sentinel
    pub fn to_display(&self) -> &str {
        self.to.as_deref().unwrap_or("none")
    }

    /// Whether the transferred value is strictly positive
    ///
    /// The value travels as a decimal string; anything that does not parse as
    /// an unsigned integer is a malformed trace.
    pub fn has_positive_value(&self) -> Result<bool> {
        let value: u128 = self.value.parse().map_err(|_| {
            Error::trace(format!(
                "transaction value {:?} is not a decimal integer",
                self.value
            ))
        })?;
        Ok(value > 0)
    }
}

impl OpcodeEvent {
    pub fn new(opcode: impl Into<String>) -> Self {
        Self {
            opcode: opcode.into(),
            operands: Vec::new(),
        }
    }

    pub fn with_operand(mut self, operand: impl Into<String>) -> Self {
        self.operands.push(operand.into());
        self
    }

    /// Operand at `index`, or a trace error naming the opcode
    pub fn operand(&self, index: usize) -> Result<&str> {
        self.operands.get(index).map(String::as_str).ok_or_else(|| {
            Error::trace(format!(
                "{} event carries {} operand(s), expected at least {}",
                self.opcode,
                self.operands.len(),
                index + 1
            ))
        })
    }

    /// Whether the operand at `index` is the transfer-occurred flag
    pub fn transfer_occurred(&self, index: usize) -> Result<bool> {
        Ok(self.operand(index)? == TRANSFER_OCCURRED)
    }
}
