//! Opcode classification
//!
//! Maps a call entry's recorded opcode events onto account access records.
//! The set of opcodes with access significance is closed; any other opcode in
//! the trace is ignored.

use crate::error::Result;
use crate::trace::CallEntry;

use super::record::{AccessRecord, EdgeAccumulator};

/// Opcodes with access significance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOpcode {
    Balance,
    SelfBalance,
    Sload,
    Sstore,
    Create,
    Create2,
    Call,
    SelfDestruct,
}

impl KeyOpcode {
    /// Parse a tracer opcode name; `None` for opcodes without access effects
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "BALANCE" => Some(Self::Balance),
            "SELFBALANCE" => Some(Self::SelfBalance),
            "SLOAD" => Some(Self::Sload),
            "SSTORE" => Some(Self::Sstore),
            "CREATE" => Some(Self::Create),
            "CREATE2" => Some(Self::Create2),
            "CALL" => Some(Self::Call),
            "SELFDESTRUCT" => Some(Self::SelfDestruct),
            _ => None,
        }
    }
}

/// Fold one call entry's opcode events into the accumulator
///
/// Operand effects land on the operand account directly. Storage traffic and
/// value movement instead raise local read/write flags that are resolved
/// against the entry's own contract at the end; an entry with neither flag
/// set contributes nothing for itself.
pub fn classify_entry(entry: &CallEntry, records: &mut EdgeAccumulator) -> Result<()> {
    let mut do_read = false;
    let mut do_write = false;

    for event in &entry.events {
        let Some(opcode) = KeyOpcode::parse(&event.opcode) else {
            continue;
        };
        match opcode {
            KeyOpcode::Balance | KeyOpcode::SelfBalance => {
                records.observe(event.operand(0)?, AccessRecord::READ);
            }
            KeyOpcode::Sload => do_read = true,
            KeyOpcode::Sstore => do_write = true,
            KeyOpcode::Create | KeyOpcode::Create2 => {
                records.observe(event.operand(0)?, AccessRecord::CREATE);
                if event.transfer_occurred(1)? {
                    do_read = true;
                    do_write = true;
                }
            }
            KeyOpcode::Call => {
                if event.transfer_occurred(1)? {
                    records.observe(event.operand(0)?, AccessRecord::READ_WRITE);
                    do_read = true;
                    do_write = true;
                }
            }
            KeyOpcode::SelfDestruct => {
                records.observe(event.operand(0)?, AccessRecord::READ_WRITE);
                do_read = true;
                do_write = true;
            }
        }
    }

    if do_read || do_write {
        records.observe(
            &entry.contract,
            AccessRecord {
                read: do_read,
                write: do_write,
                create: false,
            },
        );
    }

    Ok(())
}
