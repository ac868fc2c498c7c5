//! Access records and their per-transaction accumulation
//!
//! An [`AccessRecord`] is the three access bits a transaction can set on an
//! account. Records for one transaction collect in an [`EdgeAccumulator`],
//! which merges repeat observations and remembers first-observation order so
//! edge emission is deterministic.

use std::collections::HashMap;
use std::fmt;

/// What a transaction did to one account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessRecord {
    pub read: bool,
    pub write: bool,
    pub create: bool,
}

impl AccessRecord {
    pub const READ: Self = Self {
        read: true,
        write: false,
        create: false,
    };

    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
        create: false,
    };

    pub const CREATE: Self = Self {
        read: false,
        write: false,
        create: true,
    };

    /// OR-merge another observation into this record; bits are only ever set
    pub fn merge(&mut self, other: Self) {
        self.read |= other.read;
        self.write |= other.write;
        self.create |= other.create;
    }

    /// Whether no access bit is set
    pub fn is_empty(&self) -> bool {
        !(self.read || self.write || self.create)
    }

    /// Resolve the record into its edge label kind
    ///
    /// Create wins over everything, then Read & Write, then the single bits.
    /// An empty record has no kind.
    pub fn resolve(&self) -> Option<AccessKind> {
        if self.create {
            Some(AccessKind::Create)
        } else if self.read && self.write {
            Some(AccessKind::ReadWrite)
        } else if self.write {
            Some(AccessKind::Write)
        } else if self.read {
            Some(AccessKind::Read)
        } else {
            None
        }
    }
}

/// Resolved access label of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Create,
    ReadWrite,
    Write,
    Read,
}

impl AccessKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessKind::Create => "Create",
            AccessKind::ReadWrite => "Read & Write",
            AccessKind::Write => "Write",
            AccessKind::Read => "Read",
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-transaction accumulation of account accesses
#[derive(Debug, Default)]
pub struct EdgeAccumulator {
    index: HashMap<String, usize>,
    records: Vec<(String, AccessRecord)>,
}

impl EdgeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// OR-merge an observation for `address`
    ///
    /// An observation with no bits set never creates an entry, so every
    /// stored record resolves to a label.
    pub fn observe(&mut self, address: &str, record: AccessRecord) {
        if record.is_empty() {
            return;
        }
        match self.index.get(address) {
            Some(&position) => self.records[position].1.merge(record),
            None => {
                self.index.insert(address.to_string(), self.records.len());
                self.records.push((address.to_string(), record));
            }
        }
    }

    /// Record accumulated for `address`, if any
    pub fn get(&self, address: &str) -> Option<AccessRecord> {
        self.index.get(address).map(|&position| self.records[position].1)
    }

    /// Accumulated records in first-observation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, AccessRecord)> {
        self.records
            .iter()
            .map(|(address, record)| (address.as_str(), *record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
