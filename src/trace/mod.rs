//! Trace module - Block execution trace input
//!
//! This module provides a unified interface over where a block trace comes
//! from: a JSON document written by the replay engine, or the built-in mock
//! block used for testing and demos.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub mod mock;
pub mod models;

pub use models::*;

/// Source of block execution traces
pub trait TraceSource {
    /// Load the block trace
    fn block_trace(&self) -> Result<BlockTrace>;
}

/// Reads a block trace from a JSON document on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TraceSource for FileSource {
    fn block_trace(&self) -> Result<BlockTrace> {
        tracing::debug!("Reading block trace from {:?}", self.path);
        let contents = std::fs::read_to_string(&self.path)?;
        let trace: BlockTrace = serde_json::from_str(&contents)?;
        Ok(trace)
    }
}

/// Serves the built-in sample block
pub struct MockSource;

impl TraceSource for MockSource {
    fn block_trace(&self) -> Result<BlockTrace> {
        tracing::debug!("Using mock block trace");
        Ok(mock::sample_block_trace())
    }
}

/// Create a trace source based on CLI arguments
pub fn create_trace_source(
    source_type: crate::cli::TraceSourceType,
    path: Option<&Path>,
) -> Result<Box<dyn TraceSource>> {
    match source_type {
        crate::cli::TraceSourceType::File => {
            let path = path.ok_or_else(|| {
                Error::custom("a trace file path is required when the source is a file")
            })?;
            Ok(Box::new(FileSource::new(path)))
        }
        crate::cli::TraceSourceType::Mock => Ok(Box::new(MockSource)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source() {
        let source = MockSource;
        let trace = source.block_trace().unwrap();
        assert!(!trace.transactions.is_empty());
    }

    #[test]
    fn test_file_source_requires_path() {
        let result = create_trace_source(crate::cli::TraceSourceType::File, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_source_reads_json() {
        let dir = std::env::temp_dir().join("evm-access-graph-trace-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("block.json");
        let trace = mock::sample_block_trace();
        std::fs::write(&path, serde_json::to_string(&trace).unwrap()).unwrap();

        let source = FileSource::new(&path);
        let loaded = source.block_trace().unwrap();
        assert_eq!(loaded.transactions.len(), trace.transactions.len());

        std::fs::remove_file(&path).ok();
    }
}
