//! CLI module
//!
//! This module defines the command-line interface using clap and dispatches
//! to the command implementations.

use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// Render per-block execution traces as transaction/account access graphs
#[derive(Parser, Debug)]
#[command(name = "evm-access-graph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "EVM_ACCESS_GRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the access graph of a block execution trace
    Invoke {
        /// Path to the block trace JSON document
        trace: Option<PathBuf>,

        /// Trace source to use
        #[arg(short, long, value_enum, default_value = "file")]
        source: TraceSourceType,

        /// Output format
        #[arg(short, long, value_enum, default_value = "dot")]
        output: OutputFormat,

        /// Write the artifact here instead of stdout; a directory gets a
        /// timestamped file inside it
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the artifact into the configured output directory
        #[arg(long, conflicts_with = "out")]
        save: bool,

        /// Graph name, overriding the configuration
        #[arg(long)]
        name: Option<String>,
    },

    /// Render a pre-built relationship graph
    Relationship {
        /// Path to the relationship graph JSON document
        graph: PathBuf,

        /// Keep only accounts referenced by two or more transactions
        #[arg(long)]
        shared_only: bool,

        /// Write the artifact here instead of stdout; a directory gets a
        /// timestamped file inside it
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the artifact into the configured output directory
        #[arg(long, conflicts_with = "out")]
        save: bool,

        /// Graph name, overriding the configuration
        #[arg(long)]
        name: Option<String>,
    },
}

/// Trace source types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceSourceType {
    /// Block trace JSON document on disk
    File,
    /// Built-in sample block
    Mock,
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT document
    Dot,
    /// JSON trace summary
    Json,
    /// Plain text table
    Table,
}

/// Execute the parsed CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Invoke { .. } => commands::invoke::execute(args, config),
        Commands::Relationship { .. } => commands::relationship::execute(args, config),
    }
}
