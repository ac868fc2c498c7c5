//! EVM Access Graph
//!
//! A CLI tool that renders per-block EVM execution traces as bipartite
//! dependency graphs between transactions and the accounts they touch.
//!
//! This library provides functionality for:
//! - Loading block execution traces and relationship graphs from JSON
//! - Classifying opcode events into per-account access records
//! - Building attributed directed graphs with rich table captions
//! - Deterministic DOT serialization for an external layout renderer
//! - Filtering relationship graphs down to accounts shared between transactions

pub mod access;
pub mod cli;
pub mod config;
pub mod dot;
pub mod error;
pub mod trace;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
