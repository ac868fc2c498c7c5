//! CLI command implementations
//!
//! This module contains the implementation of each CLI command.

use crate::access::{build_invoke_graph, build_relationship_graph, RelationshipInput};
use crate::cli::{output, Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::trace::create_trace_source;
use crate::Config;
use std::path::PathBuf;

/// Resolve where the rendered artifact goes
///
/// An explicit `--out` wins; pointing it at an existing directory drops a
/// timestamped file inside. `--save` uses the configured output directory,
/// creating it when missing. Neither set means stdout.
fn artifact_target(out: Option<PathBuf>, save: bool, config: &Config) -> Result<Option<PathBuf>> {
    if let Some(path) = out {
        if path.is_dir() {
            return Ok(Some(path.join(timestamped_name())));
        }
        return Ok(Some(path));
    }
    if save {
        let directory = &config.output.directory;
        std::fs::create_dir_all(directory)?;
        return Ok(Some(directory.join(timestamped_name())));
    }
    Ok(None)
}

fn timestamped_name() -> String {
    format!("{}.gv", chrono::Utc::now().format("%Y%m%d%H%M%S"))
}

/// Print the DOT text or write it to the resolved target
fn emit(dot: &str, target: Option<PathBuf>) -> Result<()> {
    match target {
        None => print!("{}", dot),
        Some(path) => {
            std::fs::write(&path, dot)?;
            tracing::info!("Graph written to {:?}", path);
        }
    }
    Ok(())
}

/// Invoke command - build the access graph of a block trace
pub mod invoke {
    use super::*;

    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let Commands::Invoke {
            trace,
            source,
            output: format,
            out,
            save,
            name,
        } = args.command
        else {
            return Err(Error::custom("invoke command dispatched with wrong arguments"));
        };

        let source = create_trace_source(source, trace.as_deref())?;
        let block = source.block_trace()?;
        tracing::info!(
            "Loaded block trace with {} transaction(s)",
            block.transactions.len()
        );

        match format {
            OutputFormat::Json => output::output_json(&mut std::io::stdout(), &block),
            OutputFormat::Table => output::output_table(&mut std::io::stdout(), &block),
            OutputFormat::Dot => {
                let mut graph_config = config.graph.clone();
                if let Some(name) = name {
                    graph_config.name = name;
                }

                let graph = build_invoke_graph(&block, &graph_config)?;
                tracing::info!(
                    "Built graph with {} node(s) and {} edge(s)",
                    graph.node_count(),
                    graph.edge_count()
                );

                let target = artifact_target(out, save, &config)?;
                emit(&graph.to_dot(), target)
            }
        }
    }
}

/// Relationship command - render a pre-built relationship graph
pub mod relationship {
    use super::*;

    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let Commands::Relationship {
            graph,
            shared_only,
            out,
            save,
            name,
        } = args.command
        else {
            return Err(Error::custom(
                "relationship command dispatched with wrong arguments",
            ));
        };

        crate::ensure!(
            graph.exists(),
            "relationship graph document {:?} does not exist",
            graph
        );

        let input = RelationshipInput::from_file(&graph)?;
        tracing::info!(
            "Loaded relationship graph: {} transaction(s), {} account(s), {} edge(s)",
            input.transactions.len(),
            input.accounts.len(),
            input.edges.len()
        );

        let mut graph_config = config.graph.clone();
        if let Some(name) = name {
            graph_config.name = name;
        }

        let dot = build_relationship_graph(input, shared_only, &graph_config)?;
        if shared_only {
            tracing::info!(
                "Shared-account filter kept {} node(s) and {} edge(s)",
                dot.node_count(),
                dot.edge_count()
            );
        }

        let target = artifact_target(out, save, &config)?;
        emit(&dot.to_dot(), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_target_stdout_by_default() {
        let config = Config::default();
        assert_eq!(artifact_target(None, false, &config).unwrap(), None);
    }

    #[test]
    fn test_artifact_target_explicit_file() {
        let config = Config::default();
        let target = artifact_target(Some(PathBuf::from("graph.gv")), false, &config).unwrap();
        assert_eq!(target, Some(PathBuf::from("graph.gv")));
    }

    #[test]
    fn test_artifact_target_directory_gets_timestamped_name() {
        let dir = std::env::temp_dir().join("evm-access-graph-artifact-test");
        std::fs::create_dir_all(&dir).unwrap();

        let config = Config::default();
        let target = artifact_target(Some(dir.clone()), false, &config)
            .unwrap()
            .unwrap();
        assert_eq!(target.parent(), Some(dir.as_path()));
        assert_eq!(
            target.extension().and_then(|e| e.to_str()),
            Some("gv")
        );
    }

    #[test]
    fn test_artifact_target_save_uses_configured_directory() {
        let dir = std::env::temp_dir().join("evm-access-graph-save-test");
        std::fs::remove_dir_all(&dir).ok();

        let mut config = Config::default();
        config.output.directory = dir.clone();

        let target = artifact_target(None, true, &config).unwrap().unwrap();
        assert_eq!(target.parent(), Some(dir.as_path()));
        assert!(dir.is_dir());

        std::fs::remove_dir_all(&dir).ok();
    }
}
