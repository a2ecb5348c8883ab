//! pool-hints: compute position hints for the transcoder pool.
//!
//! Reads a pool snapshot from a JSON file, runs the requested plan and prints
//! the hints as JSON on stdout. Logs go to stderr.

mod commands;
mod config;
mod snapshot;

use anyhow::Context;
use clap::Parser;
use pool_hints::HintClient;
use pool_utils::LogFormat;
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::CliConfig;
use crate::snapshot::FileSnapshotSource;

#[derive(Parser)]
#[command(name = "pool-hints", about = "Position hints for the transcoder pool")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file holding the pool ordering.
    #[arg(long, env = "POOL_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Maximum pool size enforced by the ledger.
    #[arg(long, env = "POOL_CAPACITY")]
    capacity: Option<usize>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "POOL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "POOL_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Merge the config file (if any) with flag and env overrides.
    fn resolve_config(&self) -> anyhow::Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_toml_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => CliConfig::default(),
        };
        if let Some(snapshot) = &self.snapshot {
            config.snapshot = Some(snapshot.clone());
        }
        if let Some(capacity) = self.capacity {
            config.capacity = Some(capacity);
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    pool_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let snapshot_path = config
        .snapshot
        .clone()
        .context("no pool snapshot given; pass --snapshot or set `snapshot` in the config file")?;
    let client = HintClient::new(FileSnapshotSource::new(snapshot_path, config.capacity));
    tracing::debug!(
        snapshot = %client.source().path().display(),
        capacity = ?config.capacity,
        command = ?cli.command,
        "computing hints"
    );

    let output = commands::execute(&client, &cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
