//! rep-cli — score wallet activity snapshots from the command line.
//!
//! Reads a camelCase JSON `WalletActivityData` document, evaluates it, and
//! prints the result with its tier progress as JSON.

mod settings;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rep_core::WalletActivityData;
use rep_engine::{AtomicReputationResult, LevelProgress, ReputationEngine};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "rep-cli", version, about = "Atomic reputation scoring for wallet activity")]
struct Cli {
    /// Config file (TOML). Defaults to <config_dir>/rep/rep.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Score cap anchoring the tier table (overrides file and REP_SCORE_CAP)
    #[arg(long, global = true)]
    score_cap: Option<i64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a wallet snapshot.
    Score {
        /// JSON input file, or "-" for stdin
        #[arg(long, default_value = "-")]
        input: String,

        /// Evaluation instant (RFC 3339). Defaults to the current time.
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Show tier progress for a score.
    Progress {
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },
    /// Print the trust tier table.
    Tiers,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport {
    result: AtomicReputationResult,
    progress: LevelProgress,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    let cfg = settings::load(cli.config.as_deref(), cli.score_cap)?;
    debug!(score_cap = cfg.score_cap, "rep-cli: configuration loaded");
    let engine = ReputationEngine::new(cfg).context("failed to build engine")?;

    match cli.command {
        Command::Score { input, now } => {
            let data = read_input(&input)?;
            let now = now.unwrap_or_else(Utc::now);
            let result = engine.calculate_atomic_reputation(&data, now);
            info!(
                raw_score = result.raw_score,
                adjusted_score = result.adjusted_score,
                trust_level = %result.trust_level,
                "rep-cli: scored wallet"
            );
            let progress = engine.level_progress(result.adjusted_score);
            print_json(&ScoreReport { result, progress })?;
        }
        Command::Progress { score } => {
            print_json(&engine.level_progress(score))?;
        }
        Command::Tiers => {
            println!("score cap: {}", engine.thresholds().score_cap());
            for band in engine.thresholds().bands() {
                let min = band.min.map_or_else(|| "-inf".to_string(), |v| v.to_string());
                let max = band.max.map_or_else(|| "+inf".to_string(), |v| v.to_string());
                println!("{:<16} [{min}, {max})", band.level.label());
            }
        }
    }

    Ok(())
}

/// Read a wallet snapshot from a file path, or stdin for `-`.
fn read_input(input: &str) -> Result<WalletActivityData> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?
    };
    WalletActivityData::from_json(&raw).with_context(|| format!("failed to parse {input}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{out}");
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` overrides
/// `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
