//! Layered engine configuration for the CLI.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults,
//! 2. a TOML file (`--config`, else `<config_dir>/rep/rep.toml` if present),
//! 3. `REP_*` environment variables (`REP_SCORE_CAP`),
//! 4. the `--score-cap` flag.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use rep_core::constants::DEFAULT_SCORE_CAP;
use rep_engine::EngineConfig;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "REP";

/// `<config_dir>/rep/rep.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rep").join("rep.toml"))
}

/// Load and validate the engine configuration from the process environment.
///
/// An explicit `file` must exist; the default path is optional.
pub fn load(file: Option<&Path>, score_cap: Option<i64>) -> Result<EngineConfig> {
    load_from(file, Environment::with_prefix(ENV_PREFIX), score_cap)
}

/// [`load`] with an explicit environment source.
pub fn load_from(
    file: Option<&Path>,
    env: Environment,
    score_cap: Option<i64>,
) -> Result<EngineConfig> {
    let mut builder = Config::builder().set_default("score_cap", DEFAULT_SCORE_CAP)?;

    match file {
        Some(path) => {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder
                    .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false));
            }
        }
    }

    let settings = builder
        .add_source(env.try_parsing(true))
        .set_override_option("score_cap", score_cap)?
        .build()
        .context("failed to read configuration")?;

    let cfg: EngineConfig = settings
        .try_deserialize()
        .context("invalid configuration")?;
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}
