//! Command implementations for the Union fantasy league CLI

pub mod career;
pub mod common;
pub mod fetch;
pub mod power;
pub mod schedule;

use std::path::PathBuf;

use crate::{LeagueError, Result, CONFIG_ENV_VAR};

/// Pick the config file: explicit flag, then `UNION_FFL_CONFIG`, then the
/// per-user config directory.
pub fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = config {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("union-ffl").join("league.toml"))
        .ok_or_else(|| LeagueError::Config {
            message: format!(
                "no --config given, {} not set, and no config directory found",
                CONFIG_ENV_VAR
            ),
        })
}
