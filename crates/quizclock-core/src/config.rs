//! Quiz configuration.
//!
//! Values come from (lowest to highest precedence) built-in defaults, a TOML
//! config file, `QUIZCLOCK_*` environment variables, and finally CLI flags
//! applied by the caller.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level quizclock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    /// CSV file holding `question,answer` records.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    /// Time budget for the whole quiz, in seconds.
    #[serde(default = "default_limit")]
    pub limit_secs: u64,
}

fn default_csv() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_limit() -> u64 {
    30
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            limit_secs: default_limit(),
        }
    }
}

impl QuizConfig {
    pub fn time_budget(&self) -> Duration {
        Duration::from_secs(self.limit_secs)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizclock.toml` in the current directory
/// 2. `~/.config/quizclock/config.toml`
///
/// Environment variable overrides: `QUIZCLOCK_CSV`, `QUIZCLOCK_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizclock.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config file");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(
    config: &mut QuizConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(csv) = var("QUIZCLOCK_CSV") {
        config.csv = PathBuf::from(csv);
    }
    if let Some(limit) = var("QUIZCLOCK_LIMIT") {
        config.limit_secs = limit
            .trim()
            .parse()
            .with_context(|| format!("QUIZCLOCK_LIMIT must be whole seconds, got '{limit}'"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizclock"))
}
