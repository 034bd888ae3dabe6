use ade_client::AdeConfig;
use anyhow::Context;
use audit_engine::ScoringConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_CONFIG_PATH: &str = "config/fiscal.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) scoring: ScoringConfig,
    #[serde(default)]
    pub(crate) extraction: AdeConfig,
    #[serde(default)]
    pub(crate) batch: BatchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BatchConfig {
    #[serde(default = "default_concurrency")]
    pub(crate) concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    4
}

fn validate_config(config: &Config) -> anyhow::Result<()> {
    if let Some(index) = config
        .scoring
        .known_duplicates
        .iter()
        .position(|id| id.trim().is_empty())
    {
        anyhow::bail!("scoring.known_duplicates[{index}] must not be empty");
    }
    if let Some(index) = config
        .scoring
        .high_risk_zips
        .iter()
        .position(|zip| zip.trim().is_empty())
    {
        anyhow::bail!("scoring.high_risk_zips[{index}] must not be empty");
    }
    let endpoint = config.extraction.endpoint.trim();
    if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
        anyhow::bail!("extraction.endpoint must be an http(s) url");
    }
    if config.extraction.timeout_secs == 0 {
        anyhow::bail!("extraction.timeout_secs must be greater than zero");
    }
    if config.batch.concurrency == 0 {
        anyhow::bail!("batch.concurrency must be greater than zero");
    }
    Ok(())
}

pub(crate) fn load_config(path: &Path) -> anyhow::Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    validate_config(&config).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// An explicit path must exist; the default path is optional.
pub(crate) fn resolve_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return load_config(default_path);
    }
    tracing::debug!("no config file found, using built-in defaults");
    Ok(Config::default())
}
