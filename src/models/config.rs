//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::query::DEFAULT_PAGE_LIMIT;
use crate::domain::stats::{PLACEHOLDER_CONVERSION_FACTOR, QUALIFIED_SCORE_THRESHOLD, StatsConfig};

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_qualified_score_threshold() -> i32 {
    QUALIFIED_SCORE_THRESHOLD
}

fn default_conversion_factor() -> f64 {
    PLACEHOLDER_CONVERSION_FACTOR
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the leads client and dashboard.
pub struct ClientConfig {
    /// Base URL of the leads API, e.g. `https://crm.example.com/api`.
    pub api_base_url: String,
    /// Bearer token attached to every request when present.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_qualified_score_threshold")]
    pub qualified_score_threshold: i32,
    #[serde(default = "default_conversion_factor")]
    pub conversion_factor: f64,
    /// Where the binary writes the CSV report, if anywhere.
    #[serde(default)]
    pub export_path: Option<String>,
}

impl ClientConfig {
    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig {
            qualified_score_threshold: self.qualified_score_threshold,
            conversion_factor: self.conversion_factor,
        }
    }
}

/// Loads `default.yaml` from `config_dir`, then the optional `{app_env}.yaml`
/// overrides, then `APP_`-prefixed environment variables.
pub fn load_config(config_dir: &Path, app_env: &str) -> Result<ClientConfig, ConfigError> {
    let default_file = config_dir.join("default");
    let env_file = config_dir.join(app_env);

    Config::builder()
        .add_source(File::with_name(&default_file.to_string_lossy()))
        .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<ClientConfig>()
}
