//! Configuration management for the signal-graph system.
//!
//! The pipeline knobs were hardcoded policy constants in early
//! prototypes (threshold 0.24, selection bounds 6/12); here they are
//! explicit configuration the core accepts as parameters, with the
//! historical values as defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Pipeline tuning knobs for the clustering core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Cosine similarity at or above this keeps an edge between two signals.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Lower bound for the working selection when enough signals exist.
    #[serde(default = "default_min_selection")]
    pub min_selection: usize,

    /// Upper bound for the working selection.
    #[serde(default = "default_max_selection")]
    pub max_selection: usize,

    /// Vocabulary units present in more than this share of titles are
    /// treated as boilerplate and weigh nothing.
    #[serde(default = "default_max_df_ratio")]
    pub max_df_ratio: f64,

    /// Words kept from each title when composing the hypothesis.
    #[serde(default = "default_max_title_words")]
    pub max_title_words: usize,

    /// Hard cap on hypothesis length, in words.
    #[serde(default = "default_max_hypothesis_words")]
    pub max_hypothesis_words: usize,
}

fn default_similarity_threshold() -> f32 {
    0.24
}

fn default_min_selection() -> usize {
    6
}

fn default_max_selection() -> usize {
    12
}

fn default_max_df_ratio() -> f64 {
    0.95
}

fn default_max_title_words() -> usize {
    6
}

fn default_max_hypothesis_words() -> usize {
    20
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            min_selection: default_min_selection(),
            max_selection: default_max_selection(),
            max_df_ratio: default_max_df_ratio(),
            max_title_words: default_max_title_words(),
            max_hypothesis_words: default_max_hypothesis_words(),
        }
    }
}

impl PipelineConfig {
    /// Validate the pipeline configuration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` with a descriptive message when any
    /// field is out of range.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(CoreError::Config(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.min_selection == 0 {
            return Err(CoreError::Config(
                "min_selection must be greater than 0".to_string(),
            ));
        }
        if self.max_selection < self.min_selection {
            return Err(CoreError::Config(format!(
                "max_selection ({}) must be >= min_selection ({})",
                self.max_selection, self.min_selection
            )));
        }
        if !(self.max_df_ratio > 0.0 && self.max_df_ratio <= 1.0) {
            return Err(CoreError::Config(format!(
                "max_df_ratio must be in (0, 1], got {}",
                self.max_df_ratio
            )));
        }
        if self.max_title_words == 0 {
            return Err(CoreError::Config(
                "max_title_words must be greater than 0".to_string(),
            ));
        }
        if self.max_hypothesis_words == 0 {
            return Err(CoreError::Config(
                "max_hypothesis_words must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Acquisition configuration for the collaborator layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquireConfig {
    /// Maximum number of signals collected per refresh.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_max_items() -> usize {
    48
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (SignalGraph; +https://example.org)".to_string()
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl AcquireConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_items == 0 {
            return Err(CoreError::Config(
                "acquire.max_items must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(CoreError::Config(
                "acquire.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Storage locations for the JSON signal store and ontology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted JSON files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Signal store file name inside `data_dir`.
    #[serde(default = "default_signals_file")]
    pub signals_file: String,

    /// Ontology file name inside `data_dir`.
    #[serde(default = "default_ontology_file")]
    pub ontology_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_signals_file() -> String {
    "signals.json".to_string()
}

fn default_ontology_file() -> String {
    "ontology.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            signals_file: default_signals_file(),
            ontology_file: default_ontology_file(),
        }
    }
}

impl StorageConfig {
    /// Full path to the signal store.
    pub fn signals_path(&self) -> PathBuf {
        self.data_dir.join(&self.signals_file)
    }

    /// Full path to the ontology file.
    pub fn ontology_path(&self) -> PathBuf {
        self.data_dir.join(&self.ontology_file)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.signals_file.trim().is_empty() {
            return Err(CoreError::Config(
                "storage.signals_file must be non-empty".to_string(),
            ));
        }
        if self.ontology_file.trim().is_empty() {
            return Err(CoreError::Config(
                "storage.ontology_file must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP server bind configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP API.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// TCP port for the HTTP API.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.bind_address.trim().is_empty() {
            return Err(CoreError::Config(
                "server.bind_address must be non-empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(CoreError::Config(
                "server.port must be in range 1-65535, got 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub acquire: AcquireConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{SIGNAL_GRAPH_ENV}.toml (environment-specific)
    /// 3. Environment variables with SIGNAL_GRAPH prefix
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("SIGNAL_GRAPH_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("SIGNAL_GRAPH").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::Config(format!("failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> CoreResult<()> {
        self.pipeline.validate()?;
        self.acquire.validate()?;
        self.storage.validate()?;
        self.server.validate()?;
        Ok(())
    }
}
