use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::engine::{
    EngineConfig, DEFAULT_EXPECTED_TAG_COUNT, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TASTE_NORMALIZATION,
};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_taste_normalization")]
    pub taste_normalization: f64,
    #[serde(default = "default_expected_tag_count")]
    pub expected_tag_count: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            taste_normalization: default_taste_normalization(),
            expected_tag_count: default_expected_tag_count(),
        }
    }
}

fn default_taste_normalization() -> f64 { DEFAULT_TASTE_NORMALIZATION }
fn default_expected_tag_count() -> f64 { DEFAULT_EXPECTED_TAG_COUNT }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_cultural_weight")]
    pub cultural: f64,
    #[serde(default = "default_taste_weight")]
    pub taste: f64,
    #[serde(default = "default_psychographic_weight")]
    pub psychographic: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            cultural: default_cultural_weight(),
            taste: default_taste_weight(),
            psychographic: default_psychographic_weight(),
        }
    }
}

fn default_cultural_weight() -> f64 { 0.4 }
fn default_taste_weight() -> f64 { 0.3 }
fn default_psychographic_weight() -> f64 { 0.3 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HACKMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HACKMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HACKMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Engine configuration described by these settings
    ///
    /// Not validated here; `CompatibilityEngine::new` rejects bad values.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            weights: ScoringWeights {
                cultural: self.scoring.weights.cultural,
                taste: self.scoring.weights.taste,
                psychographic: self.scoring.weights.psychographic,
            },
            taste_normalization: self.scoring.taste_normalization,
            expected_tag_count: self.scoring.expected_tag_count,
            parallel_threshold: self.ranking.parallel_threshold,
        }
    }
}
