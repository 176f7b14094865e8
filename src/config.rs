//! Configuration utilities

use crate::defaults;
use crate::error::{MoodError, Result};
use crate::sentiment::{LabelThresholds, ScoringConfig, StemMatch};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring engine settings
    pub engine: EngineConfig,
    /// File sorting settings
    pub sorter: SorterSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.sorter.validate()
    }
}

/// Scoring engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Context window, tokens examined on each side
    pub window: usize,
    /// Per-token upper bound K used for normalization
    pub max_token_multiplier: f64,
    /// Prefix fallback policy of the lexicon
    pub stem_match: StemMatch,
    /// Drop tagged function words before lexicon lookup
    pub pos_filter: bool,
    /// Lexicon table file; built-in Korean lexicon when unset
    pub lexicon_path: Option<PathBuf>,
    /// Context lists file; built-in Korean lists when unset
    pub context_path: Option<PathBuf>,
    /// Label thresholds
    pub labels: LabelThresholds,
    /// Rule multipliers
    pub scoring: ScoringConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

impl EngineConfig {
    /// Window 3, K 5, seven labels
    pub fn canonical() -> Self {
        Self {
            window: defaults::CONTEXT_WINDOW,
            max_token_multiplier: defaults::MAX_TOKEN_MULTIPLIER,
            stem_match: StemMatch::InsertionOrder,
            pos_filter: true,
            lexicon_path: None,
            context_path: None,
            labels: LabelThresholds::seven_tier(),
            scoring: ScoringConfig::default(),
        }
    }

    /// Window 2, K 4, five labels
    pub fn legacy() -> Self {
        Self {
            window: defaults::LEGACY_CONTEXT_WINDOW,
            max_token_multiplier: defaults::LEGACY_MAX_TOKEN_MULTIPLIER,
            labels: LabelThresholds::five_tier(),
            ..Self::canonical()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(MoodError::InvalidConfig(
                "engine.window must be at least 1".to_string(),
            ));
        }
        if !self.max_token_multiplier.is_finite() || self.max_token_multiplier <= 0.0 {
            return Err(MoodError::InvalidConfig(format!(
                "engine.max_token_multiplier must be positive, got {}",
                self.max_token_multiplier
            )));
        }
        self.labels.validate()?;
        self.scoring.validate()
    }
}

/// File sorting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterSettings {
    /// Root of the label directories
    pub output_dir: PathBuf,
    /// Move instead of copy
    pub move_files: bool,
    /// Write a JSON report into the output root
    pub write_report: bool,
    /// Bucket for files that are neither text nor audio
    pub unknown_bucket: String,
}

impl Default for SorterSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            move_files: false,
            write_report: false,
            unknown_bucket: defaults::UNKNOWN_BUCKET.to_string(),
        }
    }
}

impl SorterSettings {
    pub fn validate(&self) -> Result<()> {
        let bucket = &self.unknown_bucket;
        if bucket.is_empty() || bucket.contains(['/', '\\']) || bucket == "." || bucket == ".." {
            return Err(MoodError::InvalidConfig(format!(
                "sorter.unknown_bucket must be a plain directory name, got '{bucket}'"
            )));
        }
        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON format
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "json" => Ok(Format::Json),
        "toml" => Ok(Format::Toml),
        "yaml" | "yml" => Ok(Format::Yaml),
        _ => Err(MoodError::UnsupportedFormat(ext.to_string())),
    }
}

/// Deserialize any JSON, TOML or YAML file, chosen by extension
pub fn load_structured<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let format = format_of(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| MoodError::io(path, e))?;

    match format {
        Format::Json => serde_json::from_str(&content).map_err(|e| MoodError::Parse(e.to_string())),
        Format::Toml => toml::from_str(&content).map_err(|e| MoodError::Parse(e.to_string())),
        Format::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| MoodError::Parse(e.to_string()))
        }
    }
}

/// Serialize a value to JSON, TOML or YAML, chosen by extension
pub fn save_structured<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = match format_of(path)? {
        Format::Json => {
            serde_json::to_string_pretty(value).map_err(|e| MoodError::Serialize(e.to_string()))?
        }
        Format::Toml => {
            toml::to_string_pretty(value).map_err(|e| MoodError::Serialize(e.to_string()))?
        }
        Format::Yaml => {
            serde_yaml::to_string(value).map_err(|e| MoodError::Serialize(e.to_string()))?
        }
    };

    std::fs::write(path, content).map_err(|e| MoodError::io(path, e))
}

/// Load and validate configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let config: AppConfig = load_structured(path)?;
    config.validate()?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<()> {
    save_structured(config, path)
}
