use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::providers::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::scenarios::{FeatureHeader, HappyPathRules, FEATURE_FILE_NAME};

/// Configuration file structure for bddgen.
///
/// Lets users pin the backend, the happy-path keywords and the feature
/// header instead of repeating flags on every run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Completion backend settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Output format preferences
    #[serde(default)]
    pub output: OutputConfig,

    /// Happy-path selection keywords
    #[serde(default)]
    pub classifier: HappyPathRules,

    /// Narrative header of the generated feature file
    #[serde(default)]
    pub feature: FeatureHeader,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeminiConfig {
    /// Gemini API key
    pub api_key: Option<String>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for generation
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Default report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Where the happy-path feature file is written
    #[serde(default = "default_feature_file")]
    pub feature_file: PathBuf,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Summary,
            pretty: false,
            feature_file: default_feature_file(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_feature_file() -> PathBuf {
    PathBuf::from(FEATURE_FILE_NAME)
}

const CANDIDATES: [&str; 4] = ["bddgen.toml", "bddgen.json", "bddgen.yaml", "bddgen.yml"];

impl Config {
    /// Load configuration from a file.
    ///
    /// Searches for configuration files in this order:
    /// 1. Specified path
    /// 2. ./bddgen.toml, ./bddgen.json, ./bddgen.yaml, ./bddgen.yml
    /// 3. `<user config dir>/bddgen/bddgen.toml`
    ///
    /// Returns default configuration if no file is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                log::warn!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            return Self::load_from_path(path);
        }

        for candidate in &CANDIDATES {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        if let Some(path) = user_config_path().filter(|p| p.exists()) {
            return Self::load_from_path(&path);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file path.
    fn load_from_path(path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        match extension {
            "toml" => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display())),
            "json" => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display())),
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
            _ => toml::from_str(&contents)
                .or_else(|_| serde_json::from_str(&contents))
                .or_else(|_| serde_yaml::from_str(&contents))
                .with_context(|| format!("Failed to parse config file: {}", path.display())),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bddgen").join("bddgen.toml"))
}
