//! Configuration file handling.
//!
//! This module handles loading and merging rubric configuration from
//! `.animcheck.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Keyframe rubric goals.
    #[serde(default)]
    pub keyframes: KeyframeGoals,

    /// Targeted-property rubric goals.
    #[serde(default)]
    pub properties: PropertyGoals,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "animcheck_report.md".to_string()
}

/// Keyframe-count rubric goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyframeGoals {
    /// A file passes outright with strictly more percentage keyframes than this.
    #[serde(default = "default_pct_goal")]
    pub pct_goal: usize,

    /// Fallback goal: minimum combined keyframe count of any kind (inclusive).
    #[serde(default = "default_overall_goal")]
    pub overall_goal: usize,
}

impl Default for KeyframeGoals {
    fn default() -> Self {
        Self {
            pct_goal: default_pct_goal(),
            overall_goal: default_overall_goal(),
        }
    }
}

fn default_pct_goal() -> usize {
    4
}

fn default_overall_goal() -> usize {
    6
}

/// Targeted-property rubric goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyGoals {
    /// Minimum number of distinct CSS properties the animations must target.
    #[serde(default = "default_property_goal")]
    pub property_goal: usize,

    /// Properties every file must target. When non-empty this replaces
    /// the count goal entirely.
    #[serde(default)]
    pub required: Vec<String>,
}

impl Default for PropertyGoals {
    fn default() -> Self {
        Self {
            property_goal: default_property_goal(),
            required: Vec::new(),
        }
    }
}

fn default_property_goal() -> usize {
    2
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".animcheck.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(pct_goal) = args.pct_goal {
            self.keyframes.pct_goal = pct_goal;
        }
        if let Some(overall_goal) = args.overall_goal {
            self.keyframes.overall_goal = overall_goal;
        }
        if let Some(property_goal) = args.property_goal {
            self.properties.property_goal = property_goal;
        }
        if let Some(ref required) = args.required {
            self.properties.required = required.clone();
        }

        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Required properties as the evaluator expects them: `None` when the
    /// list is empty, so the count goal applies.
    pub fn required_properties(&self) -> Option<&[String]> {
        if self.properties.required.is_empty() {
            None
        } else {
            Some(&self.properties.required)
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
