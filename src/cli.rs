//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// AnimCheck - rubric grader for CSS animation usage
///
/// Grade a project's @keyframes usage against numeric and
/// set-membership goals. Input is the JSON animation inventory
/// produced by the extraction step. Markdown/JSON reports.
///
/// Examples:
///   animcheck inventory.json
///   animcheck inventory.json --pct-goal 6 --overall-goal 8
///   animcheck inventory.json --required animation,transform --strict
///   animcheck --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the animation inventory JSON file
    ///
    /// A JSON array of animation records, one per @keyframes block.
    /// Not required when using --init-config.
    #[arg(value_name = "INVENTORY", required_unless_present = "init_config")]
    pub inventory: Option<PathBuf>,

    /// Output file path for the report
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .animcheck.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Percentage-keyframe goal (a file passes with strictly more)
    ///
    /// Can also be set via ANIMCHECK_PCT_GOAL or .animcheck.toml config.
    #[arg(long, value_name = "COUNT", env = "ANIMCHECK_PCT_GOAL")]
    pub pct_goal: Option<usize>,

    /// Overall keyframe goal (a file passes with at least this many of any kind)
    #[arg(long, value_name = "COUNT", env = "ANIMCHECK_OVERALL_GOAL")]
    pub overall_goal: Option<usize>,

    /// Minimum number of distinct targeted CSS properties per file
    #[arg(long, value_name = "COUNT")]
    pub property_goal: Option<usize>,

    /// Properties every file must target (comma-separated)
    ///
    /// When set, replaces the property count goal entirely.
    /// Example: --required animation,transform
    #[arg(long, value_name = "PROPS", value_delimiter = ',')]
    pub required: Option<Vec<String>>,

    /// Exit with code 2 if any rubric check fails
    ///
    /// Useful for CI pipelines and autograders.
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .animcheck.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        let inventory = match self.inventory {
            Some(ref path) => path,
            None => return Err("An inventory file path is required".to_string()),
        };

        if !inventory.exists() {
            return Err(format!(
                "Inventory file does not exist: {}",
                inventory.display()
            ));
        }
        if !inventory.is_file() {
            return Err(format!(
                "Inventory path is not a file: {}",
                inventory.display()
            ));
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
