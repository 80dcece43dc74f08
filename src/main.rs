//! AnimCheck - CSS Animation Rubric Grader
//!
//! A CLI tool that grades a project's @keyframes usage against
//! configurable numeric and set-membership goals and generates
//! Markdown/JSON reports.
//!
//! Exit codes:
//!   0 - Success (all checks passed, or no --strict set)
//!   1 - Runtime error (bad inventory, config failure, etc.)
//!   2 - Rubric failures found with --strict

use animcheck::analysis;
use animcheck::cli::{Args, OutputFormat};
use animcheck::config::Config;
use animcheck::inventory;
use animcheck::models::{ReportMetadata, RubricReport};
use animcheck::report;
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("AnimCheck v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the grading pass
    match run_grading(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Grading failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .animcheck.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".animcheck.toml");

    if path.exists() {
        eprintln!("⚠️  .animcheck.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .animcheck.toml")?;

    println!("✅ Created .animcheck.toml with default settings.");
    println!("   Edit it to customize the rubric goals.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete grading workflow. Returns exit code (0 or 2).
fn run_grading(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let inventory_path = args
        .inventory
        .as_ref()
        .context("An inventory file path is required")?;

    // Step 1: Load the animation inventory
    println!("📥 Loading inventory: {}", inventory_path.display());
    let records = inventory::load_inventory(inventory_path)?;
    info!("Loaded {} animation records", records.len());

    if records.is_empty() {
        warn!("The inventory contains no animation records");
    }

    // Step 2: Aggregate keyframe counts per file
    let summaries = analysis::summarize_keyframes(&records);
    let animations = analysis::animation_distribution(&records);
    debug!("Aggregated {} file summaries", summaries.len());

    // Step 3: Evaluate the rubric goals
    println!("🔎 Grading against the rubric...");
    println!(
        "   Percentage keyframe goal: more than {}",
        config.keyframes.pct_goal
    );
    println!(
        "   Overall keyframe goal: at least {}",
        config.keyframes.overall_goal
    );
    match config.required_properties() {
        Some(required) => println!("   Required properties: {}", required.join(", ")),
        None => println!(
            "   Property goal: at least {} distinct properties",
            config.properties.property_goal
        ),
    }

    let keyframe_judgments = analysis::evaluate_keyframes(
        &summaries,
        config.keyframes.pct_goal,
        config.keyframes.overall_goal,
    );
    let property_judgments = analysis::evaluate_properties(
        &records,
        config.properties.property_goal,
        config.required_properties(),
    );

    // Step 4: Build the report
    let metadata = ReportMetadata {
        inventory: inventory_path.display().to_string(),
        generated_at: Utc::now(),
        pct_goal: config.keyframes.pct_goal,
        overall_goal: config.keyframes.overall_goal,
        property_goal: config.properties.property_goal,
        required: config.properties.required.clone(),
        files_graded: summaries.len(),
        checks_passed: 0,
        checks_failed: 0,
    };

    let mut rubric_report = RubricReport {
        metadata,
        summaries,
        animations,
        keyframe_judgments,
        property_judgments,
    };
    rubric_report.tally_checks();

    // Step 5: Generate and save the report
    println!("\n📝 Generating report...");
    let output_path = std::path::Path::new(&config.general.output);
    match args.format {
        OutputFormat::Json => report::write_json_report(&rubric_report, output_path),
        OutputFormat::Markdown => report::write_report(&rubric_report, output_path),
    }
    .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    // Print summary
    println!("\n📊 Grading Summary:");
    println!("   Files graded: {}", rubric_report.metadata.files_graded);
    println!(
        "   Checks: ✅ {} passed | ❌ {} failed",
        rubric_report.metadata.checks_passed, rubric_report.metadata.checks_failed
    );
    for judgment in rubric_report
        .keyframe_judgments
        .iter()
        .chain(rubric_report.property_judgments.iter())
    {
        println!("   {}", judgment);
    }
    println!(
        "\n✅ Grading complete! Report saved to: {}",
        output_path.display()
    );

    // Check --strict threshold
    if args.strict && !rubric_report.all_passed() {
        eprintln!("\n⛔ Rubric failures found. Failing (exit code 2).");
        return Ok(2);
    }

    Ok(0)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .animcheck.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
