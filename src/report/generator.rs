//! Markdown report generation.
//!
//! This module generates Markdown grading reports from the rubric
//! judgments and per-file keyframe summaries.

use crate::models::{FileKeyframeSummary, Judgment, ReportMetadata, RubricReport};
use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &RubricReport) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# AnimCheck Report\n\n");

    // Metadata section
    output.push_str(&generate_metadata_section(&report.metadata));

    // Per-file animation and keyframe counts
    output.push_str(&generate_summaries_section(
        &report.summaries,
        &report.animations,
    ));

    // Rubric checks
    output.push_str(&generate_judgments_section(
        "Keyframe Check",
        &report.keyframe_judgments,
    ));
    output.push_str(&generate_judgments_section(
        "Targeted Properties Check",
        &report.property_judgments,
    ));

    // Footer
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Inventory:** `{}`\n", metadata.inventory));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Percentage Keyframe Goal:** more than {}\n",
        metadata.pct_goal
    ));
    section.push_str(&format!(
        "- **Overall Keyframe Goal:** at least {}\n",
        metadata.overall_goal
    ));
    if metadata.required.is_empty() {
        section.push_str(&format!(
            "- **Property Goal:** at least {} distinct properties\n",
            metadata.property_goal
        ));
    } else {
        section.push_str(&format!(
            "- **Required Properties:** {}\n",
            metadata.required.join(", ")
        ));
    }
    section.push_str(&format!("- **Files Graded:** {}\n", metadata.files_graded));
    section.push_str(&format!(
        "- **Checks:** {} passed, {} failed\n",
        metadata.checks_passed, metadata.checks_failed
    ));
    section.push('\n');

    section
}

/// Generate the per-file animation and keyframe count table.
fn generate_summaries_section(
    summaries: &[FileKeyframeSummary],
    animations: &HashMap<String, usize>,
) -> String {
    let mut section = String::new();

    section.push_str("## Keyframes by File\n\n");

    if summaries.is_empty() {
        section.push_str("No animations were found in the inventory.\n\n");
        return section;
    }

    section.push_str("| File | Animations | Percentage | From/To | Total |\n");
    section.push_str("|:---|:---:|:---:|:---:|:---:|\n");
    for summary in summaries {
        let animation_count = animations.get(&summary.file).copied().unwrap_or(0);
        section.push_str(&format!(
            "| `{}` | {} | {} | {} | {} |\n",
            summary.file,
            animation_count,
            summary.pct_keyframes,
            summary.from_to_keyframes,
            summary.total()
        ));
    }
    section.push('\n');

    section
}

/// Generate one rubric check section.
fn generate_judgments_section(title: &str, judgments: &[Judgment]) -> String {
    let mut section = String::new();

    section.push_str(&format!("## {}\n\n", title));

    if judgments.is_empty() {
        section.push_str("No files to grade.\n\n");
        return section;
    }

    for judgment in judgments {
        let marker = if judgment.is_pass() { "✅" } else { "❌" };
        section.push_str(&format!("- {} {}\n", marker, judgment.message()));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by AnimCheck*\n");

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &RubricReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write a Markdown report to a file.
pub fn write_report(report: &RubricReport, path: &Path) -> Result<()> {
    let content = generate_markdown_report(report);

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Write a JSON report to a file.
pub fn write_json_report(report: &RubricReport, path: &Path) -> Result<()> {
    let content = generate_json_report(report)?;

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}
