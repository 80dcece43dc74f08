//! Rubric goal evaluation.
//!
//! Two independent evaluators over the aggregated animation data: a
//! keyframe-count evaluator (numeric threshold with an overall fallback)
//! and a targeted-property evaluator (minimum unique count or required-set
//! coverage). Both are pure functions producing one judgment per file.

use crate::analysis::aggregator::group_by_file;
use crate::models::{AnimationRecord, FileKeyframeSummary, Judgment};
use std::collections::HashSet;
use tracing::debug;

/// Judge each file's keyframe counts against the rubric goals.
///
/// Per file, in priority order:
/// 1. strictly more than `pct_goal` percentage keyframes passes outright;
/// 2. otherwise, at least `overall_goal` keyframes of any kind passes;
/// 3. otherwise the file fails.
///
/// The comparators differ on purpose: `pct_goal` is exclusive (`>`) while
/// `overall_goal` is inclusive (`>=`). A file sitting exactly at
/// `pct_goal` falls through to the overall check.
pub fn evaluate_keyframes(
    summaries: &[FileKeyframeSummary],
    pct_goal: usize,
    overall_goal: usize,
) -> Vec<Judgment> {
    summaries
        .iter()
        .map(|summary| {
            if summary.pct_keyframes > pct_goal {
                Judgment::pass(format!(
                    "{} has {} percentage keyframes (more than the goal of {})",
                    summary.file, summary.pct_keyframes, pct_goal
                ))
            } else if summary.total() >= overall_goal {
                Judgment::pass(format!(
                    "{} has {} keyframes overall, which is enough (goal was {})",
                    summary.file,
                    summary.total(),
                    overall_goal
                ))
            } else {
                Judgment::fail(format!(
                    "{} does not have enough keyframes ({} of the {} needed)",
                    summary.file,
                    summary.total(),
                    overall_goal
                ))
            }
        })
        .collect()
}

/// Judge each file's targeted CSS properties against the rubric goals.
///
/// All records for a file have their `values_targetted` sets unioned
/// before judgment; records for the same file need not be contiguous.
/// When `required` is supplied and non-empty the file passes iff every
/// required property is targeted (`property_goal` is ignored); otherwise
/// it passes iff at least `property_goal` distinct properties are
/// targeted. An empty inventory yields an empty result.
pub fn evaluate_properties(
    records: &[AnimationRecord],
    property_goal: usize,
    required: Option<&[String]>,
) -> Vec<Judgment> {
    let required = required.filter(|props| !props.is_empty());

    group_by_file(records)
        .into_iter()
        .map(|(file, file_records)| {
            let mut targetted: HashSet<&str> = HashSet::new();
            for record in &file_records {
                targetted.extend(record.values_targetted.iter().map(String::as_str));
            }
            debug!(
                "{} targets {} distinct properties across {} animations",
                file,
                targetted.len(),
                file_records.len()
            );

            match required {
                Some(props) => judge_required_coverage(&file, &targetted, props),
                None => judge_property_count(&file, &targetted, property_goal),
            }
        })
        .collect()
}

/// Required-set strategy: every required property must be targeted.
fn judge_required_coverage(file: &str, targetted: &HashSet<&str>, required: &[String]) -> Judgment {
    let mut missing: Vec<&str> = required
        .iter()
        .map(String::as_str)
        .filter(|prop| !targetted.contains(prop))
        .collect();

    if missing.is_empty() {
        Judgment::pass(format!("{} targets all required properties", file))
    } else {
        missing.sort_unstable();
        missing.dedup();
        Judgment::fail(format!(
            "{} is missing required properties: {}",
            file,
            missing.join(", ")
        ))
    }
}

/// Count strategy: at least `property_goal` distinct properties targeted.
fn judge_property_count(file: &str, targetted: &HashSet<&str>, property_goal: usize) -> Judgment {
    if targetted.len() >= property_goal {
        Judgment::pass(format!(
            "{} targets {} properties (goal was {})",
            file,
            targetted.len(),
            property_goal
        ))
    } else {
        Judgment::fail(format!(
            "{} needs {} more targeted properties ({} of {})",
            file,
            property_goal - targetted.len(),
            targetted.len(),
            property_goal
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyframeGroup;

    fn summary(file: &str, pct: usize, from_to: usize) -> FileKeyframeSummary {
        FileKeyframeSummary {
            file: file.to_string(),
            pct_keyframes: pct,
            from_to_keyframes: from_to,
        }
    }

    fn record_with_properties(file: &str, properties: &[&str]) -> AnimationRecord {
        let mut rec = AnimationRecord::new(file);
        rec.keyframes
            .push(KeyframeGroup::new("percentage", vec!["0%".to_string()]));
        rec.values_targetted = properties.iter().map(|p| p.to_string()).collect();
        rec
    }

    #[test]
    fn test_pass_on_percentage_keyframes_alone() {
        // Scenario A: 5 percentage keyframes beat a pct_goal of 4.
        let judgments = evaluate_keyframes(&[summary("a.css", 5, 0)], 4, 6);

        assert_eq!(judgments.len(), 1);
        assert!(judgments[0].is_pass());
        assert!(judgments[0].message().contains("5 percentage keyframes"));
    }

    #[test]
    fn test_fail_when_total_short_of_overall_goal() {
        // Scenario B: 2 + 3 = 5 keyframes, short of the overall goal of 6.
        let judgments = evaluate_keyframes(&[summary("b.css", 2, 3)], 4, 6);

        assert!(!judgments[0].is_pass());
        assert!(judgments[0].message().contains("not have enough keyframes"));
    }

    #[test]
    fn test_pass_on_combined_count() {
        // Scenario C: 3 + 3 = 6 keyframes meets the overall goal inclusively.
        let judgments = evaluate_keyframes(&[summary("c.css", 3, 3)], 4, 6);

        assert!(judgments[0].is_pass());
        assert!(judgments[0].message().contains("enough"));
    }

    #[test]
    fn test_percentage_goal_is_exclusive() {
        // Exactly pct_goal percentage keyframes is not enough for branch 1;
        // the file falls through to the overall check and fails.
        let judgments = evaluate_keyframes(&[summary("d.css", 4, 0)], 4, 6);
        assert!(!judgments[0].is_pass());

        // The same counts pass once the overall goal is reachable.
        let judgments = evaluate_keyframes(&[summary("d.css", 4, 2)], 4, 6);
        assert!(judgments[0].is_pass());
        assert!(judgments[0].message().contains("overall"));
    }

    #[test]
    fn test_percentage_pass_ignores_from_to_count() {
        // Branch 1 wins regardless of the from/to count.
        let judgments = evaluate_keyframes(&[summary("e.css", 7, 0)], 4, 100);
        assert!(judgments[0].is_pass());
        assert!(judgments[0].message().contains("percentage keyframes"));
    }

    #[test]
    fn test_keyframe_judgments_preserve_order() {
        let summaries = vec![
            summary("z.css", 9, 0),
            summary("a.css", 0, 0),
            summary("m.css", 0, 6),
        ];

        let judgments = evaluate_keyframes(&summaries, 4, 6);

        assert!(judgments[0].message().contains("z.css"));
        assert!(judgments[1].message().contains("a.css"));
        assert!(judgments[2].message().contains("m.css"));
        assert!(judgments[0].is_pass());
        assert!(!judgments[1].is_pass());
        assert!(judgments[2].is_pass());
    }

    #[test]
    fn test_property_count_goal() {
        let records = vec![record_with_properties("a.css", &["transform", "opacity"])];

        let judgments = evaluate_properties(&records, 2, None);
        assert!(judgments[0].is_pass());

        let judgments = evaluate_properties(&records, 3, None);
        assert!(!judgments[0].is_pass());
        assert!(judgments[0].message().contains("1 more"));
    }

    #[test]
    fn test_properties_union_across_records() {
        // Scenario D: two records for img.css union to {transform, opacity},
        // which is missing the required "animation" property.
        let records = vec![
            record_with_properties("img.css", &["transform"]),
            record_with_properties("img.css", &["opacity", "transform"]),
        ];
        let required = vec!["animation".to_string()];

        let judgments = evaluate_properties(&records, 0, Some(&required));

        assert_eq!(judgments.len(), 1);
        assert!(!judgments[0].is_pass());
        assert!(judgments[0]
            .message()
            .contains("missing required properties: animation"));
    }

    #[test]
    fn test_required_coverage_pass() {
        let records = vec![
            record_with_properties("a.css", &["transform"]),
            record_with_properties("a.css", &["animation", "opacity"]),
        ];
        let required = vec!["animation".to_string(), "transform".to_string()];

        let judgments = evaluate_properties(&records, 0, Some(&required));

        assert!(judgments[0].is_pass());
        assert!(judgments[0].message().contains("all required properties"));
    }

    #[test]
    fn test_required_strategy_ignores_property_goal() {
        // With a required set supplied, only containment matters.
        let records = vec![record_with_properties("a.css", &["animation"])];
        let required = vec!["animation".to_string()];

        let judgments = evaluate_properties(&records, 50, Some(&required));
        assert!(judgments[0].is_pass());
    }

    #[test]
    fn test_empty_required_set_falls_back_to_count_goal() {
        let records = vec![record_with_properties("a.css", &["transform", "opacity"])];
        let required: Vec<String> = Vec::new();

        let judgments = evaluate_properties(&records, 2, Some(&required));
        assert!(judgments[0].is_pass());
        assert!(judgments[0].message().contains("2 properties"));
    }

    #[test]
    fn test_missing_properties_listed_sorted() {
        let records = vec![record_with_properties("a.css", &["color"])];
        let required = vec![
            "transform".to_string(),
            "animation".to_string(),
            "opacity".to_string(),
        ];

        let judgments = evaluate_properties(&records, 0, Some(&required));

        assert!(judgments[0]
            .message()
            .contains("animation, opacity, transform"));
    }

    #[test]
    fn test_property_coverage_is_monotonic() {
        // Adding targeted properties never turns a pass into a fail.
        let base = vec![record_with_properties("a.css", &["transform", "opacity"])];
        let extended = vec![record_with_properties(
            "a.css",
            &["transform", "opacity", "color"],
        )];
        let required = vec!["transform".to_string()];

        for goal in 0..=2 {
            if evaluate_properties(&base, goal, None)[0].is_pass() {
                assert!(evaluate_properties(&extended, goal, None)[0].is_pass());
            }
        }
        if evaluate_properties(&base, 0, Some(&required))[0].is_pass() {
            assert!(evaluate_properties(&extended, 0, Some(&required))[0].is_pass());
        }
    }

    #[test]
    fn test_empty_inventory_yields_no_judgments() {
        assert!(evaluate_properties(&[], 2, None).is_empty());
        assert!(evaluate_keyframes(&[], 4, 6).is_empty());
    }

    #[test]
    fn test_non_contiguous_file_records_judged_once() {
        let records = vec![
            record_with_properties("a.css", &["transform"]),
            record_with_properties("b.css", &["color"]),
            record_with_properties("a.css", &["opacity"]),
        ];

        let judgments = evaluate_properties(&records, 2, None);

        assert_eq!(judgments.len(), 2);
        assert!(judgments[0].message().contains("a.css"));
        assert!(judgments[0].is_pass());
        assert!(judgments[1].message().contains("b.css"));
        assert!(!judgments[1].is_pass());
    }
}
