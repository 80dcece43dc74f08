//! Animation inventory loading.
//!
//! The CSS-animation extractor runs upstream and writes its findings as a
//! JSON array of [`AnimationRecord`]. This module reads and validates that
//! document; malformed records surface as errors rather than being coerced
//! into default judgments.

use crate::models::AnimationRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading an animation inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory file could not be read.
    #[error("failed to read inventory file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inventory JSON was malformed or a record was missing a field.
    #[error("invalid inventory JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load an animation inventory from a JSON file.
pub fn load_inventory(path: &Path) -> Result<Vec<AnimationRecord>, InventoryError> {
    let content = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_inventory(&content)?;
    debug!(
        "Loaded {} animation records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

/// Parse an animation inventory from a JSON string.
pub fn parse_inventory(json: &str) -> Result<Vec<AnimationRecord>, InventoryError> {
    let records: Vec<AnimationRecord> = serde_json::from_str(json)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inventory() {
        let json = r#"[
            {
                "file": "styles/main.css",
                "name": "fade-in",
                "keyframes": [
                    {"selector": "from", "frames": ["from"]},
                    {"selector": "to", "frames": ["to"]}
                ],
                "values_targetted": ["opacity"]
            },
            {
                "file": "styles/hero.css",
                "keyframes": [
                    {"selector": "percentage", "frames": ["0%", "50%", "100%"]}
                ],
                "values_targetted": ["transform", "opacity"]
            }
        ]"#;

        let records = parse_inventory(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].file, "styles/main.css");
        assert_eq!(records[0].name.as_deref(), Some("fade-in"));
        assert!(records[1].name.is_none());
        assert_eq!(records[1].keyframes[0].frames.len(), 3);
    }

    #[test]
    fn test_parse_empty_inventory() {
        let records = parse_inventory("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_file_field() {
        let json = r#"[{"keyframes": [], "values_targetted": []}]"#;
        assert!(matches!(
            parse_inventory(json),
            Err(InventoryError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_inventory("not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_inventory(Path::new("/nonexistent/inventory.json")).unwrap_err();
        assert!(matches!(err, InventoryError::Read { .. }));
    }

    #[test]
    fn test_unknown_selector_kinds_are_preserved() {
        let json = r#"[
            {
                "file": "a.css",
                "keyframes": [{"selector": "entry", "frames": ["entry 50%"]}],
                "values_targetted": []
            }
        ]"#;

        let records = parse_inventory(json).unwrap();
        assert_eq!(records[0].keyframes[0].selector, "entry");
    }
}
