//! Contract scanner
//!
//! Cross-checks a brick against its `.meta.json` sidecar: the record
//! must exist, parse, and declare the required fields, and the code
//! must define at least one module-level function. A missing or
//! malformed sidecar is a single fixed finding; field-level checks
//! only run once a record actually loads.

use crate::loader::SourceUnit;
use crate::metadata::{self, MetadataError};
use crate::models::{Finding, Severity};
use crate::scanners::{ScanOutcome, Scanner};
use anyhow::Result;
use tracing::debug;

const MISSING_METADATA_DEDUCTION: u32 = 20;
const INVALID_METADATA_DEDUCTION: u32 = 20;
const MISSING_FIELD_DEDUCTION: u32 = 5;
const NO_FUNCTION_DEDUCTION: u32 = 10;
const SYNTAX_ERROR_DEDUCTION: u32 = 20;

/// Validates a brick against its declared metadata contract
pub struct ContractScanner;

impl ContractScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContractScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for ContractScanner {
    fn name(&self) -> &'static str {
        "contract"
    }

    fn scan(&self, unit: &SourceUnit) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();
        let meta_path = metadata::sidecar_path(&unit.path);

        let record = match metadata::load_raw(&meta_path) {
            Ok(record) => record,
            Err(MetadataError::Missing) => {
                outcome.push(Finding::new(
                    self.name(),
                    Severity::Violation,
                    MISSING_METADATA_DEDUCTION,
                    "Missing metadata file",
                ));
                return Ok(outcome);
            }
            Err(MetadataError::Invalid) => {
                outcome.push(Finding::new(
                    self.name(),
                    Severity::Violation,
                    INVALID_METADATA_DEDUCTION,
                    "Invalid metadata JSON",
                ));
                return Ok(outcome);
            }
            // An unreadable sidecar that exists is a scanner-level
            // failure, not a contract judgement
            Err(MetadataError::Unreadable(err)) => {
                anyhow::bail!("cannot read {}: {err}", meta_path.display());
            }
        };

        debug!(sidecar = %meta_path.display(), "metadata record loaded");

        for field in metadata::REQUIRED_FIELDS {
            if !record.contains_key(*field) {
                outcome.push(Finding::new(
                    self.name(),
                    Severity::Violation,
                    MISSING_FIELD_DEDUCTION,
                    format!("Missing metadata field: {field}"),
                ));
            }
        }

        if !unit.has_valid_syntax() {
            outcome.push(Finding::new(
                self.name(),
                Severity::Violation,
                SYNTAX_ERROR_DEDUCTION,
                "Syntax error in code",
            ));
        } else if unit.top_level_function_count() == 0 {
            outcome.push(Finding::new(
                self.name(),
                Severity::Violation,
                NO_FUNCTION_DEDUCTION,
                "No function defined",
            ));
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    const COMPLETE_META: &str = r#"{
        "brick_id": "f_v1",
        "interface": {"inputs": {}, "outputs": {}},
        "dependencies": [],
        "tests": ["test_f"]
    }"#;

    fn write_brick(dir: &Path, source: &str, meta: Option<&str>) -> PathBuf {
        let brick = dir.join("f.py");
        std::fs::write(&brick, source).expect("should write brick");
        if let Some(meta) = meta {
            std::fs::write(metadata::sidecar_path(&brick), meta).expect("should write sidecar");
        }
        brick
    }

    fn scan(brick: &Path) -> ScanOutcome {
        let unit = SourceUnit::load(brick).expect("brick should load");
        ContractScanner::new()
            .scan(&unit)
            .expect("contract scan should not fail")
    }

    #[test]
    fn test_complete_contract_is_clean() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(dir.path(), "def f():\n    pass\n", Some(COMPLETE_META));
        let outcome = scan(&brick);
        assert_eq!(outcome.deduction, 0);
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn test_missing_sidecar_is_single_20_point_finding() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(dir.path(), "def f():\n    pass\n", None);
        let outcome = scan(&brick);
        assert_eq!(outcome.deduction, 20);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].message, "Missing metadata file");
    }

    #[test]
    fn test_invalid_json_is_single_20_point_finding() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(dir.path(), "def f():\n    pass\n", Some("{broken"));
        let outcome = scan(&brick);
        assert_eq!(outcome.deduction, 20);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].message, "Invalid metadata JSON");
    }

    #[test]
    fn test_each_missing_field_deducts_5() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(
            dir.path(),
            "def f():\n    pass\n",
            Some(r#"{"brick_id": "f_v1", "interface": {}}"#),
        );
        let outcome = scan(&brick);
        assert_eq!(outcome.deduction, 10);
        let messages: Vec<_> = outcome.findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing metadata field: dependencies",
                "Missing metadata field: tests",
            ]
        );
    }

    #[test]
    fn test_no_top_level_function_deducts_10() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(dir.path(), "x = 1\n", Some(COMPLETE_META));
        let outcome = scan(&brick);
        assert_eq!(outcome.deduction, 10);
        assert_eq!(outcome.findings[0].message, "No function defined");
    }

    #[test]
    fn test_syntax_error_replaces_function_check() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(dir.path(), "def broken(:\n", Some(COMPLETE_META));
        let outcome = scan(&brick);
        assert_eq!(outcome.deduction, 20);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].message, "Syntax error in code");
    }

    #[test]
    fn test_field_checks_stack_with_code_checks() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(dir.path(), "x = 1\n", Some(r#"{"interface": {}}"#));
        let outcome = scan(&brick);
        // brick_id, dependencies, tests missing (15) + no function (10)
        assert_eq!(outcome.deduction, 25);
        assert_eq!(outcome.findings.len(), 4);
    }
}
