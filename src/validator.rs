//! Structural validation
//!
//! A simpler pass/fail check used by the `validate` surface: size
//! limit, syntax, a docstring marker, and the metadata sidecar. A
//! strict subset of what the quality and contract scanners check, and
//! kept consistent with their thresholds.

use crate::loader::{LoadError, SourceUnit};
use crate::metadata;
use crate::scanners::quality::MAX_CODE_LINES;
use std::path::Path;

/// Outcome of a structural validation run
#[derive(Debug)]
pub struct ValidationOutcome {
    pub violations: Vec<String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate a brick file on disk
pub fn validate_brick(path: &Path) -> Result<ValidationOutcome, LoadError> {
    let unit = SourceUnit::load(path)?;
    Ok(validate_unit(&unit))
}

/// Validate an already-loaded brick
pub fn validate_unit(unit: &SourceUnit) -> ValidationOutcome {
    let mut violations = Vec::new();

    if unit.code_lines > MAX_CODE_LINES {
        violations.push(format!("Exceeds {} lines: {}", MAX_CODE_LINES, unit.code_lines));
    }

    if !unit.has_valid_syntax() {
        violations.push("Syntax error".to_string());
    }

    // Marker check only; per-function coverage is the quality
    // scanner's job
    if !unit.source.contains("\"\"\"") && !unit.source.contains("'''") {
        violations.push("Missing docstring".to_string());
    }

    let meta_path = metadata::sidecar_path(&unit.path);
    if !meta_path.is_file() {
        let name = meta_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| meta_path.display().to_string());
        violations.push(format!("Missing metadata: {name}"));
    }

    ValidationOutcome { violations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_brick(dir: &Path, source: &str, with_meta: bool) -> PathBuf {
        let brick = dir.join("unit.py");
        std::fs::write(&brick, source).expect("should write brick");
        if with_meta {
            std::fs::write(metadata::sidecar_path(&brick), "{}").expect("should write sidecar");
        }
        brick
    }

    #[test]
    fn test_valid_brick_has_no_violations() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(
            dir.path(),
            "\"\"\"Doc.\"\"\"\ndef f():\n    pass\n",
            true,
        );
        let outcome = validate_brick(&brick).expect("validation should run");
        assert!(outcome.is_valid(), "got: {:?}", outcome.violations);
    }

    #[test]
    fn test_missing_file_is_fatal_not_a_violation() {
        let err = validate_brick(Path::new("/nonexistent/unit.py"))
            .expect_err("missing file should be a load error");
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_all_four_violations_are_reported_together() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let mut source = String::from("def broken(:\n");
        for i in 0..60 {
            source.push_str(&format!("x{i} = {i}\n"));
        }
        let brick = write_brick(dir.path(), &source, false);
        let outcome = validate_brick(&brick).expect("validation should run");
        assert_eq!(outcome.violations.len(), 4);
        assert_eq!(outcome.violations[0], "Exceeds 50 lines: 61");
        assert_eq!(outcome.violations[1], "Syntax error");
        assert_eq!(outcome.violations[2], "Missing docstring");
        assert_eq!(outcome.violations[3], "Missing metadata: unit.meta.json");
    }

    #[test]
    fn test_single_quoted_docstring_marker_counts() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let brick = write_brick(dir.path(), "'''Doc.'''\ndef f():\n    pass\n", true);
        let outcome = validate_brick(&brick).expect("validation should run");
        assert!(outcome.is_valid());
    }
}
