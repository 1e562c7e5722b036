//! Quality scanner
//!
//! Checks the brick against the size limit and the documentation
//! rules: a unit-level docstring plus one per function definition.
//! All checks except size need the syntax tree, so an unparseable
//! brick short-circuits to a single fixed syntax-error finding.

use crate::loader::SourceUnit;
use crate::models::{Finding, Severity};
use crate::scanners::{ScanOutcome, Scanner};
use anyhow::Result;

/// A brick is a size-bounded unit: at most this many non-blank lines
pub const MAX_CODE_LINES: usize = 50;

const OVERSIZE_DEDUCTION: u32 = 10;
const MODULE_DOC_DEDUCTION: u32 = 5;
const FUNCTION_DOC_DEDUCTION: u32 = 3;
const SYNTAX_ERROR_DEDUCTION: u32 = 20;

/// Checks size limits and documentation coverage
pub struct QualityScanner;

impl QualityScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QualityScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for QualityScanner {
    fn name(&self) -> &'static str {
        "quality"
    }

    fn scan(&self, unit: &SourceUnit) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        if !unit.has_valid_syntax() {
            // The tree is required for the remaining checks; no
            // partial results
            outcome.push(Finding::new(
                self.name(),
                Severity::Issue,
                SYNTAX_ERROR_DEDUCTION,
                "Syntax error",
            ));
            return Ok(outcome);
        }

        if unit.code_lines > MAX_CODE_LINES {
            outcome.push(Finding::new(
                self.name(),
                Severity::Issue,
                OVERSIZE_DEDUCTION,
                format!("Exceeds {} lines: {} lines", MAX_CODE_LINES, unit.code_lines),
            ));
        }

        if !unit.has_module_docstring() {
            outcome.push(Finding::new(
                self.name(),
                Severity::Issue,
                MODULE_DOC_DEDUCTION,
                "Missing module docstring",
            ));
        }

        for func in unit.functions() {
            if !func.has_docstring {
                outcome.push(Finding::new(
                    self.name(),
                    Severity::Issue,
                    FUNCTION_DOC_DEDUCTION,
                    format!("Missing docstring: {}", func.name),
                ));
            }
        }

        Ok(outcome)
    }
}
