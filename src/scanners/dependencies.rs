//! Dependency risk scanner
//!
//! Walks the brick's import statements and flags any whose module
//! exactly matches the risk list: unsafe-deserialization modules and
//! raw OS-command execution.

use crate::loader::SourceUnit;
use crate::models::{Finding, Severity};
use crate::scanners::{ScanOutcome, Scanner};
use anyhow::Result;

const RISKY_IMPORT_DEDUCTION: u32 = 5;
const SYNTAX_ERROR_DEDUCTION: u32 = 10;

/// Modules a brick must not import. Exact match only.
const RISKY_IMPORTS: &[&str] = &["pickle", "marshal", "shelve", "os.system"];

/// Flags imports of known-risky modules
pub struct DependencyScanner;

impl DependencyScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DependencyScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for DependencyScanner {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn scan(&self, unit: &SourceUnit) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        if !unit.has_valid_syntax() {
            outcome.push(Finding::new(
                self.name(),
                Severity::Risk,
                SYNTAX_ERROR_DEDUCTION,
                "Syntax error",
            ));
            return Ok(outcome);
        }

        for module in unit.imports() {
            if RISKY_IMPORTS.contains(&module.as_str()) {
                outcome.push(Finding::new(
                    self.name(),
                    Severity::Risk,
                    RISKY_IMPORT_DEDUCTION,
                    format!("Risky import: {module}"),
                ));
            }
        }

        Ok(outcome)
    }
}
