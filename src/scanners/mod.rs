//! Inspection scanners and the aggregating scorer
//!
//! Four independent scanners each read the immutable [`SourceUnit`]
//! and return a deduction total plus an ordered list of findings. No
//! scanner's output depends on another's. The aggregator sums the
//! deductions, clamps the score at zero, and bands it into a rating.

pub mod contract;
pub mod dependencies;
pub mod quality;
pub mod security;

use crate::loader::SourceUnit;
use crate::models::{Finding, InspectionReport, Rating, Severity};
use anyhow::Result;
use tracing::{debug, warn};

pub use contract::ContractScanner;
pub use dependencies::DependencyScanner;
pub use quality::QualityScanner;
pub use security::SecurityScanner;

/// What one scanner produced: a non-negative deduction total and its
/// findings in discovery order
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub deduction: u32,
    pub findings: Vec<Finding>,
}

impl ScanOutcome {
    /// Record a finding, accumulating its deduction
    pub fn push(&mut self, finding: Finding) {
        self.deduction += finding.deduction;
        self.findings.push(finding);
    }
}

/// Trait for all inspection scanners
pub trait Scanner {
    fn name(&self) -> &'static str;

    /// Inspect the unit. Syntax failures in the unit are data (the
    /// scanner degrades to a fixed-deduction finding); an `Err` here
    /// means the scanner itself broke.
    fn scan(&self, unit: &SourceUnit) -> Result<ScanOutcome>;
}

/// Run one scanner, converting any internal failure into a best-effort
/// finding. A broken scanner must never look like "unit is clean" and
/// must never abort the run.
pub fn run_scanner(scanner: &dyn Scanner, unit: &SourceUnit) -> ScanOutcome {
    match scanner.scan(unit) {
        Ok(outcome) => {
            debug!(
                scanner = scanner.name(),
                deduction = outcome.deduction,
                findings = outcome.findings.len(),
                "scan complete"
            );
            outcome
        }
        Err(err) => {
            warn!(scanner = scanner.name(), error = %err, "scanner failed");
            let mut outcome = ScanOutcome::default();
            outcome.push(Finding::new(
                scanner.name(),
                Severity::Critical,
                0,
                format!("{} scanner failed: {err:#}", scanner.name()),
            ));
            outcome
        }
    }
}

/// Run all scanners over a unit and fold their outputs into a single
/// report. Pure and total: every input produces a valid report.
///
/// Findings keep fixed scanner order (security, contract, quality,
/// dependencies) with each scanner's internal order preserved.
pub fn inspect_unit(unit: &SourceUnit) -> InspectionReport {
    let security = run_scanner(&SecurityScanner::new(), unit);
    let contract = run_scanner(&ContractScanner::new(), unit);
    let quality = run_scanner(&QualityScanner::new(), unit);
    let deps = run_scanner(&DependencyScanner::new(), unit);

    let total = security.deduction + contract.deduction + quality.deduction + deps.deduction;
    let score = 100u32.saturating_sub(total);

    let mut findings = security.findings;
    findings.extend(contract.findings);
    findings.extend(quality.findings);
    findings.extend(deps.findings);

    InspectionReport {
        score,
        rating: Rating::from_score(score),
        findings,
    }
}
