//! Core data models for Bricklint
//!
//! These models are used throughout the codebase for representing
//! findings, ratings, and inspection reports.

use serde::Serialize;

/// Score at or above which a brick passes inspection.
pub const PASSING_SCORE: u32 = 70;

/// Severity classes for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Banned pattern that must never ship (e.g. eval on untrusted input)
    Critical,
    /// Risky pattern or dependency worth a close look
    Risk,
    /// Quality issue (size, documentation)
    Issue,
    /// Contract violation against the metadata sidecar
    Violation,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Risk => write!(f, "RISK"),
            Severity::Issue => write!(f, "ISSUE"),
            Severity::Violation => write!(f, "VIOLATION"),
        }
    }
}

/// A single scanner observation with the deduction it carries
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Name of the scanner that produced this finding
    pub scanner: &'static str,
    pub severity: Severity,
    pub message: String,
    /// Points subtracted from the base score of 100
    pub deduction: u32,
}

impl Finding {
    pub fn new(
        scanner: &'static str,
        severity: Severity,
        deduction: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            scanner,
            severity,
            message: message.into(),
            deduction,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Qualitative rating band derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    Excellent,
    Good,
    // JSON band name matches the displayed label, space included
    #[serde(rename = "NEEDS WORK")]
    NeedsWork,
    Poor,
}

impl Rating {
    /// Band a score into a rating. Boundaries are closed at 90, 70, 50.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => Rating::Excellent,
            s if s >= 70 => Rating::Good,
            s if s >= 50 => Rating::NeedsWork,
            _ => Rating::Poor,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "EXCELLENT"),
            Rating::Good => write!(f, "GOOD"),
            Rating::NeedsWork => write!(f, "NEEDS WORK"),
            Rating::Poor => write!(f, "POOR"),
        }
    }
}

/// Result of one inspection run. Constructed once by the aggregator,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    /// Compliance score, always within 0..=100
    pub score: u32,
    pub rating: Rating,
    /// Findings in fixed scanner order, discovery order within a scanner
    pub findings: Vec<Finding>,
}

impl InspectionReport {
    pub fn passed(&self) -> bool {
        self.score >= PASSING_SCORE
    }
}
