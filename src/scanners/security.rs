//! Security pattern scanner
//!
//! Matches the brick's raw text against two ordered rule tables:
//! banned patterns (dynamic code execution, shell-with-input, unsafe
//! deserialization) and risky patterns (credential-shaped literals,
//! string-built SQL). Text-only, so it works on bricks that do not
//! parse. Each rule deducts at most once no matter how often it
//! matches, and every rule is evaluated - no short-circuit after the
//! first hit.

use crate::loader::SourceUnit;
use crate::models::{Finding, Severity};
use crate::scanners::{ScanOutcome, Scanner};
use anyhow::Result;
use regex::{Regex, RegexBuilder};

const BANNED_DEDUCTION: u32 = 30;
const RISKY_DEDUCTION: u32 = 20;

/// Banned patterns: (regex, message). Order is finding order.
const BANNED_PATTERNS: &[(&str, &str)] = &[
    (r"eval\s*\(", "eval() on untrusted input"),
    (r"exec\s*\(", "exec() on untrusted input"),
    (r"shell\s*=\s*True", "shell=True with user input"),
    (r"__import__\s*\(", "dynamic __import__()"),
    (r"pickle\.loads?\s*\(", "pickle.loads() on untrusted data"),
];

/// Risky patterns: (regex, message). Order is finding order.
const RISKY_PATTERNS: &[(&str, &str)] = &[
    (r#"password\s*=\s*['"][^'"]{8,}"#, "hardcoded password"),
    (r#"api[_-]?key\s*=\s*['"][^'"]{8,}"#, "hardcoded API key"),
    (r#"secret\s*=\s*['"][^'"]{8,}"#, "hardcoded secret"),
    (r"SELECT.*\+.*FROM", "SQL injection risk"),
];

struct SecurityRule {
    pattern: Regex,
    message: &'static str,
    severity: Severity,
    deduction: u32,
}

/// Scans raw brick text for forbidden and risky lexical patterns
pub struct SecurityScanner {
    rules: Vec<SecurityRule>,
}

impl SecurityScanner {
    pub fn new() -> Self {
        let mut rules = Vec::with_capacity(BANNED_PATTERNS.len() + RISKY_PATTERNS.len());
        for &(pattern, message) in BANNED_PATTERNS {
            rules.push(SecurityRule {
                pattern: compile(pattern),
                message,
                severity: Severity::Critical,
                deduction: BANNED_DEDUCTION,
            });
        }
        for &(pattern, message) in RISKY_PATTERNS {
            rules.push(SecurityRule {
                pattern: compile(pattern),
                message,
                severity: Severity::Risk,
                deduction: RISKY_DEDUCTION,
            });
        }
        Self { rules }
    }
}

/// All rules match case-insensitively
fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("valid regex: pattern built from hardcoded constants")
}

impl Default for SecurityScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for SecurityScanner {
    fn name(&self) -> &'static str {
        "security"
    }

    fn scan(&self, unit: &SourceUnit) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();
        for rule in &self.rules {
            // Once per rule, not per occurrence
            if rule.pattern.is_match(&unit.source) {
                outcome.push(Finding::new(
                    self.name(),
                    rule.severity,
                    rule.deduction,
                    rule.message,
                ));
            }
        }
        Ok(outcome)
    }
}
