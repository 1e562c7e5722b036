//! `inspect` command: full compliance inspection of one brick

use crate::loader::SourceUnit;
use crate::models::Severity;
use crate::scanners;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

pub fn run(brick_file: &Path, format: &str) -> Result<i32> {
    let unit = SourceUnit::load(brick_file)?;
    let report = scanners::inspect_unit(&unit);

    if format == "json" {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize inspection report")?;
        println!("{json}");
        return Ok(if report.passed() { 0 } else { 1 });
    }

    println!("Inspecting: {}", brick_file.display());
    println!("{}", "=".repeat(50));

    println!("\nScore: {}/100", style(report.score).bold());
    println!("Rating: {}", style(&report.rating).bold());

    if report.findings.is_empty() {
        println!("\n{} No issues found", style("✓").green());
    } else {
        println!("\nIssues found:");
        for finding in &report.findings {
            let tag = match finding.severity {
                Severity::Critical => style(finding.severity).red(),
                Severity::Risk => style(finding.severity).yellow(),
                Severity::Issue | Severity::Violation => style(finding.severity).dim(),
            };
            println!("  • {}: {}", tag, finding.message);
        }
    }

    println!("{}", "=".repeat(50));

    if report.passed() {
        println!("{} Brick passes inspection", style("✓").green());
        Ok(0)
    } else {
        println!("{} Brick requires improvements", style("✗").red());
        Ok(1)
    }
}
