//! `validate` command: structural checks for one brick

use crate::validator;
use anyhow::Result;
use console::style;
use std::path::Path;

pub fn run(brick_file: &Path) -> Result<i32> {
    let outcome = validator::validate_brick(brick_file)?;

    println!("Validating: {}", brick_file.display());
    if outcome.is_valid() {
        println!("\n{} Brick is valid", style("✓").green());
        Ok(0)
    } else {
        println!("\n{} Violations:", style("✗").red());
        for violation in &outcome.violations {
            println!("  • {violation}");
        }
        Ok(1)
    }
}
