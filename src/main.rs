//! Bricklint - brick architecture CLI
//!
//! Scaffold brick projects, generate metadata sidecars, and inspect
//! bricks for security, quality, and contract compliance.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = bricklint::cli::Cli::parse();
    match bricklint::cli::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
