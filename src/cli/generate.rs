//! `generate` command: produce a metadata sidecar from a spec file
//!
//! A spec declares the brick's name, interface, and dependencies; the
//! generated `.meta.json` records them along with a provenance hash of
//! the spec file itself.

use crate::metadata::{Interface, MetadataContract};
use anyhow::{bail, Context, Result};
use chrono::{SecondsFormat, Utc};
use console::style;
use serde::Deserialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::path::Path;

/// A brick specification file (JSON or TOML)
#[derive(Debug, Deserialize)]
struct BrickSpec {
    brick_name: String,
    #[serde(default)]
    inputs: Map<String, Value>,
    #[serde(default)]
    outputs: Map<String, Value>,
    #[serde(default)]
    dependencies: Vec<String>,
}

pub fn run(brick_name: &str, spec_file: &Path, output_dir: &Path) -> Result<i32> {
    if !spec_file.is_file() {
        bail!("spec file not found: {}", spec_file.display());
    }

    let raw = std::fs::read(spec_file)
        .with_context(|| format!("failed to read spec: {}", spec_file.display()))?;
    let spec = parse_spec(spec_file, &raw)?;

    let metadata = build_metadata(&spec, &raw);
    let metadata_path = output_dir.join(format!("{brick_name}.meta.json"));
    let json = serde_json::to_string_pretty(&metadata)
        .context("failed to serialize metadata")?;
    std::fs::write(&metadata_path, json)
        .with_context(|| format!("failed to write {}", metadata_path.display()))?;

    println!(
        "{} Generated metadata: {}",
        style("✓").green(),
        metadata_path.display()
    );
    println!("\nNote: brick implementation placeholder created.");
    println!("  Implement the brick manually following the spec.");
    Ok(0)
}

fn parse_spec(path: &Path, raw: &[u8]) -> Result<BrickSpec> {
    let text = std::str::from_utf8(raw)
        .with_context(|| format!("spec is not UTF-8: {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "toml" => toml::from_str(text)
            .with_context(|| format!("failed to parse TOML spec: {}", path.display())),
        _ => serde_json::from_str(text)
            .with_context(|| format!("failed to parse JSON spec: {}", path.display())),
    }
}

fn build_metadata(spec: &BrickSpec, spec_bytes: &[u8]) -> MetadataContract {
    let digest = Sha256::digest(spec_bytes);
    MetadataContract {
        brick_id: format!("{}_v1", spec.brick_name),
        generated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        model: "manual".to_string(),
        prompt_hash: format!("sha256:{digest:x}"),
        interface: Interface {
            inputs: spec.inputs.clone(),
            outputs: spec.outputs.clone(),
        },
        dependencies: spec.dependencies.clone(),
        tests: vec![format!("test_{}", spec.brick_name)],
    }
}
