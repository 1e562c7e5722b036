//! Metadata contract sidecar
//!
//! Every brick carries a `.meta.json` sidecar next to it declaring its
//! identity, interface, dependencies, and tests. The contract scanner
//! cross-checks a brick against this record; the `generate` command
//! writes one from a spec file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Fields a metadata record must declare. Each missing field is a
/// separate contract finding.
pub const REQUIRED_FIELDS: &[&str] = &["brick_id", "interface", "dependencies", "tests"];

/// Declared inputs and outputs of a brick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub inputs: Map<String, Value>,
    #[serde(default)]
    pub outputs: Map<String, Value>,
}

/// The full metadata record as written by `generate`. Loading for
/// contract checks goes through [`load_raw`] instead so that a record
/// with absent or oddly-typed fields still loads - field-level
/// problems are findings, not parse failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataContract {
    pub brick_id: String,
    pub generated: String,
    pub model: String,
    /// Provenance hash of the spec the brick was generated from,
    /// `sha256:<hex>`
    pub prompt_hash: String,
    pub interface: Interface,
    pub dependencies: Vec<String>,
    pub tests: Vec<String>,
}

/// Sidecar path for a brick: same base name, `.meta.json` suffix
pub fn sidecar_path(brick: &Path) -> PathBuf {
    brick.with_extension("meta.json")
}

/// Why a metadata record failed to load
#[derive(Debug, PartialEq, Eq)]
pub enum MetadataError {
    Missing,
    Unreadable(String),
    Invalid,
}

/// Load a metadata record as a raw JSON object, keeping absent fields
/// observable. Anything that is not a JSON object counts as invalid.
pub fn load_raw(path: &Path) -> Result<Map<String, Value>, MetadataError> {
    if !path.is_file() {
        return Err(MetadataError::Missing);
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| MetadataError::Unreadable(e.to_string()))?;
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) | Err(_) => Err(MetadataError::Invalid),
    }
}
