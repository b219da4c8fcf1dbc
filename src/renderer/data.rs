use anyhow::{Context, Result};
use serde_json::Value;

use std::fs;
use std::path::Path;

use super::error::Error;

/// Reads the YAML data file into the generic value tree the template engine
/// evaluates against. YAML mappings with non-scalar keys have no
/// representation on the engine side and fail the conversion.
pub fn load(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;
    let tree: serde_yaml::Value =
        serde_yaml::from_str(&text).context(Error::InvalidData(path.to_path_buf()))?;
    serde_json::to_value(tree).context(Error::UnsupportedData(path.to_path_buf()))
}
