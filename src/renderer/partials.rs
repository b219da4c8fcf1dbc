use anyhow::{Context, Result};
use handlebars::Handlebars;

use std::fs;
use std::path::Path;

use super::error::Error;

pub const PARTIAL_EXTENSION: &str = "hbs";

/// Registers every `.hbs` file directly inside `dir` as a partial named after
/// its file stem. Subdirectories and other extensions are skipped. The caller
/// checks that `dir` exists and is a directory.
pub fn register_all(registry: &mut Handlebars<'_>, dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read partials directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read partials directory: {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(PARTIAL_EXTENSION)
        {
            continue;
        }

        let name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read partial file: {}", path.display()))?;
        registry
            .register_template_string(&name, source)
            .context(Error::InvalidPartial(name.clone()))?;
        log::debug!("Registered partial: {}", name);
    }

    Ok(())
}
