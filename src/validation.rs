use std::path::Path;

use toml_edit::{DocumentMut, Item};

use crate::error::{Result, UncapError};
use crate::ops;

/// Checks that a parsed manifest declares a `[tool.poetry]` table.
pub fn ensure_poetry_project(doc: &DocumentMut, path: &Path) -> Result<()> {
    let has_poetry_table = doc
        .get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(Item::as_table_like)
        .is_some();

    if has_poetry_table {
        Ok(())
    } else {
        Err(UncapError::NotPoetryProject(path.to_path_buf()))
    }
}

/// Loads the manifest just to confirm it belongs to a Poetry project.
///
/// Used as a pre-flight check before shelling out to poetry, so failures
/// surface before any subprocess runs.
pub fn preflight(path: &Path) -> Result<()> {
    let doc = ops::load(path)?;
    ensure_poetry_project(&doc, path)
}
