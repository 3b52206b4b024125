//! Loading and persisting the pyproject document.
//!
//! Parsing is delegated to `toml_edit`, which keeps the original lexical
//! representation of every node so untouched content serializes byte-identical.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use toml_edit::DocumentMut;

use crate::error::{Result, UncapError};

/// Reads and parses a pyproject.toml into an editable document.
pub fn load(path: &Path) -> Result<DocumentMut> {
    if !path.exists() {
        return Err(UncapError::ManifestNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let doc: DocumentMut = contents.parse()?;

    log::debug!("Loaded {}", path.display());
    Ok(doc)
}

/// Serializes the document and writes it to `path`.
///
/// The content goes to a temporary file in the destination directory first
/// and is then atomically renamed over `path`, so a failed write never
/// leaves a truncated manifest behind.
pub fn save(doc: &DocumentMut, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(doc.to_string().as_bytes())?;
    tmp.persist(path).map_err(|e| UncapError::Io(e.error))?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}
