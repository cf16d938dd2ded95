//! Path helpers for root entries

use crate::error::ProjectMapError;
use std::path::{Path, PathBuf};

/// Canonicalize a workspace root
///
/// Uses dunce so Windows paths stay free of the `\\?\` prefix.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, ProjectMapError> {
    dunce::canonicalize(path).map_err(|e| {
        ProjectMapError::InvalidInput(format!(
            "Failed to canonicalize {}: {}",
            path.display(),
            e
        ))
    })
}

/// Display name of an entry: its base name, or the whole path when it has none
pub fn entry_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
