//! Artifact persistence
//!
//! Artifacts are written to a temporary file in the destination directory and
//! renamed into place, so a failed write never leaves a partial file under the
//! final name.

use crate::error::ProjectMapError;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Write `bytes` to `path` atomically
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ProjectMapError> {
    write_atomic_with(path, |sink| {
        sink.write_all(bytes)?;
        Ok(())
    })
}

/// Stream content into `path` atomically through `fill`
pub fn write_atomic_with<F>(path: &Path, fill: F) -> Result<(), ProjectMapError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), ProjectMapError>,
{
    let persist_err = |source: std::io::Error| ProjectMapError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(persist_err)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        fill(&mut writer)?;
        writer.flush().map_err(persist_err)?;
    }
    temp.as_file().sync_all().map_err(persist_err)?;
    temp.persist(path).map_err(|e| persist_err(e.error))?;

    info!(path = %path.display(), "Wrote artifact");
    Ok(())
}
