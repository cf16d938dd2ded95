//! Filesystem enumeration for tree serialization
//!
//! Directory listings keep the order the operating system returns them in.
//! Nothing here sorts.

use crate::error::ProjectMapError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filesystem entry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Whether the serializer may descend into this entry
    pub expand: bool,
}

/// Source of directory listings and entry metadata
pub trait EntrySource {
    /// List the direct children of `path` in enumeration order
    fn list_directory(&self, path: &Path) -> Result<Vec<ListedEntry>, ProjectMapError>;

    /// Classify `path`, or `None` if it does not exist
    fn stat_entry(&self, path: &Path) -> Option<EntryKind>;

    /// Identity of the directory at `path`; two paths reaching the same
    /// directory share a key
    fn directory_key(&self, path: &Path) -> Option<PathBuf> {
        Some(path.to_path_buf())
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Descend into symlinked directories (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Entry names skipped during traversal (exact match)
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum nesting below a root (0 = unlimited)
    #[serde(default)]
    pub max_depth: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: 0,
        }
    }
}

impl WalkerConfig {
    /// Depth limit as an option; `None` means unlimited
    pub fn depth_limit(&self) -> Option<usize> {
        (self.max_depth > 0).then_some(self.max_depth)
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignore_patterns.iter().any(|p| p == name)
    }
}

/// `EntrySource` backed by the real filesystem
#[derive(Debug, Clone, Default)]
pub struct FsEntrySource {
    config: WalkerConfig,
}

impl FsEntrySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }
}

impl EntrySource for FsEntrySource {
    fn list_directory(&self, path: &Path) -> Result<Vec<ListedEntry>, ProjectMapError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.config.is_ignored(&name) {
                continue;
            }

            let file_type = entry.file_type();
            let (kind, expand) = if file_type.is_dir() {
                (EntryKind::Directory, true)
            } else if file_type.is_symlink() {
                // Classified through the link target; a dangling link reads as a file.
                match std::fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_dir() => {
                        (EntryKind::Directory, self.config.follow_symlinks)
                    }
                    _ => (EntryKind::File, false),
                }
            } else {
                (EntryKind::File, false)
            };

            entries.push(ListedEntry {
                name,
                path: entry.into_path(),
                kind,
                expand,
            });
        }

        Ok(entries)
    }

    fn stat_entry(&self, path: &Path) -> Option<EntryKind> {
        std::fs::metadata(path).ok().map(|meta| {
            if meta.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            }
        })
    }

    fn directory_key(&self, path: &Path) -> Option<PathBuf> {
        dunce::canonicalize(path).ok()
    }
}
