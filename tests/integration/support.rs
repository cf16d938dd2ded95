//! Shared test utilities: an in-memory entry source and font lookup

#![allow(dead_code)]

use project_map::error::ProjectMapError;
use project_map::raster::{FontFace, DEFAULT_FONT_PATH};
use project_map::tree::{EntryKind, EntrySource, ListedEntry, TreeNode};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Entry source with a fixed enumeration order
#[derive(Debug, Default)]
pub struct MemorySource {
    dirs: HashMap<PathBuf, Vec<(String, bool)>>,
    files: Vec<PathBuf>,
}

impl MemorySource {
    /// Register a directory and its children in enumeration order
    pub fn dir(mut self, path: &str, children: &[(&str, bool)]) -> Self {
        let base = PathBuf::from(path);
        for (name, is_dir) in children {
            if !is_dir {
                self.files.push(base.join(name));
            }
        }
        self.dirs.insert(
            base,
            children.iter().map(|(n, d)| (n.to_string(), *d)).collect(),
        );
        self
    }

    /// Mirror a `TreeNode` hierarchy with the node itself at `path`
    pub fn from_tree(path: &Path, node: &TreeNode) -> Self {
        let mut source = MemorySource::default();
        source.insert_tree(path, node);
        source
    }

    fn insert_tree(&mut self, path: &Path, node: &TreeNode) {
        if !node.is_directory {
            self.files.push(path.to_path_buf());
            return;
        }
        let children = node
            .children
            .iter()
            .map(|c| (c.name.clone(), c.is_directory))
            .collect();
        self.dirs.insert(path.to_path_buf(), children);
        for child in &node.children {
            self.insert_tree(&path.join(&child.name), child);
        }
    }
}

impl EntrySource for MemorySource {
    fn list_directory(&self, path: &Path) -> Result<Vec<ListedEntry>, ProjectMapError> {
        let children = self
            .dirs
            .get(path)
            .ok_or_else(|| ProjectMapError::Walk(format!("not a directory: {}", path.display())))?;
        Ok(children
            .iter()
            .map(|(name, is_dir)| ListedEntry {
                name: name.clone(),
                path: path.join(name),
                kind: if *is_dir {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
                expand: *is_dir,
            })
            .collect())
    }

    fn stat_entry(&self, path: &Path) -> Option<EntryKind> {
        if self.dirs.contains_key(path) {
            Some(EntryKind::Directory)
        } else if self.files.iter().any(|f| f == path) {
            Some(EntryKind::File)
        } else {
            None
        }
    }
}

/// The system monospace font, or `None` when it is not installed
pub fn system_font() -> Option<FontFace> {
    let path = Path::new(DEFAULT_FONT_PATH);
    if !path.exists() {
        eprintln!("skipping: {} not installed", DEFAULT_FONT_PATH);
        return None;
    }
    FontFace::load(path).ok()
}

/// Width and height from a PNG's IHDR chunk
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "not a PNG");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}
