//! Tree serializer: root entries to prefix-annotated lines
//!
//! Each root is loaded into a transient `TreeNode` hierarchy (depth-first, in
//! enumeration order) and flattened into `TreeLine`s. Two root styles exist
//! because the text-only and canvas commands shape their roots differently:
//!
//! - `Bare`: a directory root contributes only its descendants. Consecutive
//!   roots are separated by a single blank line.
//! - `Labeled`: a directory root contributes its own `📁 name` line, then its
//!   descendants under an indent, with no separator.
//!
//! A file root is a single `📄 name` line in both styles. A directory already
//! on the current descent path (reached again through a symlink) is emitted
//! but not expanded.

use crate::tree::document::{ProjectMap, Section};
use crate::tree::node::{Marker, TreeLine, TreeNode};
use crate::tree::path::entry_name;
use crate::tree::walker::{EntryKind, EntrySource};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Indent under a labeled directory root
pub const DEFAULT_LABELED_INDENT: &str = "   ";

/// A top-level entry chosen for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    pub path: PathBuf,
    /// Classification at selection time. Serialization re-stats the root and
    /// trusts the fresh result; a mismatch is only logged.
    pub is_directory: bool,
}

impl RootEntry {
    pub fn new(path: impl Into<PathBuf>, is_directory: bool) -> Self {
        Self {
            path: path.into(),
            is_directory,
        }
    }
}

/// How top-level roots are shaped in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootStyle {
    /// Directory roots emit only their descendants; roots are blank-line separated
    Bare,
    /// Directory roots emit their own line, descendants indented by `indent`
    Labeled { indent: String },
}

impl RootStyle {
    pub fn labeled() -> Self {
        RootStyle::Labeled {
            indent: DEFAULT_LABELED_INDENT.to_string(),
        }
    }

    /// Prefix every descendant line of a directory root starts with
    pub fn base_prefix(&self) -> &str {
        match self {
            RootStyle::Bare => "",
            RootStyle::Labeled { indent } => indent,
        }
    }
}

/// Serializes root entries through an `EntrySource`
pub struct TreeSerializer<'a, S: EntrySource + ?Sized> {
    source: &'a S,
    style: RootStyle,
    max_depth: Option<usize>,
}

impl<'a, S: EntrySource + ?Sized> TreeSerializer<'a, S> {
    pub fn new(source: &'a S, style: RootStyle) -> Self {
        Self {
            source,
            style,
            max_depth: None,
        }
    }

    /// Limit nesting below each root; `Some(1)` lists only direct children
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn style(&self) -> &RootStyle {
        &self.style
    }

    /// Serialize the roots in the given order
    ///
    /// Roots that no longer exist are skipped without emitting anything.
    #[instrument(skip(self, roots), fields(roots = roots.len()))]
    pub fn serialize(&self, roots: &[RootEntry]) -> ProjectMap {
        let mut map = match self.style {
            RootStyle::Bare => ProjectMap::separated(),
            RootStyle::Labeled { .. } => ProjectMap::new(),
        };
        for root in roots {
            if let Some(section) = self.serialize_root(root) {
                map.push(section);
            }
        }
        debug!(lines = map.line_count(), "Serialized tree");
        map
    }

    fn serialize_root(&self, root: &RootEntry) -> Option<Section> {
        let kind = match self.source.stat_entry(&root.path) {
            Some(kind) => kind,
            None => {
                debug!(path = %root.path.display(), "Skipping missing root");
                return None;
            }
        };
        if kind.is_directory() != root.is_directory {
            debug!(
                path = %root.path.display(),
                selected_as_directory = root.is_directory,
                "Root changed kind since selection"
            );
        }
        let name = entry_name(&root.path);

        if kind == EntryKind::File {
            return Some(Section::new(vec![TreeLine::root(Marker::File, &name)]));
        }

        let mut ancestors = Vec::new();
        let node = self.load(&root.path, name, true, 0, &mut ancestors);
        let mut lines = Vec::with_capacity(node.descendant_count() + 1);
        if let RootStyle::Labeled { .. } = self.style {
            lines.push(TreeLine::root(Marker::Dir, &node.name));
        }
        node.emit_children(self.style.base_prefix(), &mut lines);

        Some(Section::new(lines))
    }

    /// Build the node for `path`, descending while `expand` holds and depth allows
    ///
    /// `ancestors` holds the directory keys of the current descent path.
    fn load(
        &self,
        path: &Path,
        name: String,
        expand: bool,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
    ) -> TreeNode {
        let within_depth = self.max_depth.map_or(true, |max| depth < max);
        if !expand || !within_depth {
            return TreeNode::directory(name, Vec::new());
        }

        let key = self
            .source
            .directory_key(path)
            .unwrap_or_else(|| path.to_path_buf());
        if ancestors.contains(&key) {
            warn!(path = %path.display(), "Directory cycle, not descending");
            return TreeNode::directory(name, Vec::new());
        }

        let listing = match self.source.list_directory(path) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Unreadable directory, treating as empty"
                );
                Vec::new()
            }
        };

        ancestors.push(key);
        let mut children = Vec::with_capacity(listing.len());
        for entry in listing {
            let child = if entry.kind.is_directory() {
                self.load(&entry.path, entry.name, entry.expand, depth + 1, ancestors)
            } else {
                TreeNode::file(entry.name)
            };
            children.push(child);
        }
        ancestors.pop();

        TreeNode::directory(name, children)
    }
}
