//! Tree node and line types
//!
//! A `TreeNode` is the transient in-memory hierarchy built while walking a root;
//! a `TreeLine` is one renderable row of the text artifact.

use std::fmt;

/// Branch glyph for the final sibling in a directory
pub const POINTER_LAST: &str = "┗━ ";
/// Branch glyph for every sibling except the final one
pub const POINTER_MID: &str = "┣━ ";
/// Icon marking a directory line
pub const DIR_ICON: &str = "📁";
/// Icon marking a file line
pub const FILE_ICON: &str = "📄";
/// Continuation segment below a final sibling
pub const BLANK_SEGMENT: &str = "    ";
/// Continuation segment below a non-final sibling
pub const BAR_SEGMENT: &str = "┃   ";
/// Width of one continuation segment, in characters
pub const SEGMENT_WIDTH: usize = 4;

/// Directory/file classification of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dir,
    File,
}

impl Marker {
    pub fn from_is_directory(is_directory: bool) -> Self {
        if is_directory {
            Marker::Dir
        } else {
            Marker::File
        }
    }

    /// Icon glyph for this marker (without the trailing space)
    pub fn icon(self) -> &'static str {
        match self {
            Marker::Dir => DIR_ICON,
            Marker::File => FILE_ICON,
        }
    }
}

/// Position of an entry among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Last,
    Mid,
}

impl Pointer {
    pub fn for_index(index: usize, sibling_count: usize) -> Self {
        if index + 1 == sibling_count {
            Pointer::Last
        } else {
            Pointer::Mid
        }
    }

    /// Branch glyph, including its trailing space
    pub fn glyph(self) -> &'static str {
        match self {
            Pointer::Last => POINTER_LAST,
            Pointer::Mid => POINTER_MID,
        }
    }

    /// Segment appended to the prefix handed down to this entry's children
    pub fn continuation(self) -> &'static str {
        match self {
            Pointer::Last => BLANK_SEGMENT,
            Pointer::Mid => BAR_SEGMENT,
        }
    }
}

/// One filesystem entry in the hierarchy being serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Base name, no separators
    pub name: String,
    pub is_directory: bool,
    /// Children in enumeration order; empty for files
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            children: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            children,
        }
    }

    /// Emit the lines for this node's descendants, depth-first pre-order.
    ///
    /// The node itself is not emitted; `prefix` is the ancestry prefix of its children.
    pub fn emit_children(&self, prefix: &str, out: &mut Vec<TreeLine>) {
        let count = self.children.len();
        for (index, child) in self.children.iter().enumerate() {
            let pointer = Pointer::for_index(index, count);
            out.push(TreeLine::branch(
                prefix,
                pointer,
                Marker::from_is_directory(child.is_directory),
                &child.name,
            ));
            if child.is_directory {
                let child_prefix = format!("{}{}", prefix, pointer.continuation());
                child.emit_children(&child_prefix, out);
            }
        }
    }

    /// Total number of descendants (not counting this node)
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// One renderable row: `<prefix><pointer><icon> <name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Ancestry glyphs, built from 4-character continuation segments
    pub prefix: String,
    /// Branch pointer; `None` for a top-level root's own line
    pub pointer: Option<Pointer>,
    pub marker: Marker,
    pub name: String,
}

impl TreeLine {
    pub fn branch(prefix: &str, pointer: Pointer, marker: Marker, name: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            pointer: Some(pointer),
            marker,
            name: name.to_string(),
        }
    }

    /// Line for a top-level root, which carries neither prefix nor pointer
    pub fn root(marker: Marker, name: &str) -> Self {
        Self {
            prefix: String::new(),
            pointer: None,
            marker,
            name: name.to_string(),
        }
    }

    /// Nesting depth below the given base prefix
    pub fn depth_below(&self, base: &str) -> usize {
        let base_width = base.chars().count();
        self.prefix.chars().count().saturating_sub(base_width) / SEGMENT_WIDTH
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        if let Some(pointer) = self.pointer {
            f.write_str(pointer.glyph())?;
        }
        write!(f, "{} {}", self.marker.icon(), self.name)
    }
}
