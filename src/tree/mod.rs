//! Filesystem tree serialization
//!
//! Walks selected roots in enumeration order and produces the prefix-annotated
//! line sequence that forms the text artifact.

pub mod document;
pub mod node;
pub mod path;
pub mod serializer;
pub mod walker;

pub use document::{ProjectMap, Section};
pub use node::{Marker, Pointer, TreeLine, TreeNode};
pub use serializer::{RootEntry, RootStyle, TreeSerializer};
pub use walker::{EntryKind, EntrySource, FsEntrySource, ListedEntry, WalkerConfig};
