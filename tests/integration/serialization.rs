//! Integration tests for tree serialization

use super::support::MemorySource;
use project_map::tree::node::{BAR_SEGMENT, BLANK_SEGMENT, POINTER_LAST, POINTER_MID};
use project_map::tree::{FsEntrySource, Pointer, RootEntry, RootStyle, TreeSerializer};
use std::fs;
use tempfile::TempDir;

/// Tree with last and non-last directories at two depths
fn nested_source() -> MemorySource {
    MemorySource::default()
        .dir("/p", &[("src", true), ("docs", true), ("LICENSE", false)])
        .dir("/p/src", &[("cli", true), ("lib.rs", false)])
        .dir("/p/src/cli", &[("mod.rs", false), ("args.rs", false)])
        .dir("/p/docs", &[("book", true)])
        .dir("/p/docs/book", &[("intro.md", false)])
}

#[test]
fn test_nested_tree_text() {
    let source = nested_source();
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new("/p", true)]);

    let expected = "\
┣━ 📁 src
┃   ┣━ 📁 cli
┃   ┃   ┣━ 📄 mod.rs
┃   ┃   ┗━ 📄 args.rs
┃   ┗━ 📄 lib.rs
┣━ 📁 docs
┃   ┗━ 📁 book
┃       ┗━ 📄 intro.md
┗━ 📄 LICENSE
";
    assert_eq!(map.to_text(), expected);
}

/// Test that a continuation bar appears below every non-last sibling and nowhere else
#[test]
fn test_branch_continuation_columns() {
    let source = nested_source();
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new("/p", true)]);
    let lines: Vec<_> = map.lines().collect();

    // "book" is the last (only) child of "docs", which is not last among its siblings
    let intro = lines.iter().find(|l| l.name == "intro.md").unwrap();
    assert_eq!(intro.prefix, format!("{}{}", BAR_SEGMENT, BLANK_SEGMENT));

    // every line is either a root child or sits below a non-last top-level sibling
    for line in &lines {
        let first_segment: String = line.prefix.chars().take(4).collect();
        if !line.prefix.is_empty() {
            assert_eq!(first_segment, BAR_SEGMENT, "line {}", line);
        }
    }
}

/// Test that exactly the final child of each directory uses the last pointer
#[test]
fn test_pointer_marks_final_child() {
    let source = nested_source();
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new("/p", true)]);

    let last: Vec<&str> = map
        .lines()
        .filter(|l| l.pointer == Some(Pointer::Last))
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(last, vec!["args.rs", "lib.rs", "book", "intro.md", "LICENSE"]);
}

#[test]
fn test_line_count_matches_non_blank_text_lines() {
    let source = nested_source().dir("/q", &[("only.txt", false)]);
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new("/p", true), RootEntry::new("/q", true)]);

    let text = map.to_text();
    let non_blank = text.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(map.line_count(), non_blank);
    assert_eq!(text.lines().filter(|l| l.is_empty()).count(), 1);
}

#[test]
fn test_roots_separated_by_blank_line() {
    let source = MemorySource::default()
        .dir("/a", &[("x", false)])
        .dir("/b", &[("y", false)]);
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new("/a", true), RootEntry::new("/b", true)]);
    assert_eq!(map.to_text(), "┗━ 📄 x\n\n┗━ 📄 y\n");
}

#[test]
fn test_file_root_then_directory_root_is_separated() {
    let source = MemorySource::default()
        .dir("/ws", &[("README.md", false), ("d", true)])
        .dir("/ws/d", &[("x", false)]);
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new("/ws/README.md", false), RootEntry::new("/ws/d", true)]);
    assert_eq!(map.to_text(), "📄 README.md\n\n┗━ 📄 x\n");
}

#[test]
fn test_labeled_roots_are_not_separated() {
    let source = MemorySource::default()
        .dir("/ws/a", &[("x", false), ("y", false)])
        .dir("/ws", &[("a", true), ("z.txt", false)]);
    let map = TreeSerializer::new(&source, RootStyle::labeled())
        .serialize(&[RootEntry::new("/ws/a", true), RootEntry::new("/ws/z.txt", false)]);
    assert_eq!(
        map.to_text(),
        format!("📁 a\n   {}📄 x\n   {}📄 y\n📄 z.txt\n", POINTER_MID, POINTER_LAST)
    );
}

/// End-to-end on the real filesystem: one file and one directory with a file
#[test]
fn test_real_filesystem_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("b").join("c.txt"), "c").unwrap();

    let source = FsEntrySource::new();
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new(&root, true)]);

    // Enumeration order is whatever the OS returns
    let a_first = "┣━ 📄 a.txt\n┗━ 📁 b\n    ┗━ 📄 c.txt\n";
    let b_first = "┣━ 📁 b\n┃   ┗━ 📄 c.txt\n┗━ 📄 a.txt\n";
    let text = map.to_text();
    assert!(text == a_first || text == b_first, "unexpected tree:\n{}", text);
    assert_eq!(map.line_count(), 3);
}

#[test]
fn test_root_deleted_before_serialization_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let kept = temp_dir.path().join("kept.txt");
    let gone = temp_dir.path().join("gone");
    fs::write(&kept, "x").unwrap();

    let source = FsEntrySource::new();
    let map = TreeSerializer::new(&source, RootStyle::Bare)
        .serialize(&[RootEntry::new(&gone, true), RootEntry::new(&kept, false)]);
    assert_eq!(map.to_text(), "📄 kept.txt\n");
}
