//! Property-based tests for serialization and layout invariants

use super::support::MemorySource;
use project_map::raster::{ImageLayout, RasterStyle};
use project_map::tree::node::{BAR_SEGMENT, BLANK_SEGMENT};
use project_map::tree::{Pointer, RootEntry, RootStyle, TreeLine, TreeNode, TreeSerializer};
use proptest::prelude::*;
use std::path::Path;

fn arb_tree() -> impl Strategy<Value = TreeNode> {
    let leaf = "[a-z]{1,6}".prop_map(|name| TreeNode::file(name));
    let node = leaf.prop_recursive(4, 48, 5, |inner| {
        ("[a-z]{1,6}", prop::collection::vec(inner, 0..5))
            .prop_map(|(name, children)| TreeNode::directory(name, dedup(children)))
    });
    prop::collection::vec(node, 0..6)
        .prop_map(|children| TreeNode::directory("root", dedup(children)))
}

/// Sibling names must be unique to mirror a real directory
fn dedup(children: Vec<TreeNode>) -> Vec<TreeNode> {
    let mut seen = std::collections::HashSet::new();
    children
        .into_iter()
        .filter(|c| seen.insert(c.name.clone()))
        .collect()
}

/// Expected prefix for every emitted line, derived from ancestor positions
fn expected_prefixes(node: &TreeNode, ancestors: &mut Vec<bool>, out: &mut Vec<String>) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let prefix: String = ancestors
            .iter()
            .map(|&is_last| if is_last { BLANK_SEGMENT } else { BAR_SEGMENT })
            .collect();
        out.push(prefix);
        if child.is_directory {
            ancestors.push(i + 1 == count);
            expected_prefixes(child, ancestors, out);
            ancestors.pop();
        }
    }
}

fn emit(tree: &TreeNode) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    tree.emit_children("", &mut lines);
    lines
}

proptest! {
    #[test]
    fn continuation_bar_iff_ancestor_not_last(tree in arb_tree()) {
        let lines = emit(&tree);
        let mut expected = Vec::new();
        expected_prefixes(&tree, &mut Vec::new(), &mut expected);

        prop_assert_eq!(lines.len(), expected.len());
        for (line, prefix) in lines.iter().zip(&expected) {
            prop_assert_eq!(&line.prefix, prefix);
            prop_assert_eq!(line.prefix.chars().count() % 4, 0);
        }
    }

    #[test]
    fn exactly_one_last_pointer_per_directory(tree in arb_tree()) {
        fn check(node: &TreeNode) -> Result<(), TestCaseError> {
            if !node.children.is_empty() {
                let mut lines = Vec::new();
                TreeNode::directory(node.name.clone(), node.children.clone())
                    .emit_children("", &mut lines);
                let direct: Vec<&TreeLine> =
                    lines.iter().filter(|l| l.prefix.is_empty()).collect();
                prop_assert_eq!(direct.len(), node.children.len());
                let last_count = direct
                    .iter()
                    .filter(|l| l.pointer == Some(Pointer::Last))
                    .count();
                prop_assert_eq!(last_count, 1);
                prop_assert_eq!(direct.last().unwrap().pointer, Some(Pointer::Last));
            }
            for child in &node.children {
                check(child)?;
            }
            Ok(())
        }
        check(&tree)?;
    }

    #[test]
    fn line_count_matches_text_artifact(tree in arb_tree()) {
        let root = Path::new("/root");
        let source = MemorySource::from_tree(root, &tree);
        let map = TreeSerializer::new(&source, RootStyle::Bare)
            .serialize(&[RootEntry::new(root, true)]);

        prop_assert_eq!(map.line_count(), tree.descendant_count());
        let text = map.to_text();
        let non_blank = text.lines().filter(|l| !l.is_empty()).count();
        prop_assert_eq!(map.line_count(), non_blank);
        // a single root has no separator rows
        prop_assert_eq!(text.lines().count(), map.line_count());
    }

    #[test]
    fn image_height_follows_row_count(rows in prop::collection::vec(".{0,40}", 0..200)) {
        let style = RasterStyle::default();
        let layout = ImageLayout::compute(&rows, &style);
        let expected = (rows.len() as f64 * 21.0 * 1.6 + 80.0).round() as u32;
        prop_assert_eq!(layout.width, 900);
        prop_assert_eq!(layout.height, expected);
        prop_assert_eq!(layout.rows.len(), rows.len());
    }
}
