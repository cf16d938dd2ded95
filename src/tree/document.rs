//! Serialized tree document and its text artifact form

use crate::tree::node::TreeLine;

/// Lines produced for one top-level root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub lines: Vec<TreeLine>,
}

impl Section {
    pub fn new(lines: Vec<TreeLine>) -> Self {
        Self { lines }
    }
}

/// Ordered output of one serialization call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMap {
    sections: Vec<Section>,
    /// Put one blank row between consecutive sections
    separated: bool,
}

impl ProjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map whose sections are separated by a single blank row
    pub fn separated() -> Self {
        Self {
            sections: Vec::new(),
            separated: true,
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All tree lines in output order, separators excluded
    pub fn lines(&self) -> impl Iterator<Item = &TreeLine> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }

    /// Rows of the text artifact, blank separators included, without terminators
    pub fn text_lines(&self) -> Vec<String> {
        let mut rows = Vec::with_capacity(self.line_count() + self.sections.len());
        for section in self.sections.iter().filter(|s| !s.lines.is_empty()) {
            if self.separated && !rows.is_empty() {
                rows.push(String::new());
            }
            rows.extend(section.lines.iter().map(|l| l.to_string()));
        }
        rows
    }

    /// The text artifact: every row terminated by `\n`
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for row in self.text_lines() {
            text.push_str(&row);
            text.push('\n');
        }
        text
    }
}
