//! Row layout and color classification
//!
//! Works purely on the text artifact: a row's class is recovered by searching
//! for the icon glyphs, which are then removed from the drawn text.

use crate::raster::style::RasterStyle;
use crate::tree::node::{DIR_ICON, FILE_ICON};
use image::Rgb;

/// Classification recovered from a text row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Directory,
    File,
    /// Neither icon present (blank separators, foreign text)
    Plain,
}

/// Classify a row by the icon glyph it contains; the directory icon wins
pub fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.contains(DIR_ICON) {
        LineClass::Directory
    } else if trimmed.contains(FILE_ICON) {
        LineClass::File
    } else {
        LineClass::Plain
    }
}

/// Text drawn for a row: trimmed, with every `icon + space` removed
pub fn strip_icons(line: &str) -> String {
    let dir_token = format!("{} ", DIR_ICON);
    let file_token = format!("{} ", FILE_ICON);
    line.trim().replace(&dir_token, "").replace(&file_token, "")
}

impl LineClass {
    pub fn marker_color(self, style: &RasterStyle) -> Rgb<u8> {
        match self {
            LineClass::Directory => style.directory_color,
            LineClass::File => style.file_color,
            LineClass::Plain => style.default_color,
        }
    }
}

/// Geometry of one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub class: LineClass,
    pub marker_color: Rgb<u8>,
    /// Top-left corner of the marker box, in whole pixels
    pub box_origin: (i64, i64),
    pub text: String,
    /// Top-left of the text run; the baseline is derived from the font ascent
    pub text_origin: (f32, f32),
}

/// Canvas size and per-row geometry for a sequence of rows
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayout {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<RowLayout>,
}

impl ImageLayout {
    pub fn compute<S: AsRef<str>>(lines: &[S], style: &RasterStyle) -> Self {
        let rows = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let line = line.as_ref();
                let y = style.row_origin(i);
                let class = classify_line(line);
                RowLayout {
                    class,
                    marker_color: class.marker_color(style),
                    box_origin: (
                        style.padding.round() as i64,
                        (y + 2.0).round() as i64,
                    ),
                    text: strip_icons(line),
                    text_origin: (style.text_x() as f32, y as f32),
                }
            })
            .collect();

        Self {
            width: style.width,
            height: style.image_height(lines.len()),
            rows,
        }
    }
}
