//! Integration tests for rasterization

use super::support::{png_dimensions, system_font, MemorySource};
use project_map::raster::style::to_hex;
use project_map::raster::{write_png, ImageLayout, LineClass, RasterStyle, TreeRasterizer};
use project_map::tree::{RootEntry, RootStyle, TreeSerializer};
use image::Rgb;

#[test]
fn test_marker_colors_from_text_only() {
    let layout = ImageLayout::compute(&["📁 src", "┗━ 📄 main.go"], &RasterStyle::default());
    let colors: Vec<String> = layout.rows.iter().map(|r| to_hex(r.marker_color)).collect();
    assert_eq!(colors, vec!["#4e9a06", "#729fcf"]);
}

#[test]
fn test_image_size_ignores_content_length() {
    let style = RasterStyle::default();
    let long = "┣━ 📄 ".to_string() + &"x".repeat(500);
    for lines in [vec![], vec!["a"], vec![long.as_str(), "b", "c"]] {
        let layout = ImageLayout::compute(&lines, &style);
        assert_eq!(layout.width, 900);
        let expected = (lines.len() as f64 * 21.0 * 1.6 + 80.0).round() as u32;
        assert_eq!(layout.height, expected);
    }
}

#[test]
fn test_icon_less_line_is_plain() {
    let layout = ImageLayout::compute(&["", "   ", "notes"], &RasterStyle::default());
    assert!(layout.rows.iter().all(|r| r.class == LineClass::Plain));
    assert!(layout.rows.iter().all(|r| to_hex(r.marker_color) == "#ffffff"));
}

#[test]
fn test_rasterized_marker_boxes() {
    let Some(face) = system_font() else {
        return;
    };
    let rasterizer = TreeRasterizer::new(&face);
    let canvas = rasterizer.rasterize(&["📁 src", "┗━ 📄 main.go", ""]);

    assert_eq!(canvas.width(), 900);
    assert_eq!(canvas.height(), 181);
    assert_eq!(canvas.get_pixel(0, 0), &Rgb([0x11, 0x11, 0x11]));
    assert_eq!(canvas.get_pixel(47, 49), &Rgb([0x4e, 0x9a, 0x06]));
    assert_eq!(canvas.get_pixel(47, 83), &Rgb([0x72, 0x9f, 0xcf]));
    assert_eq!(canvas.get_pixel(47, 116), &Rgb([0xff, 0xff, 0xff]));
}

#[test]
fn test_text_is_drawn_right_of_marker() {
    let Some(face) = system_font() else {
        return;
    };
    let canvas = TreeRasterizer::new(&face).rasterize(&["📁 src"]);
    let background = Rgb([0x11, 0x11, 0x11]);

    let inked = (64..300u32)
        .flat_map(|x| (40..74u32).map(move |y| (x, y)))
        .any(|(x, y)| canvas.get_pixel(x, y) != &background);
    assert!(inked, "expected glyph pixels in the text run");

    // nothing between the marker box and the text run
    let gap_clear = (55..63u32)
        .flat_map(|x| (40..74u32).map(move |y| (x, y)))
        .all(|(x, y)| canvas.get_pixel(x, y) == &background);
    assert!(gap_clear);
}

#[test]
fn test_rasterize_text_ignores_final_newline() {
    let Some(face) = system_font() else {
        return;
    };
    let text = "┣━ 📄 a.txt\n┗━ 📁 b\n    ┗━ 📄 c.txt\n";
    let canvas = TreeRasterizer::new(&face).rasterize_text(text);
    assert_eq!((canvas.width(), canvas.height()), (900, 181));

    let mut png = Vec::new();
    write_png(&canvas, &mut png).unwrap();
    assert_eq!(png_dimensions(&png), (900, 181));
}

#[test]
fn test_serialized_roots_size_the_image() {
    let source = MemorySource::default()
        .dir("/ws", &[("proj", true), ("README.md", false)])
        .dir("/ws/proj", &[("a.txt", false), ("b", true)])
        .dir("/ws/proj/b", &[("c.txt", false)]);
    let style = RasterStyle::default();
    let serializer = TreeSerializer::new(&source, RootStyle::Bare);

    let single = serializer.serialize(&[RootEntry::new("/ws/proj", true)]).to_text();
    let rows: Vec<&str> = single.lines().collect();
    assert_eq!(ImageLayout::compute(&rows, &style).height, 181);

    // four tree lines plus one separator row
    let mixed = serializer
        .serialize(&[RootEntry::new("/ws/README.md", false), RootEntry::new("/ws/proj", true)])
        .to_text();
    let rows: Vec<&str> = mixed.lines().collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1], "");
    let layout = ImageLayout::compute(&rows, &style);
    assert_eq!(layout.height, style.image_height(5));
    assert_eq!(layout.rows[1].class, LineClass::Plain);
}
