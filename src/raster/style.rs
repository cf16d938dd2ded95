//! Raster style constants

use image::Rgb;

/// Fixed layout and color parameters for the raster artifact
#[derive(Debug, Clone, PartialEq)]
pub struct RasterStyle {
    /// Canvas width in pixels, independent of content
    pub width: u32,
    /// Font size in pixels
    pub font_size: f32,
    /// Line height as a multiple of the font size
    pub line_height_factor: f64,
    /// Outer padding on every side
    pub padding: f64,
    /// Side of the square marker box
    pub icon_size: u32,
    /// Horizontal gap between marker box and text
    pub text_gap: f64,
    pub background: Rgb<u8>,
    pub directory_color: Rgb<u8>,
    pub file_color: Rgb<u8>,
    /// Marker color for lines with neither icon
    pub default_color: Rgb<u8>,
    pub text_color: Rgb<u8>,
}

impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            width: 900,
            font_size: 21.0,
            line_height_factor: 1.6,
            padding: 40.0,
            icon_size: 14,
            text_gap: 10.0,
            background: Rgb([0x11, 0x11, 0x11]),
            directory_color: Rgb([0x4e, 0x9a, 0x06]),
            file_color: Rgb([0x72, 0x9f, 0xcf]),
            default_color: Rgb([0xff, 0xff, 0xff]),
            text_color: Rgb([0xee, 0xee, 0xee]),
        }
    }
}

impl RasterStyle {
    pub fn line_height(&self) -> f64 {
        f64::from(self.font_size) * self.line_height_factor
    }

    /// Canvas height for `line_count` rows, rounded to the nearest pixel
    pub fn image_height(&self, line_count: usize) -> u32 {
        let exact = line_count as f64 * self.line_height() + self.padding * 2.0;
        exact.round() as u32
    }

    /// Top edge of row `index`
    pub fn row_origin(&self, index: usize) -> f64 {
        self.padding + index as f64 * self.line_height()
    }

    /// Left edge of the text run
    pub fn text_x(&self) -> f64 {
        self.padding + f64::from(self.icon_size) + self.text_gap
    }
}

/// Format a color as `#rrggbb`
pub fn to_hex(color: Rgb<u8>) -> String {
    let Rgb([r, g, b]) = color;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
