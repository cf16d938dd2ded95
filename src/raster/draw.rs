//! Tree rasterizer: text rows to a PNG canvas

use crate::error::ProjectMapError;
use crate::raster::font::FontFace;
use crate::raster::layout::ImageLayout;
use crate::raster::style::RasterStyle;
use ab_glyph::{point, Font, GlyphId, PxScale, ScaleFont};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::io::Write;
use tracing::{debug, instrument};

/// Draws text rows onto a fixed-width canvas with one marker box per row
pub struct TreeRasterizer<'f> {
    face: &'f FontFace,
    style: RasterStyle,
}

impl<'f> TreeRasterizer<'f> {
    pub fn new(face: &'f FontFace) -> Self {
        Self {
            face,
            style: RasterStyle::default(),
        }
    }

    pub fn with_style(mut self, style: RasterStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &RasterStyle {
        &self.style
    }

    /// Rasterize a text artifact; the final newline does not produce a row
    pub fn rasterize_text(&self, text: &str) -> RgbImage {
        let lines: Vec<&str> = text.lines().collect();
        self.rasterize(&lines)
    }

    /// Rasterize rows in order, one row band per entry
    #[instrument(skip(self, lines), fields(rows = lines.len()))]
    pub fn rasterize<S: AsRef<str>>(&self, lines: &[S]) -> RgbImage {
        let layout = ImageLayout::compute(lines, &self.style);
        let mut canvas = RgbImage::from_pixel(layout.width, layout.height, self.style.background);

        for row in &layout.rows {
            let (x, y) = row.box_origin;
            fill_rect(
                &mut canvas,
                x,
                y,
                self.style.icon_size,
                self.style.icon_size,
                row.marker_color,
            );
            let (tx, ty) = row.text_origin;
            self.draw_text(&mut canvas, &row.text, tx, ty);
        }

        debug!(width = layout.width, height = layout.height, "Rasterized tree");
        canvas
    }

    /// Draw `text` with its em box top at `top`
    fn draw_text(&self, canvas: &mut RgbImage, text: &str, left: f32, top: f32) {
        let font = self.face.font();
        let scale = PxScale::from(self.style.font_size);
        let scaled = font.as_scaled(scale);
        let baseline = top + scaled.ascent();
        let color = self.style.text_color;

        let mut caret = left;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + i64::from(gx);
                let py = bounds.min.y as i64 + i64::from(gy);
                blend_pixel(canvas, px, py, color, coverage);
            });
        }
    }
}

/// Encode a canvas as PNG into `sink`
pub fn write_png<W: Write>(canvas: &RgbImage, sink: W) -> Result<(), ProjectMapError> {
    PngEncoder::new(sink).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

fn fill_rect(canvas: &mut RgbImage, x: i64, y: i64, w: u32, h: u32, color: Rgb<u8>) {
    for py in y..y + i64::from(h) {
        for px in x..x + i64::from(w) {
            if let Some((cx, cy)) = clip(canvas, px, py) {
                canvas.put_pixel(cx, cy, color);
            }
        }
    }
}

fn blend_pixel(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    let Some((cx, cy)) = clip(canvas, x, y) else {
        return;
    };
    let alpha = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(cx, cy);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = f32::from(*dst) * (1.0 - alpha) + f32::from(src) * alpha;
        *dst = mixed.round() as u8;
    }
}

fn clip(canvas: &RgbImage, x: i64, y: i64) -> Option<(u32, u32)> {
    let in_bounds =
        x >= 0 && y >= 0 && x < i64::from(canvas.width()) && y < i64::from(canvas.height());
    in_bounds.then(|| (x as u32, y as u32))
}
