//! Tree rasterization
//!
//! Turns the text artifact into a fixed-width PNG: dark background, one
//! color-coded marker box and one monospace text run per row.

pub mod draw;
pub mod font;
pub mod layout;
pub mod style;

pub use draw::{write_png, TreeRasterizer};
pub use font::{FontFace, DEFAULT_FONT_PATH};
pub use layout::{classify_line, strip_icons, ImageLayout, LineClass, RowLayout};
pub use style::RasterStyle;
