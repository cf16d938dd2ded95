//! Merge rules: defaults, override order, conflict handling.

use crate::raster::DEFAULT_FONT_PATH;
use crate::tree::serializer::DEFAULT_LABELED_INDENT;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("render.font_path", DEFAULT_FONT_PATH)?
        .set_default("render.text_file", "project-map.txt")?
        .set_default("render.image_file", "project-map.png")?
        .set_default("render.labeled_indent", DEFAULT_LABELED_INDENT)?
        .set_default("walker.follow_symlinks", false)?
        .set_default("walker.max_depth", 0)
}
