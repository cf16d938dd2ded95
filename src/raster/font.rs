//! Monospace font face used for rasterization
//!
//! The face must be loaded before any text is drawn. There is no fallback:
//! a missing or unparsable font file fails the rasterization call.

use crate::error::ProjectMapError;
use ab_glyph::FontVec;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of DejaVu Sans Mono on Debian-like systems
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";

/// A loaded font face and where it came from
pub struct FontFace {
    font: FontVec,
    origin: PathBuf,
}

impl FontFace {
    /// Load a font face from a file
    pub fn load(path: &Path) -> Result<Self, ProjectMapError> {
        let bytes = std::fs::read(path).map_err(|e| ProjectMapError::FontUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let face = Self::from_bytes(bytes, path)?;
        debug!(font = %path.display(), "Loaded font face");
        Ok(face)
    }

    /// Parse a font face from raw TrueType/OpenType bytes
    pub fn from_bytes(
        bytes: Vec<u8>,
        origin: impl Into<PathBuf>,
    ) -> Result<Self, ProjectMapError> {
        let origin = origin.into();
        let font = FontVec::try_from_vec(bytes)
            .map_err(|_| ProjectMapError::InvalidFont { path: origin.clone() })?;
        Ok(Self { font, origin })
    }

    pub fn font(&self) -> &FontVec {
        &self.font
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
