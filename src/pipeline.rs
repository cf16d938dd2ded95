//! Project map commands
//!
//! `generate` writes the text artifact with labeled roots. `canvas` writes the
//! text artifact with bare roots, then rasterizes the persisted text into the
//! image artifact. An empty selection writes nothing and reports
//! `Outcome::NoSelection`.

use crate::artifact;
use crate::config::ProjectMapConfig;
use crate::error::ProjectMapError;
use crate::raster::{write_png, FontFace, RasterStyle, TreeRasterizer};
use crate::selection::{self, Candidate};
use crate::tree::serializer::{RootEntry, RootStyle, TreeSerializer};
use crate::tree::walker::FsEntrySource;
use crate::tree::ProjectMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Result of a tree command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing was selected; no artifact was written
    NoSelection,
    /// Artifacts were written
    Written(Artifacts),
}

/// Paths and sizes of written artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    pub text_path: PathBuf,
    /// Tree lines in the text artifact, blank separators excluded
    pub line_count: usize,
    /// Roots that still existed when serialized
    pub root_count: usize,
    pub image: Option<ImageArtifact>,
}

/// A written raster artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageArtifact {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Runs the tree commands for one workspace
pub struct ProjectMapper {
    workspace_root: PathBuf,
    config: ProjectMapConfig,
    source: FsEntrySource,
    style: RasterStyle,
}

impl ProjectMapper {
    pub fn new(workspace_root: PathBuf, config: ProjectMapConfig) -> Self {
        let source = FsEntrySource::with_config(config.walker.clone());
        Self {
            workspace_root,
            config,
            source,
            style: RasterStyle::default(),
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &ProjectMapConfig {
        &self.config
    }

    /// Top-level entries of the workspace, all pre-picked
    pub fn candidates(&self) -> Result<Vec<Candidate>, ProjectMapError> {
        selection::list_candidates(&self.source, &self.workspace_root)
    }

    pub fn text_path(&self) -> PathBuf {
        self.config
            .render
            .resolve(&self.workspace_root, &self.config.render.text_file)
    }

    pub fn image_path(&self) -> PathBuf {
        self.config
            .render
            .resolve(&self.workspace_root, &self.config.render.image_file)
    }

    /// Serialize roots with the given style, honoring the walker's depth limit
    pub fn serialize(&self, roots: &[RootEntry], style: RootStyle) -> ProjectMap {
        TreeSerializer::new(&self.source, style)
            .with_max_depth(self.config.walker.depth_limit())
            .serialize(roots)
    }

    /// Text-only command: labeled roots, no separators
    #[instrument(skip(self, roots), fields(workspace = %self.workspace_root.display()))]
    pub fn generate(&self, roots: &[RootEntry]) -> Result<Outcome, ProjectMapError> {
        if roots.is_empty() {
            warn!("No selection made");
            return Ok(Outcome::NoSelection);
        }

        let style = RootStyle::Labeled {
            indent: self.config.render.labeled_indent.clone(),
        };
        let artifacts = self.write_text(roots, style)?;
        Ok(Outcome::Written(artifacts))
    }

    /// Text and image command: bare roots separated by blank lines
    #[instrument(skip(self, roots), fields(workspace = %self.workspace_root.display()))]
    pub fn canvas(&self, roots: &[RootEntry]) -> Result<Outcome, ProjectMapError> {
        if roots.is_empty() {
            warn!("No selection made");
            return Ok(Outcome::NoSelection);
        }

        let mut artifacts = self.write_text(roots, RootStyle::Bare)?;
        let image = self.render(&artifacts.text_path, &self.image_path())?;
        artifacts.image = Some(image);
        Ok(Outcome::Written(artifacts))
    }

    /// Rasterize a persisted text artifact into a PNG
    ///
    /// The font is loaded first; without it nothing is written.
    #[instrument(skip(self))]
    pub fn render(
        &self,
        text_path: &Path,
        image_path: &Path,
    ) -> Result<ImageArtifact, ProjectMapError> {
        let start = Instant::now();
        let face = FontFace::load(&self.config.render.font_path)?;
        let text = std::fs::read_to_string(text_path)?;

        let rasterizer = TreeRasterizer::new(&face).with_style(self.style.clone());
        let canvas = rasterizer.rasterize_text(&text);
        artifact::write_atomic_with(image_path, |sink| write_png(&canvas, sink))?;

        info!(
            path = %image_path.display(),
            width = canvas.width(),
            height = canvas.height(),
            duration_ms = start.elapsed().as_millis(),
            "Rendered image artifact"
        );
        Ok(ImageArtifact {
            path: image_path.to_path_buf(),
            width: canvas.width(),
            height: canvas.height(),
        })
    }

    fn write_text(
        &self,
        roots: &[RootEntry],
        style: RootStyle,
    ) -> Result<Artifacts, ProjectMapError> {
        let map = self.serialize(roots, style);
        let text_path = self.text_path();
        artifact::write_atomic(&text_path, map.to_text().as_bytes())?;

        Ok(Artifacts {
            text_path,
            line_count: map.line_count(),
            root_count: map.sections().len(),
            image: None,
        })
    }
}
