//! Project Map: filesystem subtree to text tree and raster image
//!
//! Serializes a resolved set of root entries into a prefix-annotated tree
//! (`┣━ 📄 name` lines) and rasterizes that text into a color-coded PNG.

pub mod artifact;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod raster;
pub mod selection;
pub mod tree;

pub use error::ProjectMapError;
pub use pipeline::{Outcome, ProjectMapper};
pub use raster::{FontFace, RasterStyle, TreeRasterizer};
pub use tree::{ProjectMap, RootEntry, RootStyle, TreeLine, TreeSerializer};
