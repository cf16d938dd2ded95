//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, the
//! workspace `.project-map.toml`, then `PROJECT_MAP_*` environment variables.

use crate::error::ProjectMapError;
use crate::logging::LoggingConfig;
use crate::raster::DEFAULT_FONT_PATH;
use crate::tree::serializer::DEFAULT_LABELED_INDENT;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

use merge::merge_policy;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMapConfig {
    /// Artifact names and rendering resources
    #[serde(default)]
    pub render: RenderConfig,

    /// Traversal settings
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rendering and artifact settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Monospace font used by the rasterizer
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,

    /// Text artifact, relative to the workspace root
    #[serde(default = "default_text_file")]
    pub text_file: PathBuf,

    /// Image artifact, relative to the workspace root
    #[serde(default = "default_image_file")]
    pub image_file: PathBuf,

    /// Indent under a labeled directory root (text-only command)
    #[serde(default = "default_labeled_indent")]
    pub labeled_indent: String,
}

fn default_font_path() -> PathBuf {
    PathBuf::from(DEFAULT_FONT_PATH)
}

fn default_text_file() -> PathBuf {
    PathBuf::from("project-map.txt")
}

fn default_image_file() -> PathBuf {
    PathBuf::from("project-map.png")
}

fn default_labeled_indent() -> String {
    DEFAULT_LABELED_INDENT.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: default_font_path(),
            text_file: default_text_file(),
            image_file: default_image_file(),
            labeled_indent: default_labeled_indent(),
        }
    }
}

impl RenderConfig {
    /// Validate render configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.text_file.as_os_str().is_empty() {
            return Err("Text artifact path cannot be empty".to_string());
        }
        if self.image_file.as_os_str().is_empty() {
            return Err("Image artifact path cannot be empty".to_string());
        }
        if self.text_file == self.image_file {
            return Err("Text and image artifacts must be different files".to_string());
        }
        if self.labeled_indent.chars().any(|c| c != ' ') {
            return Err("Labeled indent may only contain spaces".to_string());
        }
        Ok(())
    }

    /// Resolve an artifact path against the workspace root
    pub fn resolve(&self, workspace_root: &Path, artifact: &Path) -> PathBuf {
        if artifact.is_absolute() {
            artifact.to_path_buf()
        } else {
            workspace_root.join(artifact)
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Render(String),
    Walker(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Render(msg) => write!(f, "render: {}", msg),
            ValidationError::Walker(msg) => write!(f, "walker: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ProjectMapConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.render.validate() {
            errors.push(ValidationError::Render(e));
        }
        if self.walker.ignore_patterns.iter().any(|p| p.is_empty()) {
            errors.push(ValidationError::Walker(
                "Ignore patterns cannot be empty".to_string(),
            ));
        }
        if let Err(e) = crate::logging::validate(&self.logging) {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ProjectMapError> {
        toml::to_string_pretty(self).map_err(|e| ProjectMapError::Config(e.to_string()))
    }
}

/// Loads `ProjectMapConfig` from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace
    pub fn load(workspace_root: &Path) -> Result<ProjectMapConfig, ProjectMapError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load configuration from an explicit file, ignoring global and workspace files
    pub fn load_from_file(path: &Path) -> Result<ProjectMapConfig, ProjectMapError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path.to_path_buf()).required(true));
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<ProjectMapConfig, ProjectMapError> {
        let config: ProjectMapConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ProjectMapError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
