//! CLI route: single route table and run context. Dispatches to the pipeline and presentation.

use crate::cli::parse::{Commands, SelectionArgs};
use crate::cli::presentation::{format_candidates, format_outcome};
use crate::config::{ConfigLoader, ProjectMapConfig};
use crate::error::ProjectMapError;
use crate::pipeline::ProjectMapper;
use crate::selection;
use crate::tree::path::canonicalize_root;
use crate::tree::serializer::RootEntry;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: resolved workspace and its configuration.
pub struct RunContext {
    mapper: ProjectMapper,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ProjectMapError> {
        let workspace_root = canonicalize_root(&workspace_root)?;
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create run context with an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: ProjectMapConfig) -> Self {
        Self {
            mapper: ProjectMapper::new(workspace_root, config),
        }
    }

    pub fn mapper(&self) -> &ProjectMapper {
        &self.mapper
    }

    /// Execute a command and return its formatted output.
    pub fn execute(&self, command: &Commands) -> Result<String, ProjectMapError> {
        match command {
            Commands::Generate { selection } => {
                let roots = self.resolve_selection(selection)?;
                let outcome = self.mapper.generate(&roots)?;
                format_outcome(&outcome, selection.format)
            }
            Commands::Canvas { selection } => {
                let roots = self.resolve_selection(selection)?;
                let outcome = self.mapper.canvas(&roots)?;
                format_outcome(&outcome, selection.format)
            }
            Commands::Render { input, output } => {
                let input = self.resolve_path(input);
                let output = match output {
                    Some(path) => self.resolve_path(path),
                    None => input.with_extension("png"),
                };
                if input == output {
                    return Err(ProjectMapError::InvalidInput(format!(
                        "Refusing to overwrite input {}",
                        input.display()
                    )));
                }
                let image = self.mapper.render(&input, &output)?;
                Ok(format!(
                    "Image saved as '{}' ({}x{})",
                    image.path.display(),
                    image.width,
                    image.height
                ))
            }
            Commands::List { format } => {
                let candidates = self.mapper.candidates()?;
                format_candidates(&candidates, *format)
            }
            Commands::Config => self.mapper.config().to_toml(),
        }
    }

    /// Resolve the selection flags into ordered root entries.
    fn resolve_selection(
        &self,
        args: &SelectionArgs,
    ) -> Result<Vec<RootEntry>, ProjectMapError> {
        let candidates = self.mapper.candidates()?;
        let roots = if args.interactive {
            selection::prompt_selection(&candidates)?
        } else if !args.include.is_empty() {
            selection::select_by_name(&candidates, &args.include)?
        } else {
            selection::select_picked(&candidates)
        };
        debug!(selected = roots.len(), candidates = candidates.len(), "Resolved selection");
        Ok(roots)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.mapper.workspace_root().join(path)
        }
    }
}
