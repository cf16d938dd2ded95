//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ProjectMapError;

/// Map domain errors to a single line for stderr.
pub fn map_error(e: &ProjectMapError) -> String {
    match e {
        ProjectMapError::FontUnavailable { path, reason } => format!(
            "Font unavailable at {}: {} (set render.font_path or PROJECT_MAP_RENDER__FONT_PATH)",
            path.display(),
            reason
        ),
        _ => e.to_string(),
    }
}
