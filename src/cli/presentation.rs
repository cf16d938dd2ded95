//! Presentation: command results as text or JSON.

use crate::cli::parse::OutputFormat;
use crate::error::ProjectMapError;
use crate::pipeline::Outcome;
use crate::selection::Candidate;
use owo_colors::OwoColorize;

/// Message shown when nothing was selected
pub const NO_SELECTION_MESSAGE: &str = "No selection made.";

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ProjectMapError> {
    serde_json::to_string_pretty(value).map_err(|e| ProjectMapError::InvalidInput(e.to_string()))
}

pub fn format_outcome(
    outcome: &Outcome,
    format: OutputFormat,
) -> Result<String, ProjectMapError> {
    if format == OutputFormat::Json {
        return to_json(outcome);
    }

    match outcome {
        Outcome::NoSelection => Ok(NO_SELECTION_MESSAGE.yellow().to_string()),
        Outcome::Written(artifacts) => {
            let mut s = format!(
                "{} Project map saved as '{}' ({} lines, {} roots)",
                "✔".green(),
                artifacts.text_path.display(),
                artifacts.line_count,
                artifacts.root_count
            );
            if let Some(image) = &artifacts.image {
                s.push_str(&format!(
                    "\n{} Image saved as '{}' ({}x{})",
                    "✔".green(),
                    image.path.display(),
                    image.width,
                    image.height
                ));
            }
            Ok(s)
        }
    }
}

pub fn format_candidates(
    candidates: &[Candidate],
    format: OutputFormat,
) -> Result<String, ProjectMapError> {
    if format == OutputFormat::Json {
        return to_json(&candidates);
    }
    if candidates.is_empty() {
        return Ok("Workspace is empty.".to_string());
    }
    let lines: Vec<String> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {}", i + 1, c.label))
        .collect();
    Ok(lines.join("\n"))
}
