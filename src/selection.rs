//! Root selection
//!
//! Lists the workspace's top-level entries as candidates and resolves them to
//! `RootEntry`s, either by name or through an interactive multi-select prompt.
//! Candidates are offered in enumeration order, all pre-picked.

use crate::error::ProjectMapError;
use crate::tree::node::Marker;
use crate::tree::serializer::RootEntry;
use crate::tree::walker::EntrySource;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One selectable top-level entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    /// Prompt label, `📁 name` or `📄 name`
    pub label: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub picked: bool,
}

impl Candidate {
    pub fn to_root(&self) -> RootEntry {
        RootEntry::new(self.path.clone(), self.is_directory)
    }
}

/// List the top-level entries of `workspace_root`
pub fn list_candidates<S: EntrySource + ?Sized>(
    source: &S,
    workspace_root: &Path,
) -> Result<Vec<Candidate>, ProjectMapError> {
    let entries = source.list_directory(workspace_root)?;
    Ok(entries
        .into_iter()
        .map(|entry| {
            let is_directory = entry.kind.is_directory();
            let icon = Marker::from_is_directory(is_directory).icon();
            Candidate {
                label: format!("{} {}", icon, entry.name),
                name: entry.name,
                path: entry.path,
                is_directory,
                picked: true,
            }
        })
        .collect())
}

/// Every pre-picked candidate, in listing order
pub fn select_picked(candidates: &[Candidate]) -> Vec<RootEntry> {
    candidates
        .iter()
        .filter(|c| c.picked)
        .map(Candidate::to_root)
        .collect()
}

/// Candidates whose names appear in `names`, in listing order
///
/// An unknown name is an error rather than a silent omission.
pub fn select_by_name(
    candidates: &[Candidate],
    names: &[String],
) -> Result<Vec<RootEntry>, ProjectMapError> {
    if let Some(unknown) = names
        .iter()
        .find(|n| !candidates.iter().any(|c| &c.name == *n))
    {
        return Err(ProjectMapError::Selection(format!(
            "No top-level entry named '{}'",
            unknown
        )));
    }

    Ok(candidates
        .iter()
        .filter(|c| names.contains(&c.name))
        .map(Candidate::to_root)
        .collect())
}

/// Let the user pick roots with a multi-select prompt
///
/// Cancelling the prompt yields an empty selection.
pub fn prompt_selection(candidates: &[Candidate]) -> Result<Vec<RootEntry>, ProjectMapError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
    let defaults: Vec<bool> = candidates.iter().map(|c| c.picked).collect();

    let chosen = dialoguer::MultiSelect::new()
        .with_prompt("Select the files/folders to include in project map")
        .items(&labels)
        .defaults(&defaults)
        .interact_opt()
        .map_err(|e| ProjectMapError::Selection(format!("Prompt failed: {}", e)))?;

    Ok(chosen
        .unwrap_or_default()
        .into_iter()
        .filter_map(|i| candidates.get(i).map(Candidate::to_root))
        .collect())
}
