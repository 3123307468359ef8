//! Resolves a user-supplied path to a single project file

use crate::error::{Result, WorkflowError};
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Project file extensions recognized by discovery
pub const PROJECT_EXTENSIONS: &[&str] = &["csproj", "fsproj", "vbproj"];

fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PROJECT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Finds the project file a path refers to.
///
/// A directory must contain exactly one project file at its top level; a file
/// must itself be a project file. The result is canonicalized.
pub fn discover_project(fs: &dyn FileSystem, path: &Path) -> Result<PathBuf> {
    if !fs.exists(path) {
        return Err(WorkflowError::PathNotFound(path.to_path_buf()));
    }

    let project = if fs.is_dir(path) {
        let entries = fs.read_dir(path).map_err(|source| WorkflowError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut projects: Vec<PathBuf> = entries
            .into_iter()
            .filter(|entry| entry.is_file() && is_project_file(entry.path()))
            .map(|entry| entry.path)
            .collect();
        projects.sort();

        debug!(?path, count = projects.len(), "Scanned directory for project files");

        match projects.len() {
            0 => return Err(WorkflowError::NoProjectFound(path.to_path_buf())),
            1 => projects.remove(0),
            _ => {
                return Err(WorkflowError::MultipleProjects {
                    path: path.to_path_buf(),
                    projects: projects
                        .iter()
                        .filter_map(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .collect(),
                })
            }
        }
    } else if is_project_file(path) {
        path.to_path_buf()
    } else {
        return Err(WorkflowError::NotAProjectFile(path.to_path_buf()));
    };

    let canonical = fs
        .canonicalize(&project)
        .map_err(|source| WorkflowError::Io {
            path: project.clone(),
            source,
        })?;

    info!(project = ?canonical, "Discovered project");
    Ok(canonical)
}
