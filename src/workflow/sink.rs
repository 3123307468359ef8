use crate::error::{Result, WorkflowError};
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::info;

pub const WORKFLOW_DIR: &str = ".github/workflows";
pub const WORKFLOW_FILE_NAME: &str = "base.yml";

/// Location of the generated workflow under `base_dir`
pub fn workflow_path(base_dir: &Path) -> PathBuf {
    base_dir.join(WORKFLOW_DIR).join(WORKFLOW_FILE_NAME)
}

/// Writes `yaml` to `<base_dir>/.github/workflows/base.yml`, replacing any
/// previous file. The written file ends with a newline.
pub fn write_workflow(fs: &dyn FileSystem, base_dir: &Path, yaml: &str) -> Result<PathBuf> {
    let dir = base_dir.join(WORKFLOW_DIR);
    fs.create_dir_all(&dir).map_err(|source| WorkflowError::Io {
        path: dir.clone(),
        source,
    })?;

    let path = workflow_path(base_dir);
    let mut contents = yaml.to_string();
    contents.push('\n');
    fs.write(&path, &contents).map_err(|source| WorkflowError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Wrote workflow");
    Ok(path)
}
