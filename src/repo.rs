//! Repository location and GitHub remote detection

use crate::fs::FileSystem;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a project lives relative to version control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    /// Working-tree root, `None` when the path is not inside a repository
    pub root: Option<PathBuf>,
    /// GitHub owner parsed from the `origin` remote
    pub owner: Option<String>,
    /// GitHub repository name parsed from the `origin` remote
    pub name: Option<String>,
}

impl RepoInfo {
    pub fn outside_repository() -> Self {
        Self::default()
    }
}

/// Finds the repository enclosing a path
pub trait RepositoryLocator: Send + Sync {
    fn locate(&self, path: &Path) -> RepoInfo;
}

/// Walks up from a path looking for a `.git` entry and reads its `origin` remote
pub struct GitRepositoryLocator {
    fs: Arc<dyn FileSystem>,
}

impl GitRepositoryLocator {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Directory holding the repository's `config` file
    fn git_dir(&self, root: &Path) -> Option<PathBuf> {
        let dot_git = root.join(".git");
        if self.fs.is_dir(&dot_git) {
            return Some(dot_git);
        }

        // worktrees and submodules use a `gitdir: <path>` file
        let content = self.fs.read_to_string(&dot_git).ok()?;
        let target = content.trim().strip_prefix("gitdir:")?.trim();
        Some(root.join(target))
    }
}

impl RepositoryLocator for GitRepositoryLocator {
    fn locate(&self, path: &Path) -> RepoInfo {
        let start = if self.fs.is_file(path) {
            path.parent().unwrap_or(path)
        } else {
            path
        };

        let Some(root) = start
            .ancestors()
            .find(|dir| self.fs.exists(&dir.join(".git")))
        else {
            debug!(?path, "No enclosing git repository");
            return RepoInfo::outside_repository();
        };

        let remote = self
            .git_dir(root)
            .and_then(|git_dir| self.fs.read_to_string(&git_dir.join("config")).ok())
            .and_then(|config| origin_url(&config))
            .and_then(|url| {
                let parsed = parse_remote(&url);
                if parsed.is_none() {
                    warn!(url = %url, "Could not parse owner/repository from origin remote");
                }
                parsed
            });

        debug!(root = ?root, ?remote, "Located git repository");

        let (owner, name) = match remote {
            Some((owner, name)) => (Some(owner), Some(name)),
            None => (None, None),
        };

        RepoInfo {
            root: Some(root.to_path_buf()),
            owner,
            name,
        }
    }
}

/// Extracts `remote.origin.url` from git config text
pub fn origin_url(config: &str) -> Option<String> {
    let section = Regex::new(r"^\[(.+)\]$").ok()?;
    let origin = Regex::new(r#"^remote\s+"origin"$"#).ok()?;
    let url = Regex::new(r"^url\s*=\s*(.+)$").ok()?;

    let mut in_origin = false;
    for line in config.lines().map(str::trim) {
        if let Some(caps) = section.captures(line) {
            in_origin = origin.is_match(caps.get(1)?.as_str().trim());
            continue;
        }
        if in_origin {
            if let Some(caps) = url.captures(line) {
                return Some(caps.get(1)?.as_str().trim().to_string());
            }
        }
    }

    None
}

/// Splits an https or scp-style remote url into `(owner, repository)`
pub fn parse_remote(url: &str) -> Option<(String, String)> {
    let re = Regex::new(r"[:/]([^/:]+)/([^/]+?)(?:\.git)?/?$").ok()?;
    let caps = re.captures(url.trim())?;
    Some((caps.get(1)?.as_str().to_string(), caps.get(2)?.as_str().to_string()))
}
