//! Facts derived about a project, enriched stage by stage

use crate::resolve::DeploymentResource;
use crate::stack::{AppPlatform, AppTarget, ProjectType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_WORKFLOW_NAME: &str = "Build and Deploy";
pub const DEFAULT_BRANCH: &str = "main";

/// Project directory as seen from the workflow.
///
/// The two cases are kept apart so a repository-relative path is never
/// confused with a raw directory path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WorkingDirectory {
    /// Project inside a repository; `relative` uses `/` separators
    InRepo { root: PathBuf, relative: String },
    /// No repository root was found
    Standalone { dir: PathBuf },
}

impl WorkingDirectory {
    pub fn in_repo(root: impl Into<PathBuf>, relative: impl Into<String>) -> Self {
        Self::InRepo {
            root: root.into(),
            relative: relative.into(),
        }
    }

    pub fn standalone(dir: impl Into<PathBuf>) -> Self {
        Self::Standalone { dir: dir.into() }
    }

    /// Path written into the workflow's `WORKING_DIRECTORY`
    pub fn as_workflow_path(&self) -> String {
        match self {
            Self::InRepo { relative, .. } => relative.clone(),
            Self::Standalone { dir } => to_slash_path(dir),
        }
    }

    pub fn repo_root(&self) -> Option<&Path> {
        match self {
            Self::InRepo { root, .. } => Some(root),
            Self::Standalone { .. } => None,
        }
    }

    /// Directory under which `.github/workflows` is created
    pub fn output_base(&self) -> &Path {
        match self {
            Self::InRepo { root, .. } => root,
            Self::Standalone { dir } => dir,
        }
    }
}

impl Default for WorkingDirectory {
    fn default() -> Self {
        Self::standalone(".")
    }
}

impl fmt::Display for WorkingDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_workflow_path())
    }
}

/// Renders a path with `/` separators; an empty path becomes `.`
pub fn to_slash_path(path: &Path) -> String {
    let mut prefix = String::new();
    let mut parts = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix.push_str(&p.as_os_str().to_string_lossy()),
            Component::RootDir => prefix.push('/'),
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    let joined = format!("{}{}", prefix, parts.join("/"));
    if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Everything the template builders need to know about a project.
///
/// Produced by [`crate::classify::classify`] and then enriched through the
/// consuming `with_*` methods; each stage hands a new value to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSettings {
    pub workflow_name: String,
    pub branch: String,
    pub project_name: String,
    pub project_type: Option<ProjectType>,
    pub app_target: Option<AppTarget>,
    pub app_platform: AppPlatform,
    pub dotnet_version: String,
    pub working_directory: WorkingDirectory,
    pub package_path: String,
    pub azure_subscription: Option<String>,
    pub azure_resource_group: Option<String>,
    pub azure_resource_name: Option<String>,
    /// Opaque reference to the publish-profile secret, passed through as-is
    pub azure_publish_profile: Option<String>,
    pub github_owner: Option<String>,
    pub github_repo: Option<String>,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            workflow_name: DEFAULT_WORKFLOW_NAME.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            project_name: String::new(),
            project_type: None,
            app_target: None,
            app_platform: AppPlatform::default(),
            dotnet_version: String::new(),
            working_directory: WorkingDirectory::default(),
            package_path: String::new(),
            azure_subscription: None,
            azure_resource_group: None,
            azure_resource_name: None,
            azure_publish_profile: None,
            github_owner: None,
            github_repo: None,
        }
    }
}

impl WorkflowSettings {
    #[must_use]
    pub fn with_workflow_name(mut self, name: impl Into<String>) -> Self {
        self.workflow_name = name.into();
        self
    }

    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    #[must_use]
    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    #[must_use]
    pub fn with_app_target(mut self, target: AppTarget) -> Self {
        self.app_target = Some(target);
        self
    }

    #[must_use]
    pub fn with_app_platform(mut self, platform: AppPlatform) -> Self {
        self.app_platform = platform;
        self
    }

    #[must_use]
    pub fn with_dotnet_version(mut self, version: impl Into<String>) -> Self {
        self.dotnet_version = version.into();
        self
    }

    #[must_use]
    pub fn with_working_directory(mut self, working_directory: WorkingDirectory) -> Self {
        self.working_directory = working_directory;
        self
    }

    #[must_use]
    pub fn with_package_path(mut self, path: impl Into<String>) -> Self {
        self.package_path = path.into();
        self
    }

    #[must_use]
    pub fn with_repository(mut self, owner: Option<String>, repo: Option<String>) -> Self {
        self.github_owner = owner;
        self.github_repo = repo;
        self
    }

    /// Applies the externally chosen hosting resource
    #[must_use]
    pub fn with_deployment(mut self, resource: DeploymentResource) -> Self {
        self.azure_subscription = resource.subscription;
        self.azure_resource_group = resource.resource_group;
        self.azure_resource_name = resource.resource_name;
        self.azure_publish_profile = resource.publish_profile;
        self.app_platform = resource.platform;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_slash_path() {
        assert_eq!(to_slash_path(Path::new("src/Api")), "src/Api");
        assert_eq!(to_slash_path(Path::new("")), ".");
        assert_eq!(to_slash_path(Path::new("./src")), "src");
        assert_eq!(to_slash_path(Path::new("/home/dev/app")), "/home/dev/app");
        assert_eq!(to_slash_path(Path::new("../shared")), "../shared");
    }

    #[test]
    fn test_working_directory_variants() {
        let in_repo = WorkingDirectory::in_repo("/repo", "src/Api");
        assert_eq!(in_repo.as_workflow_path(), "src/Api");
        assert_eq!(in_repo.repo_root(), Some(Path::new("/repo")));
        assert_eq!(in_repo.output_base(), Path::new("/repo"));

        let standalone = WorkingDirectory::standalone("/tmp/app");
        assert_eq!(standalone.as_workflow_path(), "/tmp/app");
        assert_eq!(standalone.repo_root(), None);
        assert_eq!(standalone.output_base(), Path::new("/tmp/app"));
    }

    #[test]
    fn test_with_methods_return_enriched_copy() {
        let base = WorkflowSettings::default().with_dotnet_version("6.0.x");
        let enriched = base.clone().with_app_target(AppTarget::WebApp);

        assert_eq!(base.app_target, None);
        assert_eq!(enriched.app_target, Some(AppTarget::WebApp));
        assert_eq!(enriched.dotnet_version, "6.0.x");
    }

    #[test]
    fn test_with_deployment() {
        let settings = WorkflowSettings::default().with_deployment(DeploymentResource {
            subscription: Some("Production".to_string()),
            resource_group: Some("rg-orders".to_string()),
            resource_name: Some("orders-api".to_string()),
            platform: AppPlatform::Linux,
            publish_profile: Some("${{ secrets.PUBLISH_PROFILE }}".to_string()),
        });

        assert_eq!(settings.azure_resource_name.as_deref(), Some("orders-api"));
        assert_eq!(settings.azure_resource_group.as_deref(), Some("rg-orders"));
        assert_eq!(settings.app_platform, AppPlatform::Linux);
    }

    #[test]
    fn test_settings_serialize_working_directory_kind() {
        let settings = WorkflowSettings::default()
            .with_working_directory(WorkingDirectory::in_repo("/repo", "src"));
        let json = serde_json::to_value(&settings).unwrap();

        assert_eq!(json["working_directory"]["kind"], "in-repo");
        assert_eq!(json["working_directory"]["relative"], "src");
        assert_eq!(json["workflow_name"], DEFAULT_WORKFLOW_NAME);
    }
}
