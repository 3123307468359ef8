//! Derives workflow settings from a parsed project descriptor

use super::settings::{to_slash_path, WorkflowSettings, WorkingDirectory};
use crate::error::{Result, WorkflowError};
use crate::project::ProjectProperties;
use crate::repo::RepoInfo;
use crate::stack::{AppTarget, ProjectType, SdkFamily};
use std::path::Path;
use tracing::{debug, info, warn};

/// Package path used by the SDK-specific web and function rules
pub const SDK_PACKAGE_PATH: &str = "./publish";

const FRAMEWORK_PREFIXES: &[&str] = &["netcoreapp", "netstandard", "net"];

/// Outcome of the SDK rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ProjectKind {
    project_type: Option<ProjectType>,
    app_target: Option<AppTarget>,
    sdk_package_path: bool,
}

impl ProjectKind {
    fn of(project_type: ProjectType) -> Self {
        Self {
            project_type: Some(project_type),
            ..Self::default()
        }
    }

    fn deployable(project_type: ProjectType, app_target: AppTarget) -> Self {
        Self {
            project_type: Some(project_type),
            app_target: Some(app_target),
            sdk_package_path: true,
        }
    }
}

/// Turns a framework moniker into a setup-dotnet version spec.
///
/// `net6.0` → `6.0.x`, `netcoreapp3.1` → `3.1.x`, `net8.0-windows` → `8.0.x`
pub fn framework_version(moniker: &str) -> Option<String> {
    let moniker = moniker.trim();
    let base = moniker.split('-').next().unwrap_or_default();
    let lower = base.to_ascii_lowercase();

    let version = FRAMEWORK_PREFIXES
        .iter()
        .find(|prefix| lower.starts_with(*prefix))
        .map(|prefix| &base[prefix.len()..])
        .unwrap_or(base)
        .trim();

    if version.is_empty() {
        None
    } else {
        Some(format!("{}.x", version))
    }
}

/// Runtime version of a project; the last entry of a multi-target list wins
pub fn runtime_version(properties: &ProjectProperties) -> Result<String> {
    let last_of_many = properties.target_frameworks.as_deref().and_then(|list| {
        list.split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .last()
    });

    last_of_many
        .or(properties.target_framework.as_deref())
        .and_then(framework_version)
        .ok_or(WorkflowError::UndeterminedRuntimeVersion)
}

fn project_kind(properties: &ProjectProperties) -> ProjectKind {
    let family = SdkFamily::from_sdk(&properties.sdk);
    let is_function = properties.azure_functions_version.is_some();

    match family {
        SdkFamily::Unknown => {
            warn!(sdk = %properties.sdk, "Unrecognized project SDK; project kind left unset");
            ProjectKind::default()
        }
        _ if is_function => {
            ProjectKind::deployable(ProjectType::AzureFunction, AppTarget::AzureFunction)
        }
        SdkFamily::Web => ProjectKind::deployable(ProjectType::WebApp, AppTarget::WebApp),
        SdkFamily::Generic => {
            let is_exe = properties
                .output_type
                .as_deref()
                .map(|t| t.trim().eq_ignore_ascii_case("exe"))
                .unwrap_or(false);
            if is_exe {
                ProjectKind::of(ProjectType::Console)
            } else {
                ProjectKind::of(ProjectType::ClassLibrary)
            }
        }
        SdkFamily::BlazorWasm => ProjectKind::of(ProjectType::BlazorWasm),
        SdkFamily::RazorLibrary => ProjectKind::of(ProjectType::ClassLibrary),
        SdkFamily::Worker => ProjectKind::of(ProjectType::Worker),
    }
}

fn working_directory(project_file: &Path, repo: &RepoInfo) -> WorkingDirectory {
    let project_dir = project_file.parent().unwrap_or_else(|| Path::new(""));

    match repo.root.as_deref() {
        Some(root) => match project_dir.strip_prefix(root) {
            Ok(relative) => WorkingDirectory::in_repo(root, to_slash_path(relative)),
            Err(_) => {
                warn!(
                    ?project_dir,
                    ?root,
                    "Project is not below the repository root; using its directory as-is"
                );
                WorkingDirectory::standalone(project_dir)
            }
        },
        None => WorkingDirectory::standalone(project_dir),
    }
}

fn project_name(properties: &ProjectProperties, project_file: &Path) -> String {
    properties
        .assembly_name
        .clone()
        .or_else(|| {
            project_file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

/// Classifies a project and seeds its workflow settings.
///
/// Deterministic in its inputs; the deployment target stays unset for kinds
/// the SDK rules cannot map on their own.
pub fn classify(
    properties: &ProjectProperties,
    project_file: &Path,
    repo: &RepoInfo,
) -> Result<WorkflowSettings> {
    let dotnet_version = runtime_version(properties)?;
    let kind = project_kind(properties);
    let working_directory = working_directory(project_file, repo);

    let package_path = if kind.sdk_package_path {
        SDK_PACKAGE_PATH.to_string()
    } else {
        format!("{}/publish", working_directory.as_workflow_path())
    };

    debug!(
        sdk = %properties.sdk,
        project_type = ?kind.project_type,
        app_target = ?kind.app_target,
        "Applied SDK rules"
    );

    let mut settings = WorkflowSettings::default()
        .with_project_name(project_name(properties, project_file))
        .with_dotnet_version(dotnet_version)
        .with_working_directory(working_directory)
        .with_package_path(package_path)
        .with_repository(repo.owner.clone(), repo.name.clone());

    if let Some(project_type) = kind.project_type {
        settings = settings.with_project_type(project_type);
    }
    if let Some(target) = kind.app_target {
        settings = settings.with_app_target(target);
    }

    info!(
        project = %settings.project_name,
        dotnet = %settings.dotnet_version,
        working_directory = %settings.working_directory,
        "Classified project"
    );

    Ok(settings)
}
