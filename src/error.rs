//! Error types for project classification and workflow generation

use crate::stack::AppTarget;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a project into a workflow document
///
/// Every variant is terminal for the current invocation; nothing here is
/// retried because all of them stem from malformed or incomplete input.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The project descriptor is not well-formed project XML
    #[error("Malformed project descriptor {path:?}: {message}")]
    MalformedDescriptor { path: PathBuf, message: String },

    /// A field the descriptor must declare is absent
    #[error("Project descriptor {path:?} is missing required field '{field}'")]
    MissingRequiredField { path: PathBuf, field: &'static str },

    /// Neither TargetFramework nor TargetFrameworks yields a runtime version
    #[error("Cannot determine .NET runtime version: no TargetFramework or TargetFrameworks declared")]
    UndeterminedRuntimeVersion,

    /// A template builder needs a field that was never populated
    #[error("Workflow settings incomplete: '{0}' is required but empty")]
    IncompleteSettings(&'static str),

    /// The serializer met a node outside the supported set
    #[error("Unsupported node type in workflow document: {0}")]
    UnsupportedNodeType(&'static str),

    /// No template recipe exists for the deployment target
    #[error("No workflow template available for deployment target '{0}'")]
    UnsupportedTarget(AppTarget),

    /// The path given by the user does not exist
    #[error("Path not found: {0:?}")]
    PathNotFound(PathBuf),

    /// A directory was given that holds no project file
    #[error("Directory {0:?} does not contain a .csproj, .fsproj or .vbproj file")]
    NoProjectFound(PathBuf),

    /// A directory was given that holds several project files
    #[error("Directory {path:?} contains multiple project files ({}); pass one explicitly", .projects.join(", "))]
    MultipleProjects { path: PathBuf, projects: Vec<String> },

    /// A file was given that is not a project file
    #[error("File {0:?} is not a .csproj, .fsproj or .vbproj project file")]
    NotAProjectFile(PathBuf),

    /// File system failure
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The document could not be converted to a YAML tree
    #[error("Failed to convert workflow document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
