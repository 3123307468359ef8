//! Project descriptor reader for `*.csproj` / `*.fsproj` / `*.vbproj` files

use crate::error::{Result, WorkflowError};
use crate::fs::FileSystem;
use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Build-relevant properties declared by one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProperties {
    /// SDK identifier, e.g. `Microsoft.NET.Sdk.Web`
    pub sdk: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_framework: Option<String>,
    /// Semicolon-delimited list of frameworks for multi-targeted projects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_frameworks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_functions_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_name: Option<String>,
}

impl ProjectProperties {
    /// Parses project XML. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let doc = Document::parse(content).map_err(|e| WorkflowError::MalformedDescriptor {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let root = doc.root_element();
        if !root.has_tag_name("Project") {
            return Err(WorkflowError::MalformedDescriptor {
                path: path.to_path_buf(),
                message: format!(
                    "expected <Project> root element, found <{}>",
                    root.tag_name().name()
                ),
            });
        }

        let sdk = root
            .attribute("Sdk")
            .or_else(|| {
                root.children()
                    .find(|n| n.has_tag_name("Sdk"))
                    .and_then(|n| n.attribute("Name"))
            })
            .map(|s| s.split(';').next().unwrap_or_default().trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| WorkflowError::MissingRequiredField {
                path: path.to_path_buf(),
                field: "Sdk",
            })?;

        let properties = Self {
            sdk,
            output_type: property(root, "OutputType"),
            target_framework: property(root, "TargetFramework"),
            target_frameworks: property(root, "TargetFrameworks"),
            azure_functions_version: property(root, "AzureFunctionsVersion"),
            assembly_name: property(root, "AssemblyName"),
        };

        debug!(?path, sdk = %properties.sdk, "Parsed project descriptor");
        Ok(properties)
    }
}

/// First non-empty value of `name` across all `<PropertyGroup>` elements
fn property(root: Node, name: &str) -> Option<String> {
    root.children()
        .filter(|n| n.has_tag_name("PropertyGroup"))
        .flat_map(|group| group.children())
        .filter(|n| n.has_tag_name(name))
        .filter_map(|n| n.text())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Reads and parses the project file at `path`
pub fn read_descriptor(fs: &dyn FileSystem, path: &Path) -> Result<ProjectProperties> {
    let content = fs.read_to_string(path).map_err(|source| WorkflowError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ProjectProperties::parse(&content, path)
}
