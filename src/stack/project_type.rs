use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of .NET project, derived from its SDK and properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Console,
    WebApp,
    AzureFunction,
    ClassLibrary,
    Worker,
    BlazorWasm,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Console => "Console",
            Self::WebApp => "WebApp",
            Self::AzureFunction => "AzureFunction",
            Self::ClassLibrary => "ClassLibrary",
            Self::Worker => "Worker",
            Self::BlazorWasm => "BlazorWasm",
        };
        write!(f, "{}", name)
    }
}

/// Operating system of the hosting resource and of the CI runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPlatform {
    #[default]
    Windows,
    Linux,
}

impl AppPlatform {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "windows" | "win" => Some(Self::Windows),
            "linux" | "ubuntu" => Some(Self::Linux),
            _ => None,
        }
    }

    /// GitHub-hosted runner label
    pub fn runner_label(&self) -> &'static str {
        match self {
            Self::Windows => "windows-latest",
            Self::Linux => "ubuntu-latest",
        }
    }

    /// Runtime identifier for self-contained publishes
    pub fn runtime_identifier(&self) -> &'static str {
        match self {
            Self::Windows => "win-x86",
            Self::Linux => "linux-x64",
        }
    }
}

impl fmt::Display for AppPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Linux => write!(f, "linux"),
        }
    }
}
