use serde::Serialize;
use std::fmt;

/// Closed set of project SDKs the classifier knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SdkFamily {
    /// `Microsoft.NET.Sdk.Web`
    Web,
    /// `Microsoft.NET.Sdk`
    Generic,
    /// `Microsoft.NET.Sdk.BlazorWebAssembly`
    BlazorWasm,
    /// `Microsoft.NET.Sdk.Razor`
    RazorLibrary,
    /// `Microsoft.NET.Sdk.Worker`
    Worker,
    Unknown,
}

impl SdkFamily {
    /// Exact match on the SDK identifier; a trailing `/version` pin is ignored.
    pub fn from_sdk(sdk: &str) -> Self {
        let name = sdk.split('/').next().unwrap_or_default().trim();
        match name {
            "Microsoft.NET.Sdk.Web" => Self::Web,
            "Microsoft.NET.Sdk" => Self::Generic,
            "Microsoft.NET.Sdk.BlazorWebAssembly" => Self::BlazorWasm,
            "Microsoft.NET.Sdk.Razor" => Self::RazorLibrary,
            "Microsoft.NET.Sdk.Worker" => Self::Worker,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for SdkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Web => "web",
            Self::Generic => "generic",
            Self::BlazorWasm => "blazor-wasm",
            Self::RazorLibrary => "razor-library",
            Self::Worker => "worker",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
