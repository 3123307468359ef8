//! Output formatting for `inspect`
//!
//! Settings can be printed as JSON, YAML or a human-readable summary.

use anyhow::{Context, Result};

use crate::classify::WorkflowSettings;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Formatter for classified workflow settings
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_settings(&self, settings: &WorkflowSettings) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(settings)
                .context("Failed to serialize settings to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(settings).context("Failed to serialize settings to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(settings)),
        }
    }

    fn format_human(&self, settings: &WorkflowSettings) -> String {
        let unset = || "(not set)".to_string();
        let mut output = String::new();

        output.push_str("\u{2713} Project Classification\n");
        output.push_str(&"\u{2501}".repeat(42));
        output.push_str("\n\n");

        output.push_str(&format!("Project:       {}\n", settings.project_name));
        output.push_str(&format!(
            "Project type:  {}\n",
            settings
                .project_type
                .map(|t| t.to_string())
                .unwrap_or_else(unset)
        ));
        output.push_str(&format!(
            "Target:        {}\n",
            settings
                .app_target
                .map(|t| t.to_string())
                .unwrap_or_else(unset)
        ));
        output.push_str(&format!("Platform:      {}\n\n", settings.app_platform));

        output.push_str("Build Information:\n");
        output.push_str(&format!(
            "\u{251C}\u{2500} .NET version:       {}\n",
            settings.dotnet_version
        ));
        output.push_str(&format!(
            "\u{251C}\u{2500} Working directory:  {}\n",
            settings.working_directory
        ));
        output.push_str(&format!(
            "\u{2514}\u{2500} Package path:       {}\n\n",
            settings.package_path
        ));

        output.push_str("Deployment:\n");
        output.push_str(&format!(
            "\u{251C}\u{2500} Resource:        {}\n",
            settings.azure_resource_name.clone().unwrap_or_else(unset)
        ));
        output.push_str(&format!(
            "\u{251C}\u{2500} Resource group:  {}\n",
            settings.azure_resource_group.clone().unwrap_or_else(unset)
        ));
        output.push_str(&format!(
            "\u{2514}\u{2500} Subscription:    {}\n\n",
            settings.azure_subscription.clone().unwrap_or_else(unset)
        ));

        let repository = match (&settings.github_owner, &settings.github_repo) {
            (Some(owner), Some(repo)) => format!("{}/{}", owner, repo),
            _ => unset(),
        };
        output.push_str(&format!("Repository:    {}\n", repository));
        output.push_str(&format!(
            "Workflow:      {} (on push to {})\n",
            settings.workflow_name, settings.branch
        ));

        output
    }
}
