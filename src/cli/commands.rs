use crate::stack::{AppPlatform, AppTarget};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// GitHub Actions workflow generator for .NET projects
#[derive(Parser, Debug)]
#[command(
    name = "workflowgen",
    about = "Generate GitHub Actions build-and-deploy workflows for .NET projects",
    version,
    long_about = "workflowgen reads a .NET project file, classifies the project from its SDK \
                  and properties, and writes a GitHub Actions workflow that builds, tests and \
                  deploys it (Azure Web App, Function App, WebJob or NuGet)."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate a workflow for a project",
        long_about = "Classifies the project and writes .github/workflows/base.yml at the \
                      repository root (or next to the project outside a repository).\n\n\
                      Examples:\n  \
                      workflowgen generate --resource-name orders-api\n  \
                      workflowgen generate src/Api --target webapp --platform linux\n  \
                      workflowgen generate src/Lib/Lib.csproj --dry-run"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Show how a project is classified",
        long_about = "Prints the settings derived for a project without generating anything.\n\n\
                      Examples:\n  \
                      workflowgen inspect\n  \
                      workflowgen inspect src/Api --format json"
    )]
    Inspect(InspectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "PATH",
        help = "Project file or directory containing one (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 't',
        long,
        value_parser = parse_app_target,
        help = "Deployment target, overriding classification (webapp, function, webjob, nuget)"
    )]
    pub target: Option<AppTarget>,

    #[arg(long, value_name = "NAME", help = "Name of the Azure resource to deploy to")]
    pub resource_name: Option<String>,

    #[arg(long, value_enum, help = "Hosting platform of the Azure resource")]
    pub platform: Option<PlatformArg>,

    #[arg(
        long,
        value_name = "SECRET",
        help = "Publish-profile secret reference, e.g. '${{ secrets.PUBLISH_PROFILE }}'"
    )]
    pub publish_profile: Option<String>,

    #[arg(long, value_name = "NAME", help = "Azure subscription")]
    pub subscription: Option<String>,

    #[arg(long, value_name = "NAME", help = "Azure resource group")]
    pub resource_group: Option<String>,

    #[arg(long, value_name = "NAME", help = "Workflow display name")]
    pub workflow_name: Option<String>,

    #[arg(long, value_name = "BRANCH", help = "Branch whose pushes trigger the workflow")]
    pub branch: Option<String>,

    #[arg(long, help = "Print the workflow to stdout instead of writing it")]
    pub dry_run: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        conflicts_with = "dry_run",
        help = "Write the workflow to FILE instead of .github/workflows/base.yml"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[arg(
        value_name = "PATH",
        help = "Project file or directory containing one (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => Self::Json,
            OutputFormatArg::Yaml => Self::Yaml,
            OutputFormatArg::Human => Self::Human,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    Windows,
    Linux,
}

impl From<PlatformArg> for AppPlatform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => Self::Windows,
            PlatformArg::Linux => Self::Linux,
        }
    }
}

fn parse_app_target(s: &str) -> Result<AppTarget, String> {
    AppTarget::from_name(s).ok_or_else(|| {
        let valid: Vec<&str> = AppTarget::all_variants().iter().map(|t| t.name()).collect();
        format!("unknown target '{}'. Valid targets: {}", s, valid.join(", "))
    })
}
