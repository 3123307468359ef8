//! Build-and-deploy workflow recipes, one per deployment target
//!
//! Every recipe shares the same skeleton: a push trigger, the target's env
//! entries followed by the common toolchain env, and a single `build` job
//! that checks out, restores, builds and tests before the target-specific
//! publish and deploy steps.

mod function_app;
mod nuget;
mod web_app;
mod web_job;

pub use function_app::FunctionAppTemplate;
pub use nuget::NugetTemplate;
pub use web_app::WebAppTemplate;
pub use web_job::WebJobTemplate;

use super::schema::{Job, Step, Workflow};
use crate::classify::WorkflowSettings;
use crate::error::{Result, WorkflowError};
use crate::stack::AppTarget;

pub const BUILD_JOB_KEY: &str = "build";
pub const BUILD_JOB_NAME: &str = "Build job";

pub const ENV_CONFIGURATION: &str = "CONFIGURATION";
pub const ENV_DOTNET_CORE_VERSION: &str = "DOTNET_CORE_VERSION";
pub const ENV_WORKING_DIRECTORY: &str = "WORKING_DIRECTORY";

/// Toolchain flags appended to every recipe's env, in emission order
pub const TOOLCHAIN_ENV: &[(&str, &str)] = &[
    ("DOTNET_CLI_TELEMETRY_OPTOUT", "1"),
    ("DOTNET_SKIP_FIRST_TIME_EXPERIENCE", "1"),
    ("DOTNET_NOLOGO", "true"),
    ("DOTNET_GENERATE_ASPNET_CERTIFICATE", "false"),
    ("DOTNET_ADD_GLOBAL_TOOLS_TO_PATH", "false"),
    ("DOTNET_MULTILEVEL_LOOKUP", "0"),
];

const WORKING_DIRECTORY_REF: &str = "${{ env.WORKING_DIRECTORY }}";
const CONFIGURATION_REF: &str = "${{ env.CONFIGURATION }}";

/// A workflow recipe for one deployment target
pub trait Template: Send + Sync {
    fn target(&self) -> AppTarget;

    /// Builds the workflow document; fails when a required setting is empty
    fn build(&self, settings: &WorkflowSettings) -> Result<Workflow>;
}

/// Selects the recipe for a deployment target
pub fn template_for(target: AppTarget) -> Result<Box<dyn Template>> {
    match target {
        AppTarget::AzureFunction => Ok(Box::new(FunctionAppTemplate)),
        AppTarget::WebApp => Ok(Box::new(WebAppTemplate)),
        AppTarget::WebJob => Ok(Box::new(WebJobTemplate)),
        AppTarget::Nuget => Ok(Box::new(NugetTemplate)),
        AppTarget::Aks | AppTarget::Acr | AppTarget::ContainerApps | AppTarget::Unknown => {
            Err(WorkflowError::UnsupportedTarget(target))
        }
    }
}

/// `${{ env.NAME }}`
pub fn env_ref(name: &str) -> String {
    format!("${{{{ env.{} }}}}", name)
}

pub(crate) fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(WorkflowError::IncompleteSettings(field))
    } else {
        Ok(value)
    }
}

pub(crate) fn require_opt<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    require(value.unwrap_or_default(), field)
}

/// Validated settings shared by every recipe
pub(crate) struct Common<'a> {
    settings: &'a WorkflowSettings,
    dotnet_version: &'a str,
    package_path: &'a str,
}

impl<'a> Common<'a> {
    pub(crate) fn new(settings: &'a WorkflowSettings) -> Result<Self> {
        Ok(Self {
            settings,
            dotnet_version: require(&settings.dotnet_version, "dotnet_version")?,
            package_path: require(&settings.package_path, "package_path")?,
        })
    }

    pub(crate) fn package_path(&self) -> &'a str {
        self.package_path
    }

    /// Workflow with the trigger and the full env block; `specific` goes first
    pub(crate) fn workflow(&self, specific: &[(&str, &str)], steps: Vec<Step>) -> Workflow {
        let mut workflow = Workflow::new(&self.settings.workflow_name).on_push(&self.settings.branch);

        for (key, value) in specific {
            workflow = workflow.with_env(*key, *value);
        }

        workflow = workflow
            .with_env(ENV_CONFIGURATION, "Release")
            .with_env(ENV_DOTNET_CORE_VERSION, self.dotnet_version)
            .with_env(
                ENV_WORKING_DIRECTORY,
                self.settings.working_directory.as_workflow_path(),
            );

        for (key, value) in TOOLCHAIN_ENV {
            workflow = workflow.with_env(*key, *value);
        }

        let job = Job::new(BUILD_JOB_NAME, self.settings.app_platform.runner_label())
            .with_steps(build_steps())
            .with_steps(steps);

        workflow.with_job(BUILD_JOB_KEY, job)
    }
}

/// Checkout, toolchain setup, restore, build and test
pub fn build_steps() -> Vec<Step> {
    vec![
        Step::uses("actions/checkout@v2"),
        Step::uses("actions/setup-dotnet@v1")
            .with_name("Setup .NET Core")
            .with_input("dotnet-version", env_ref(ENV_DOTNET_CORE_VERSION)),
        Step::run(format!("dotnet restore {}", WORKING_DIRECTORY_REF)).with_name("Restore"),
        Step::run(format!(
            "dotnet build {} --configuration {} --no-restore",
            WORKING_DIRECTORY_REF, CONFIGURATION_REF
        ))
        .with_name("Build"),
        Step::run("dotnet test").with_name("Test"),
    ]
}

/// `dotnet publish` into `output`, followed by any extra arguments
pub fn publish_step(output: &str, extra_args: &str) -> Step {
    let mut command = format!(
        "dotnet publish {} --configuration {} --output {}",
        WORKING_DIRECTORY_REF, CONFIGURATION_REF, output
    );
    if !extra_args.is_empty() {
        command.push(' ');
        command.push_str(extra_args);
    }
    Step::run(command).with_name("Publish")
}

/// Deploy step shared by the Azure recipes
pub fn azure_deploy_step(
    name: &str,
    action: &str,
    app_name: String,
    publish_profile: &str,
    package: String,
) -> Step {
    Step::uses(action)
        .with_name(name)
        .with_input("app-name", app_name)
        .with_input("publish-profile", publish_profile)
        .with_input("package", package)
}
