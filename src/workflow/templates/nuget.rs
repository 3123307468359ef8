use super::{env_ref, Common, Template};
use crate::classify::WorkflowSettings;
use crate::error::Result;
use crate::stack::AppTarget;
use crate::workflow::schema::{Step, Workflow};

pub const ENV_NUGET_PACKAGE_PATH: &str = "NUGET_PACKAGE_PATH";
pub const ENV_NUGET_SOURCE: &str = "NUGET_SOURCE";
pub const NUGET_ORG_SOURCE: &str = "https://api.nuget.org/v3/index.json";
pub const NUGET_API_KEY_SECRET: &str = "${{ secrets.NUGET_API_KEY }}";

/// Packs a library and pushes it to nuget.org
#[derive(Debug, Clone, Copy, Default)]
pub struct NugetTemplate;

impl Template for NugetTemplate {
    fn target(&self) -> AppTarget {
        AppTarget::Nuget
    }

    fn build(&self, settings: &WorkflowSettings) -> Result<Workflow> {
        let common = Common::new(settings)?;
        let package_dir = env_ref(ENV_NUGET_PACKAGE_PATH);

        let steps = vec![
            Step::run(format!(
                "dotnet pack {} --configuration {} --no-build --output {}",
                env_ref(super::ENV_WORKING_DIRECTORY),
                env_ref(super::ENV_CONFIGURATION),
                package_dir
            ))
            .with_name("Pack"),
            Step::run(format!(
                "dotnet nuget push {}/*.nupkg --api-key {} --source {} --skip-duplicate",
                package_dir,
                NUGET_API_KEY_SECRET,
                env_ref(ENV_NUGET_SOURCE)
            ))
            .with_name("Push to NuGet"),
        ];

        Ok(common.workflow(
            &[
                (ENV_NUGET_PACKAGE_PATH, common.package_path()),
                (ENV_NUGET_SOURCE, NUGET_ORG_SOURCE),
            ],
            steps,
        ))
    }
}
