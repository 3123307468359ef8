use super::{azure_deploy_step, env_ref, publish_step, require_opt, Common, Template};
use crate::classify::WorkflowSettings;
use crate::error::Result;
use crate::stack::AppTarget;
use crate::workflow::schema::Workflow;

pub const ENV_FUNCTIONAPP_NAME: &str = "AZURE_FUNCTIONAPP_NAME";
pub const ENV_FUNCTIONAPP_PACKAGE_PATH: &str = "AZURE_FUNCTIONAPP_PACKAGE_PATH";

/// Publishes a function project and deploys it with `Azure/functions-action`
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionAppTemplate;

impl Template for FunctionAppTemplate {
    fn target(&self) -> AppTarget {
        AppTarget::AzureFunction
    }

    fn build(&self, settings: &WorkflowSettings) -> Result<Workflow> {
        let common = Common::new(settings)?;
        let app_name = require_opt(settings.azure_resource_name.as_deref(), "azure_resource_name")?;
        let publish_profile = require_opt(
            settings.azure_publish_profile.as_deref(),
            "azure_publish_profile",
        )?;

        let package = env_ref(ENV_FUNCTIONAPP_PACKAGE_PATH);
        let steps = vec![
            publish_step(&package, "--no-build"),
            azure_deploy_step(
                "Deploy to Azure Function App",
                "Azure/functions-action@v1",
                env_ref(ENV_FUNCTIONAPP_NAME),
                publish_profile,
                package,
            ),
        ];

        Ok(common.workflow(
            &[
                (ENV_FUNCTIONAPP_NAME, app_name),
                (ENV_FUNCTIONAPP_PACKAGE_PATH, common.package_path()),
            ],
            steps,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkflowError;
    use crate::workflow::render;
    use crate::workflow::schema::StepAction;
    use crate::workflow::templates::tests::settings;

    fn function_settings() -> WorkflowSettings {
        let mut settings = settings()
            .with_workflow_name("Workflow generator for functions")
            .with_dotnet_version("3.1.x")
            .with_package_path("function/function.zip");
        settings.azure_resource_name = Some("myazurefunction".to_string());
        settings.azure_publish_profile = Some("${{ secrets.PUBLISH_PROFILE }}".to_string());
        settings
    }

    #[test]
    fn test_function_workflow_yaml() {
        let workflow = FunctionAppTemplate.build(&function_settings()).unwrap();
        let expected = r#"name: Workflow generator for functions
on:
  push:
    branches:
    - main
env:
  AZURE_FUNCTIONAPP_NAME: myazurefunction
  AZURE_FUNCTIONAPP_PACKAGE_PATH: function/function.zip
  CONFIGURATION: Release
  DOTNET_CORE_VERSION: 3.1.x
  WORKING_DIRECTORY: src/
  DOTNET_CLI_TELEMETRY_OPTOUT: 1
  DOTNET_SKIP_FIRST_TIME_EXPERIENCE: 1
  DOTNET_NOLOGO: true
  DOTNET_GENERATE_ASPNET_CERTIFICATE: false
  DOTNET_ADD_GLOBAL_TOOLS_TO_PATH: false
  DOTNET_MULTILEVEL_LOOKUP: 0
jobs:
  build:
    name: Build job
    runs-on: windows-latest
    steps:
    - uses: actions/checkout@v2
    - name: Setup .NET Core
      uses: actions/setup-dotnet@v1
      with:
        dotnet-version: ${{ env.DOTNET_CORE_VERSION }}
    - name: Restore
      run: dotnet restore ${{ env.WORKING_DIRECTORY }}
    - name: Build
      run: dotnet build ${{ env.WORKING_DIRECTORY }} --configuration ${{ env.CONFIGURATION }} --no-restore
    - name: Test
      run: dotnet test
    - name: Publish
      run: dotnet publish ${{ env.WORKING_DIRECTORY }} --configuration ${{ env.CONFIGURATION }} --output ${{ env.AZURE_FUNCTIONAPP_PACKAGE_PATH }} --no-build
    - name: Deploy to Azure Function App
      uses: Azure/functions-action@v1
      with:
        app-name: ${{ env.AZURE_FUNCTIONAPP_NAME }}
        publish-profile: ${{ secrets.PUBLISH_PROFILE }}
        package: ${{ env.AZURE_FUNCTIONAPP_PACKAGE_PATH }}"#;

        assert_eq!(render(&workflow).unwrap(), expected);
    }

    #[test]
    fn test_function_publish_is_framework_dependent() {
        let workflow = FunctionAppTemplate.build(&function_settings()).unwrap();
        let publish = workflow.jobs["build"]
            .steps
            .iter()
            .find(|s| s.name.as_deref() == Some("Publish"))
            .unwrap();

        match &publish.action {
            StepAction::Run(cmd) => {
                assert!(cmd.contains("--no-build"));
                assert!(!cmd.contains("-r win-x86"));
                assert!(!cmd.contains("--self-contained"));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_function_requires_resource_name() {
        let mut settings = function_settings();
        settings.azure_resource_name = None;

        assert!(matches!(
            FunctionAppTemplate.build(&settings),
            Err(WorkflowError::IncompleteSettings("azure_resource_name"))
        ));
    }

    #[test]
    fn test_function_requires_publish_profile() {
        let mut settings = function_settings();
        settings.azure_publish_profile = Some(String::new());

        assert!(matches!(
            FunctionAppTemplate.build(&settings),
            Err(WorkflowError::IncompleteSettings("azure_publish_profile"))
        ));
    }
}
