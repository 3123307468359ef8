use super::{azure_deploy_step, env_ref, publish_step, require_opt, Common, Template};
use crate::classify::WorkflowSettings;
use crate::error::Result;
use crate::stack::AppTarget;
use crate::workflow::schema::Workflow;

pub const ENV_WEBAPP_NAME: &str = "AZURE_WEBAPP_NAME";
pub const ENV_WEBAPP_PACKAGE_PATH: &str = "AZURE_WEBAPP_PACKAGE_PATH";
pub const WEBAPPS_DEPLOY_ACTION: &str = "Azure/webapps-deploy@v2";

/// Self-contained publish deployed with `Azure/webapps-deploy`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebAppTemplate;

impl Template for WebAppTemplate {
    fn target(&self) -> AppTarget {
        AppTarget::WebApp
    }

    fn build(&self, settings: &WorkflowSettings) -> Result<Workflow> {
        let common = Common::new(settings)?;
        let app_name = require_opt(settings.azure_resource_name.as_deref(), "azure_resource_name")?;
        let publish_profile = require_opt(
            settings.azure_publish_profile.as_deref(),
            "azure_publish_profile",
        )?;

        let package = env_ref(ENV_WEBAPP_PACKAGE_PATH);
        let runtime_args = format!(
            "-r {} --self-contained true",
            settings.app_platform.runtime_identifier()
        );
        let steps = vec![
            publish_step(&package, &runtime_args),
            azure_deploy_step(
                "Deploy to Azure Web App",
                WEBAPPS_DEPLOY_ACTION,
                env_ref(ENV_WEBAPP_NAME),
                publish_profile,
                package,
            ),
        ];

        Ok(common.workflow(
            &[
                (ENV_WEBAPP_NAME, app_name),
                (ENV_WEBAPP_PACKAGE_PATH, common.package_path()),
            ],
            steps,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkflowError;
    use crate::stack::AppPlatform;
    use crate::workflow::render;
    use crate::workflow::templates::tests::settings;

    fn web_settings() -> WorkflowSettings {
        let mut settings = settings()
            .with_workflow_name("Workflow generator for webapps")
            .with_dotnet_version("3.1.x")
            .with_package_path("webapp/webapp.zip");
        settings.azure_resource_name = Some("myazurewebapp".to_string());
        settings.azure_publish_profile = Some("${{ secrets.PUBLISH_PROFILE }}".to_string());
        settings
    }

    #[test]
    fn test_web_app_workflow_yaml() {
        let workflow = WebAppTemplate.build(&web_settings()).unwrap();
        let expected = r#"name: Workflow generator for webapps
on:
  push:
    branches:
    - main
env:
  AZURE_WEBAPP_NAME: myazurewebapp
  AZURE_WEBAPP_PACKAGE_PATH: webapp/webapp.zip
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
      run: dotnet publish ${{ env.WORKING_DIRECTORY }} --configuration ${{ env.CONFIGURATION }} --output ${{ env.AZURE_WEBAPP_PACKAGE_PATH }} -r win-x86 --self-contained true
    - name: Deploy to Azure Web App
      uses: Azure/webapps-deploy@v2
      with:
        app-name: ${{ env.AZURE_WEBAPP_NAME }}
        publish-profile: ${{ secrets.PUBLISH_PROFILE }}
        package: ${{ env.AZURE_WEBAPP_PACKAGE_PATH }}"#;

        assert_eq!(render(&workflow).unwrap(), expected);
    }

    #[test]
    fn test_web_app_on_linux() {
        let settings = web_settings().with_app_platform(AppPlatform::Linux);
        let yaml = render(&WebAppTemplate.build(&settings).unwrap()).unwrap();

        assert!(yaml.contains("runs-on: ubuntu-latest"));
        assert!(yaml.contains("-r linux-x64 --self-contained true"));
        assert!(!yaml.contains("win-x86"));
    }

    #[test]
    fn test_web_app_build_is_idempotent() {
        let settings = web_settings();
        let first = render(&WebAppTemplate.build(&settings).unwrap()).unwrap();
        let second = render(&WebAppTemplate.build(&settings).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_web_app_requires_version() {
        let settings = web_settings().with_dotnet_version("");
        assert!(matches!(
            WebAppTemplate.build(&settings),
            Err(WorkflowError::IncompleteSettings("dotnet_version"))
        ));
    }
}
