use super::web_app::{ENV_WEBAPP_NAME, ENV_WEBAPP_PACKAGE_PATH, WEBAPPS_DEPLOY_ACTION};
use super::{azure_deploy_step, env_ref, publish_step, require, require_opt, Common, Template};
use crate::classify::WorkflowSettings;
use crate::error::Result;
use crate::stack::AppTarget;
use crate::workflow::schema::Workflow;

pub const ENV_WEBJOB_NAME: &str = "WEBJOB_NAME";

/// Continuous WebJob: a single-file publish placed under the host app's
/// `App_Data/Jobs/Continuous` folder
#[derive(Debug, Clone, Copy, Default)]
pub struct WebJobTemplate;

impl Template for WebJobTemplate {
    fn target(&self) -> AppTarget {
        AppTarget::WebJob
    }

    fn build(&self, settings: &WorkflowSettings) -> Result<Workflow> {
        let common = Common::new(settings)?;
        let app_name = require_opt(settings.azure_resource_name.as_deref(), "azure_resource_name")?;
        let publish_profile = require_opt(
            settings.azure_publish_profile.as_deref(),
            "azure_publish_profile",
        )?;
        let job_name = require(&settings.project_name, "project_name")?;

        let package_root = env_ref(ENV_WEBAPP_PACKAGE_PATH);
        let job_dir = format!(
            "{}/App_Data/Jobs/Continuous/{}",
            package_root,
            env_ref(ENV_WEBJOB_NAME)
        );
        let publish_args = format!(
            "-r {} --self-contained true -p:PublishSingleFile=true",
            settings.app_platform.runtime_identifier()
        );

        let steps = vec![
            publish_step(&job_dir, &publish_args),
            azure_deploy_step(
                "Deploy to Azure Web App",
                WEBAPPS_DEPLOY_ACTION,
                env_ref(ENV_WEBAPP_NAME),
                publish_profile,
                package_root,
            ),
        ];

        Ok(common.workflow(
            &[
                (ENV_WEBAPP_NAME, app_name),
                (ENV_WEBAPP_PACKAGE_PATH, common.package_path()),
                (ENV_WEBJOB_NAME, job_name),
            ],
            steps,
        ))
    }
}
