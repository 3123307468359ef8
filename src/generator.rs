//! End-to-end generation: project path in, workflow document out

use crate::classify::{classify, WorkflowSettings};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::project::{discover_project, read_descriptor};
use crate::repo::{GitRepositoryLocator, RepositoryLocator};
use crate::resolve::{
    DefaultTargetResolver, DeploymentResource, ResourceProvider, StaticResourceProvider,
    TargetResolver,
};
use crate::stack::AppTarget;
use crate::workflow::{render, template_for, workflow_path, write_workflow, Workflow};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedWorkflow {
    pub settings: WorkflowSettings,
    #[serde(skip)]
    pub workflow: Workflow,
    pub yaml: String,
    /// Where [`WorkflowGenerator::write`] puts the file
    pub output_path: PathBuf,
}

/// Runs discovery, classification, resolution, templating and rendering
pub struct WorkflowGenerator {
    fs: Arc<dyn FileSystem>,
    locator: Box<dyn RepositoryLocator>,
    resolver: Box<dyn TargetResolver>,
    resources: Box<dyn ResourceProvider>,
    config: GeneratorConfig,
}

impl WorkflowGenerator {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        locator: Box<dyn RepositoryLocator>,
        resolver: Box<dyn TargetResolver>,
        resources: Box<dyn ResourceProvider>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            fs,
            locator,
            resolver,
            resources,
            config,
        }
    }

    /// Real file system and git lookup, with a fixed resolver and resource
    pub fn with_defaults(
        config: GeneratorConfig,
        resolver: DefaultTargetResolver,
        resource: DeploymentResource,
    ) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        Self::new(
            fs.clone(),
            Box::new(GitRepositoryLocator::new(fs)),
            Box::new(resolver),
            Box::new(StaticResourceProvider::new(resource)),
            config,
        )
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Classifies the project at `path` and resolves its deployment
    pub fn inspect(&self, path: &Path) -> Result<WorkflowSettings> {
        let project_file = discover_project(self.fs.as_ref(), path)?;
        let properties = read_descriptor(self.fs.as_ref(), &project_file)?;
        let repo = self.locator.locate(&project_file);
        debug!(?repo, "Repository lookup finished");

        let settings = classify(&properties, &project_file, &repo)?
            .with_workflow_name(&self.config.workflow_name)
            .with_branch(&self.config.branch);

        let target = match (self.resolver.explicit(), settings.app_target) {
            (Some(target), _) | (None, Some(target)) => target,
            (None, None) => self.resolver.resolve(settings.project_type),
        };
        let settings = settings.with_app_target(target);

        let resource = self.resources.provide(&settings);
        let settings = settings.with_deployment(resource);

        if target.requires_azure_resource() && settings.azure_resource_name.is_none() {
            warn!(target = %target, "No Azure resource name configured for this target");
        }

        info!(
            project = %settings.project_name,
            target = %target,
            platform = %settings.app_platform,
            "Resolved deployment"
        );
        Ok(settings)
    }

    /// Builds and renders the workflow without touching the file system
    pub fn generate(&self, path: &Path) -> Result<GeneratedWorkflow> {
        let settings = self.inspect(path)?;
        let target = settings.app_target.unwrap_or(AppTarget::Unknown);

        let template = template_for(target)?;
        let workflow = template.build(&settings)?;
        let yaml = render(&workflow)?;
        let output_path = workflow_path(settings.working_directory.output_base());

        info!(target = %target, output = %output_path.display(), "Generated workflow");
        Ok(GeneratedWorkflow {
            settings,
            workflow,
            yaml,
            output_path,
        })
    }

    /// Writes a generated workflow to its output path
    pub fn write(&self, generated: &GeneratedWorkflow) -> Result<PathBuf> {
        write_workflow(
            self.fs.as_ref(),
            generated.settings.working_directory.output_base(),
            &generated.yaml,
        )
    }
}
