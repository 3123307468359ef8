//! Deployment target and hosting resource selection

use crate::classify::WorkflowSettings;
use crate::stack::{AppPlatform, AppTarget, ProjectType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Picks a deployment target for a classified project
pub trait TargetResolver: Send + Sync {
    fn resolve(&self, project_type: Option<ProjectType>) -> AppTarget;

    /// Target forced by the caller, overriding classification
    fn explicit(&self) -> Option<AppTarget> {
        None
    }
}

/// Maps project kinds to their usual hosting target.
///
/// An explicit target, when given, wins over the mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTargetResolver {
    explicit: Option<AppTarget>,
}

impl DefaultTargetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_explicit(target: AppTarget) -> Self {
        Self {
            explicit: Some(target),
        }
    }

    pub fn default_target(project_type: Option<ProjectType>) -> AppTarget {
        match project_type {
            Some(ProjectType::Console) | Some(ProjectType::Worker) => AppTarget::WebJob,
            Some(ProjectType::ClassLibrary) => AppTarget::Nuget,
            Some(ProjectType::BlazorWasm) | Some(ProjectType::WebApp) => AppTarget::WebApp,
            Some(ProjectType::AzureFunction) => AppTarget::AzureFunction,
            None => AppTarget::Unknown,
        }
    }
}

impl TargetResolver for DefaultTargetResolver {
    fn resolve(&self, project_type: Option<ProjectType>) -> AppTarget {
        let target = self
            .explicit
            .unwrap_or_else(|| Self::default_target(project_type));
        debug!(?project_type, %target, "Resolved deployment target");
        target
    }

    fn explicit(&self) -> Option<AppTarget> {
        self.explicit
    }
}

/// Hosting resource a workflow deploys to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentResource {
    pub subscription: Option<String>,
    pub resource_group: Option<String>,
    pub resource_name: Option<String>,
    pub platform: AppPlatform,
    pub publish_profile: Option<String>,
}

/// Supplies the hosting resource for a project
pub trait ResourceProvider: Send + Sync {
    fn provide(&self, settings: &WorkflowSettings) -> DeploymentResource;
}

/// Returns a fixed resource, typically assembled from flags and config
#[derive(Debug, Clone, Default)]
pub struct StaticResourceProvider {
    resource: DeploymentResource,
}

impl StaticResourceProvider {
    pub fn new(resource: DeploymentResource) -> Self {
        Self { resource }
    }
}

impl ResourceProvider for StaticResourceProvider {
    fn provide(&self, settings: &WorkflowSettings) -> DeploymentResource {
        debug!(
            project = %settings.project_name,
            resource = ?self.resource.resource_name,
            platform = %self.resource.platform,
            "Providing deployment resource"
        );
        self.resource.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        console = { Some(ProjectType::Console), AppTarget::WebJob },
        worker = { Some(ProjectType::Worker), AppTarget::WebJob },
        library = { Some(ProjectType::ClassLibrary), AppTarget::Nuget },
        blazor = { Some(ProjectType::BlazorWasm), AppTarget::WebApp },
        web = { Some(ProjectType::WebApp), AppTarget::WebApp },
        function = { Some(ProjectType::AzureFunction), AppTarget::AzureFunction },
        none = { None, AppTarget::Unknown },
    )]
    fn test_default_mapping(project_type: Option<ProjectType>, expected: AppTarget) {
        assert_eq!(DefaultTargetResolver::new().resolve(project_type), expected);
    }

    #[test]
    fn test_explicit_target_wins() {
        let resolver = DefaultTargetResolver::with_explicit(AppTarget::WebApp);
        assert_eq!(resolver.resolve(Some(ProjectType::ClassLibrary)), AppTarget::WebApp);
        assert_eq!(resolver.resolve(None), AppTarget::WebApp);
        assert_eq!(resolver.explicit(), Some(AppTarget::WebApp));
    }

    #[test]
    fn test_static_provider_returns_configured_resource() {
        let resource = DeploymentResource {
            resource_name: Some("orders-api".to_string()),
            platform: AppPlatform::Linux,
            ..Default::default()
        };
        let provider = StaticResourceProvider::new(resource.clone());

        assert_eq!(provider.provide(&WorkflowSettings::default()), resource);
    }
}
