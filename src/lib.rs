//! workflowgen - GitHub Actions workflow generation for .NET projects
//!
//! This library reads a .NET project descriptor, classifies the project from
//! its SDK and properties, resolves where it deploys, and renders a
//! build-and-deploy workflow as YAML.
//!
//! # Core Concepts
//!
//! - **Classification**: SDK rules that turn [`ProjectProperties`] into
//!   [`WorkflowSettings`] (project kind, runtime version, working directory)
//! - **Resolution**: pluggable [`TargetResolver`] and [`ResourceProvider`]
//!   implementations that pick the deployment target and hosting resource
//! - **Templates**: one [`Template`] recipe per deployment target
//! - **Rendering**: a block YAML emitter with GitHub Actions layout
//!
//! # Example Usage
//!
//! ```no_run
//! use workflowgen::{
//!     DefaultTargetResolver, DeploymentResource, GeneratorConfig, WorkflowGenerator,
//! };
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::default();
//! let resource = DeploymentResource {
//!     resource_name: Some("orders-api".to_string()),
//!     ..config.deployment_resource()?
//! };
//!
//! let generator =
//!     WorkflowGenerator::with_defaults(config, DefaultTargetResolver::new(), resource);
//! let generated = generator.generate(Path::new("src/Orders.Api"))?;
//! println!("{}", generated.yaml);
//! generator.write(&generated)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`project`]: project file discovery and descriptor parsing
//! - [`classify`]: classification engine and [`WorkflowSettings`]
//! - [`repo`]: repository root and GitHub remote lookup
//! - [`resolve`]: deployment target and resource selection
//! - [`workflow`]: document model, recipes, YAML emission and output

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod generator;
pub mod project;
pub mod repo;
pub mod resolve;
pub mod stack;
pub mod util;
pub mod workflow;

pub use classify::{classify, WorkflowSettings, WorkingDirectory};
pub use config::{ConfigError, GeneratorConfig};
pub use error::{Result, WorkflowError};
pub use generator::{GeneratedWorkflow, WorkflowGenerator};
pub use project::{discover_project, read_descriptor, ProjectProperties};
pub use repo::{GitRepositoryLocator, RepoInfo, RepositoryLocator};
pub use resolve::{
    DefaultTargetResolver, DeploymentResource, ResourceProvider, StaticResourceProvider,
    TargetResolver,
};
pub use stack::{AppPlatform, AppTarget, ProjectType, SdkFamily};
pub use util::{init_from_env, init_logging, LoggingConfig};
pub use workflow::{render, render_value, template_for, write_workflow, Template, Workflow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
