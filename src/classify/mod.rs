//! Project classification: SDK rules, runtime version and working directory

pub mod engine;
pub mod settings;

pub use engine::{classify, framework_version, runtime_version, SDK_PACKAGE_PATH};
pub use settings::{
    to_slash_path, WorkflowSettings, WorkingDirectory, DEFAULT_BRANCH, DEFAULT_WORKFLOW_NAME,
};
