//! Workflow document model, recipes, YAML emission and output

mod render;
pub mod schema;
mod sink;
pub mod templates;

pub use render::{render, render_value};
pub use schema::{BranchFilter, Job, Step, StepAction, Triggers, Workflow};
pub use sink::{workflow_path, write_workflow, WORKFLOW_DIR, WORKFLOW_FILE_NAME};
pub use templates::{template_for, Template};
