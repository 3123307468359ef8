//! GitHub Actions workflow document types
//!
//! Covers the subset of the workflow syntax the build-and-deploy recipes
//! emit. Map-valued fields use `IndexMap` so the emitted document keeps
//! insertion order; re-inserting a key replaces its value in place.

use indexmap::IndexMap;
use serde::Serialize;

/// Root of a workflow file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workflow {
    pub name: String,

    #[serde(rename = "on")]
    pub on: Triggers,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,

    pub jobs: IndexMap<String, Job>,
}

impl Workflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: Triggers::default(),
            env: IndexMap::new(),
            jobs: IndexMap::new(),
        }
    }

    /// Run on pushes to one branch
    #[must_use]
    pub fn on_push(mut self, branch: impl Into<String>) -> Self {
        self.on.push = Some(BranchFilter {
            branches: vec![branch.into()],
        });
        self
    }

    /// Run on pull requests targeting one branch
    #[must_use]
    pub fn on_pull_request(mut self, branch: impl Into<String>) -> Self {
        self.on.pull_request = Some(BranchFilter {
            branches: vec![branch.into()],
        });
        self
    }

    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_job(mut self, key: impl Into<String>, job: Job) -> Self {
        self.jobs.insert(key.into(), job);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Triggers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<BranchFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<BranchFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchFilter {
    pub branches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Job {
    pub name: String,
    /// Runner label, e.g. `windows-latest`
    pub runs_on: String,
    pub steps: Vec<Step>,
}

impl Job {
    pub fn new(name: impl Into<String>, runs_on: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs_on: runs_on.into(),
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }
}

/// What a step executes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    /// Reusable action reference, e.g. `actions/checkout@v2`
    Uses(String),
    /// Shell command
    Run(String),
}

/// A job step. Serializes as `name`, then `uses`/`run`, then `with`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub action: StepAction,

    #[serde(rename = "with", skip_serializing_if = "IndexMap::is_empty")]
    pub with_inputs: IndexMap<String, String>,
}

impl Step {
    /// Create a step that uses an action
    pub fn uses(action: impl Into<String>) -> Self {
        Self {
            name: None,
            action: StepAction::Uses(action.into()),
            with_inputs: IndexMap::new(),
        }
    }

    /// Create a step that runs a shell command
    pub fn run(command: impl Into<String>) -> Self {
        Self {
            name: None,
            action: StepAction::Run(command.into()),
            with_inputs: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_inputs.insert(key.into(), value.into());
        self
    }
}
