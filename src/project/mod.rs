//! Locating and reading .NET project descriptors

pub mod descriptor;
pub mod discovery;

pub use descriptor::{read_descriptor, ProjectProperties};
pub use discovery::{discover_project, PROJECT_EXTENSIONS};
