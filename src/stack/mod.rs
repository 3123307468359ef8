//! Typed identifiers shared by classification and workflow generation.
//!
//! - [`AppTarget`]: closed vocabulary of deployment targets with an explicit
//!   `Unknown` case for anything supplied from outside
//! - [`ProjectType`]: kind of project inferred from its descriptor
//! - [`AppPlatform`]: operating system of the hosting resource
//! - [`SdkFamily`]: the project SDKs the classifier recognizes

#[macro_use]
pub mod id_enum_macro;

pub mod app_target;
pub mod project_type;
pub mod sdk;

pub use app_target::AppTarget;
pub use project_type::{AppPlatform, ProjectType};
pub use sdk::SdkFamily;
