pub mod commands;
pub mod output;

pub use commands::{CliArgs, Commands, GenerateArgs, InspectArgs};
pub use output::{OutputFormat, OutputFormatter};
