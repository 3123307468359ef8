//! Configuration management for workflowgen
//!
//! Settings are loaded from environment variables with sensible defaults.
//! Command-line flags override whatever is loaded here.
//!
//! # Environment Variables
//!
//! - `WORKFLOWGEN_WORKFLOW_NAME`: Workflow display name - default: "Build and Deploy"
//! - `WORKFLOWGEN_BRANCH`: Branch whose pushes trigger the workflow - default: "main"
//! - `WORKFLOWGEN_PUBLISH_PROFILE`: Reference to the publish-profile secret -
//!   default: `${{ secrets.PUBLISH_PROFILE }}`
//! - `WORKFLOWGEN_PLATFORM`: Hosting platform (windows|linux) - default: "windows"
//! - `WORKFLOWGEN_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use workflowgen::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("Workflow name: {}", config.workflow_name);
//! ```

use crate::classify::{DEFAULT_BRANCH, DEFAULT_WORKFLOW_NAME};
use crate::resolve::DeploymentResource;
use crate::stack::AppPlatform;
use std::env;
use thiserror::Error;
use tracing::Level;

const DEFAULT_PUBLISH_PROFILE: &str = "${{ secrets.PUBLISH_PROFILE }}";
const DEFAULT_PLATFORM: &str = "windows";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Platform name outside windows/linux
    #[error("Invalid platform: {0}. Valid options: windows, linux")]
    InvalidPlatform(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Defaults applied to every generated workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub workflow_name: String,
    pub branch: String,
    /// Opaque secret reference written into Azure deploy steps
    pub publish_profile: String,
    /// Platform name as configured; see [`GeneratorConfig::platform`]
    pub platform: String,
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneratorConfig {
    /// Loads `WORKFLOWGEN_*` variables, falling back to defaults for any
    /// that are unset
    fn default() -> Self {
        let workflow_name = env::var("WORKFLOWGEN_WORKFLOW_NAME")
            .unwrap_or_else(|_| DEFAULT_WORKFLOW_NAME.to_string());

        let branch =
            env::var("WORKFLOWGEN_BRANCH").unwrap_or_else(|_| DEFAULT_BRANCH.to_string());

        let publish_profile = env::var("WORKFLOWGEN_PUBLISH_PROFILE")
            .unwrap_or_else(|_| DEFAULT_PUBLISH_PROFILE.to_string());

        let platform = env::var("WORKFLOWGEN_PLATFORM")
            .unwrap_or_else(|_| DEFAULT_PLATFORM.to_string())
            .to_lowercase();

        let log_level = env::var("WORKFLOWGEN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            workflow_name,
            branch,
            publish_profile,
            platform,
            log_level,
        }
    }
}

impl GeneratorConfig {
    pub fn platform(&self) -> Result<AppPlatform, ConfigError> {
        AppPlatform::from_name(&self.platform)
            .ok_or_else(|| ConfigError::InvalidPlatform(self.platform.clone()))
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the workflow name or branch is blank, the
    /// branch contains whitespace, or the platform or log level is unknown
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workflow_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Workflow name cannot be empty".to_string(),
            ));
        }

        if self.branch.trim().is_empty() || self.branch.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid branch name: '{}'",
                self.branch
            )));
        }

        self.platform()?;
        self.log_level()?;

        Ok(())
    }

    /// Configured logging level; unknown names are an error, not a fallback
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        match self.log_level.as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            ))),
        }
    }

    /// Deployment resource seeded with the configured platform and secret
    pub fn deployment_resource(&self) -> Result<DeploymentResource, ConfigError> {
        Ok(DeploymentResource {
            platform: self.platform()?,
            publish_profile: Some(self.publish_profile.clone()),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "WORKFLOWGEN_WORKFLOW_NAME",
        "WORKFLOWGEN_BRANCH",
        "WORKFLOWGEN_PUBLISH_PROFILE",
        "WORKFLOWGEN_PLATFORM",
        "WORKFLOWGEN_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = GeneratorConfig::default();

        assert_eq!(config.workflow_name, "Build and Deploy");
        assert_eq!(config.branch, "main");
        assert_eq!(config.publish_profile, "${{ secrets.PUBLISH_PROFILE }}");
        assert_eq!(config.platform().unwrap(), AppPlatform::Windows);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("WORKFLOWGEN_WORKFLOW_NAME", "Release");
        env::set_var("WORKFLOWGEN_BRANCH", "develop");
        env::set_var("WORKFLOWGEN_PLATFORM", "Linux");
        env::set_var("WORKFLOWGEN_LOG_LEVEL", "DEBUG");

        let config = GeneratorConfig::default();
        clear_env();

        assert_eq!(config.workflow_name, "Release");
        assert_eq!(config.branch, "develop");
        assert_eq!(config.platform().unwrap(), AppPlatform::Linux);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    #[serial]
    fn test_unknown_log_level_is_an_error() {
        clear_env();
        env::set_var("WORKFLOWGEN_LOG_LEVEL", "verbose");
        let config = GeneratorConfig::default();
        clear_env();

        assert!(matches!(
            config.log_level(),
            Err(ConfigError::ValidationFailed(msg)) if msg.contains("verbose")
        ));
    }

    #[test]
    #[serial]
    fn test_invalid_platform() {
        clear_env();
        env::set_var("WORKFLOWGEN_PLATFORM", "solaris");
        let config = GeneratorConfig::default();
        clear_env();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPlatform(p)) if p == "solaris"
        ));
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_values() {
        clear_env();
        let base = GeneratorConfig::default();

        let blank_name = GeneratorConfig {
            workflow_name: "  ".to_string(),
            ..base.clone()
        };
        assert!(blank_name.validate().is_err());

        let spaced_branch = GeneratorConfig {
            branch: "my branch".to_string(),
            ..base.clone()
        };
        assert!(spaced_branch.validate().is_err());

        let bad_level = GeneratorConfig {
            log_level: "verbose".to_string(),
            ..base
        };
        assert!(bad_level.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_deployment_resource() {
        clear_env();
        let resource = GeneratorConfig::default().deployment_resource().unwrap();

        assert_eq!(resource.platform, AppPlatform::Windows);
        assert_eq!(
            resource.publish_profile.as_deref(),
            Some("${{ secrets.PUBLISH_PROFILE }}")
        );
        assert_eq!(resource.resource_name, None);
    }
}
