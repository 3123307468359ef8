//! Structured logging setup for workflowgen
//!
//! Logs always go to stderr so generated YAML and inspect output on stdout
//! stay machine-readable.
//!
//! # Example
//!
//! ```no_run
//! use workflowgen::util::logging;
//!
//! logging::init_from_env();
//!
//! use tracing::{debug, info};
//! info!("Generating workflow");
//! debug!(project = "Api.csproj", "Classifying project");
//! ```

use crate::config::{ConfigError, GeneratorConfig};
use std::env;
use std::io;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., workflowgen::classify) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    /// INFO level, plain console output with targets, no locations
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Reads `WORKFLOWGEN_LOG_LEVEL` and `WORKFLOWGEN_LOG_JSON`
    pub fn from_env() -> Self {
        let level_str =
            env::var("WORKFLOWGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            level: parse_level(&level_str),
            use_json: json_from_env(),
            ..Default::default()
        }
    }
}

impl LoggingConfig {
    /// Level from the generator configuration, JSON output from `WORKFLOWGEN_LOG_JSON`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configured level is not a known name
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            level: config.log_level()?,
            use_json: json_from_env(),
            ..Default::default()
        })
    }
}

fn json_from_env() -> bool {
    env::var("WORKFLOWGEN_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false)
}

/// Parses a log level from a string
///
/// Unrecognized input falls back to `Level::INFO` with a warning on stderr.
///
/// ```
/// use workflowgen::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the logging system. Only the first call has any effect.
///
/// When `RUST_LOG` is set its directives replace the configured level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            if let Ok(directive) = format!("workflowgen={}", config.level).parse() {
                filter = filter.add_directive(directive);
            }
        }

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        }
    });
}

/// Initializes logging from `WORKFLOWGEN_LOG_LEVEL` / `WORKFLOWGEN_LOG_JSON`
pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
