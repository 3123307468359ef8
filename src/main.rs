use workflowgen::cli::commands::{CliArgs, Commands, GenerateArgs, InspectArgs};
use workflowgen::cli::output::OutputFormatter;
use workflowgen::fs::{FileSystem, RealFileSystem};
use workflowgen::util::logging::{init_logging, parse_level, LoggingConfig};
use workflowgen::{DefaultTargetResolver, GeneratorConfig, WorkflowGenerator, VERSION};

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, Level};

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = init_logging_from_args(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    debug!("workflowgen v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Generate(generate_args) => handle_generate(generate_args, args.quiet),
        Commands::Inspect(inspect_args) => handle_inspect(inspect_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) -> Result<()> {
    let mut config = LoggingConfig::from_config(&GeneratorConfig::default())
        .context("Configuration error")?;

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    init_logging(config);
    Ok(())
}

fn project_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn load_config(args: Option<&GenerateArgs>) -> Result<GeneratorConfig> {
    let default_config = GeneratorConfig::default();
    let config = match args {
        Some(args) => GeneratorConfig {
            workflow_name: args
                .workflow_name
                .clone()
                .unwrap_or(default_config.workflow_name),
            branch: args.branch.clone().unwrap_or(default_config.branch),
            publish_profile: args
                .publish_profile
                .clone()
                .unwrap_or(default_config.publish_profile),
            ..default_config
        },
        None => default_config,
    };

    config.validate().context("Configuration error")?;
    Ok(config)
}

fn handle_generate(args: &GenerateArgs, quiet: bool) -> i32 {
    info!("Starting workflow generation");

    match run_generate(args, quiet) {
        Ok(()) => 0,
        Err(e) => {
            error!("Workflow generation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_generate(args: &GenerateArgs, quiet: bool) -> Result<()> {
    let path = project_path(args.path.as_deref());
    debug!("Project path: {}", path.display());

    let config = load_config(Some(args))?;

    let mut resource = config.deployment_resource()?;
    if let Some(platform) = args.platform {
        resource.platform = platform.into();
    }
    resource.resource_name = args.resource_name.clone();
    resource.subscription = args.subscription.clone();
    resource.resource_group = args.resource_group.clone();

    let resolver = match args.target {
        Some(target) => {
            debug!("Target explicitly set to: {}", target);
            DefaultTargetResolver::with_explicit(target)
        }
        None => DefaultTargetResolver::new(),
    };

    let generator = WorkflowGenerator::with_defaults(config, resolver, resource);
    let generated = generator
        .generate(&path)
        .with_context(|| format!("Failed to generate workflow for {}", path.display()))?;

    if args.dry_run {
        println!("{}", generated.yaml);
        return Ok(());
    }

    let written = match &args.output {
        Some(file) => write_to_file(file, &generated.yaml)?,
        None => generator.write(&generated)?,
    };

    if !quiet {
        let target = generated
            .settings
            .app_target
            .map(|t| t.to_string())
            .unwrap_or_default();
        println!("\u{2713} Wrote {} workflow to {}", target, written.display());
    }

    Ok(())
}

fn write_to_file(file: &Path, yaml: &str) -> Result<PathBuf> {
    let fs = RealFileSystem;
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)?;
    }
    fs.write(file, &format!("{}\n", yaml))
        .with_context(|| format!("Failed to write {}", file.display()))?;
    info!("Workflow written to: {}", file.display());
    Ok(file.to_path_buf())
}

fn handle_inspect(args: &InspectArgs) -> i32 {
    match run_inspect(args) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Inspection failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_inspect(args: &InspectArgs) -> Result<String> {
    let path = project_path(args.path.as_deref());
    debug!(
        "Inspecting {} (cwd: {:?})",
        path.display(),
        env::current_dir().ok()
    );

    let config = load_config(None)?;
    let resource = config.deployment_resource()?;
    let generator =
        WorkflowGenerator::with_defaults(config, DefaultTargetResolver::new(), resource);

    let settings = generator
        .inspect(&path)
        .with_context(|| format!("Failed to inspect {}", path.display()))?;

    OutputFormatter::new(args.format.into()).format_settings(&settings)
}
