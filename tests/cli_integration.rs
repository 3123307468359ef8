//! CLI integration tests
//!
//! These tests run the built binary and check exit codes, stdout and the
//! files it writes.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper to get the path to the workflowgen binary
fn workflowgen_bin() -> PathBuf {
    // In tests, the binary should be at target/debug/workflowgen
    let mut path = env::current_exe()
        .expect("Failed to get current executable path")
        .parent()
        .expect("No parent")
        .parent()
        .expect("No parent")
        .to_path_buf();

    // If we're in deps/, go up one more level
    if path.ends_with("deps") {
        path = path.parent().expect("No parent").to_path_buf();
    }

    path.join(format!("workflowgen{}", env::consts::EXE_SUFFIX))
}

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(workflowgen_bin())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("WORKFLOWGEN_WORKFLOW_NAME")
        .env_remove("WORKFLOWGEN_BRANCH")
        .env_remove("WORKFLOWGEN_PLATFORM")
        .env_remove("WORKFLOWGEN_PUBLISH_PROFILE")
        .env_remove("WORKFLOWGEN_LOG_LEVEL")
        .output()
        .expect("Failed to execute workflowgen")
}

/// Helper to create a repository holding one web project under `src/Api`
fn create_web_repo(dir: &TempDir) -> PathBuf {
    let repo_path = dir.path().to_path_buf();

    fs::create_dir_all(repo_path.join(".git")).expect("Failed to create .git");
    fs::write(
        repo_path.join(".git/config"),
        "[remote \"origin\"]\n\turl = https://github.com/contoso/orders.git\n",
    )
    .expect("Failed to write git config");

    fs::create_dir_all(repo_path.join("src/Api")).expect("Failed to create project dir");
    fs::write(
        repo_path.join("src/Api/Api.csproj"),
        r#"<Project Sdk="Microsoft.NET.Sdk.Web">
  <PropertyGroup>
    <TargetFramework>net6.0</TargetFramework>
  </PropertyGroup>
</Project>
"#,
    )
    .expect("Failed to write Api.csproj");

    repo_path
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = run(&["--help"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("workflowgen"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("inspect"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    let output = run(&["--version"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_writes_workflow() {
    let dir = TempDir::new().unwrap();
    let repo = create_web_repo(&dir);

    let output = run(
        &["generate", "src/Api", "--resource-name", "orders-api"],
        &repo,
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let workflow = fs::read_to_string(repo.join(".github/workflows/base.yml"))
        .expect("workflow file should exist");
    assert!(workflow.starts_with("name: Build and Deploy\n"));
    assert!(workflow.contains("  AZURE_WEBAPP_NAME: orders-api\n"));
    assert!(workflow.contains("  WORKING_DIRECTORY: src/Api\n"));
    assert!(workflow.contains("publish-profile: ${{ secrets.PUBLISH_PROFILE }}"));
}

#[test]
fn test_generate_dry_run_prints_yaml() {
    let dir = TempDir::new().unwrap();
    let repo = create_web_repo(&dir);

    let output = run(
        &[
            "generate",
            "src/Api",
            "--resource-name",
            "orders-api",
            "--platform",
            "linux",
            "--branch",
            "release",
            "--dry-run",
        ],
        &repo,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("    branches:\n    - release\n"));
    assert!(stdout.contains("runs-on: ubuntu-latest"));
    assert!(!repo.join(".github").exists());
}

#[test]
fn test_generate_to_output_file() {
    let dir = TempDir::new().unwrap();
    let repo = create_web_repo(&dir);

    let output = run(
        &[
            "generate",
            "src/Api",
            "--target",
            "nuget",
            "-o",
            "out/ci.yml",
        ],
        &repo,
    );

    assert!(output.status.success());
    let workflow = fs::read_to_string(repo.join("out/ci.yml")).unwrap();
    assert!(workflow.contains("name: Push to NuGet"));
}

#[test]
fn test_generate_without_resource_name_fails() {
    let dir = TempDir::new().unwrap();
    let repo = create_web_repo(&dir);

    let output = run(&["generate", "src/Api"], &repo);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("azure_resource_name"));
}

#[test]
fn test_unknown_log_level_env_fails_before_logging() {
    let dir = TempDir::new().unwrap();
    let repo = create_web_repo(&dir);

    let output = Command::new(workflowgen_bin())
        .args(["generate", "src/Api", "--resource-name", "orders-api"])
        .current_dir(&repo)
        .env_remove("RUST_LOG")
        .env("WORKFLOWGEN_LOG_LEVEL", "verbose")
        .output()
        .expect("Failed to execute workflowgen");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log level: verbose"));
    assert!(!stderr.contains("defaulting to INFO"));
    assert!(!repo.join(".github/workflows/base.yml").exists());
}

#[test]
fn test_generate_missing_path() {
    let dir = TempDir::new().unwrap();
    let output = run(&["generate", "does/not/exist"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path not found"));
}

#[test]
fn test_inspect_json() {
    let dir = TempDir::new().unwrap();
    let repo = create_web_repo(&dir);

    let output = run(&["inspect", "src/Api", "--format", "json"], &repo);

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("inspect output should be JSON");
    assert_eq!(json["project_type"], "web-app");
    assert_eq!(json["app_target"], "webapp");
    assert_eq!(json["github_owner"], "contoso");
    assert_eq!(json["working_directory"]["relative"], "src/Api");
}

#[test]
fn test_inspect_human() {
    let dir = TempDir::new().unwrap();
    let repo = create_web_repo(&dir);

    let output = run(&["inspect", "src/Api"], &repo);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project:       Api"));
    assert!(stdout.contains("Repository:    contoso/orders"));
}

#[test]
fn test_invalid_target_rejected() {
    let dir = TempDir::new().unwrap();
    let output = run(&["generate", "--target", "lambda"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown target"));
}
