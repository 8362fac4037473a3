//! Unit tests for the Environment Provisioner service.

use runup_cli::application::services::provision::{ensure_environment, require_environment};
use runup_cli::domain::config::RunupConfig;
use runup_cli::domain::error::BootstrapError;

use crate::mocks::{MemoryFs, NoopReporter, RecordingRunner};

#[tokio::test]
async fn absent_path_runs_creation_and_reports_created() {
    let runner = RecordingRunner::new();
    let config = RunupConfig::default();

    let env = ensure_environment(&runner, &MemoryFs::absent(), &NoopReporter, &config)
        .await
        .expect("environment should be created");

    assert!(env.created, "fresh path must report created=true");
    assert_eq!(runner.calls(), vec!["python3 -m venv .venv".to_string()]);
}

#[tokio::test]
async fn present_path_skips_creation_and_reports_existing() {
    let runner = RecordingRunner::new();
    let config = RunupConfig::default();

    let env = ensure_environment(&runner, &MemoryFs::present(), &NoopReporter, &config)
        .await
        .expect("existing environment should be accepted");

    assert!(!env.created, "existing path must report created=false");
    assert_eq!(runner.call_count(), 0, "no creation command may run");
}

#[tokio::test]
async fn configured_interpreter_and_path_are_used() {
    let runner = RecordingRunner::new();
    let mut config = RunupConfig::default();
    config.env.python = "python3.12".to_string();
    config.env.path = "env".into();

    let env = ensure_environment(&runner, &MemoryFs::absent(), &NoopReporter, &config)
        .await
        .expect("environment should be created");

    assert_eq!(runner.calls(), vec!["python3.12 -m venv env".to_string()]);
    assert_eq!(env.path, std::path::PathBuf::from("env"));
}

#[test]
fn require_resolves_present_environment_without_creating() {
    let config = RunupConfig::default();

    let env = require_environment(&MemoryFs::present(), &config)
        .expect("existing environment should resolve");

    assert!(!env.created);
    assert_eq!(env.path, std::path::PathBuf::from(".venv"));
}

#[test]
fn require_fails_for_absent_environment() {
    let config = RunupConfig::default();

    let err = require_environment(&MemoryFs::absent(), &config)
        .expect_err("missing environment must be an error");

    assert!(
        err.to_string().contains("runup provision"),
        "error should point at the provisioning command: {err}"
    );
}

#[tokio::test]
async fn creation_failure_is_fatal_with_typed_error() {
    let runner = RecordingRunner::failing_on("venv");
    let config = RunupConfig::default();

    let err = ensure_environment(&runner, &MemoryFs::absent(), &NoopReporter, &config)
        .await
        .expect_err("creation failure must propagate");

    let typed = err
        .downcast_ref::<BootstrapError>()
        .expect("typed bootstrap error");
    assert!(
        matches!(typed, BootstrapError::EnvironmentCreation { .. }),
        "got: {typed:?}"
    );
    assert!(
        err.to_string().contains(".venv"),
        "error should name the path: {err}"
    );
}
