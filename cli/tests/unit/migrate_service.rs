//! Unit tests for the Schema Migrator service.

use std::path::PathBuf;

use runup_cli::application::services::migrate::migrate;
use runup_cli::domain::bootstrap::EnvHandle;
use runup_cli::domain::config::RunupConfig;
use runup_cli::domain::error::BootstrapError;

use crate::mocks::{NoopReporter, RecordingRunner};

fn env() -> EnvHandle {
    EnvHandle {
        path: PathBuf::from(".venv"),
        created: false,
    }
}

#[tokio::test]
async fn generation_runs_before_application() {
    let runner = RecordingRunner::new();
    let config = RunupConfig::default();

    migrate(&runner, &NoopReporter, &env(), &config)
        .await
        .expect("migrate should succeed");

    assert_eq!(
        runner.calls(),
        vec![
            ".venv/bin/python manage.py makemigrations".to_string(),
            ".venv/bin/python manage.py migrate".to_string(),
        ]
    );
}

#[tokio::test]
async fn repeated_runs_keep_generation_before_application() {
    let runner = RecordingRunner::new();
    let config = RunupConfig::default();

    migrate(&runner, &NoopReporter, &env(), &config)
        .await
        .expect("first run");
    migrate(&runner, &NoopReporter, &env(), &config)
        .await
        .expect("second run");

    let calls = runner.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls[0].contains("makemigrations"));
    assert!(calls[1].ends_with("migrate"));
    assert!(calls[2].contains("makemigrations"));
    assert!(calls[3].ends_with("migrate"));
}

#[tokio::test]
async fn generation_failure_skips_application() {
    let runner = RecordingRunner::failing_on("makemigrations");
    let config = RunupConfig::default();

    let err = migrate(&runner, &NoopReporter, &env(), &config)
        .await
        .expect_err("generation failure must propagate");

    assert_eq!(
        runner.call_count(),
        1,
        "apply must never run after failed generation"
    );
    let typed = err
        .downcast_ref::<BootstrapError>()
        .expect("typed bootstrap error");
    assert!(
        matches!(typed, BootstrapError::MigrationGeneration { code: Some(1) }),
        "got: {typed:?}"
    );
}

#[tokio::test]
async fn application_failure_is_fatal_with_typed_error() {
    // "migrate" is not a substring of "makemigrations", so only the apply
    // call matches.
    let runner = RecordingRunner::failing_on("manage.py migrate");
    let config = RunupConfig::default();

    let err = migrate(&runner, &NoopReporter, &env(), &config)
        .await
        .expect_err("apply failure must propagate");

    assert_eq!(runner.call_count(), 2, "generation ran, then apply failed");
    let typed = err
        .downcast_ref::<BootstrapError>()
        .expect("typed bootstrap error");
    assert!(
        matches!(typed, BootstrapError::MigrationApply { code: Some(1) }),
        "got: {typed:?}"
    );
}

#[tokio::test]
async fn configured_manage_script_is_used() {
    let runner = RecordingRunner::new();
    let mut config = RunupConfig::default();
    config.project.manage = "backend/manage.py".to_string();

    migrate(&runner, &NoopReporter, &env(), &config)
        .await
        .expect("migrate should succeed");

    assert!(runner.calls()[0].contains("backend/manage.py makemigrations"));
}
