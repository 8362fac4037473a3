//! Schema Migrator — generate pending migration descriptors, then apply
//! them, in that order, on every invocation.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::bootstrap::EnvHandle;
use crate::domain::config::RunupConfig;
use crate::domain::error::BootstrapError;

/// Bring the persistent schema up to date with the current code.
///
/// Generation always runs before application, including on repeat runs —
/// it covers schema definitions changed since the last bootstrap. Both
/// tools run with inherited stdio so their native output reaches the
/// operator's terminal untouched. Applying with nothing pending is a
/// no-op success.
///
/// # Errors
///
/// Returns [`BootstrapError::MigrationGeneration`] or
/// [`BootstrapError::MigrationApply`] on the first failing sub-operation;
/// a failed generation means application is never attempted.
pub async fn migrate(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    env: &EnvHandle,
    config: &RunupConfig,
) -> Result<()> {
    reporter.step("🗄 updating database schema...");

    let python = env.python();
    let python_str = python.to_string_lossy().into_owned();
    let manage = config.project.manage.as_str();

    let status = runner
        .run_status(&python_str, &[manage, "makemigrations"])
        .await
        .context("spawning migration generation")?;
    if !status.success() {
        return Err(BootstrapError::MigrationGeneration {
            code: status.code(),
        }
        .into());
    }

    let status = runner
        .run_status(&python_str, &[manage, "migrate"])
        .await
        .context("spawning migration apply")?;
    if !status.success() {
        return Err(BootstrapError::MigrationApply {
            code: status.code(),
        }
        .into());
    }

    reporter.success("database schema up to date");
    Ok(())
}
