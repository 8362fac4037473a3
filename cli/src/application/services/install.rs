//! Dependency Installer — install the manifest into the active
//! environment, with the created-or-forced short-circuit.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::bootstrap::EnvHandle;
use crate::domain::config::RunupConfig;
use crate::domain::error::BootstrapError;

/// Install dependencies into the environment when it was just created, or
/// when `force` is set (`--reinstall`).
///
/// A pre-existing environment is assumed to already hold its dependencies:
/// idempotence by short-circuit, not by content comparison. A manifest
/// edit on a pre-existing environment is therefore not picked up unless
/// the operator forces a reinstall.
///
/// # Errors
///
/// Returns [`BootstrapError::Installation`] when pip cannot be spawned or
/// exits with a failure.
pub async fn install_if_needed(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    env: &EnvHandle,
    config: &RunupConfig,
    force: bool,
) -> Result<()> {
    if !env.created && !force {
        return Ok(());
    }

    reporter.step("📦 installing dependencies...");

    let pip = env.pip();
    let pip_str = pip.to_string_lossy().into_owned();
    let status = runner
        .run_status(&pip_str, &["install", "-r", &config.project.manifest])
        .await
        .with_context(|| format!("spawning {pip_str}"))?;

    if !status.success() {
        return Err(BootstrapError::Installation {
            manifest: config.project.manifest.clone(),
            code: status.code(),
        }
        .into());
    }

    reporter.success("dependencies installed");
    Ok(())
}
