//! Environment Provisioner — ensure the isolated runtime environment
//! exists and hand back an explicit handle to it.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::domain::bootstrap::EnvHandle;
use crate::domain::config::RunupConfig;
use crate::domain::error::BootstrapError;

/// Resolve an existing environment without ever creating one.
///
/// Used by stages that must not touch the environment (serving): the
/// handle always reports `created = false`.
///
/// # Errors
///
/// Returns an error when no environment exists at `config.env.path`.
pub fn require_environment(fs: &impl LocalFs, config: &RunupConfig) -> Result<EnvHandle> {
    let path = &config.env.path;
    if !fs.exists(path) {
        anyhow::bail!(
            "no virtual environment at {}; run `runup provision` first",
            path.display()
        );
    }
    Ok(EnvHandle {
        path: path.clone(),
        created: false,
    })
}

/// Ensure the virtual environment at `config.env.path` exists.
///
/// A directory already present at the path counts as an existing
/// environment and no creation command runs (`created = false`). Otherwise
/// the creation command (`<python> -m venv <path>`) runs and the handle
/// reports `created = true`. The handle is the "active environment" value
/// threaded through all later stages.
///
/// # Errors
///
/// Returns [`BootstrapError::EnvironmentCreation`] when the creation
/// command cannot be spawned or exits with a failure.
pub async fn ensure_environment(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    config: &RunupConfig,
) -> Result<EnvHandle> {
    let path = &config.env.path;

    if fs.exists(path) {
        reporter.success(&format!(
            "virtual environment present at {}",
            path.display()
        ));
        return Ok(EnvHandle {
            path: path.clone(),
            created: false,
        });
    }

    reporter.step(&format!(
        "🐍 creating virtual environment at {}...",
        path.display()
    ));

    let path_arg = path.to_string_lossy().into_owned();
    let output = runner
        .run(&config.env.python, &["-m", "venv", &path_arg])
        .await
        .with_context(|| format!("spawning {}", config.env.python))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BootstrapError::EnvironmentCreation {
            path: path.display().to_string(),
            detail: stderr.trim().to_string(),
            code: output.status.code(),
        }
        .into());
    }

    reporter.success("virtual environment created");
    Ok(EnvHandle {
        path: path.clone(),
        created: true,
    })
}
