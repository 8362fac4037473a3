//! The Sequencer — fixed-order, fail-fast composition of the bootstrap
//! stages.
//!
//! Strictly linear: provision → install (conditional) → migrate → launch.
//! The first failure aborts the whole sequence; no rollback is attempted
//! (a forward-only bootstrap — partially-applied work is left for the
//! operator to inspect).

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, LocalFs, PortProbe, ProgressReporter};
use crate::application::services::{install, launch, migrate, provision};
use crate::domain::bootstrap::{EnvHandle, Stage};
use crate::domain::config::RunupConfig;

/// Options for one bootstrap run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BootstrapOptions {
    /// Force the installer stage even when the environment already existed.
    pub reinstall: bool,
}

/// Run the setup stages: provision, install (when the environment was
/// just created or `reinstall` is set), migrate. Returns the active
/// environment handle for the launch stage.
///
/// # Errors
///
/// Returns the first failing stage's error, annotated with the stage name.
pub async fn prepare(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    config: &RunupConfig,
    opts: BootstrapOptions,
) -> Result<EnvHandle> {
    let stage = Stage::Idle.next(false);
    let env = provision::ensure_environment(runner, fs, reporter, config)
        .await
        .with_context(|| format!("{stage} stage failed"))?;

    let install_needed = env.created || opts.reinstall;
    let stage = stage.next(install_needed);
    if stage == Stage::Installing {
        install::install_if_needed(runner, reporter, &env, config, opts.reinstall)
            .await
            .with_context(|| format!("{stage} stage failed"))?;
    }

    let stage = Stage::Migrating;
    migrate::migrate(runner, reporter, &env, config)
        .await
        .with_context(|| format!("{stage} stage failed"))?;

    Ok(env)
}

/// Run the full bootstrap sequence and hand off to the server process.
///
/// Blocks for the lifetime of the server on the success path.
///
/// # Errors
///
/// Returns the first failing stage's error; later stages are never
/// reached.
pub async fn bootstrap(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    probe: &impl PortProbe,
    reporter: &impl ProgressReporter,
    config: &RunupConfig,
    opts: BootstrapOptions,
) -> Result<()> {
    let env = prepare(runner, fs, reporter, config, opts).await?;

    let stage = Stage::Launching;
    launch::launch(runner, probe, reporter, &env, config)
        .await
        .with_context(|| format!("{stage} stage failed"))
}
