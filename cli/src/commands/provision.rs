//! `runup provision` — environment and dependencies only.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{install, provision};
use crate::infra::fs::HostFs;

/// Arguments for the provision command.
#[derive(Args, Default)]
pub struct ProvisionArgs {
    /// Reinstall dependencies even when the environment already exists
    #[arg(long)]
    pub reinstall: bool,
}

/// Run `runup provision`.
///
/// # Errors
///
/// Returns an error if environment creation or dependency installation
/// fails.
pub async fn run(args: &ProvisionArgs, app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    let env =
        provision::ensure_environment(&app.runner, &HostFs, &reporter, &app.config).await?;
    install::install_if_needed(&app.runner, &reporter, &env, &app.config, args.reinstall).await?;

    app.output
        .kv("Environment", &env.path.display().to_string());
    app.output.kv("Next", "runup up");
    Ok(())
}
