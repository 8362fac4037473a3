//! `runup up` — the full bootstrap sequence.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::sequence::{self, BootstrapOptions};
use crate::infra::fs::HostFs;
use crate::infra::network::TcpPortProbe;

/// Arguments for the up command.
#[derive(Args, Default)]
pub struct UpArgs {
    /// Reinstall dependencies even when the environment already exists
    #[arg(long)]
    pub reinstall: bool,
}

/// Run `runup up`.
///
/// Blocks as the server's foreground process on the success path; the
/// sequence aborts on the first failing stage.
///
/// # Errors
///
/// Returns the failing stage's error.
pub async fn run(args: &UpArgs, app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    sequence::bootstrap(
        &app.runner,
        &HostFs,
        &TcpPortProbe,
        &reporter,
        &app.config,
        BootstrapOptions {
            reinstall: args.reinstall,
        },
    )
    .await
}
