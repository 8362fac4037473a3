//! `runup migrate` — bring the schema up to date without serving.
//!
//! Provisions and installs first when needed: migrations must never run
//! outside an active, populated environment.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::sequence::{self, BootstrapOptions};
use crate::infra::fs::HostFs;

/// Run `runup migrate`.
///
/// # Errors
///
/// Returns an error if any of the provisioning, install, or migration
/// stages fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    sequence::prepare(
        &app.runner,
        &HostFs,
        &reporter,
        &app.config,
        BootstrapOptions::default(),
    )
    .await?;

    app.output.success("migrations applied");
    Ok(())
}
