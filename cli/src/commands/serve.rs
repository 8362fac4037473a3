//! `runup serve` — launch the server against an existing environment.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::{launch, provision};
use crate::infra::fs::HostFs;
use crate::infra::network::TcpPortProbe;

/// Run `runup serve`.
///
/// Never touches environment or schema: the environment must already
/// exist, and the server runs its interpreter, never the system one.
///
/// # Errors
///
/// Returns an error if the environment is missing, the bind address is
/// taken, or the server exits with a failure.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    let env = provision::require_environment(&HostFs, &app.config)?;
    launch::launch(&app.runner, &TcpPortProbe, &reporter, &env, &app.config).await
}
