//! Server Launcher — preflight the bind address, print the reachable
//! endpoints, then hand the foreground to the ASGI server.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, PortProbe, ProgressReporter};
use crate::domain::bootstrap::EnvHandle;
use crate::domain::config::RunupConfig;
use crate::domain::error::BootstrapError;

/// Launch the connection-upgrade-capable server and block until it exits.
///
/// The stage status line prints first, so a bind conflict is attributable
/// to the launching stage; the probe then surfaces the conflict as a
/// [`BootstrapError::Bind`] carrying the OS error, before any endpoint is
/// printed and before the server command runs. On a successful probe the
/// three reachable endpoints (base URL, docs URL, WebSocket URL) are
/// emitted, then the server takes the foreground with inherited stdio.
///
/// # Errors
///
/// Returns [`BootstrapError::Bind`] when the address cannot be bound, and
/// [`BootstrapError::ServerExit`] when the server exits with a failure.
pub async fn launch(
    runner: &impl CommandRunner,
    probe: &impl PortProbe,
    reporter: &impl ProgressReporter,
    env: &EnvHandle,
    config: &RunupConfig,
) -> Result<()> {
    let server = &config.server;

    reporter.step("🚀 starting server...");

    if let Err(source) = probe.try_bind(&server.host, server.port).await {
        return Err(BootstrapError::Bind {
            addr: server.bind_addr(),
            source,
        }
        .into());
    }

    reporter.info(&format!("🚀 {}", server.base_url()));
    reporter.info(&format!("📖 {}", server.docs_url()));
    reporter.info(&format!("🔌 {}", server.ws_url()));

    let python = env.python();
    let python_str = python.to_string_lossy().into_owned();
    let port = server.port.to_string();
    let status = runner
        .run_status(
            &python_str,
            &[
                "-m",
                &server.program,
                &server.app,
                "--host",
                &server.host,
                "--port",
                &port,
            ],
        )
        .await
        .with_context(|| format!("spawning {}", server.program))?;

    if !status.success() {
        return Err(BootstrapError::ServerExit {
            code: status.code(),
        }
        .into());
    }

    // The server only returns control when stopped by the operator.
    reporter.success("server stopped");
    Ok(())
}
