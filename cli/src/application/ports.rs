//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::config::RunupConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// There is deliberately no timeout variant: a hung tool call blocks the
/// bootstrap sequence until the operator intervenes.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with inherited stdio and return only its exit status.
    ///
    /// Used for operations whose output belongs on the operator's terminal
    /// (dependency install, migrations, the server itself). Blocks until
    /// the child exits.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit status lines without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress stage message.
    fn step(&self, message: &str);
    /// Emit a plain informational line (endpoint URLs).
    fn info(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the one piece of filesystem state the orchestrator reads:
/// presence or absence of the environment directory.
pub trait LocalFs {
    /// Whether a directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

// ── Port Probe Port ───────────────────────────────────────────────────────────

/// Abstracts the preflight bind check so the launcher can be tested
/// without touching real sockets.
#[allow(async_fn_in_trait)]
pub trait PortProbe {
    /// Attempt to bind `host:port`, releasing the socket immediately.
    ///
    /// # Errors
    ///
    /// Returns the underlying OS error when the address cannot be bound
    /// (e.g. the port is already in use).
    async fn try_bind(&self, host: &str, port: u16) -> std::io::Result<()>;
}

// ── Config Store Port ─────────────────────────────────────────────────────────

/// Abstracts configuration loading.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<RunupConfig>;

    /// The path the configuration is read from.
    fn path(&self) -> PathBuf;
}
