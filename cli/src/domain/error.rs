//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. Every variant is fatal: the
//! bootstrap sequence has no retry path, so each error aborts the run.

use thiserror::Error;

/// Errors raised by the bootstrap stages.
///
/// Variants that wrap an external tool carry the tool's exit code when the
/// child process reported one, so the process exit code can be propagated.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to create virtual environment at {path}: {detail}")]
    EnvironmentCreation {
        path: String,
        detail: String,
        code: Option<i32>,
    },

    #[error("dependency installation from {manifest} failed")]
    Installation {
        manifest: String,
        code: Option<i32>,
    },

    #[error("migration generation failed")]
    MigrationGeneration { code: Option<i32> },

    #[error("migration apply failed")]
    MigrationApply { code: Option<i32> },

    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server exited with a failure")]
    ServerExit { code: Option<i32> },
}

impl BootstrapError {
    /// The process exit code this error maps to: the failing tool's own
    /// exit code when known, otherwise 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EnvironmentCreation { code, .. }
            | Self::Installation { code, .. }
            | Self::MigrationGeneration { code }
            | Self::MigrationApply { code }
            | Self::ServerExit { code } => match code {
                Some(c) => *c,
                None => 1,
            },
            Self::Bind { .. } => 1,
        }
    }
}

/// Resolve the process exit code for a top-level error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BootstrapError>()
        .map_or(1, BootstrapError::exit_code)
}
