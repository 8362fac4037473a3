//! Bootstrap domain types: the stage state machine and the active
//! environment handle threaded through the stages.

use std::path::PathBuf;

/// Stages of one bootstrap run.
///
/// Success path: Idle → Provisioning → (Installing | skip) → Migrating →
/// Launching → Running. Any stage may transition to Failed, which is
/// terminal. Running is terminal in the sense that control has been handed
/// to the server process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Provisioning,
    Installing,
    Migrating,
    Launching,
    Running,
    Failed,
}

impl Stage {
    /// The stage that follows on the success path. `install_needed`
    /// selects whether the installer stage runs or is skipped.
    #[must_use]
    pub const fn next(self, install_needed: bool) -> Self {
        match self {
            Self::Idle => Self::Provisioning,
            Self::Provisioning => {
                if install_needed {
                    Self::Installing
                } else {
                    Self::Migrating
                }
            }
            Self::Installing => Self::Migrating,
            Self::Migrating => Self::Launching,
            Self::Launching => Self::Running,
            Self::Running | Self::Failed => self,
        }
    }

    /// Whether this stage is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Running | Self::Failed)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Provisioning => "provisioning",
            Self::Installing => "installing",
            Self::Migrating => "migrating",
            Self::Launching => "launching",
            Self::Running => "running",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Handle to the active virtual environment for one bootstrap run.
///
/// "Activation" is modeled as this explicit value rather than ambient
/// process state: every later stage resolves its tools through the handle,
/// so nothing runs against an environment that was never returned by the
/// provisioner.
#[derive(Debug, Clone)]
pub struct EnvHandle {
    /// Filesystem path of the environment directory.
    pub path: PathBuf,
    /// Whether this run created the environment (drives the installer
    /// short-circuit).
    pub created: bool,
}

impl EnvHandle {
    /// The directory holding the environment's executables.
    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        #[cfg(windows)]
        return self.path.join("Scripts");
        #[cfg(not(windows))]
        self.path.join("bin")
    }

    /// Path of a tool inside the environment.
    #[must_use]
    pub fn tool(&self, name: &str) -> PathBuf {
        self.bin_dir().join(name)
    }

    /// The environment's interpreter.
    #[must_use]
    pub fn python(&self) -> PathBuf {
        self.tool("python")
    }

    /// The environment's package installer.
    #[must_use]
    pub fn pip(&self) -> PathBuf {
        self.tool("pip")
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
