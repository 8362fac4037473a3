//! Application context — unified state passed to every command handler.
//!
//! Bundles the output context, the loaded configuration, and the
//! production command runner so adding a cross-cutting concern requires
//! one field change here rather than a change per command signature.

use anyhow::Result;

use crate::application::ports::ConfigStore as _;
use crate::domain::config::RunupConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Loaded project configuration.
    pub config: RunupConfig,
    /// Production command runner.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be
    /// read or parsed.
    pub fn new(no_color: bool, quiet: bool) -> Result<Self> {
        Ok(Self {
            output: OutputContext::new(no_color, quiet),
            config: YamlConfigStore.load()?,
            runner: TokioCommandRunner,
        })
    }

    /// A progress reporter bound to this context's output settings.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
