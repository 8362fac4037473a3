//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;

/// Bootstrap a backend project from fresh clone to serving traffic
#[derive(Parser)]
#[command(
    name = "runup",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// The NO_COLOR convention treats any non-empty value as set, so the
    /// env hookup uses the falsey parser rather than the strict bool one.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full bootstrap: provision, install, migrate, then serve
    Up(commands::up::UpArgs),

    /// Create the virtual environment and install dependencies
    Provision(commands::provision::ProvisionArgs),

    /// Generate and apply pending database migrations
    Migrate,

    /// Launch the server without touching environment or schema
    Serve,

    /// Show version
    Version(commands::version::VersionArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error; the caller maps it to a
    /// process exit code.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            command,
        } = self;

        match command {
            Command::Version(args) => {
                commands::version::run(&args);
                Ok(())
            }
            Command::Up(args) => {
                let app = AppContext::new(no_color, quiet)?;
                commands::up::run(&args, &app).await
            }
            Command::Provision(args) => {
                let app = AppContext::new(no_color, quiet)?;
                commands::provision::run(&args, &app).await
            }
            Command::Migrate => {
                let app = AppContext::new(no_color, quiet)?;
                commands::migrate::run(&app).await
            }
            Command::Serve => {
                let app = AppContext::new(no_color, quiet)?;
                commands::serve::run(&app).await
            }
        }
    }
}
