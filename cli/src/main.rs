//! Runup CLI - Bootstrap a backend project from fresh clone to serving traffic

use clap::Parser;

use runup_cli::cli::Cli;
use runup_cli::domain::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(error::exit_code(&e));
    }
}
