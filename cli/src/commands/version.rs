//! Version command

use clap::Args;

/// Arguments for the version command.
#[derive(Args, Default)]
pub struct VersionArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the version command.
pub fn run(args: &VersionArgs) {
    let version = env!("CARGO_PKG_VERSION");

    if args.json {
        let payload = serde_json::json!({ "name": "runup", "version": version });
        println!("{payload}");
    } else {
        println!("runup {version}");
    }
}
