//! Readable CLI
//!
//! Entry point for the `readable` binary. Parses CLI arguments and
//! delegates to the Runner.

use clap::Parser as ClapParser;
use readable_cli::{Cli, CliError, Runner};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("readable=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = Runner::from_cli(&cli).and_then(|runner| runner.run(&cli.command));

    match result {
        Ok(output) => println!("{}", output),
        Err(CliError::Io(e)) => {
            eprintln!("Error: Could not read input: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
