//! Resonance CLI
//!
//! Command-line interface for the Resonance synthesis toolkit.

use clap::Parser;
use env_logger::Env;
use log::info;

use resonance::cli::{commands, Cli, Commands};
use resonance::Result;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Resonance v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Resonance v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Validate { json } => commands::validate(json),
        Commands::Abjad { text, exclude } => commands::abjad(&text, exclude.as_deref()),
        Commands::Treatments => commands::list_treatments(),
        Commands::Session {
            treatment,
            minutes,
            sample_rate,
            output,
        } => commands::session(&treatment, minutes, sample_rate, output.as_deref()),
        Commands::Ratio => commands::golden_ratio(),
    }
}
