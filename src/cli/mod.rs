//! CLI Module
//!
//! Command-line interface for the Resonance toolkit.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resonance - Abjad-derived frequency synthesis toolkit
#[derive(Parser, Debug)]
#[command(name = "resonance")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the structural constants and print the report
    #[command(name = "validate")]
    Validate {
        /// Print the report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },

    /// Compute the Abjad value and derived frequency of a name
    #[command(name = "abjad")]
    Abjad {
        /// Arabic text to evaluate
        text: String,

        /// Letters to skip (silent letters)
        #[arg(short, long)]
        exclude: Option<String>,
    },

    /// List the available treatments
    #[command(name = "treatments")]
    Treatments,

    /// Generate a treatment session and optionally export it as WAV
    #[command(name = "session")]
    Session {
        /// Treatment identifier (e.g. 'vision')
        treatment: String,

        /// Session length in minutes
        #[arg(short, long, default_value_t = 30.0)]
        minutes: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Output WAV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the golden-ratio comparison report
    #[command(name = "ratio")]
    Ratio,
}
