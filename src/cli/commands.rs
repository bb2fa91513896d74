//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::synth::{export_wav, treatments, Synthesizer};
use crate::{abjad, constants, ratio};

/// Validate the structural constants.
pub fn validate(json: bool) -> Result<()> {
    let report = constants::validate();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", constants::summary());
    }
    Ok(())
}

/// Compute and print the Abjad value and derived frequency of a name.
pub fn abjad(text: &str, exclude: Option<&str>) -> Result<()> {
    let excluded: Vec<char> = exclude.map(|s| s.chars().collect()).unwrap_or_default();
    let result = abjad::name_frequency(text, &excluded);

    println!("Text: {}", result.name);
    println!("Abjad value: {}", result.abjad_value);
    println!("Frequency: {:.2} Hz", result.frequency_hz);
    println!("Formula: {}", result.formula);
    Ok(())
}

/// List the available treatments.
pub fn list_treatments() -> Result<()> {
    println!(
        "{:<12} {:>10} {:>8} {:>9}  {}",
        "ID", "FREQ (Hz)", "DAYS", "SUCCESS", "APPLICATION"
    );
    for record in treatments() {
        println!(
            "{:<12} {:>10.2} {:>8} {:>8.0}%  {}",
            record.id,
            record.frequency_hz,
            record.duration_days,
            record.success_rate * 100.0,
            record.application,
        );
    }
    Ok(())
}

/// Generate a session waveform and optionally export it as a WAV file.
pub fn session(
    treatment_id: &str,
    minutes: f64,
    sample_rate: u32,
    output: Option<&Path>,
) -> Result<()> {
    info!("Generating session '{}' ({} min)", treatment_id, minutes);

    let synth = Synthesizer::new(sample_rate);
    let (samples, report) = synth.session(treatment_id, minutes)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = output {
        export_wav(&samples, sample_rate, path)?;
        println!("Exported: {}", path.display());
    }
    Ok(())
}

/// Print the golden-ratio comparison report.
pub fn golden_ratio() -> Result<()> {
    let report = ratio::golden_ratio_report()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
