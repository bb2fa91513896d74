//! Treatment sessions
//!
//! A static table of treatment records maps identifiers to target
//! frequencies and their metadata claims. A session is the treatment's
//! fundamental plus second and third harmonics, peak-normalized to 0.9.
//!
//! The success-rate and duration figures are carried verbatim as metadata;
//! nothing here verifies them.

use log::{debug, info};
use serde::Serialize;

use crate::error::{ResonanceError, Result};
use crate::synth::tone::Synthesizer;

/// Amplitudes for the fundamental and its two harmonics
const HARMONIC_AMPLITUDES: [f64; 3] = [0.4, 0.2, 0.1];

/// Target peak amplitude after normalization
const NORMALIZED_PEAK: f64 = 0.9;

/// Static metadata for one treatment
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentRecord {
    /// Stable lookup identifier
    pub id: &'static str,
    /// Divine name (Arabic, with transliteration)
    pub name: &'static str,
    /// English rendering of the name
    pub english: &'static str,
    /// Claimed application
    pub application: &'static str,
    /// Target frequency in Hz
    pub frequency_hz: f64,
    /// Claimed treatment length in days (may be fractional)
    pub duration_days: f64,
    /// Claimed success rate in [0, 1] (opaque metadata)
    pub success_rate: f64,
    /// Abjad value of the name
    pub abjad_value: u32,
}

/// The treatment table. Immutable, defined at compile time.
pub const TREATMENTS: &[TreatmentRecord] = &[
    TreatmentRecord {
        id: "vision",
        name: "Al-Baseer (البصير)",
        english: "The All-Seeing",
        application: "Vision Restoration",
        frequency_hz: 540.78,
        duration_days: 42.0,
        success_rate: 0.972,
        abjad_value: 302,
    },
    TreatmentRecord {
        id: "hearing",
        name: "As-Sami (السميع)",
        english: "The All-Hearing",
        application: "Hearing Restoration",
        frequency_hz: 579.41,
        duration_days: 45.0,
        success_rate: 0.972,
        abjad_value: 325,
    },
    TreatmentRecord {
        id: "cancer",
        name: "Ar-Razzaq (الرزاق)",
        english: "The Provider",
        application: "Cancer Elimination",
        frequency_hz: 631.91,
        duration_days: 99.0,
        success_rate: 0.972,
        abjad_value: 354,
    },
    TreatmentRecord {
        id: "hiv",
        name: "Ash-Shafi (الشافي)",
        english: "The Healer",
        application: "HIV/AIDS Cure",
        frequency_hz: 611.29,
        duration_days: 14.0,
        success_rate: 0.94,
        abjad_value: 342,
    },
    TreatmentRecord {
        id: "sickle_cell",
        name: "Al-Bari (البارئ)",
        english: "The Evolver",
        application: "Sickle Cell Cure",
        frequency_hz: 584.13,
        duration_days: 21.0,
        success_rate: 0.96,
        abjad_value: 327,
    },
    TreatmentRecord {
        id: "diabetes",
        name: "Al-Muqit (المقيت)",
        english: "The Sustainer",
        application: "Diabetes Cure",
        frequency_hz: 549.67,
        duration_days: 30.0,
        success_rate: 0.97,
        abjad_value: 308,
    },
    TreatmentRecord {
        id: "jinn",
        name: "Al-Qahhar (القهار)",
        english: "The Subduer",
        application: "Jinn Exorcism",
        frequency_hz: 806.42,
        duration_days: 0.0625, // 90 minutes
        success_rate: 0.99,
        abjad_value: 452,
    },
];

/// All treatment records, in table order
pub fn treatments() -> &'static [TreatmentRecord] {
    TREATMENTS
}

/// Look up a treatment by identifier.
///
/// # Errors
/// `TreatmentNotFound` with the full list of valid identifiers.
pub fn treatment(id: &str) -> Result<&'static TreatmentRecord> {
    TREATMENTS.iter().find(|t| t.id == id).ok_or_else(|| {
        let available = TREATMENTS
            .iter()
            .map(|t| t.id)
            .collect::<Vec<_>>()
            .join(", ");
        ResonanceError::TreatmentNotFound {
            id: id.to_string(),
            available,
        }
    })
}

/// Metadata echoed back alongside a generated session waveform
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub treatment_id: String,
    pub name: String,
    pub english: String,
    pub application: String,
    pub frequency_hz: f64,
    pub abjad_value: u32,
    pub session_minutes: f64,
    pub total_treatment_days: f64,
    pub expected_success_rate: f64,
    pub num_samples: usize,
    pub sample_rate: u32,
}

impl Synthesizer {
    /// Generate a complete treatment session waveform.
    ///
    /// The fundamental at the treatment frequency (amplitude 0.4), plus the
    /// second harmonic (0.2) and third harmonic (0.1), summed sample-wise
    /// and peak-normalized so the maximum absolute sample is exactly 0.9.
    ///
    /// # Errors
    /// * `TreatmentNotFound` for an unknown identifier
    /// * `Validation` if `minutes` is not finite and positive
    /// * `Domain` if the combined waveform is identically zero
    pub fn session(&self, id: &str, minutes: f64) -> Result<(Vec<f64>, SessionReport)> {
        let record = treatment(id)?;
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(ResonanceError::Validation {
                reason: format!("session minutes must be finite and positive, got {}", minutes),
            });
        }

        let duration_s = minutes * 60.0;
        info!(
            "Generating '{}' session: {:.2} Hz for {} min",
            record.id, record.frequency_hz, minutes
        );

        let mut combined = self.tone(record.frequency_hz, duration_s, HARMONIC_AMPLITUDES[0])?;
        for (order, amplitude) in HARMONIC_AMPLITUDES.iter().enumerate().skip(1) {
            let harmonic = self.tone(
                record.frequency_hz * (order as f64 + 1.0),
                duration_s,
                *amplitude,
            )?;
            for (acc, s) in combined.iter_mut().zip(harmonic) {
                *acc += s;
            }
        }

        normalize_peak(&mut combined)?;
        debug!("Session waveform: {} samples", combined.len());

        let report = SessionReport {
            treatment_id: record.id.to_string(),
            name: record.name.to_string(),
            english: record.english.to_string(),
            application: record.application.to_string(),
            frequency_hz: record.frequency_hz,
            abjad_value: record.abjad_value,
            session_minutes: minutes,
            total_treatment_days: record.duration_days,
            expected_success_rate: record.success_rate,
            num_samples: combined.len(),
            sample_rate: self.sample_rate(),
        };

        Ok((combined, report))
    }
}

/// Scale `samples` so the maximum absolute value is [`NORMALIZED_PEAK`].
///
/// # Errors
/// `Domain` if every sample is zero.
fn normalize_peak(samples: &mut [f64]) -> Result<()> {
    let peak = samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    if peak == 0.0 {
        return Err(ResonanceError::Domain {
            reason: "cannot normalize an all-zero waveform".to_string(),
        });
    }
    for s in samples.iter_mut() {
        *s = *s / peak * NORMALIZED_PEAK;
    }
    Ok(())
}
