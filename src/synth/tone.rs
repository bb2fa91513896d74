//! Sine tone generation
//!
//! Samples are taken at `t_i = i / sample_rate`, covering `[0, duration)`.

use std::f64::consts::PI;

use crate::constants::DEFAULT_SAMPLE_RATE;
use crate::error::{ResonanceError, Result};

/// Sine tone synthesizer bound to a sample rate
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    sample_rate: u32,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl Synthesizer {
    /// Create a synthesizer with the given sample rate in Hz
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// The configured sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Generate a pure sine tone.
    ///
    /// Returns `round(sample_rate × duration)` samples of
    /// `amplitude × sin(2π × frequency × t)`.
    ///
    /// # Errors
    /// `Validation` if frequency or duration is not finite and positive, or
    /// amplitude is outside `[0, 1]`.
    pub fn tone(&self, frequency_hz: f64, duration_s: f64, amplitude: f64) -> Result<Vec<f64>> {
        validate_positive("frequency_hz", frequency_hz)?;
        validate_positive("duration_s", duration_s)?;
        if !(0.0..=1.0).contains(&amplitude) || !amplitude.is_finite() {
            return Err(ResonanceError::Validation {
                reason: format!("amplitude must be in [0, 1], got {}", amplitude),
            });
        }

        Ok(self.raw_tone(frequency_hz, duration_s, amplitude))
    }

    /// Tone generation without range validation. Internal callers that
    /// deliberately allow zero frequency (activation probes) use this.
    pub(crate) fn raw_tone(&self, frequency_hz: f64, duration_s: f64, amplitude: f64) -> Vec<f64> {
        let num_samples = (f64::from(self.sample_rate) * duration_s).round() as usize;
        let rate = f64::from(self.sample_rate);

        (0..num_samples)
            .map(|i| {
                let t = i as f64 / rate;
                amplitude * (2.0 * PI * frequency_hz * t).sin()
            })
            .collect()
    }
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ResonanceError::Validation {
            reason: format!("{} must be finite and positive, got {}", name, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length_is_rounded_product() {
        let synth = Synthesizer::new(44100);
        assert_eq!(synth.tone(440.0, 1.0, 0.5).unwrap().len(), 44100);
        assert_eq!(synth.tone(440.0, 0.5, 0.5).unwrap().len(), 22050);
        // 44100 * 0.0001 = 4.41 -> 4
        assert_eq!(synth.tone(440.0, 0.0001, 0.5).unwrap().len(), 4);
    }

    #[test]
    fn test_tone_respects_amplitude_bound() {
        let synth = Synthesizer::new(8000);
        let samples = synth.tone(100.0, 0.25, 0.3).unwrap();
        for s in samples {
            assert!(s.abs() <= 0.3 + 1e-12);
        }
    }

    #[test]
    fn test_tone_starts_at_zero_phase() {
        let synth = Synthesizer::new(44100);
        let samples = synth.tone(440.0, 0.1, 1.0).unwrap();
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_tone_rejects_bad_inputs() {
        let synth = Synthesizer::default();
        assert!(synth.tone(-1.0, 1.0, 0.5).is_err());
        assert!(synth.tone(440.0, 0.0, 0.5).is_err());
        assert!(synth.tone(440.0, 1.0, 1.5).is_err());
        assert!(synth.tone(f64::NAN, 1.0, 0.5).is_err());
    }

    #[test]
    fn test_default_sample_rate() {
        assert_eq!(Synthesizer::default().sample_rate(), 44100);
    }
}
