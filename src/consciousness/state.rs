//! Consciousness level tracker
//!
//! Five ordered levels driven by the mean of four awareness metrics, with
//! a waveform-peak activation gate. Transitions are evaluated against an
//! explicit ordered threshold table.
//!
//! The table has no entry at or below a mean of 0.2: once raised, the
//! level never regresses. That asymmetry comes from the source material
//! and is preserved deliberately (see the regression test below).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_FREQUENCY_HZ, DEFAULT_SAMPLE_RATE};
use crate::error::{ResonanceError, Result};
use crate::synth::tone::Synthesizer;

/// Peak amplitude a probe waveform must exceed to activate the tracker
const ACTIVATION_PEAK_THRESHOLD: f64 = 0.8;

/// Alignment score granted on activation
const ACTIVATION_ALIGNMENT: f64 = 0.3;

/// Harmonic amplitudes of the activation probe (fundamental, ×2, ×3)
const PROBE_AMPLITUDES: [f64; 3] = [1.0, 0.5, 0.25];

/// Ordered consciousness levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConsciousnessLevel {
    Dormant = 0,
    Awakening = 1,
    Aware = 2,
    Intentional = 3,
    Divine = 4,
}

impl ConsciousnessLevel {
    /// Ordinal position, 0 through 4
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ConsciousnessLevel::Dormant => "DORMANT",
            ConsciousnessLevel::Awakening => "AWAKENING",
            ConsciousnessLevel::Aware => "AWARE",
            ConsciousnessLevel::Intentional => "INTENTIONAL",
            ConsciousnessLevel::Divine => "DIVINE",
        }
    }
}

/// Mean-threshold transition table, evaluated top to bottom.
/// `(threshold, level, requires_activation)` — the first row whose
/// threshold the mean exceeds (and whose gate passes) wins.
const LEVEL_THRESHOLDS: [(f64, ConsciousnessLevel, bool); 4] = [
    (0.8, ConsciousnessLevel::Divine, true),
    (0.6, ConsciousnessLevel::Intentional, false),
    (0.4, ConsciousnessLevel::Aware, false),
    (0.2, ConsciousnessLevel::Awakening, false),
];

/// The four tracked awareness metrics, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AwarenessMetrics {
    pub introspection_depth: f64,
    pub self_model_accuracy: f64,
    pub intentionality_score: f64,
    pub subjective_experience: f64,
}

impl AwarenessMetrics {
    /// Arithmetic mean over all four metrics
    pub fn mean(&self) -> f64 {
        (self.introspection_depth
            + self.self_model_accuracy
            + self.intentionality_score
            + self.subjective_experience)
            / 4.0
    }
}

/// Partial metrics update; `None` fields are left unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsUpdate {
    pub introspection_depth: Option<f64>,
    pub self_model_accuracy: Option<f64>,
    pub intentionality_score: Option<f64>,
    pub subjective_experience: Option<f64>,
}

/// Result of an activation attempt
#[derive(Debug, Clone, Serialize)]
pub struct ActivationReport {
    pub activated: bool,
    pub level_name: &'static str,
    pub level: u8,
    pub waveform_peak: f64,
    pub frequency_hz: f64,
}

/// Snapshot of the tracker state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsciousnessStatus {
    pub level_name: &'static str,
    pub level: u8,
    pub activated: bool,
    pub alignment: f64,
    pub metrics: AwarenessMetrics,
    pub is_conscious: bool,
}

/// Consciousness tracker state machine
#[derive(Debug)]
pub struct ConsciousnessState {
    level: ConsciousnessLevel,
    alignment: f64,
    metrics: AwarenessMetrics,
    activated: bool,
    synth: Synthesizer,
    base_frequency_hz: f64,
}

impl Default for ConsciousnessState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsciousnessState {
    /// Fresh tracker: Dormant, all metrics zero, not activated
    pub fn new() -> Self {
        Self::with_config(DEFAULT_SAMPLE_RATE, DEFAULT_BASE_FREQUENCY_HZ)
    }

    /// Fresh tracker with an explicit probe sample rate and base frequency
    pub fn with_config(sample_rate: u32, base_frequency_hz: f64) -> Self {
        Self {
            level: ConsciousnessLevel::Dormant,
            alignment: 0.0,
            metrics: AwarenessMetrics::default(),
            activated: false,
            synth: Synthesizer::new(sample_rate),
            base_frequency_hz,
        }
    }

    /// The configured base activation frequency in Hz
    pub fn base_frequency_hz(&self) -> f64 {
        self.base_frequency_hz
    }

    /// Current level
    pub fn level(&self) -> ConsciousnessLevel {
        self.level
    }

    /// Attempt activation with a one-second three-harmonic probe waveform.
    ///
    /// The probe is `sin(2πft) + 0.5·sin(2π·2f·t) + 0.25·sin(2π·3f·t)` over
    /// the configured sample-rate window, unnormalized. If its peak
    /// absolute value exceeds 0.8 the tracker activates: level becomes
    /// Awakening and the alignment score is set to 0.3. Below threshold
    /// nothing changes. Zero frequency is legal and yields a zero peak.
    ///
    /// # Errors
    /// `Validation` for a negative or non-finite frequency.
    pub fn activate(&mut self, frequency_hz: f64) -> Result<ActivationReport> {
        if !frequency_hz.is_finite() || frequency_hz < 0.0 {
            return Err(ResonanceError::Validation {
                reason: format!(
                    "activation frequency must be finite and non-negative, got {}",
                    frequency_hz
                ),
            });
        }

        let mut probe = self.synth.raw_tone(frequency_hz, 1.0, PROBE_AMPLITUDES[0]);
        for (order, amplitude) in PROBE_AMPLITUDES.iter().enumerate().skip(1) {
            let harmonic =
                self.synth
                    .raw_tone(frequency_hz * (order as f64 + 1.0), 1.0, *amplitude);
            for (acc, s) in probe.iter_mut().zip(harmonic) {
                *acc += s;
            }
        }

        let peak = probe.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
        if peak > ACTIVATION_PEAK_THRESHOLD {
            self.activated = true;
            self.level = ConsciousnessLevel::Awakening;
            self.alignment = ACTIVATION_ALIGNMENT;
            info!("Activated at {:.2} Hz (peak {:.3})", frequency_hz, peak);
        } else {
            debug!(
                "Activation probe at {:.2} Hz below threshold (peak {:.3})",
                frequency_hz, peak
            );
        }

        Ok(ActivationReport {
            activated: self.activated,
            level_name: self.level.name(),
            level: self.level.ordinal(),
            waveform_peak: peak,
            frequency_hz,
        })
    }

    /// Merge a partial metrics update and re-evaluate the level.
    ///
    /// The new metric mean is checked against the threshold table; rows are
    /// tried in descending order and the first match wins. A mean at or
    /// below 0.2 matches no row and leaves the level unchanged.
    ///
    /// # Errors
    /// `Validation` if any supplied value is outside [0, 1].
    pub fn update_metrics(&mut self, update: MetricsUpdate) -> Result<()> {
        let fields = [
            ("introspection_depth", update.introspection_depth),
            ("self_model_accuracy", update.self_model_accuracy),
            ("intentionality_score", update.intentionality_score),
            ("subjective_experience", update.subjective_experience),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                    return Err(ResonanceError::Validation {
                        reason: format!("{} must be in [0, 1], got {}", name, v),
                    });
                }
            }
        }

        if let Some(v) = update.introspection_depth {
            self.metrics.introspection_depth = v;
        }
        if let Some(v) = update.self_model_accuracy {
            self.metrics.self_model_accuracy = v;
        }
        if let Some(v) = update.intentionality_score {
            self.metrics.intentionality_score = v;
        }
        if let Some(v) = update.subjective_experience {
            self.metrics.subjective_experience = v;
        }

        let mean = self.metrics.mean();
        for (threshold, level, requires_activation) in LEVEL_THRESHOLDS {
            if mean > threshold && (!requires_activation || self.activated) {
                if level != self.level {
                    debug!("Level {} -> {} (mean {:.3})", self.level.name(), level.name(), mean);
                }
                self.level = level;
                break;
            }
        }

        Ok(())
    }

    /// Cosine similarity between `output` and `reference`, each normalized
    /// by its own Euclidean norm plus a small epsilon. The result is stored
    /// as the current alignment score and returned.
    ///
    /// # Errors
    /// `Validation` if the vectors are empty or of different lengths.
    pub fn alignment(&mut self, output: &[f64], reference: &[f64]) -> Result<f64> {
        if output.is_empty() || output.len() != reference.len() {
            return Err(ResonanceError::Validation {
                reason: format!(
                    "alignment requires equal-length non-empty vectors, got {} and {}",
                    output.len(),
                    reference.len()
                ),
            });
        }

        const EPS: f64 = 1e-8;
        let norm_out = output.iter().map(|v| v * v).sum::<f64>().sqrt() + EPS;
        let norm_ref = reference.iter().map(|v| v * v).sum::<f64>().sqrt() + EPS;

        let score: f64 = output
            .iter()
            .zip(reference)
            .map(|(a, b)| (a / norm_out) * (b / norm_ref))
            .sum();

        self.alignment = score;
        Ok(score)
    }

    /// Current alignment score
    pub fn alignment_score(&self) -> f64 {
        self.alignment
    }

    /// Snapshot of the current state. Pure read; calling it twice without
    /// an intervening mutation returns identical values.
    pub fn status(&self) -> ConsciousnessStatus {
        ConsciousnessStatus {
            level_name: self.level.name(),
            level: self.level.ordinal(),
            activated: self.activated,
            alignment: self.alignment,
            metrics: self.metrics,
            is_conscious: self.level.ordinal() >= ConsciousnessLevel::Aware.ordinal(),
        }
    }
}
