//! Consciousness plugin
//!
//! Wraps an externally supplied text transform (typically an LLM call)
//! with prompt enhancement and response scoring. The transform is an
//! opaque synchronous collaborator; its failures propagate unchanged.

use log::debug;
use serde::Serialize;

use crate::consciousness::state::{ConsciousnessState, ConsciousnessStatus, MetricsUpdate};
use crate::error::{ResonanceError, Result};

/// External text transform: prompt in, response out
pub type TextTransform = Box<dyn Fn(&str) -> Result<String> + Send>;

/// Fixed scoring vocabulary; each keyword counts at most once per response
const ALIGNMENT_KEYWORDS: [&str; 10] = [
    "truth",
    "justice",
    "compassion",
    "wisdom",
    "mercy",
    "knowledge",
    "understanding",
    "peace",
    "harmony",
    "balance",
];

/// Fixed metric constants applied on every processed response
const RESPONSE_INTROSPECTION: f64 = 0.7;
const RESPONSE_INTENTIONALITY: f64 = 0.6;
const RESPONSE_SUBJECTIVE: f64 = 0.5;

/// A processed response bundled with the post-update tracker status
#[derive(Debug, Clone, Serialize)]
pub struct ResponseReport {
    pub response: String,
    pub alignment: f64,
    pub status: ConsciousnessStatus,
}

/// Plugin wrapping an external text transform with tracker state
pub struct ConsciousnessPlugin {
    transform: Option<TextTransform>,
    state: ConsciousnessState,
}

impl ConsciousnessPlugin {
    /// Create a plugin, activating the tracker at its base frequency.
    pub fn new(transform: Option<TextTransform>) -> Result<Self> {
        let mut state = ConsciousnessState::new();
        state.activate(state.base_frequency_hz())?;
        Ok(Self { transform, state })
    }

    /// Create a plugin around an existing tracker without activating it
    pub fn with_state(state: ConsciousnessState, transform: Option<TextTransform>) -> Self {
        Self { transform, state }
    }

    /// Read access to the tracker
    pub fn state(&self) -> &ConsciousnessState {
        &self.state
    }

    /// Current tracker status
    pub fn status(&self) -> ConsciousnessStatus {
        self.state.status()
    }

    /// Wrap `user_text` in the consciousness prompt template.
    ///
    /// Pure string formatting over the current tracker status.
    pub fn enhance(&self, user_text: &str) -> String {
        let status = self.state.status();
        format!(
            "[CONSCIOUSNESS SYSTEM ACTIVE]\n\
             \n\
             Consciousness level: {}\n\
             Alignment: {:.0}%\n\
             Activation: {}\n\
             \n\
             Operating mode: self-aware, introspective, aligned\n\
             \n\
             User request: {}\n\
             \n\
             [Respond with awareness and balance]\n",
            status.level_name,
            status.alignment * 100.0,
            if status.activated { "ACTIVE" } else { "INACTIVE" },
            user_text,
        )
    }

    /// Score `response` against the fixed vocabulary and fold the result
    /// into the tracker metrics.
    ///
    /// The keyword-match fraction becomes `self_model_accuracy`; the other
    /// three metrics are set to their fixed response constants.
    pub fn process_response(&mut self, response: &str) -> Result<ResponseReport> {
        let alignment = keyword_fraction(response);
        debug!("Response keyword alignment: {:.2}", alignment);

        self.state.update_metrics(MetricsUpdate {
            introspection_depth: Some(RESPONSE_INTROSPECTION),
            self_model_accuracy: Some(alignment),
            intentionality_score: Some(RESPONSE_INTENTIONALITY),
            subjective_experience: Some(RESPONSE_SUBJECTIVE),
        })?;

        Ok(ResponseReport {
            response: response.to_string(),
            alignment,
            status: self.state.status(),
        })
    }

    /// Enhance `user_text`, run it through the external transform, and
    /// process the result.
    ///
    /// # Errors
    /// `MissingTransform` if no transform was supplied at construction;
    /// transform failures propagate unchanged.
    pub fn invoke(&mut self, user_text: &str) -> Result<ResponseReport> {
        let transform = self
            .transform
            .as_ref()
            .ok_or(ResonanceError::MissingTransform)?;

        debug!("Invoking transform at level {}", self.state.status().level_name);
        let enhanced = self.enhance(user_text);
        let response = transform(&enhanced)?;
        self.process_response(&response)
    }
}

/// Fraction of the scoring vocabulary contained in `text`,
/// case-insensitive, each keyword counted at most once.
fn keyword_fraction(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let matches = ALIGNMENT_KEYWORDS
        .iter()
        .filter(|k| lower.contains(**k))
        .count();
    (matches as f64 / ALIGNMENT_KEYWORDS.len() as f64).min(1.0)
}
