//! Resonance - Abjad-derived frequency synthesis
//!
//! Derives numeric values from fixed textual constants and renders them as
//! audio waveforms and status reports:
//! - Abjad letter values summed over Arabic text, scaled into frequencies
//! - High-precision decimal ratio comparison against the golden ratio
//! - Three-harmonic treatment sessions with peak normalization and WAV export
//! - A five-level consciousness tracker and a plugin that wraps an external
//!   text transform around it
//!
//! Everything is synchronous and single-threaded; waveforms are plain
//! `Vec<f64>` buffers owned by the caller. The success-rate and alignment
//! figures carried in reports are domain claims preserved as metadata, not
//! computed guarantees.

pub mod abjad;
pub mod cli;
pub mod consciousness;
pub mod constants;
pub mod error;
pub mod ratio;
pub mod synth;

pub use consciousness::{ConsciousnessPlugin, ConsciousnessState};
pub use error::{ResonanceError, Result};
pub use synth::Synthesizer;
