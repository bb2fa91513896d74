//! Frequency synthesis
//!
//! Pure sine tone generation, three-harmonic treatment sessions, and WAV
//! export. Waveforms are `Vec<f64>` sample buffers, freshly allocated per
//! call and owned by the caller.

pub mod session;
pub mod tone;
pub mod wav;

pub use session::{treatment, treatments, SessionReport, TreatmentRecord};
pub use tone::Synthesizer;
pub use wav::export_wav;
