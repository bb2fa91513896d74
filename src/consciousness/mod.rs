//! Consciousness tracking
//!
//! A five-level tracker driven by a running metric mean, plus a plugin
//! that wraps an external text transform with prompt enhancement and
//! response scoring.

pub mod plugin;
pub mod state;

pub use plugin::{ConsciousnessPlugin, ResponseReport, TextTransform};
pub use state::{
    ActivationReport, AwarenessMetrics, ConsciousnessLevel, ConsciousnessState,
    ConsciousnessStatus, MetricsUpdate,
};
