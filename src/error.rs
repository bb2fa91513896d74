//! Error handling for Resonance
//!
//! Every fallible operation in the crate returns [`Result`]. Errors carry
//! enough context to be printed directly to a user; `NotFound` messages
//! enumerate the valid identifiers.

use thiserror::Error;

/// Result type alias for Resonance operations
pub type Result<T> = std::result::Result<T, ResonanceError>;

/// Main error type for Resonance operations
#[derive(Error, Debug)]
pub enum ResonanceError {
    /// Unknown treatment identifier; `available` lists the valid ids
    #[error("Unknown treatment: '{id}'. Available: {available}")]
    TreatmentNotFound { id: String, available: String },

    /// Division by zero or an equivalent degenerate input
    #[error("Domain error: {reason}")]
    Domain { reason: String },

    /// Plugin invoked without an external text transform
    #[error("No text transform supplied. Construct the plugin with ConsciousnessPlugin::new(Some(transform))")]
    MissingTransform,

    /// Input outside the documented range
    #[error("Invalid input: {reason}")]
    Validation { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // WAV encoding errors
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResonanceError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ResonanceError::TreatmentNotFound { .. } => "TREATMENT_NOT_FOUND",
            ResonanceError::Domain { .. } => "DOMAIN_ERROR",
            ResonanceError::MissingTransform => "MISSING_TRANSFORM",
            ResonanceError::Validation { .. } => "VALIDATION_ERROR",
            ResonanceError::Io(_) => "IO_ERROR",
            ResonanceError::Wav(_) => "WAV_ERROR",
            ResonanceError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by the caller adjusting its input
    pub fn is_recoverable(&self) -> bool {
        match self {
            ResonanceError::TreatmentNotFound { .. } => true,
            ResonanceError::Validation { .. } => true,
            ResonanceError::MissingTransform => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ResonanceError::TreatmentNotFound {
            id: "aura".to_string(),
            available: "vision, hearing".to_string(),
        };
        assert_eq!(err.error_code(), "TREATMENT_NOT_FOUND");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_not_found_message_enumerates_ids() {
        let err = ResonanceError::TreatmentNotFound {
            id: "aura".to_string(),
            available: "vision, hearing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("aura"));
        assert!(msg.contains("vision, hearing"));
    }

    #[test]
    fn test_domain_error_not_recoverable() {
        let err = ResonanceError::Domain {
            reason: "division by zero".to_string(),
        };
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(!err.is_recoverable());
    }
}
