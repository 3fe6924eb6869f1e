//! Error types for the bandpass filter calculator.
//!
//! This module provides a unified error type [`SynthesisError`] that covers
//! all error conditions that can occur during input validation, filter
//! synthesis, unit parsing, and report rendering.

use thiserror::Error;

/// Result type alias using [`SynthesisError`].
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Unified error type for all calculator operations.
#[derive(Error, Debug)]
pub enum SynthesisError {
    // ============ Input Validation Errors ============
    /// Resonator count outside the supported range for the response type
    #[error("Unsupported order {order} for {response}: {message}")]
    UnsupportedOrder {
        response: String,
        order: usize,
        message: String,
    },

    /// Chebyshev ripple not in the supported set
    #[error("Unsupported ripple {ripple_db} dB: use 0.1, 0.5, or 1.0")]
    UnsupportedRipple { ripple_db: f64 },

    /// Frequency value is non-positive, non-finite, or out of range
    #[error("Invalid frequency '{field}' ({value:.6e} Hz): {message}")]
    InvalidFrequency {
        field: &'static str,
        value: f64,
        message: String,
    },

    /// Bandwidth is non-positive or not strictly below the center frequency
    #[error("Invalid bandwidth ({value:.6e}): {message}")]
    InvalidBandwidth { value: f64, message: String },

    /// System impedance is non-positive or out of range
    #[error("Invalid impedance ({value:.6e} ohm): {message}")]
    InvalidImpedance { value: f64, message: String },

    /// Q safety factor must be a positive number
    #[error("Invalid Q safety factor ({value}): must be positive")]
    InvalidQSafety { value: f64 },

    /// A unit-suffixed quantity string could not be parsed
    #[error("Invalid {quantity} value '{input}'")]
    InvalidQuantity {
        quantity: &'static str,
        input: String,
    },

    // ============ Synthesis Errors ============
    /// A derived component value is zero, negative, or not finite
    #[error("Non-physical component {component} ({value:.6e}): {message}")]
    NonPhysicalComponent {
        component: String,
        value: f64,
        message: String,
    },

    /// Prototype source and load terminations disagree
    #[error("Prototype terminations differ: g0 = {source_g}, g(n+1) = {load_g}")]
    UnequalTerminations { source_g: f64, load_g: f64 },

    /// No preferred value could be matched to the target
    #[error("E-series matching failed for {target:.6e}: {message}")]
    ESeriesUnavailable { target: f64, message: String },

    // ============ Output Errors ============
    /// Error rendering a report as JSON or CSV
    #[error("Failed to render {format} output: {message}")]
    Output {
        format: &'static str,
        message: String,
    },
}

impl SynthesisError {
    /// Create an unsupported order error
    pub fn unsupported_order(response: impl Into<String>, order: usize, message: impl Into<String>) -> Self {
        Self::UnsupportedOrder {
            response: response.into(),
            order,
            message: message.into(),
        }
    }

    /// Create an invalid frequency error
    pub fn invalid_frequency(field: &'static str, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidFrequency {
            field,
            value,
            message: message.into(),
        }
    }

    /// Create an invalid bandwidth error
    pub fn invalid_bandwidth(value: f64, message: impl Into<String>) -> Self {
        Self::InvalidBandwidth {
            value,
            message: message.into(),
        }
    }

    /// Create a non-physical component error
    pub fn non_physical(component: impl Into<String>, value: f64, message: impl Into<String>) -> Self {
        Self::NonPhysicalComponent {
            component: component.into(),
            value,
            message: message.into(),
        }
    }

    /// Wrap a serializer failure
    pub fn output(format: &'static str, source: impl std::fmt::Display) -> Self {
        Self::Output {
            format,
            message: source.to_string(),
        }
    }

    /// Process exit code for this error.
    ///
    /// Input errors map to 2, designs that cannot be built to 3,
    /// everything else to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedOrder { .. }
            | Self::UnsupportedRipple { .. }
            | Self::InvalidFrequency { .. }
            | Self::InvalidBandwidth { .. }
            | Self::InvalidImpedance { .. }
            | Self::InvalidQSafety { .. }
            | Self::InvalidQuantity { .. } => 2,
            Self::NonPhysicalComponent { .. } => 3,
            Self::UnequalTerminations { .. }
            | Self::ESeriesUnavailable { .. }
            | Self::Output { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_family() {
        assert_eq!(SynthesisError::UnsupportedRipple { ripple_db: 0.3 }.exit_code(), 2);
        assert_eq!(SynthesisError::invalid_bandwidth(2e6, "too wide").exit_code(), 2);
        assert_eq!(SynthesisError::non_physical("Cp2", -1e-12, "negative").exit_code(), 3);
        assert_eq!(
            SynthesisError::UnequalTerminations {
                source_g: 1.0,
                load_g: 1.1
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_message_names_field() {
        let err = SynthesisError::invalid_frequency("center", -1.0, "must be positive");
        assert!(err.to_string().contains("'center'"));
        let err = SynthesisError::non_physical("Cp3", -2e-12, "bandwidth too wide");
        assert!(err.to_string().contains("Cp3"));
    }
}
