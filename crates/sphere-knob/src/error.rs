//! Error types for knob construction.

use thiserror::Error;

/// Errors raised while validating a [`KnobConfig`](crate::KnobConfig).
///
/// A knob is only ever built from a validated configuration, so every
/// geometric computation downstream can assume `min < max` and finite inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnobError {
    /// Bounds are collapsed or inverted.
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange {
        /// Lower bound as configured.
        min: f32,
        /// Upper bound as configured.
        max: f32,
    },

    /// A numeric option is NaN or infinite.
    #[error("'{field}' must be finite, got {value}")]
    NonFinite {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Display step is zero or negative.
    #[error("step must be positive, got {0}")]
    InvalidStep(f32),

    /// Pixel footprint is zero or negative.
    #[error("size must be positive, got {0}")]
    InvalidSize(f32),

    /// Colour string is not `#rgb` or `#rrggbb`.
    #[error("invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),
}

impl KnobError {
    /// Create a non-finite value error.
    pub fn non_finite(field: &'static str, value: f32) -> Self {
        KnobError::NonFinite { field, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_display() {
        let err = KnobError::InvalidRange { min: 5.0, max: 5.0 };
        assert_eq!(
            err.to_string(),
            "invalid range: min (5) must be less than max (5)"
        );
    }

    #[test]
    fn non_finite_factory_produces_correct_variant() {
        let err = KnobError::non_finite("value", f32::INFINITY);
        assert!(matches!(err, KnobError::NonFinite { field: "value", .. }));
        assert!(err.to_string().contains("'value' must be finite"));
    }

    #[test]
    fn invalid_color_display() {
        let err = KnobError::InvalidColor("teal".to_string());
        assert_eq!(
            err.to_string(),
            "invalid color 'teal': expected #rgb or #rrggbb"
        );
    }
}
