//! Knob construction options and their validation.

use crate::{Color, KnobError};
use serde::{Deserialize, Serialize};

/// Default pixel footprint of the knob square.
pub const DEFAULT_SIZE: f32 = 60.0;

/// Construction options for a [`Knob`](crate::Knob).
///
/// Every field is optional in serialized form; missing fields take the
/// defaults below. A `value` of `None` starts the knob at `min`.
///
/// | Option  | Default   |
/// |---------|-----------|
/// | `min`   | `0`       |
/// | `max`   | `100`     |
/// | `value` | `min`     |
/// | `step`  | `1`       |
/// | `units` | `""`      |
/// | `size`  | `60`      |
/// | `color` | `#00e5ff` |
///
/// ```toml
/// min = -60.0
/// max = 0.0
/// value = -20.0
/// step = 0.1
/// units = "dB"
/// size = 90.0
/// color = "#00e5ff"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnobConfig {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
    /// Starting value; `None` means `min`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    /// Granularity used for readout formatting only.
    pub step: f32,
    /// Readout suffix.
    pub units: String,
    /// Pixel footprint (square).
    pub size: f32,
    /// Accent colour of the value arc and marker.
    pub color: Color,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            value: None,
            step: 1.0,
            units: String::new(),
            size: DEFAULT_SIZE,
            color: Color::TEAL,
        }
    }
}

impl KnobConfig {
    /// Set the value bounds.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the starting value.
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the readout step.
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the readout suffix.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Set the pixel footprint.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the accent colour.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check the construction preconditions.
    ///
    /// Rejects non-finite numbers, `min >= max`, and non-positive step or
    /// size. An out-of-range starting value is clamped, not rejected.
    pub fn validate(&self) -> Result<ValidatedConfig, KnobError> {
        for (field, v) in [
            ("min", self.min),
            ("max", self.max),
            ("step", self.step),
            ("size", self.size),
        ] {
            if !v.is_finite() {
                return Err(KnobError::non_finite(field, v));
            }
        }
        if let Some(v) = self.value
            && !v.is_finite()
        {
            return Err(KnobError::non_finite("value", v));
        }
        if self.min >= self.max {
            return Err(KnobError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(KnobError::InvalidStep(self.step));
        }
        if self.size <= 0.0 {
            return Err(KnobError::InvalidSize(self.size));
        }

        let range = KnobRange {
            min: self.min,
            max: self.max,
        };
        let requested = self.value.unwrap_or(self.min);
        let value = range.clamp(requested);
        if value != requested {
            tracing::warn!(requested, value, "initial knob value clamped into range");
        }

        Ok(ValidatedConfig {
            range,
            value,
            step: self.step,
            units: self.units.clone(),
            size: self.size,
            color: self.color,
        })
    }
}

/// Bounds with the invariant `min < max`, both finite.
///
/// Only obtainable through [`KnobConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobRange {
    min: f32,
    max: f32,
}

impl KnobRange {
    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// `max - min`, always positive.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamp into `[min, max]`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` within the range, in `[0, 1]` for in-range values.
    pub fn percentage(&self, value: f32) -> f32 {
        crate::geometry::percentage(value, self.min, self.max)
    }
}

/// A configuration that passed [`KnobConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    /// Validated bounds.
    pub range: KnobRange,
    /// Starting value, clamped into `range`.
    pub value: f32,
    /// Readout step.
    pub step: f32,
    /// Readout suffix.
    pub units: String,
    /// Pixel footprint.
    pub size: f32,
    /// Accent colour.
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_construction_interface() {
        let v = KnobConfig::default().validate().unwrap();
        assert_eq!(v.range.min(), 0.0);
        assert_eq!(v.range.max(), 100.0);
        assert_eq!(v.value, 0.0);
        assert_eq!(v.step, 1.0);
        assert_eq!(v.units, "");
        assert_eq!(v.size, 60.0);
        assert_eq!(v.color, Color::TEAL);
    }

    #[test]
    fn missing_value_starts_at_min() {
        let v = KnobConfig::default()
            .with_range(-60.0, 0.0)
            .validate()
            .unwrap();
        assert_eq!(v.value, -60.0);
    }

    #[test]
    fn collapsed_and_inverted_ranges_are_rejected() {
        for (min, max) in [(5.0, 5.0), (10.0, -10.0)] {
            let err = KnobConfig::default()
                .with_range(min, max)
                .validate()
                .unwrap_err();
            assert_eq!(err, KnobError::InvalidRange { min, max });
        }
    }

    #[test]
    fn non_finite_options_are_rejected() {
        let err = KnobConfig::default()
            .with_range(f32::NAN, 1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, KnobError::NonFinite { field: "min", .. }));

        let err = KnobConfig::default()
            .with_value(f32::INFINITY)
            .validate()
            .unwrap_err();
        assert!(matches!(err, KnobError::NonFinite { field: "value", .. }));
    }

    #[test]
    fn step_and_size_must_be_positive() {
        assert_eq!(
            KnobConfig::default().with_step(0.0).validate().unwrap_err(),
            KnobError::InvalidStep(0.0)
        );
        assert_eq!(
            KnobConfig::default().with_size(-1.0).validate().unwrap_err(),
            KnobError::InvalidSize(-1.0)
        );
    }

    #[test]
    fn out_of_range_start_is_clamped() {
        let v = KnobConfig::default()
            .with_range(1.0, 20.0)
            .with_value(50.0)
            .validate()
            .unwrap();
        assert_eq!(v.value, 20.0);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: KnobConfig = toml::from_str(
            r##"
            min = -12.0
            max = 24.0
            units = "dB"
            color = "#aaa"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.value, None);
        assert_eq!(cfg.step, 1.0);
        assert_eq!(cfg.size, DEFAULT_SIZE);
        assert_eq!(cfg.color, Color::rgb(0xaa, 0xaa, 0xaa));
    }

    #[test]
    fn bad_color_in_toml_fails_to_parse() {
        let parsed: Result<KnobConfig, _> = toml::from_str(r#"color = "cyan""#);
        assert!(parsed.is_err());
    }
}
