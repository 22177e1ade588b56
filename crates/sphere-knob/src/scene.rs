//! Backend-independent visual description of a knob.
//!
//! A scene is split in two:
//!
//! - [`KnobFrame`]: everything that depends only on construction options
//!   (size, radii, background track, label, hit region). Built once.
//! - [`KnobDynamics`]: everything derived from the current value
//!   (angle, value arc, marker, readout). Rebuilt on each value change.
//!
//! [`KnobScene`] pairs the two and is what renderers (SVG, egui) consume.

use crate::config::{KnobRange, ValidatedConfig};
use crate::format::format_readout;
use crate::geometry::{
    self, ArcPath, CAP_RATIO, END_ANGLE, Marker, Point, RADIUS_RATIO, START_ANGLE, STROKE_RATIO,
};
use crate::Color;

/// Square of the knob circle that accepts presses, in knob-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    /// Side length.
    pub size: f32,
}

impl HitRegion {
    /// Whether a knob-local point falls inside the region (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.size).contains(&x) && (0.0..=self.size).contains(&y)
    }
}

/// Static structure of a knob.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobFrame {
    /// Pixel footprint.
    pub size: f32,
    /// Centre of the control.
    pub center: Point,
    /// Track radius.
    pub radius: f32,
    /// Arc stroke width.
    pub stroke_width: f32,
    /// Inner cap radius.
    pub cap_radius: f32,
    /// Full-range background track.
    pub track: ArcPath,
    /// Accent colour.
    pub color: Color,
    /// Caption shown under the readout.
    pub label: String,
    /// Interactive region.
    pub hit_region: HitRegion,
}

impl KnobFrame {
    /// Build the static structure for a validated configuration.
    pub fn new(label: &str, config: &ValidatedConfig) -> Self {
        let size = config.size;
        let center = Point::new(size / 2.0, size / 2.0);
        let radius = size * RADIUS_RATIO;
        Self {
            size,
            center,
            radius,
            stroke_width: size * STROKE_RATIO,
            cap_radius: radius * CAP_RATIO,
            track: geometry::describe_arc(center, radius, START_ANGLE, END_ANGLE),
            color: config.color,
            label: label.to_string(),
            hit_region: HitRegion { size },
        }
    }
}

/// Value-dependent parts of a knob.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobDynamics {
    /// Fraction of the sweep covered.
    pub percentage: f32,
    /// Angle of the indicator.
    pub angle: f32,
    /// Arc from the start angle to the current angle.
    pub value_arc: ArcPath,
    /// Radial marker on the cap.
    pub marker: Marker,
    /// Formatted value with units.
    pub readout: String,
}

impl KnobDynamics {
    /// Compute the dynamic parts for `value` on a given frame.
    pub fn compute(frame: &KnobFrame, range: KnobRange, value: f32, step: f32, units: &str) -> Self {
        let percentage = range.percentage(value);
        let angle = geometry::value_angle(percentage);
        Self {
            percentage,
            angle,
            value_arc: geometry::describe_arc(frame.center, frame.radius, START_ANGLE, angle),
            marker: geometry::marker(frame.center, frame.cap_radius, angle),
            readout: format_readout(value, step, units),
        }
    }
}

/// Complete visual description of a knob at one value.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobScene {
    /// Static structure.
    pub frame: KnobFrame,
    /// Value-dependent parts.
    pub dynamics: KnobDynamics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KnobConfig;

    fn frame_and_config() -> (KnobFrame, ValidatedConfig) {
        let config = KnobConfig::default()
            .with_range(-60.0, 0.0)
            .with_value(-20.0)
            .with_step(0.1)
            .with_units("dB")
            .with_size(90.0)
            .validate()
            .unwrap();
        (KnobFrame::new("Threshold", &config), config)
    }

    #[test]
    fn frame_proportions_follow_size() {
        let (frame, _) = frame_and_config();
        assert_eq!(frame.center, Point::new(45.0, 45.0));
        assert!((frame.radius - 36.0).abs() < 1e-4);
        assert!((frame.stroke_width - 7.2).abs() < 1e-4);
        assert!((frame.cap_radius - 27.0).abs() < 1e-4);
        assert!(frame.track.large_arc);
    }

    #[test]
    fn dynamics_at_min_collapse_value_arc() {
        let (frame, config) = frame_and_config();
        let d = KnobDynamics::compute(&frame, config.range, -60.0, 0.1, "dB");
        assert_eq!(d.percentage, 0.0);
        assert_eq!(d.angle, START_ANGLE);
        assert_eq!(d.value_arc.from, d.value_arc.to);
        assert!(!d.value_arc.large_arc);
        assert_eq!(d.readout, "-60.0 dB");
    }

    #[test]
    fn value_arc_turns_large_past_two_thirds() {
        let (frame, config) = frame_and_config();
        // 1.5π sweep: the arc exceeds π once the fraction passes 2/3.
        let below = KnobDynamics::compute(&frame, config.range, -21.0, 0.1, "dB");
        let above = KnobDynamics::compute(&frame, config.range, -19.0, 0.1, "dB");
        assert!(!below.value_arc.large_arc);
        assert!(above.value_arc.large_arc);
    }

    #[test]
    fn hit_region_contains_edges_only_inside_square() {
        let region = HitRegion { size: 60.0 };
        assert!(region.contains(0.0, 0.0));
        assert!(region.contains(60.0, 30.0));
        assert!(!region.contains(-0.5, 30.0));
        assert!(!region.contains(30.0, 61.0));
    }
}
