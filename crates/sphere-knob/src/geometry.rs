//! Value-to-angle mapping and SVG arc geometry.
//!
//! Angles are in radians, measured from the positive x-axis with y pointing
//! down (SVG user space). The sweep is fixed at 270°: it starts at
//! [`START_ANGLE`] (−135°) and ends at [`END_ANGLE`] (+135°).

use core::f32::consts::PI;
use core::fmt;

/// Angle of the minimum value (−135°).
pub const START_ANGLE: f32 = -PI * 0.75;

/// Angle of the maximum value (+135°).
pub const END_ANGLE: f32 = PI * 0.75;

/// Total sweep, 1.5π.
pub const SWEEP: f32 = END_ANGLE - START_ANGLE;

/// Vertical pointer travel, in pixels, that covers the full value range.
pub const SENSITIVITY_PX: f32 = 200.0;

/// Track radius as a fraction of the knob size.
pub const RADIUS_RATIO: f32 = 0.4;

/// Arc stroke width as a fraction of the knob size.
pub const STROKE_RATIO: f32 = 0.08;

/// Inner cap radius as a fraction of the track radius.
pub const CAP_RATIO: f32 = 0.75;

/// Marker start as a fraction of the cap radius.
const MARKER_INNER_RATIO: f32 = 0.2;

/// Marker end inset from the cap edge, in pixels.
const MARKER_INSET_PX: f32 = 5.0;

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate (down is positive).
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position of `value` in `[min, max]` as a fraction.
///
/// A collapsed range (`max == min`) yields `0.0` instead of NaN.
pub fn percentage(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span.abs() < f32::EPSILON {
        0.0
    } else {
        (value - min) / span
    }
}

/// Angle of the value indicator for a given fraction of the sweep.
pub fn value_angle(percentage: f32) -> f32 {
    START_ANGLE + percentage * SWEEP
}

/// Convert polar coordinates around `center` to a point.
pub fn polar_to_cartesian(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// A circular arc, ready to be written as an SVG path `d` attribute.
///
/// The path is drawn from the end angle back to the start angle with the
/// sweep flag cleared, so the large-arc flag alone picks the correct side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    /// Point the path starts from (at the end angle).
    pub from: Point,
    /// Point the path ends at (at the start angle).
    pub to: Point,
    /// Arc radius.
    pub radius: f32,
    /// Set when the swept angle exceeds π.
    pub large_arc: bool,
}

/// Describe the arc from `start_angle` to `end_angle` around `center`.
///
/// Zero-length arcs are valid and produce coincident endpoints with the
/// minor-arc flag.
pub fn describe_arc(center: Point, radius: f32, start_angle: f32, end_angle: f32) -> ArcPath {
    ArcPath {
        from: polar_to_cartesian(center, radius, end_angle),
        to: polar_to_cartesian(center, radius, start_angle),
        radius,
        large_arc: end_angle - start_angle > PI,
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} A {} {} 0 {} 0 {} {}",
            Num(self.from.x),
            Num(self.from.y),
            Num(self.radius),
            Num(self.radius),
            u8::from(self.large_arc),
            Num(self.to.x),
            Num(self.to.y),
        )
    }
}

/// Number formatting for markup: at most three decimals, no trailing zeros,
/// and no negative zero.
#[derive(Debug, Clone, Copy)]
pub struct Num(pub f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.3}", self.0);
        let s = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s.as_str()
        };
        if s == "-0" { f.write_str("0") } else { f.write_str(s) }
    }
}

/// Radial marker on the inner cap, pointing at the current angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Inner end, near the cap centre.
    pub from: Point,
    /// Outer end, just inside the cap edge.
    pub to: Point,
}

/// Marker line for a cap of `cap_radius` at `angle`.
pub fn marker(center: Point, cap_radius: f32, angle: f32) -> Marker {
    Marker {
        from: polar_to_cartesian(center, cap_radius * MARKER_INNER_RATIO, angle),
        to: polar_to_cartesian(center, cap_radius - MARKER_INSET_PX, angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn sweep_is_270_degrees() {
        assert!(approx(SWEEP.to_degrees(), 270.0));
        assert!(approx(START_ANGLE.to_degrees(), -135.0));
        assert!(approx(END_ANGLE.to_degrees(), 135.0));
    }

    #[test]
    fn percentage_endpoints_and_midpoint() {
        assert_eq!(percentage(-60.0, -60.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, -60.0, 0.0), 1.0);
        assert_eq!(percentage(-30.0, -60.0, 0.0), 0.5);
    }

    #[test]
    fn collapsed_range_is_zero_not_nan() {
        assert_eq!(percentage(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn midpoint_points_straight_right() {
        // Halfway through the sweep is 0 rad.
        assert!(approx(value_angle(0.5), 0.0));
    }

    #[test]
    fn full_track_uses_large_arc() {
        let arc = describe_arc(Point::new(30.0, 30.0), 24.0, START_ANGLE, END_ANGLE);
        assert!(arc.large_arc);
    }

    #[test]
    fn large_arc_flag_flips_just_past_pi() {
        let c = Point::new(0.0, 0.0);
        assert!(!describe_arc(c, 10.0, 0.0, PI).large_arc);
        assert!(describe_arc(c, 10.0, 0.0, PI + 0.01).large_arc);
        assert!(!describe_arc(c, 10.0, -1.0, 1.0).large_arc);
    }

    #[test]
    fn zero_length_arc_has_coincident_endpoints() {
        let arc = describe_arc(Point::new(30.0, 30.0), 24.0, START_ANGLE, START_ANGLE);
        assert_eq!(arc.from, arc.to);
        assert!(!arc.large_arc);
    }

    #[test]
    fn arc_path_goes_from_end_to_start() {
        let arc = describe_arc(Point::new(0.0, 0.0), 10.0, PI, 0.0);
        assert_eq!(arc.to_string(), "M 10 0 A 10 10 0 0 0 -10 0");
    }

    #[test]
    fn num_trims_and_normalises() {
        assert_eq!(Num(30.0).to_string(), "30");
        assert_eq!(Num(1.5).to_string(), "1.5");
        assert_eq!(Num(0.123_456).to_string(), "0.123");
        assert_eq!(Num(-0.000_1).to_string(), "0");
    }

    #[test]
    fn marker_runs_outward_along_angle() {
        let m = marker(Point::new(30.0, 30.0), 18.0, 0.0);
        assert!(approx(m.from.x, 30.0 + 3.6));
        assert!(approx(m.to.x, 30.0 + 13.0));
        assert!(approx(m.from.y, 30.0));
        assert!(approx(m.to.y, 30.0));
    }
}
