//! Static compressor transfer curve.
//!
//! Maps input level to output level (both dBFS) for the current threshold,
//! ratio, and knee. The knee is quadratic and centred on the threshold:
//!
//! ```text
//! in < T - W/2          : gr = 0
//! T - W/2 <= in < T + W/2 : gr = (in - T + W/2)² / 2W · (1 - 1/R)
//! otherwise             : gr = (in - T) · (1 - 1/R)
//! out = in - gr
//! ```
//!
//! Makeup gain is not part of the static curve.

use sphere_knob::geometry::Num;
use sphere_knob::{Color, Point};
use std::fmt::{self, Write};

use crate::CompressorSettings;

/// Lowest input level plotted, in dBFS.
pub const FLOOR_DB: f32 = -60.0;

/// Gain reduction in dB (non-negative) for `input_db`.
pub fn gain_reduction_db(input_db: f32, threshold_db: f32, ratio: f32, knee_db: f32) -> f32 {
    let half_knee = knee_db / 2.0;
    if input_db < threshold_db - half_knee {
        return 0.0;
    }

    let over = if knee_db > 0.0 && input_db < threshold_db + half_knee {
        let x = input_db - threshold_db + half_knee;
        (x * x) / (2.0 * knee_db)
    } else {
        input_db - threshold_db
    };

    let slope = if ratio > 0.0 { 1.0 - 1.0 / ratio } else { 0.0 };
    (over * slope).max(0.0)
}

/// Output level for `input_db` under `settings`.
pub fn output_db(input_db: f32, settings: &CompressorSettings) -> f32 {
    input_db - gain_reduction_db(input_db, settings.threshold, settings.ratio, settings.knee)
}

/// `count` evenly spaced `(input, output)` pairs from [`FLOOR_DB`] to 0 dB.
pub fn sample(settings: &CompressorSettings, count: usize) -> Vec<(f32, f32)> {
    let count = count.max(2);
    (0..count)
        .map(|i| {
            let t = i as f32 / (count - 1) as f32;
            let input = FLOOR_DB + t * -FLOOR_DB;
            (input, output_db(input, settings))
        })
        .collect()
}

/// Map a `(input, output)` pair into a `size × size` plot (y down).
fn to_plot(size: f32, (input, output): (f32, f32)) -> Point {
    let scale = size / -FLOOR_DB;
    Point::new(
        (input - FLOOR_DB) * scale,
        (-output).clamp(0.0, -FLOOR_DB) * scale,
    )
}

/// Write the curve as a square SVG plot with a unity reference line and a
/// threshold marker.
pub fn write_curve_svg<W: Write>(
    out: &mut W,
    settings: &CompressorSettings,
    size: f32,
    color: Color,
) -> fmt::Result {
    let s = Num(size);
    writeln!(
        out,
        r#"<svg class="comp-transfer" xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#
    )?;
    writeln!(
        out,
        r##"  <rect width="{s}" height="{s}" fill="#15151a"/>"##
    )?;
    writeln!(
        out,
        r##"  <line x1="0" y1="{s}" x2="{s}" y2="0" stroke="#333" stroke-width="1" stroke-dasharray="3 3"/>"##
    )?;

    let threshold_x = to_plot(size, (settings.threshold, 0.0)).x;
    writeln!(
        out,
        r##"  <line class="comp-threshold" x1="{x}" y1="0" x2="{x}" y2="{s}" stroke="#555" stroke-width="1"/>"##,
        x = Num(threshold_x)
    )?;

    out.write_str(r#"  <polyline fill="none" stroke=""#)?;
    write!(out, "{color}")?;
    out.write_str(r#"" stroke-width="2" points=""#)?;
    for (i, pair) in sample(settings, 121).into_iter().enumerate() {
        let p = to_plot(size, pair);
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{},{}", Num(p.x), Num(p.y))?;
    }
    writeln!(out, r#""/>"#)?;
    writeln!(out, "</svg>")
}

/// Render the curve plot to a new string.
pub fn curve_svg(settings: &CompressorSettings, size: f32, color: Color) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_curve_svg(&mut out, settings, size, color);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn below_knee_is_untouched() {
        assert_eq!(gain_reduction_db(-40.0, -20.0, 4.0, 6.0), 0.0);
    }

    #[test]
    fn above_knee_follows_ratio() {
        // 10 dB over at 4:1 -> 7.5 dB reduction.
        assert!(approx(gain_reduction_db(-10.0, -20.0, 4.0, 6.0), 7.5));
    }

    #[test]
    fn knee_is_continuous_at_both_edges() {
        let (t, r, w) = (-20.0, 4.0, 6.0);
        let lower = t - w / 2.0;
        let upper = t + w / 2.0;
        assert!(approx(gain_reduction_db(lower, t, r, w), 0.0));
        let inside = gain_reduction_db(upper - 1e-3, t, r, w);
        let outside = gain_reduction_db(upper, t, r, w);
        assert!((inside - outside).abs() < 1e-2, "{inside} vs {outside}");
    }

    #[test]
    fn hard_knee_when_width_is_zero() {
        assert_eq!(gain_reduction_db(-20.0, -20.0, 4.0, 0.0), 0.0);
        assert!(approx(gain_reduction_db(-16.0, -20.0, 4.0, 0.0), 3.0));
    }

    #[test]
    fn unity_ratio_never_reduces() {
        assert_eq!(gain_reduction_db(0.0, -60.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn samples_span_floor_to_zero() {
        let points = sample(&CompressorSettings::default(), 61);
        assert_eq!(points.len(), 61);
        assert_eq!(points[0].0, FLOOR_DB);
        assert_eq!(points[60].0, 0.0);
        // Output never exceeds input.
        assert!(points.iter().all(|&(i, o)| o <= i + 1e-6));
    }

    #[test]
    fn svg_plot_contains_curve_and_threshold() {
        let svg = curve_svg(&CompressorSettings::default(), 120.0, Color::TEAL);
        assert!(svg.contains("<polyline"));
        assert!(svg.contains(r##"stroke="#00e5ff""##));
        // -20 dB threshold sits two thirds across a 120 px plot.
        assert!(svg.contains(r#"class="comp-threshold" x1="80""#));
    }
}
