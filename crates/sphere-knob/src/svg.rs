//! HTML/SVG markup for a [`KnobScene`].
//!
//! The markup is a wrapper `div` holding the `knob-circle` hit region (an
//! inline SVG with the track, value arc, cap, and marker) followed by the
//! `knob-info` block with the readout and the label caption. Output is a
//! pure function of the scene.

use crate::capture::CursorHint;
use crate::geometry::Num;
use crate::scene::KnobScene;
use std::fmt::{self, Write};

/// Background track colour.
const TRACK_COLOR: &str = "#1a1a1f";

/// Caption colour.
const LABEL_COLOR: &str = "#888";

/// Write the full knob markup.
pub fn write_knob<W: Write>(out: &mut W, scene: &KnobScene) -> fmt::Result {
    let frame = &scene.frame;
    let size = Num(frame.size);

    writeln!(
        out,
        r#"<div class="knob-wrapper" style="display: flex; flex-direction: column; align-items: center; gap: 8px; pointer-events: none;">"#
    )?;
    writeln!(
        out,
        r#"  <div class="knob-circle" style="position: relative; width: {size}px; height: {size}px; pointer-events: auto; cursor: {};">"#,
        CursorHint::VerticalResize.css()
    )?;
    write_svg(out, scene)?;
    writeln!(out, "  </div>")?;
    writeln!(
        out,
        r#"  <div class="knob-info" style="text-align: center; line-height: 1.2;">"#
    )?;
    writeln!(
        out,
        r#"    <div class="knob-value" style="font-family: 'Segoe UI', sans-serif; font-size: 11px; color: {}; font-weight: 600;">{}</div>"#,
        frame.color,
        Escaped(&scene.dynamics.readout)
    )?;
    writeln!(
        out,
        r#"    <div class="knob-label" style="font-size: 10px; text-transform: uppercase; color: {LABEL_COLOR}; font-weight: 500; letter-spacing: 0.5px;">{}</div>"#,
        Escaped(&frame.label)
    )?;
    writeln!(out, "  </div>")?;
    writeln!(out, "</div>")
}

/// Write only the `<svg>` element.
pub fn write_svg<W: Write>(out: &mut W, scene: &KnobScene) -> fmt::Result {
    let frame = &scene.frame;
    let dynamics = &scene.dynamics;
    let size = Num(frame.size);
    let stroke = Num(frame.stroke_width);
    let color = frame.color;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    )?;
    out.write_str(
        r#"  <defs>
    <linearGradient id="knobGradient" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:#3a3a40;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#2a2a30;stop-opacity:1" />
    </linearGradient>
    <filter id="dropshadow" height="130%">
      <feGaussianBlur in="SourceAlpha" stdDeviation="2"/>
      <feOffset dx="0" dy="2" result="offsetblur"/>
      <feFlood flood-color="rgba(0,0,0,0.5)"/>
      <feComposite in2="offsetblur" operator="in"/>
      <feMerge>
        <feMergeNode/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
  </defs>
"#,
    )?;
    writeln!(
        out,
        r#"  <path class="knob-track" d="{}" fill="none" stroke="{TRACK_COLOR}" stroke-width="{stroke}" stroke-linecap="round"/>"#,
        frame.track
    )?;
    writeln!(
        out,
        r#"  <path class="knob-value-arc" d="{}" fill="none" stroke="{color}" stroke-width="{stroke}" stroke-linecap="round" style="filter: drop-shadow(0 0 3px {color}); opacity: 0.8;"/>"#,
        dynamics.value_arc
    )?;
    writeln!(
        out,
        "  <circle class=\"knob-cap\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"url(#knobGradient)\" stroke=\"#111\" stroke-width=\"1\" filter=\"url(#dropshadow)\"/>",
        Num(frame.center.x),
        Num(frame.center.y),
        Num(frame.cap_radius)
    )?;
    writeln!(
        out,
        r#"  <line class="knob-marker" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="2" stroke-linecap="round"/>"#,
        Num(dynamics.marker.from.x),
        Num(dynamics.marker.from.y),
        Num(dynamics.marker.to.x),
        Num(dynamics.marker.to.y)
    )?;
    writeln!(out, "</svg>")
}

/// Render the knob markup to a new string.
pub fn knob_markup(scene: &KnobScene) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_knob(&mut out, scene);
    out
}

/// Render only the `<svg>` element to a new string.
pub fn knob_svg(scene: &KnobScene) -> String {
    let mut out = String::new();
    let _ = write_svg(&mut out, scene);
    out
}

/// Text with `& < > "` escaped for HTML content and attributes.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Knob, KnobConfig, WindowTracker};

    fn knob(value: f32) -> Knob {
        let config = KnobConfig::default()
            .with_range(-60.0, 0.0)
            .with_value(value)
            .with_step(0.1)
            .with_units("dB")
            .with_size(90.0);
        Knob::new("Threshold", &config, WindowTracker::shared()).unwrap()
    }

    #[test]
    fn markup_contains_hit_region_readout_and_label() {
        let html = knob_markup(&knob(-20.0).render());
        assert!(html.contains(r#"class="knob-circle""#));
        assert!(html.contains("cursor: ns-resize"));
        assert!(html.contains(">-20.0 dB</div>"));
        assert!(html.contains(">Threshold</div>"));
        assert!(html.contains("#00e5ff"));
    }

    #[test]
    fn svg_has_both_arcs_cap_and_marker() {
        let svg = knob_svg(&knob(-20.0).render());
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("<circle"));
        assert!(svg.contains("<line"));
        assert!(svg.contains(r#"viewBox="0 0 90 90""#));
    }

    #[test]
    fn track_path_uses_large_arc_flag() {
        let svg = knob_svg(&knob(-60.0).render());
        let track = svg
            .lines()
            .find(|l| l.contains("knob-track"))
            .unwrap();
        assert!(track.contains(" A 36 36 0 1 0 "), "got: {track}");
    }

    #[test]
    fn markup_is_deterministic() {
        let k = knob(-33.3);
        assert_eq!(knob_markup(&k.render()), knob_markup(&k.render()));
    }

    #[test]
    fn label_is_escaped() {
        let config = KnobConfig::default();
        let k = Knob::new("<Gain & \"Trim\">", &config, WindowTracker::shared()).unwrap();
        let html = knob_markup(&k.render());
        assert!(html.contains("&lt;Gain &amp; &quot;Trim&quot;&gt;"));
    }
}
