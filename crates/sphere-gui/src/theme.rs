//! Visual styling for the Sphere GUI.

use egui::{Color32, Stroke, Visuals};
use sphere_knob::Color;

/// Theme colors for the GUI.
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Panel/card background color.
    pub panel_bg: Color32,
    /// Primary accent color for active elements.
    pub accent: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Unfilled knob track.
    pub knob_track: Color32,
    /// Knob cap fill, the bottom stop of the markup gradient.
    pub knob_cap: Color32,
    /// Knob cap fill while dragging, the top stop of the markup gradient.
    pub knob_cap_active: Color32,
    /// Marker line on the knob cap.
    pub knob_marker: Color32,
    /// Transfer plot background.
    pub plot_bg: Color32,
    /// Transfer plot reference lines.
    pub plot_grid: Color32,
    /// Delta button when off.
    pub delta_off: Color32,
    /// Delta button when on.
    pub delta_on: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(13, 13, 16),
            panel_bg: Color32::from_rgb(21, 21, 26),
            accent: to_color32(Color::TEAL),
            text_primary: Color32::from_rgb(230, 230, 235),
            text_secondary: Color32::from_rgb(136, 136, 146),
            knob_track: Color32::from_rgb(0x1a, 0x1a, 0x1f),
            knob_cap: Color32::from_rgb(0x2a, 0x2a, 0x30),
            knob_cap_active: Color32::from_rgb(0x3a, 0x3a, 0x40),
            knob_marker: Color32::from_rgb(230, 230, 235),
            plot_bg: Color32::from_rgb(0x15, 0x15, 0x1a),
            plot_grid: Color32::from_rgb(0x33, 0x33, 0x33),
            delta_off: Color32::from_rgb(80, 80, 90),
            delta_on: Color32::from_rgb(0xff, 0xb7, 0x4d),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }

    /// Dark visuals built from the knob palette.
    ///
    /// Buttons take the track and cap shades of the knob, and the selected
    /// state (the delta toggle) takes the delta amber.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.panel_bg;
        visuals.window_fill = self.panel_bg;
        visuals.extreme_bg_color = self.background;
        visuals.override_text_color = Some(self.text_primary);

        // Separators between sections.
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.knob_track);

        let widgets = &mut visuals.widgets;
        for (state, fill) in [
            (&mut widgets.inactive, self.knob_track),
            (&mut widgets.hovered, self.knob_cap),
            (&mut widgets.active, self.knob_cap_active),
        ] {
            state.bg_fill = fill;
            state.weak_bg_fill = fill;
        }
        widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.selection.bg_fill = self.delta_on.gamma_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, self.delta_on);
        visuals
    }
}

/// Convert a knob accent into an egui color.
pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
