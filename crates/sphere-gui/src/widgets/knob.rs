//! Rotary knob widget.
//!
//! Paints a panel knob's scene with the egui painter and translates egui's
//! drag lifecycle into [`PointerEvent`]s:
//!
//! - drag start → `Down` at the press position (window pixels)
//! - drag       → `Move`
//! - drag stop  → `Up`
//! - drag lost without a stop → `Cancel`
//!
//! Only the circle square senses drags. The readout and caption beneath it
//! are inert.

use egui::{
    Align2, CursorIcon, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Widget, pos2, vec2,
};
use sphere_knob::geometry::{START_ANGLE, SWEEP, polar_to_cartesian};
use sphere_knob::{Knob, Point, PointerEvent};
use sphere_panel::{CompParam, CompressorPanel};

use crate::theme::{Theme, to_color32};

/// Height reserved under the circle for the readout and caption.
const INFO_HEIGHT: f32 = 34.0;

/// Segments used for a full sweep.
const ARC_SEGMENTS: f32 = 48.0;

/// One panel knob, drawn and driven through egui.
pub struct KnobWidget<'a> {
    panel: &'a mut CompressorPanel,
    param: CompParam,
    theme: &'a Theme,
}

impl<'a> KnobWidget<'a> {
    /// Widget for the knob bound to `param`.
    pub fn new(panel: &'a mut CompressorPanel, param: CompParam, theme: &'a Theme) -> Self {
        Self {
            panel,
            param,
            theme,
        }
    }

    fn pointer_event(response: &Response, dragging: bool) -> Option<PointerEvent> {
        let pos = response.interact_pointer_pos();
        if response.drag_started() {
            return pos.map(|p| PointerEvent::Down { x: p.x, y: p.y });
        }
        if response.drag_stopped() {
            return Some(PointerEvent::Up);
        }
        if response.dragged() {
            return pos.map(|p| PointerEvent::Move { x: p.x, y: p.y });
        }
        dragging.then_some(PointerEvent::Cancel)
    }
}

impl Widget for KnobWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Some(size) = self.panel.knob(self.param).map(Knob::size) else {
            return ui.label(self.param.label());
        };

        let (rect, area) = ui.allocate_exact_size(vec2(size, size + INFO_HEIGHT), Sense::hover());
        let mut response = ui
            .interact(circle_rect(rect, size), area.id.with("circle"), Sense::drag())
            .on_hover_cursor(CursorIcon::ResizeVertical);

        let dragging = self
            .panel
            .knob(self.param)
            .is_some_and(Knob::is_dragging);
        if let Some(event) = Self::pointer_event(&response, dragging) {
            let target = matches!(event, PointerEvent::Down { .. }).then_some(self.param);
            if self.panel.dispatch(target, event) {
                response.mark_changed();
            }
        }

        if ui.is_rect_visible(rect)
            && let Some(knob) = self.panel.knob(self.param)
        {
            paint(ui, rect.min, knob, self.theme);
        }

        response
    }
}

/// The `size`×`size` square of the circle at the top of the widget rect.
fn circle_rect(rect: Rect, size: f32) -> Rect {
    Rect::from_min_size(rect.min, vec2(size, size))
}

fn at(origin: Pos2, p: Point) -> Pos2 {
    pos2(origin.x + p.x, origin.y + p.y)
}

fn arc_points(origin: Pos2, center: Point, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    let steps = ((end - start).abs() / SWEEP * ARC_SEGMENTS).round().max(2.0) as usize;
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            at(origin, polar_to_cartesian(center, radius, start + t * (end - start)))
        })
        .collect()
}

fn paint(ui: &Ui, origin: Pos2, knob: &Knob, theme: &Theme) {
    let painter = ui.painter();
    let frame = knob.frame();
    let dynamics = knob.dynamics();
    let accent = to_color32(frame.color);

    painter.add(Shape::line(
        arc_points(origin, frame.center, frame.radius, START_ANGLE, START_ANGLE + SWEEP),
        Stroke::new(frame.stroke_width, theme.knob_track),
    ));

    if dynamics.percentage > 0.0 {
        painter.add(Shape::line(
            arc_points(origin, frame.center, frame.radius, START_ANGLE, dynamics.angle),
            Stroke::new(frame.stroke_width, accent),
        ));
    }

    let cap = if knob.is_dragging() {
        theme.knob_cap_active
    } else {
        theme.knob_cap
    };
    painter.circle_filled(at(origin, frame.center), frame.cap_radius, cap);
    painter.line_segment(
        [
            at(origin, dynamics.marker.from),
            at(origin, dynamics.marker.to),
        ],
        Stroke::new(2.0, theme.knob_marker),
    );

    let info_top = origin.y + frame.size + 2.0;
    let center_x = origin.x + frame.center.x;
    painter.text(
        pos2(center_x, info_top),
        Align2::CENTER_TOP,
        &dynamics.readout,
        FontId::monospace(12.0),
        accent,
    );
    painter.text(
        pos2(center_x, info_top + 16.0),
        Align2::CENTER_TOP,
        &frame.label,
        FontId::proportional(11.0),
        theme.text_secondary,
    );
}
