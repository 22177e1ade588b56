//! Static transfer curve plot.

use egui::{Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Widget, pos2, vec2};
use sphere_panel::CompressorSettings;
use sphere_panel::transfer::{FLOOR_DB, sample};

use crate::theme::Theme;

/// Points sampled across the plot.
const RESOLUTION: usize = 121;

/// Square input/output plot of the compressor's static curve.
pub struct TransferCurve<'a> {
    points: &'a [(f32, f32)],
    threshold: f32,
    size: f32,
    theme: &'a Theme,
}

impl<'a> TransferCurve<'a> {
    /// Plot precomputed `(input, output)` samples.
    pub fn new(points: &'a [(f32, f32)], threshold: f32, theme: &'a Theme) -> Self {
        Self {
            points,
            threshold,
            size: 160.0,
            theme,
        }
    }

    /// Set the plot edge length in pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Sample the curve for `settings` at plot resolution.
pub fn sample_curve(settings: &CompressorSettings) -> Vec<(f32, f32)> {
    sample(settings, RESOLUTION)
}

fn to_plot(rect: Rect, input: f32, output: f32) -> Pos2 {
    let scale = rect.width() / -FLOOR_DB;
    pos2(
        rect.left() + (input - FLOOR_DB) * scale,
        rect.top() + (-output).clamp(0.0, -FLOOR_DB) * scale,
    )
}

impl Widget for TransferCurve<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 4.0, self.theme.plot_bg);

            painter.extend(Shape::dashed_line(
                &[rect.left_bottom(), rect.right_top()],
                Stroke::new(1.0, self.theme.plot_grid),
                3.0,
                3.0,
            ));

            let x = to_plot(rect, self.threshold, 0.0).x;
            painter.line_segment(
                [pos2(x, rect.top()), pos2(x, rect.bottom())],
                Stroke::new(1.0, self.theme.text_secondary.gamma_multiply(0.5)),
            );

            let line: Vec<Pos2> = self
                .points
                .iter()
                .map(|&(input, output)| to_plot(rect, input, output))
                .collect();
            painter.add(Shape::line(line, Stroke::new(2.0, self.theme.accent)));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_corners() {
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(120.0, 120.0));
        assert_eq!(to_plot(rect, FLOOR_DB, FLOOR_DB), rect.left_bottom());
        assert_eq!(to_plot(rect, 0.0, 0.0), rect.right_top());
    }

    #[test]
    fn samples_cover_plot_width() {
        let points = sample_curve(&CompressorSettings::default());
        assert_eq!(points.len(), RESOLUTION);
    }
}
