//! Main application state and UI layout.

use crate::theme::Theme;
use crate::widgets::{KnobWidget, TransferCurve, sample_curve};
use egui::{CentralPanel, Context, CursorIcon, RichText, TopBottomPanel, Ui};
use sphere_knob::{CursorHint, WindowTracker};
use sphere_panel::{
    CompParam, CompressorPanel, CompressorSettings, LoggingHost, PanelError, Section,
};
use std::rc::Rc;

/// Main application state.
pub struct SphereApp {
    panel: CompressorPanel,
    window: Rc<WindowTracker>,
    theme: Theme,
    /// Cached curve samples, refreshed when the panel reports a change.
    curve: Vec<(f32, f32)>,
    status: String,
}

impl SphereApp {
    /// Create a new application instance.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: CompressorSettings,
    ) -> Result<Self, PanelError> {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        let window = WindowTracker::shared();
        let panel = CompressorPanel::new(settings, Rc::new(LoggingHost), window.clone())?;
        let curve = sample_curve(&panel.settings());

        Ok(Self {
            panel,
            window,
            theme,
            curve,
            status: String::new(),
        })
    }

    fn render_header(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("COMP").color(self.theme.accent).strong());
            ui.separator();

            if ui.button("Reset").clicked() {
                let defaults = CompressorSettings::default();
                for param in CompParam::ALL {
                    self.panel.set_param(param, defaults.get(param));
                }
                self.status = "Reset to defaults".into();
            }

            ui.label(RichText::new(&self.status).color(self.theme.text_secondary));
        });
    }

    fn render_section(&mut self, ui: &mut Ui, section: Section) {
        ui.vertical_centered(|ui| {
            for param in CompParam::ALL.into_iter().filter(|p| p.section() == section) {
                ui.add(KnobWidget::new(&mut self.panel, param, &self.theme));
            }
            if section == Section::Secondary {
                self.render_delta(ui);
            }
        });
    }

    fn render_delta(&mut self, ui: &mut Ui) {
        let on = self.panel.delta_enabled();
        let color = if on {
            self.theme.delta_on
        } else {
            self.theme.delta_off
        };
        let button = egui::Button::new(RichText::new("Δ").size(16.0).color(color))
            .selected(on)
            .min_size(egui::vec2(32.0, 32.0));
        if ui.add(button).clicked() {
            self.panel.toggle_delta();
        }
        ui.label(RichText::new("DELTA").small().color(self.theme.text_secondary));
    }
}

impl eframe::App for SphereApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal_top(|ui| {
                for section in Section::ALL {
                    self.render_section(ui, section);
                    ui.separator();
                }
                let settings = self.panel.settings();
                if self.panel.take_curve_dirty() {
                    self.curve = sample_curve(&settings);
                }
                let threshold = settings.threshold;
                ui.add(TransferCurve::new(&self.curve, threshold, &self.theme).size(180.0));
            });
        });

        // Window-level tracking outlives the widget's hover area.
        if self.window.cursor() == Some(CursorHint::VerticalResize) {
            ctx.set_cursor_icon(CursorIcon::ResizeVertical);
        }
    }
}

impl Drop for SphereApp {
    fn drop(&mut self) {
        self.panel.dispose();
    }
}
