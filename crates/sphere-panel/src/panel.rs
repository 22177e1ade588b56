//! Compressor control panel.
//!
//! One knob per [`CompParam`], wired so that every user-driven change:
//!
//! 1. writes the shared [`CompressorSettings`],
//! 2. notifies the host (`sphere://comp/<param>/<value>`),
//! 3. marks the transfer curve dirty if the static curve changed shape.
//!
//! Programmatic updates ([`CompressorPanel::update_knob`]) only do step 1.

use sphere_knob::{Knob, PointerEvent, PointerTracker, svg::Escaped};
use std::cell::{Cell, RefCell};
use std::fmt::{self, Write};
use std::rc::Rc;

use crate::{CompParam, CompressorSettings, HostLink, HostUrl, PanelError, Section};

/// Callback invoked with the settings whenever the transfer curve changes.
pub type CurveObserver = Box<dyn FnMut(&CompressorSettings)>;

/// State shared between the panel and its knobs' change callbacks.
struct Shared {
    settings: RefCell<CompressorSettings>,
    host: Rc<dyn HostLink>,
    curve_dirty: Cell<bool>,
    curve_observer: RefCell<Option<CurveObserver>>,
}

impl Shared {
    fn user_changed(&self, param: CompParam, value: f32) {
        self.settings.borrow_mut().set(param, value);
        self.host.navigate(&HostUrl::param(param, value));
        if param.affects_curve() {
            self.mark_curve_dirty();
        }
    }

    fn mark_curve_dirty(&self) {
        self.curve_dirty.set(true);
        if let Some(observer) = self.curve_observer.borrow_mut().as_mut() {
            observer(&self.settings.borrow());
        }
    }
}

/// The compressor panel: six knobs, a delta toggle, and a host link.
pub struct CompressorPanel {
    knobs: Vec<(CompParam, Knob)>,
    shared: Rc<Shared>,
    disposed: bool,
}

impl CompressorPanel {
    /// Build the panel from initial `settings`.
    ///
    /// Out-of-range settings are clamped into each knob's bounds and the
    /// clamped values are written back to the shared settings.
    pub fn new(
        settings: CompressorSettings,
        host: Rc<dyn HostLink>,
        tracker: Rc<dyn PointerTracker>,
    ) -> Result<Self, PanelError> {
        let shared = Rc::new(Shared {
            settings: RefCell::new(settings),
            host,
            curve_dirty: Cell::new(false),
            curve_observer: RefCell::new(None),
        });

        let mut knobs = Vec::with_capacity(CompParam::ALL.len());
        for param in CompParam::ALL {
            let start = shared.settings.borrow().get(param);
            let config = param.knob_config(start);
            let sink = Rc::clone(&shared);
            let knob = Knob::new(param.label(), &config, Rc::clone(&tracker))
                .map_err(|e| PanelError::knob(param.key(), e))?
                .on_change(move |value| sink.user_changed(param, value));

            shared.settings.borrow_mut().set(param, knob.value());
            knobs.push((param, knob));
        }

        tracing::debug!(knobs = knobs.len(), "compressor panel built");
        Ok(Self {
            knobs,
            shared,
            disposed: false,
        })
    }

    /// Register the transfer-curve observer.
    pub fn on_curve_change(&mut self, observer: impl FnMut(&CompressorSettings) + 'static) {
        *self.shared.curve_observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> CompressorSettings {
        self.shared.settings.borrow().clone()
    }

    /// Knob for `param`.
    pub fn knob(&self, param: CompParam) -> Option<&Knob> {
        self.knobs.iter().find(|(p, _)| *p == param).map(|(_, k)| k)
    }

    fn knob_mut(&mut self, param: CompParam) -> Option<&mut Knob> {
        self.knobs
            .iter_mut()
            .find(|(p, _)| *p == param)
            .map(|(_, k)| k)
    }

    /// All knobs in layout order.
    pub fn knobs(&self) -> impl Iterator<Item = (CompParam, &Knob)> {
        self.knobs.iter().map(|(p, k)| (*p, k))
    }

    /// Whether the transfer curve changed since the last call, clearing the flag.
    pub fn take_curve_dirty(&self) -> bool {
        self.shared.curve_dirty.replace(false)
    }

    /// Whether delta monitoring is on.
    pub fn delta_enabled(&self) -> bool {
        self.shared.settings.borrow().delta
    }

    /// Push a value into the knob named `key` without notifying the host.
    ///
    /// Used by collaborators that edit parameters elsewhere (e.g. dragging
    /// the transfer curve). Unknown keys are ignored; returns whether a
    /// knob was found.
    pub fn update_knob(&mut self, key: &str, value: f32) -> bool {
        match key.parse::<CompParam>() {
            Ok(param) => {
                self.set_param(param, value);
                true
            }
            Err(_) => {
                tracing::debug!(key, "update for unknown knob ignored");
                false
            }
        }
    }

    /// Typed form of [`update_knob`](Self::update_knob).
    pub fn set_param(&mut self, param: CompParam, value: f32) {
        let Some(knob) = self.knob_mut(param) else {
            return;
        };
        knob.set_value(value);
        let stored = knob.value();
        self.shared.settings.borrow_mut().set(param, stored);
        if param.affects_curve() {
            self.shared.mark_curve_dirty();
        }
    }

    /// Route a pointer event.
    ///
    /// `Down` goes to `target` only, the knob the front end hit-tested with
    /// [`Knob::hit_test`]. `Move`, `Up`, and `Cancel` are window-scoped
    /// and go to every knob that is currently dragging. Returns whether any
    /// value changed.
    pub fn dispatch(&mut self, target: Option<CompParam>, event: PointerEvent) -> bool {
        if self.disposed {
            return false;
        }
        match event {
            PointerEvent::Down { .. } => target
                .and_then(|param| self.knob_mut(param))
                .is_some_and(|knob| knob.handle_pointer(event)),
            PointerEvent::Move { .. } | PointerEvent::Up | PointerEvent::Cancel => {
                let mut changed = false;
                for (_, knob) in &mut self.knobs {
                    if knob.is_dragging() {
                        changed |= knob.handle_pointer(event);
                    }
                }
                changed
            }
        }
    }

    /// Flip delta monitoring and notify the host. Returns the new state.
    pub fn toggle_delta(&mut self) -> bool {
        let enabled = {
            let mut settings = self.shared.settings.borrow_mut();
            settings.delta = !settings.delta;
            settings.delta
        };
        self.shared.host.navigate(&HostUrl::Delta(enabled));
        enabled
    }

    /// Dispose every knob, releasing any live drag tracking. Idempotent.
    pub fn dispose(&mut self) {
        for (_, knob) in &mut self.knobs {
            knob.dispose();
        }
        self.disposed = true;
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Write the panel markup into `target`. An absent target is a no-op.
    pub fn mount<W: Write>(&self, target: Option<&mut W>) -> fmt::Result {
        let Some(out) = target else {
            return Ok(());
        };

        writeln!(out, r#"<div id="comp-controls" class="comp-pro-controls">"#)?;
        for section in Section::ALL {
            writeln!(
                out,
                r#"<div class="comp-section comp-section-{}">"#,
                section.css()
            )?;
            for (param, knob) in self.knobs().filter(|(p, _)| p.section() == section) {
                writeln!(out, r#"<div id="knob-container-{}">"#, Escaped(param.key()))?;
                knob.mount(Some(&mut *out))?;
                writeln!(out, "</div>")?;
            }
            if section == Section::Secondary {
                self.write_delta_button(out)?;
            }
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")
    }

    fn write_delta_button<W: Write>(&self, out: &mut W) -> fmt::Result {
        let active = if self.delta_enabled() { " active" } else { "" };
        writeln!(out, r#"<div class="comp-delta-wrapper">"#)?;
        writeln!(
            out,
            r#"  <div class="comp-delta-btn{active}" data-host="sphere://comp/delta">"#
        )?;
        out.write_str(
            r#"    <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5"><path d="M3 18v-6a9 9 0 0 1 18 0v6"></path><path d="M21 19a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3zM3 19a2 2 0 0 0 2 2h1a2 2 0 0 0 2-2v-3a2 2 0 0 0-2-2H3z"></path></svg>
"#,
        )?;
        writeln!(out, "  </div>")?;
        writeln!(out, r#"  <div class="knob-label">DELTA</div>"#)?;
        writeln!(out, "</div>")
    }

    /// Render the panel markup to a new string.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.mount(Some(&mut out));
        out
    }
}

impl fmt::Debug for CompressorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressorPanel")
            .field("knobs", &self.knobs)
            .field("settings", &self.shared.settings.borrow())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
