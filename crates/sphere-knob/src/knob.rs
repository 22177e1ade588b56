//! The rotary knob component.

use crate::capture::{PointerCapture, PointerTracker};
use crate::config::{KnobConfig, KnobRange};
use crate::drag::{DragState, PointerEvent, delta_value};
use crate::scene::{KnobDynamics, KnobFrame, KnobScene};
use crate::{Color, KnobError, svg};
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the new value after a user-driven change.
pub type ChangeCallback = Box<dyn FnMut(f32)>;

/// A draggable radial slider over a bounded value.
///
/// The value always lies in `[min, max]`: construction clamps the starting
/// value, [`set_value`](Self::set_value) clamps programmatic updates, and
/// drag deltas are clamped before they are applied.
///
/// Static structure is computed once; each value change only recomputes the
/// value-dependent [`KnobDynamics`] in place, so the hit region and the
/// pointer wiring never need to be re-established.
///
/// # Example
///
/// ```rust
/// use sphere_knob::{Knob, KnobConfig, PointerEvent, PointerTracker, WindowTracker};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let tracker: Rc<dyn PointerTracker> = WindowTracker::shared();
/// let last = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&last);
///
/// let config = KnobConfig::default().with_range(-60.0, 0.0).with_value(-20.0);
/// let mut knob = Knob::new("Threshold", &config, tracker)
///     .unwrap()
///     .on_change(move |v| sink.set(Some(v)));
///
/// knob.handle_pointer(PointerEvent::Down { x: 30.0, y: 100.0 });
/// knob.handle_pointer(PointerEvent::Move { x: 30.0, y: 50.0 });
/// knob.handle_pointer(PointerEvent::Up);
///
/// assert_eq!(knob.value(), -5.0);
/// assert_eq!(last.get(), Some(-5.0));
/// ```
pub struct Knob {
    range: KnobRange,
    value: f32,
    step: f32,
    units: String,
    frame: KnobFrame,
    dynamics: KnobDynamics,
    on_change: ChangeCallback,
    tracker: Rc<dyn PointerTracker>,
    drag: DragState,
    capture: Option<PointerCapture>,
    disposed: bool,
}

impl Knob {
    /// Build a knob from `config`, drawing window-level tracking from `tracker`.
    ///
    /// Fails if the configuration violates a precondition (see
    /// [`KnobConfig::validate`]).
    pub fn new(
        label: &str,
        config: &KnobConfig,
        tracker: Rc<dyn PointerTracker>,
    ) -> Result<Self, KnobError> {
        let validated = config.validate()?;
        let frame = KnobFrame::new(label, &validated);
        let dynamics = KnobDynamics::compute(
            &frame,
            validated.range,
            validated.value,
            validated.step,
            &validated.units,
        );

        Ok(Self {
            range: validated.range,
            value: validated.value,
            step: validated.step,
            units: validated.units,
            frame,
            dynamics,
            on_change: Box::new(|_| {}),
            tracker,
            drag: DragState::Idle,
            capture: None,
            disposed: false,
        })
    }

    /// Set the change callback (builder form).
    pub fn on_change(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Box::new(callback);
        self
    }

    /// Replace the change callback.
    pub fn set_on_change(&mut self, callback: impl FnMut(f32) + 'static) {
        self.on_change = Box::new(callback);
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Validated bounds.
    pub fn range(&self) -> KnobRange {
        self.range
    }

    /// Readout step.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Readout suffix.
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Caption.
    pub fn label(&self) -> &str {
        &self.frame.label
    }

    /// Pixel footprint.
    pub fn size(&self) -> f32 {
        self.frame.size
    }

    /// Accent colour.
    pub fn color(&self) -> Color {
        self.frame.color
    }

    /// Fraction of the sweep covered by the current value.
    pub fn percentage(&self) -> f32 {
        self.dynamics.percentage
    }

    /// Indicator angle in radians.
    pub fn angle(&self) -> f32 {
        self.dynamics.angle
    }

    /// Formatted value with units.
    pub fn readout(&self) -> &str {
        &self.dynamics.readout
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether window-level tracking is currently held.
    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Static structure.
    pub fn frame(&self) -> &KnobFrame {
        &self.frame
    }

    /// Value-dependent parts.
    pub fn dynamics(&self) -> &KnobDynamics {
        &self.dynamics
    }

    /// Visual description of the current state. Pure.
    pub fn render(&self) -> KnobScene {
        KnobScene {
            frame: self.frame.clone(),
            dynamics: self.dynamics.clone(),
        }
    }

    /// Write the knob markup into `target`. An absent target is a no-op.
    pub fn mount<W: fmt::Write>(&self, target: Option<&mut W>) -> fmt::Result {
        match target {
            Some(out) => svg::write_knob(out, &self.render()),
            None => Ok(()),
        }
    }

    /// Programmatic update: clamps into range and refreshes the readout,
    /// but never invokes the change callback.
    ///
    /// Non-finite input is ignored. Returns whether the value changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        if !value.is_finite() {
            tracing::warn!(value, label = %self.frame.label, "ignoring non-finite knob value");
            return false;
        }
        self.apply(value)
    }

    /// Whether a knob-local point lies on the knob circle.
    ///
    /// Front ends use this to decide which knob a press belongs to before
    /// delivering [`PointerEvent::Down`].
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.frame.hit_region.contains(x, y)
    }

    /// Feed one pointer event through the drag state machine.
    ///
    /// A `Down` always starts a drag: it is only delivered for presses the
    /// caller already routed to this knob, and its `y` becomes the anchor.
    /// Returns whether the value changed. The change callback fires exactly
    /// once for every move that changes the value.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if self.disposed {
            return false;
        }

        match event {
            PointerEvent::Down { y, .. } => {
                if self.capture.is_none() {
                    self.capture = Some(PointerCapture::acquire(&self.tracker));
                }
                self.drag = DragState::Dragging { anchor_y: y };
                tracing::debug!(label = %self.frame.label, y, "drag started");
                false
            }
            PointerEvent::Move { y, .. } => {
                let DragState::Dragging { anchor_y } = self.drag else {
                    return false;
                };
                self.drag = DragState::Dragging { anchor_y: y };

                let proposed = self.value + delta_value(anchor_y, y, self.range.span());
                if !self.apply(proposed) {
                    return false;
                }
                (self.on_change)(self.value);
                true
            }
            PointerEvent::Up | PointerEvent::Cancel => {
                if self.drag.is_dragging() {
                    tracing::debug!(label = %self.frame.label, value = self.value, "drag ended");
                }
                self.end_drag();
                false
            }
        }
    }

    /// Release any live drag tracking and stop reacting to pointer input.
    ///
    /// Idempotent. The value can still be set programmatically afterwards.
    pub fn dispose(&mut self) {
        self.end_drag();
        self.disposed = true;
    }

    fn end_drag(&mut self) {
        self.drag = DragState::Idle;
        // Dropping the guard releases window tracking and the cursor hint.
        self.capture = None;
    }

    /// Clamp, store, and refresh dynamics. Returns whether the value changed.
    fn apply(&mut self, value: f32) -> bool {
        let clamped = self.range.clamp(value);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        self.dynamics =
            KnobDynamics::compute(&self.frame, self.range, clamped, self.step, &self.units);
        true
    }
}

impl fmt::Debug for Knob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Knob")
            .field("label", &self.frame.label)
            .field("value", &self.value)
            .field("range", &self.range)
            .field("drag", &self.drag)
            .field("capture", &self.capture)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
