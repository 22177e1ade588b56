//! Drag state machine inputs and the delta-to-value mapping.
//!
//! ```text
//!                 Down
//!   Idle ─────────────────────────────► Dragging { anchor_y }
//!    ▲                                     │  Move: anchor_y ← y
//!    └──────────── Up / Cancel ────────────┘
//! ```
//!
//! Only vertical motion matters. Moving the pointer up (decreasing `y`)
//! increases the value; [`SENSITIVITY_PX`] pixels of travel cover the whole
//! range.

use crate::geometry::SENSITIVITY_PX;

/// Pointer input delivered to a knob.
///
/// Coordinates are window pixels; only differences in `y` matter. Hit
/// testing happens before delivery (see [`Knob::hit_test`](crate::Knob::hit_test)),
/// so every `Down` a knob receives starts a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed.
    Down {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Pointer moved (window-scoped while dragging).
    Move {
        /// Horizontal position, ignored by the mapping.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Button released anywhere.
    Up,
    /// Drag aborted by the environment (pointer left the viewport, focus lost).
    Cancel,
}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging; `anchor_y` is the last recorded pointer y.
    Dragging {
        /// Anchor for the next incremental delta.
        anchor_y: f32,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Current anchor, if dragging.
    pub fn anchor_y(&self) -> Option<f32> {
        match *self {
            DragState::Dragging { anchor_y } => Some(anchor_y),
            DragState::Idle => None,
        }
    }
}

/// Value change produced by moving from `anchor_y` to `pointer_y` over a
/// range of width `span`.
pub fn delta_value(anchor_y: f32, pointer_y: f32, span: f32) -> f32 {
    let delta_y = anchor_y - pointer_y;
    (delta_y / SENSITIVITY_PX) * span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_motion_is_positive() {
        assert_eq!(delta_value(100.0, 50.0, 60.0), 15.0);
        assert_eq!(delta_value(50.0, 100.0, 60.0), -15.0);
    }

    #[test]
    fn full_sensitivity_travel_covers_span() {
        assert_eq!(delta_value(200.0, 0.0, 2990.0), 2990.0);
    }

    #[test]
    fn idle_has_no_anchor() {
        assert_eq!(DragState::Idle.anchor_y(), None);
        assert!(!DragState::Idle.is_dragging());
        let d = DragState::Dragging { anchor_y: 12.5 };
        assert_eq!(d.anchor_y(), Some(12.5));
        assert!(d.is_dragging());
    }
}
