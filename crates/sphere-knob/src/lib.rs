//! Sphere Knob - rotary control for the Sphere effect panels.
//!
//! A knob maps a bounded value onto a fixed 270° arc and turns vertical
//! pointer drags into value changes. This crate holds the whole control,
//! independent of any GUI toolkit: front ends feed it [`PointerEvent`]s and
//! draw the [`KnobScene`] it produces (as SVG markup via [`svg`], or with
//! their own painter).
//!
//! # Modules
//!
//! - [`geometry`]: sweep constants, value→angle mapping, arc paths
//! - [`format`]: readout formatting rules
//! - [`config`]: construction options, defaults, and validation
//! - [`scene`]: static frame and value-dependent dynamics
//! - [`svg`]: HTML/SVG markup for a scene
//! - [`drag`]: pointer events, drag state, delta mapping
//! - [`capture`]: scoped window-level pointer tracking
//!
//! # Invariants
//!
//! - `min < max`, checked at construction.
//! - `min <= value <= max` on every path that changes the value.
//! - Window-level tracking is held only while dragging and is released on
//!   pointer-up, cancel, [`Knob::dispose`], or drop.

pub mod capture;
mod color;
pub mod config;
pub mod drag;
mod error;
pub mod format;
pub mod geometry;
mod knob;
pub mod scene;
pub mod svg;

pub use capture::{CaptureId, CursorHint, PointerCapture, PointerTracker, WindowTracker};
pub use color::Color;
pub use config::{KnobConfig, KnobRange, ValidatedConfig};
pub use drag::{DragState, PointerEvent};
pub use error::KnobError;
pub use format::{format_readout, format_value};
pub use geometry::{ArcPath, Point};
pub use knob::{ChangeCallback, Knob};
pub use scene::{HitRegion, KnobDynamics, KnobFrame, KnobScene};
