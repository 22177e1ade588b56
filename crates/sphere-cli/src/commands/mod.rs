//! CLI command implementations.

pub mod common;
pub mod drag;
pub mod format;
pub mod knob;
pub mod panel;
pub mod params;
