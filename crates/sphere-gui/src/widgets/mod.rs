//! Custom widgets for the compressor panel.

mod curve;
mod knob;
pub use curve::{TransferCurve, sample_curve};
pub use knob::KnobWidget;
