//! Sphere Panel - the compressor control surface.
//!
//! Builds six [`sphere_knob::Knob`]s from the parameter table in [`params`],
//! keeps a shared [`CompressorSettings`] in sync with them, and tells the
//! host about every user-driven change through a [`HostLink`].
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use sphere_knob::{PointerEvent, WindowTracker};
//! use sphere_panel::{CompParam, CompressorPanel, CompressorSettings, RecordingHost};
//!
//! let host = Rc::new(RecordingHost::new());
//! let mut panel = CompressorPanel::new(
//!     CompressorSettings::default(),
//!     host.clone(),
//!     WindowTracker::shared(),
//! )
//! .unwrap();
//!
//! panel.dispatch(Some(CompParam::Threshold), PointerEvent::Down { x: 45.0, y: 80.0 });
//! panel.dispatch(None, PointerEvent::Move { x: 45.0, y: 30.0 });
//! panel.dispatch(None, PointerEvent::Up);
//!
//! assert_eq!(host.url_strings(), vec!["sphere://comp/threshold/-5"]);
//! ```

mod error;
mod panel;
mod settings;

/// Host URL scheme and link implementations.
pub mod host;

/// Parameter table.
pub mod params;

/// Static transfer curve.
pub mod transfer;

pub use error::PanelError;
pub use host::{HostLink, HostUrl, LoggingHost, RecordingHost};
pub use panel::{CompressorPanel, CurveObserver};
pub use params::{CompParam, Section};
pub use settings::CompressorSettings;
pub use transfer::{curve_svg, gain_reduction_db, output_db, write_curve_svg};
