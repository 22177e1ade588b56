//! Sphere GUI - native front end for the compressor panel.
//!
//! Paints the panel's knobs with egui, feeds egui drag input back into the
//! panel as pointer events, and draws the static transfer curve beside it.
//! Host notifications go to the log.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::SphereApp;
pub use theme::Theme;
