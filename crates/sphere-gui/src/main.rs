//! Sphere GUI - compressor panel in a native window.

use clap::Parser;
use eframe::egui;
use sphere_gui::SphereApp;
use sphere_panel::CompressorSettings;
use std::path::PathBuf;

/// Sphere compressor panel.
#[derive(Parser, Debug)]
#[command(name = "sphere-gui")]
#[command(about = "Compressor control panel with rotary knobs")]
#[command(version)]
struct Args {
    /// Settings file (TOML) with the initial parameter values
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting Sphere GUI");

    let settings = match args.settings.as_deref() {
        Some(path) => match CompressorSettings::load(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "settings loaded");
                settings
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default settings");
                CompressorSettings::default()
            }
        },
        _ => CompressorSettings::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 300.0])
            .with_min_inner_size([640.0, 260.0])
            .with_title("Sphere Comp"),
        ..Default::default()
    };

    eframe::run_native(
        "Sphere Comp",
        options,
        Box::new(move |cc| Ok(Box::new(SphereApp::new(cc, settings)?))),
    )
}
