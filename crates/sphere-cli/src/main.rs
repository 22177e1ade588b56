//! Sphere CLI - render and exercise the Sphere controls from a terminal.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sphere")]
#[command(author, version, about = "Sphere knob and compressor panel CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single knob as HTML or SVG
    Knob(commands::knob::KnobArgs),

    /// Render the compressor panel markup
    Panel(commands::panel::PanelArgs),

    /// Replay a vertical drag on a compressor knob and print host URLs
    Drag(commands::drag::DragArgs),

    /// Format a value the way a knob readout shows it
    Format(commands::format::FormatArgs),

    /// List compressor parameters
    Params(commands::params::ParamsArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Diagnostics go to stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Knob(args) => commands::knob::run(args),
        Commands::Panel(args) => commands::panel::run(args),
        Commands::Drag(args) => commands::drag::run(args),
        Commands::Format(args) => commands::format::run(args),
        Commands::Params(args) => commands::params::run(args),
    }
}
