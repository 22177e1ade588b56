//! Compressor panel render command.

use clap::Args;
use sphere_panel::{LoggingHost, transfer};
use std::path::PathBuf;
use std::rc::Rc;

use super::common::{build_panel, emit, parse_key_val};

#[derive(Args)]
pub struct PanelArgs {
    /// Settings file (TOML)
    #[arg(long, short)]
    settings: Option<PathBuf>,

    /// Override a parameter (key=value); may repeat
    #[arg(long = "set", value_parser = parse_key_val, allow_hyphen_values = true)]
    overrides: Vec<(String, f32)>,

    /// Append the transfer curve plot
    #[arg(long)]
    curve: bool,

    /// Start with delta monitoring on
    #[arg(long)]
    delta: bool,

    /// Print the resulting settings as TOML instead of markup
    #[arg(long)]
    dump_settings: bool,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn run(args: PanelArgs) -> anyhow::Result<()> {
    let (mut panel, _window) =
        build_panel(args.settings.as_ref(), &args.overrides, Rc::new(LoggingHost))?;
    if args.delta && !panel.delta_enabled() {
        panel.toggle_delta();
    }

    let settings = panel.settings();
    if args.dump_settings {
        return match &args.output {
            Some(path) => Ok(settings.save(path)?),
            None => emit(&settings.to_toml()?, None),
        };
    }

    let mut text = String::new();
    panel.mount(Some(&mut text))?;
    if args.curve {
        let color = sphere_panel::params::THRESHOLD_COLOR;
        transfer::write_curve_svg(&mut text, &settings, 180.0, color)?;
    }
    panel.dispose();
    emit(&text, args.output.as_deref())
}
