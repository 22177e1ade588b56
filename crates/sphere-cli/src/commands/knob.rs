//! Single-knob render command.

use clap::Args;
use sphere_knob::{Color, Knob, KnobConfig, WindowTracker, svg};
use std::path::PathBuf;

use super::common::emit;

#[derive(Args)]
pub struct KnobArgs {
    /// Caption under the knob
    #[arg(long, default_value = "Knob")]
    label: String,

    /// Knob configuration file (TOML); flags override its fields
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Lower bound
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f32>,

    /// Upper bound
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f32>,

    /// Starting value (defaults to min)
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f32>,

    /// Readout granularity
    #[arg(long)]
    step: Option<f32>,

    /// Readout suffix
    #[arg(long)]
    units: Option<String>,

    /// Pixel size
    #[arg(long)]
    size: Option<f32>,

    /// Accent colour (#rgb or #rrggbb)
    #[arg(long)]
    color: Option<Color>,

    /// Emit only the SVG element instead of the full knob markup
    #[arg(long)]
    svg_only: bool,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl KnobArgs {
    fn config(&self) -> anyhow::Result<KnobConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
                toml::from_str::<KnobConfig>(&text)?
            }
            None => KnobConfig::default(),
        };

        if let Some(min) = self.min {
            config.min = min;
        }
        if let Some(max) = self.max {
            config.max = max;
        }
        if let Some(value) = self.value {
            config.value = Some(value);
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(units) = &self.units {
            config.units.clone_from(units);
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        Ok(config)
    }
}

pub fn run(args: KnobArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    let knob = Knob::new(&args.label, &config, WindowTracker::shared())?;
    tracing::debug!(?knob, "knob built");

    let text = if args.svg_only {
        svg::knob_svg(&knob.render())
    } else {
        let mut out = String::new();
        knob.mount(Some(&mut out))?;
        out
    };
    emit(&text, args.output.as_deref())
}
