//! Readout formatting command.

use clap::Args;
use sphere_knob::format_readout;

#[derive(Args)]
pub struct FormatArgs {
    /// Value to format
    #[arg(allow_negative_numbers = true)]
    value: f32,

    /// Knob step
    #[arg(long, default_value = "1")]
    step: f32,

    /// Units suffix
    #[arg(long, default_value = "")]
    units: String,
}

pub fn run(args: FormatArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("step must be positive, got {}", args.step);
    }
    println!("{}", format_readout(args.value, args.step, &args.units));
    Ok(())
}
