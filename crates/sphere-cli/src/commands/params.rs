//! Compressor parameter listing.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use serde::Serialize;
use sphere_knob::{Color, format_value};
use sphere_panel::{CompParam, CompressorSettings};

#[derive(Args)]
pub struct ParamsArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// One row of `sphere params --json`.
#[derive(Debug, Serialize)]
struct ParamRow {
    key: &'static str,
    label: &'static str,
    min: f32,
    max: f32,
    step: f32,
    units: String,
    size: f32,
    color: Color,
    default: f32,
    affects_curve: bool,
}

impl ParamRow {
    fn new(param: CompParam, default: f32) -> Self {
        let config = param.knob_config(default);
        Self {
            key: param.key(),
            label: param.label(),
            min: config.min,
            max: config.max,
            step: config.step,
            units: config.units,
            size: config.size,
            color: config.color,
            default,
            affects_curve: param.affects_curve(),
        }
    }
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let defaults = CompressorSettings::default();

    if args.json {
        let rows: Vec<ParamRow> = CompParam::ALL
            .into_iter()
            .map(|p| ParamRow::new(p, defaults.get(p)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Compressor Parameters");
    println!("=====================");
    println!();
    println!(
        "  {:10}  {:10}  {:14}  {:5}  {:5}  {:8}  {}",
        "Key", "Label", "Range", "Step", "Units", "Default", "Section"
    );
    println!(
        "  {:10}  {:10}  {:14}  {:5}  {:5}  {:8}  {}",
        "---", "-----", "-----", "----", "-----", "-------", "-------"
    );

    for p in CompParam::ALL {
        let default = defaults.get(p);
        let config = p.knob_config(default);
        let range = format!("{} to {}", config.min, config.max);
        println!(
            "  {:10}  {:10}  {:14}  {:5}  {:5}  {:8}  {}",
            p.key(),
            p.label(),
            range,
            config.step,
            config.units,
            format_value(default, config.step),
            p.section().css()
        );
    }

    println!();
    println!("Use 'sphere drag <key> <y>...' to replay a drag on a parameter.");
    Ok(())
}
