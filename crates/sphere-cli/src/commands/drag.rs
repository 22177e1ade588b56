//! Drag replay command.
//!
//! Presses the knob at the first `y`, moves through the remaining `y`
//! values, then releases. Every host URL the panel emits
//! is printed in order.

use clap::Args;
use serde::Serialize;
use sphere_knob::PointerEvent;
use sphere_panel::{CompParam, RecordingHost};
use std::path::PathBuf;
use std::rc::Rc;

use super::common::{build_panel, parse_key_val};

#[derive(Args)]
pub struct DragArgs {
    /// Parameter key (see `sphere params`)
    param: String,

    /// Pointer y positions in window pixels; the first is the press
    #[arg(required = true, allow_negative_numbers = true)]
    ys: Vec<f32>,

    /// Settings file (TOML)
    #[arg(long, short)]
    settings: Option<PathBuf>,

    /// Override a starting parameter (key=value); may repeat
    #[arg(long = "set", value_parser = parse_key_val, allow_hyphen_values = true)]
    overrides: Vec<(String, f32)>,

    /// End the drag with a cancel instead of a release
    #[arg(long)]
    cancel: bool,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// JSON form of a finished drag.
#[derive(Debug, Serialize)]
struct DragReport {
    param: &'static str,
    urls: Vec<String>,
    value: f32,
    readout: String,
}

pub fn run(args: DragArgs) -> anyhow::Result<()> {
    let param: CompParam = args.param.parse()?;
    let host = Rc::new(RecordingHost::new());
    let (mut panel, _window) = build_panel(args.settings.as_ref(), &args.overrides, host.clone())?;

    let Some((&press, moves)) = args.ys.split_first() else {
        anyhow::bail!("at least one y position is required");
    };
    let x = panel.knob(param).map_or(0.0, |k| k.frame().center.x);

    panel.dispatch(Some(param), PointerEvent::Down { x, y: press });
    tracing::debug!(param = param.key(), y = press, "drag replay started");
    for &y in moves {
        panel.dispatch(None, PointerEvent::Move { x, y });
    }
    let end = if args.cancel {
        PointerEvent::Cancel
    } else {
        PointerEvent::Up
    };
    panel.dispatch(None, end);

    let (value, readout) = panel
        .knob(param)
        .map(|k| (k.value(), k.readout().to_string()))
        .unwrap_or_default();
    let urls = host.url_strings();

    if args.json {
        let report = DragReport {
            param: param.key(),
            urls,
            value,
            readout,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for url in &urls {
            println!("{url}");
        }
        println!("{}: {readout}", param.key());
    }
    Ok(())
}
