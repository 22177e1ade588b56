//! Shared CLI helpers used across multiple commands.

use sphere_knob::WindowTracker;
use sphere_panel::{CompressorPanel, CompressorSettings, HostLink};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, f32), String> {
    let Some((key, raw)) = s.split_once('=') else {
        return Err(format!("Invalid parameter format: '{s}' (expected key=value)"));
    };
    let value = raw
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid value for '{key}': '{raw}'"))?;
    Ok((key.trim().to_string(), value))
}

/// Load settings from `path`, or defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<CompressorSettings> {
    match path {
        Some(path) => Ok(CompressorSettings::load(path)?),
        None => Ok(CompressorSettings::default()),
    }
}

/// Build a panel wired to `host`, with `overrides` applied silently.
pub fn build_panel(
    settings: Option<&PathBuf>,
    overrides: &[(String, f32)],
    host: Rc<dyn HostLink>,
) -> anyhow::Result<(CompressorPanel, Rc<WindowTracker>)> {
    let settings = load_settings(settings.map(PathBuf::as_path))?;
    let window = WindowTracker::shared();
    let mut panel = CompressorPanel::new(settings, host, window.clone())?;
    for (key, value) in overrides {
        if !panel.update_knob(key, *value) {
            anyhow::bail!("Unknown parameter '{key}'. Use 'sphere params' to list them.");
        }
    }
    Ok((panel, window))
}

/// Write `text` to `output`, or stdout when no path is given.
pub fn emit(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_parses_negative_values() {
        assert_eq!(
            parse_key_val("threshold=-12.5").unwrap(),
            ("threshold".to_string(), -12.5)
        );
    }

    #[test]
    fn key_val_rejects_missing_equals() {
        assert!(parse_key_val("threshold").is_err());
        assert!(parse_key_val("ratio=fast").is_err());
    }
}
