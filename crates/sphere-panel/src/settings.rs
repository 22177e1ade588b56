//! Compressor parameter values shared by the panel's knobs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{CompParam, PanelError};

/// Current compressor settings.
///
/// Used as the panel's initial state and updated on every knob change.
/// Missing TOML fields take the defaults.
///
/// ```toml
/// threshold = -20.0
/// ratio = 4.0
/// attack = 10.0
/// release = 100.0
/// knee = 6.0
/// makeup = 0.0
/// delta = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressorSettings {
    /// Threshold in dB.
    pub threshold: f32,
    /// Compression ratio (n:1).
    pub ratio: f32,
    /// Attack in ms.
    pub attack: f32,
    /// Release in ms.
    pub release: f32,
    /// Knee width in dB.
    pub knee: f32,
    /// Makeup gain in dB.
    pub makeup: f32,
    /// Delta monitoring (listen to what the compressor removes).
    pub delta: bool,
}

impl Default for CompressorSettings {
    fn default() -> Self {
        Self {
            threshold: -20.0,
            ratio: 4.0,
            attack: 10.0,
            release: 100.0,
            knee: 6.0,
            makeup: 0.0,
            delta: false,
        }
    }
}

impl CompressorSettings {
    /// Value of one parameter.
    pub fn get(&self, param: CompParam) -> f32 {
        match param {
            CompParam::Threshold => self.threshold,
            CompParam::Ratio => self.ratio,
            CompParam::Attack => self.attack,
            CompParam::Release => self.release,
            CompParam::Knee => self.knee,
            CompParam::Makeup => self.makeup,
        }
    }

    /// Store one parameter. No range check; the knobs own the bounds.
    pub fn set(&mut self, param: CompParam, value: f32) {
        let slot = match param {
            CompParam::Threshold => &mut self.threshold,
            CompParam::Ratio => &mut self.ratio,
            CompParam::Attack => &mut self.attack,
            CompParam::Release => &mut self.release,
            CompParam::Knee => &mut self.knee,
            CompParam::Makeup => &mut self.makeup,
        };
        *slot = value;
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PanelError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PanelError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Save settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PanelError> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| PanelError::write_file(path, e))
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PanelError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, PanelError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
