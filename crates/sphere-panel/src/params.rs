//! Compressor parameter table.
//!
//! | Key         | Label     | Range       | Step | Units | Size | Section   |
//! |-------------|-----------|-------------|------|-------|------|-----------|
//! | `threshold` | Threshold | -60 – 0     | 0.1  | dB    | 90   | Threshold |
//! | `ratio`     | Ratio     | 1 – 20      | 0.1  | :1    | 65   | Main      |
//! | `attack`    | Attack    | 0.1 – 500   | 0.1  | ms    | 65   | Main      |
//! | `release`   | Release   | 10 – 3000   | 1    | ms    | 65   | Main      |
//! | `knee`      | Knee      | 0 – 24      | 0.1  | dB    | 50   | Secondary |
//! | `makeup`    | Gain      | -12 – 24    | 0.1  | dB    | 50   | Secondary |

use core::fmt;
use core::str::FromStr;
use sphere_knob::{Color, KnobConfig};

use crate::PanelError;

/// Accent for the threshold knob.
pub const THRESHOLD_COLOR: Color = Color::TEAL;

/// Accent for ratio and timing knobs.
pub const TIMING_COLOR: Color = Color::rgb(0xff, 0xb7, 0x4d);

/// Accent for utility knobs.
pub const UTILITY_COLOR: Color = Color::rgb(0xaa, 0xaa, 0xaa);

/// Layout group a knob is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Large threshold knob on the left.
    Threshold,
    /// Ratio and timing.
    Main,
    /// Knee, makeup gain, and the delta toggle.
    Secondary,
}

impl Section {
    /// All sections in layout order.
    pub const ALL: [Section; 3] = [Section::Threshold, Section::Main, Section::Secondary];

    /// CSS class suffix.
    pub fn css(self) -> &'static str {
        match self {
            Section::Threshold => "thresh",
            Section::Main => "main",
            Section::Secondary => "sec",
        }
    }
}

/// A knob-controlled compressor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompParam {
    /// Threshold in dB.
    Threshold,
    /// Compression ratio (n:1).
    Ratio,
    /// Attack time in ms.
    Attack,
    /// Release time in ms.
    Release,
    /// Knee width in dB.
    Knee,
    /// Makeup gain in dB.
    Makeup,
}

impl CompParam {
    /// All parameters in layout order.
    pub const ALL: [CompParam; 6] = [
        CompParam::Threshold,
        CompParam::Ratio,
        CompParam::Attack,
        CompParam::Release,
        CompParam::Knee,
        CompParam::Makeup,
    ];

    /// Key used in host URLs and container ids.
    pub fn key(self) -> &'static str {
        match self {
            CompParam::Threshold => "threshold",
            CompParam::Ratio => "ratio",
            CompParam::Attack => "attack",
            CompParam::Release => "release",
            CompParam::Knee => "knee",
            CompParam::Makeup => "makeup",
        }
    }

    /// Caption under the knob.
    pub fn label(self) -> &'static str {
        match self {
            CompParam::Threshold => "Threshold",
            CompParam::Ratio => "Ratio",
            CompParam::Attack => "Attack",
            CompParam::Release => "Release",
            CompParam::Knee => "Knee",
            CompParam::Makeup => "Gain",
        }
    }

    /// Layout group.
    pub fn section(self) -> Section {
        match self {
            CompParam::Threshold => Section::Threshold,
            CompParam::Ratio | CompParam::Attack | CompParam::Release => Section::Main,
            CompParam::Knee | CompParam::Makeup => Section::Secondary,
        }
    }

    /// `(min, max)` bounds.
    pub fn range(self) -> (f32, f32) {
        match self {
            CompParam::Threshold => (-60.0, 0.0),
            CompParam::Ratio => (1.0, 20.0),
            CompParam::Attack => (0.1, 500.0),
            CompParam::Release => (10.0, 3000.0),
            CompParam::Knee => (0.0, 24.0),
            CompParam::Makeup => (-12.0, 24.0),
        }
    }

    /// Whether changing this parameter reshapes the static transfer curve.
    pub fn affects_curve(self) -> bool {
        matches!(
            self,
            CompParam::Threshold | CompParam::Ratio | CompParam::Knee
        )
    }

    /// Knob configuration starting at `value`.
    pub fn knob_config(self, value: f32) -> KnobConfig {
        let (min, max) = self.range();
        let (step, units, size, color) = match self {
            CompParam::Threshold => (0.1, "dB", 90.0, THRESHOLD_COLOR),
            CompParam::Ratio => (0.1, ":1", 65.0, TIMING_COLOR),
            CompParam::Attack => (0.1, "ms", 65.0, TIMING_COLOR),
            CompParam::Release => (1.0, "ms", 65.0, TIMING_COLOR),
            CompParam::Knee => (0.1, "dB", 50.0, UTILITY_COLOR),
            CompParam::Makeup => (0.1, "dB", 50.0, UTILITY_COLOR),
        };
        KnobConfig::default()
            .with_range(min, max)
            .with_value(value)
            .with_step(step)
            .with_units(units)
            .with_size(size)
            .with_color(color)
    }
}

impl fmt::Display for CompParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CompParam {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompParam::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| PanelError::UnknownParam(s.to_string()))
    }
}
