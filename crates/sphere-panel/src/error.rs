//! Error types for panel operations.

use sphere_knob::KnobError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or configuring a panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A parameter's knob could not be built
    #[error("knob '{param}' rejected its configuration: {source}")]
    Knob {
        /// Key of the parameter whose knob failed.
        param: &'static str,
        /// Underlying validation error.
        #[source]
        source: KnobError,
    },

    /// Parameter key not known to the panel
    #[error("unknown parameter: {0}")]
    UnknownParam(String),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Host URL is not a `sphere://comp/<param>/<value>` URL
    #[error("invalid host URL '{0}'")]
    InvalidHostUrl(String),
}

impl PanelError {
    /// Create a knob construction error.
    pub fn knob(param: &'static str, source: KnobError) -> Self {
        PanelError::Knob { param, source }
    }

    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PanelError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PanelError::WriteFile {
            path: path.into(),
            source,
        }
    }
}
