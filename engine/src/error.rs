//! Error types
//!
//! The per-tick simulation never fails; errors only arise while loading
//! configuration or assembling a controller.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with a tunables file or value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid JSON for the tunables schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A distance, speed or duration is negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// A value is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// Camera pitch limits are inverted.
    #[error("camera bottom clamp {bottom} exceeds top clamp {top}")]
    InvertedPitchClamp { bottom: f32, top: f32 },
}

/// Problems assembling a character controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A required collaborator was never supplied.
    #[error("character controller requires a {0}")]
    MissingCollaborator(&'static str),

    /// The supplied tunables are out of range.
    #[error("invalid tunables: {0}")]
    InvalidConfig(#[from] ConfigError),
}
