//! Error taxonomy for timeplot.
//!
//! Every failure is fatal to the running session: configuration problems are
//! reported before the window opens, tick-source failures stop the loop.

use thiserror::Error;

use crate::tick::SourceError;

/// Errors produced while configuring or running a time plot.
#[derive(Error, Debug)]
pub enum TimePlotError {
    /// An option was rejected during setup (unknown update style, zero interval, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A tick carried a different number of values than the series count fixed at setup.
    #[error("tick has {found} values, expected {expected}")]
    ArityMismatch { expected: usize, found: usize },

    /// The tick source returned an error; the session stops.
    #[error("tick source failed: {0}")]
    Source(#[source] SourceError),

    /// `advance` was called on a session that already failed.
    #[error("session halted after a previous failure")]
    Halted,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The native window could not be created or the event loop failed.
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}

impl TimePlotError {
    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        TimePlotError::InvalidConfiguration(msg.into())
    }
}
