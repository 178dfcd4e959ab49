//! Error types for the boot sequencer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong outside the animation logic itself.
///
/// Phases never fail on their own; errors come from drawing to the terminal
/// or from loading a user-supplied config file.
#[derive(Debug, Error)]
pub enum BootError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BootError>;
