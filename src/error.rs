//! Error types for loading, encoding and reporting

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file is missing or unreadable
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Input file is not a decodable raster image
    #[error("Cannot decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Nothing to encode
    #[error("No frames to encode")]
    NoFrames,
    /// Per-frame durations don't line up with the frames
    #[error("Got {durations} durations for {frames} frames")]
    DurationMismatch { frames: usize, durations: usize },
    /// A frame duration is zero or too long for a GIF delay
    #[error("Duration for frame {} must be between 1 and {} milliseconds", index + 1, crate::durations::MAX_DURATION_MS)]
    InvalidDuration { index: usize },
    /// The GIF encoder rejected a frame or failed to write
    #[error("Failed to encode '{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The output file or its directory could not be written
    #[error("Cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Job definition could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
