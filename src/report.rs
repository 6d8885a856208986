//! Post-encode summary

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::loader::LoadedFrame;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Facts about a finished animation
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub output: PathBuf,
    pub frame_count: usize,
    /// Dimensions of the first frame
    pub dimensions: (u32, u32),
    pub size_bytes: u64,
}

impl Summary {
    /// Gather the summary for a GIF just written to `output`.
    pub fn collect(output: &Path, frames: &[LoadedFrame]) -> Result<Self> {
        let first = frames.first().ok_or(Error::NoFrames)?;
        let size_bytes = fs::metadata(output)
            .map_err(|source| Error::Read { path: output.to_path_buf(), source })?
            .len();
        Ok(Self {
            output: output.to_path_buf(),
            frame_count: frames.len(),
            dimensions: first.dimensions(),
            size_bytes,
        })
    }

    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MIB
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[OK] GIF created: {}", self.output.display())?;
        writeln!(f, "  Frames: {}", self.frame_count)?;
        writeln!(f, "  Dimensions: {}x{}", self.dimensions.0, self.dimensions.1)?;
        write!(f, "  Size: {:.2} MB", self.size_mib())
    }
}
