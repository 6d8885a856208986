//! Job definition types
//!
//! A job names the input frames, their durations and the output file.
//! Jobs are read from TOML files; without one the built-in job is used.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::durations::{is_valid_duration, Durations, MAX_DURATION_MS};

/// Frames of the built-in job, in playback order
pub const DEFAULT_FRAMES: [&str; 5] = [
    "docs/images/GIF/Frame 1.png",
    "docs/images/GIF/Frame 2.png",
    "docs/images/GIF/Frame 3.png",
    "docs/images/GIF/Frame 4.png",
    "docs/images/GIF/Frame 5.png",
];

/// Per-frame durations of the built-in job (ms)
pub const DEFAULT_DURATIONS: [u32; 5] = [800, 1200, 1200, 1200, 800];

/// Output path of the built-in job
pub const DEFAULT_OUTPUT: &str = "docs/images/conda-commands.gif";

/// One animation to assemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Input images, in playback order
    pub frames: Vec<PathBuf>,
    /// Uniform or per-frame durations in milliseconds
    pub durations: Durations,
    /// Animated GIF to write
    pub output: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES.iter().map(PathBuf::from).collect(),
            durations: Durations::PerFrame(DEFAULT_DURATIONS.to_vec()),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Job validation error
#[derive(Debug, Clone)]
pub struct JobValidationError {
    /// Offending field (e.g., "durations[2]")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for JobValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl JobConfig {
    /// Validate the job and return every problem found
    pub fn validate(&self) -> Vec<JobValidationError> {
        let mut errors = Vec::new();

        if self.frames.is_empty() {
            errors.push(JobValidationError {
                field: "frames".to_string(),
                message: "must list at least one image".to_string(),
            });
        }

        if self.output.as_os_str().is_empty() {
            errors.push(JobValidationError {
                field: "output".to_string(),
                message: "must be a file path".to_string(),
            });
        }

        match &self.durations {
            Durations::Uniform(ms) => {
                if !is_valid_duration(*ms) {
                    errors.push(JobValidationError {
                        field: "durations".to_string(),
                        message: duration_range_message(),
                    });
                }
            }
            Durations::PerFrame(list) => {
                if list.len() != self.frames.len() {
                    errors.push(JobValidationError {
                        field: "durations".to_string(),
                        message: format!(
                            "has {} entries but frames has {}",
                            list.len(),
                            self.frames.len()
                        ),
                    });
                }
                for (i, &ms) in list.iter().enumerate() {
                    if !is_valid_duration(ms) {
                        errors.push(JobValidationError {
                            field: format!("durations[{}]", i),
                            message: duration_range_message(),
                        });
                    }
                }
            }
        }

        errors
    }
}

fn duration_range_message() -> String {
    format!("must be between 1 and {} milliseconds", MAX_DURATION_MS)
}
