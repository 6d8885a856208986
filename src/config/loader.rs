//! Job loading and CLI overrides

use super::schema::JobConfig;
use crate::durations::Durations;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Job loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read job file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error
    #[error("Failed to parse job file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Validation error
    #[error("Invalid job:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that replace job values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Replace the frame list
    pub frames: Option<Vec<PathBuf>>,
    /// Replace the durations
    pub durations: Option<Durations>,
    /// Replace the output path
    pub output: Option<PathBuf>,
}

impl CliOverrides {
    pub fn is_empty(&self) -> bool {
        self.frames.is_none() && self.durations.is_none() && self.output.is_none()
    }
}

/// Build the job for one run.
///
/// Starts from the job file when one is given, otherwise from the
/// built-in job, then applies CLI overrides and validates the result.
pub fn resolve_job(path: Option<&Path>, overrides: &CliOverrides) -> Result<JobConfig, ConfigError> {
    let mut job = match path {
        Some(p) => load_job(p)?,
        None => {
            debug!("no job file given, using built-in job");
            JobConfig::default()
        }
    };

    merge_cli_overrides(&mut job, overrides);
    check(&job)?;

    info!(
        "job: {} frames, durations {:?}, output {}",
        job.frames.len(),
        job.durations,
        job.output.display()
    );
    Ok(job)
}

/// Merge CLI overrides into a job.
///
/// CLI arguments take precedence over job file values.
pub fn merge_cli_overrides(job: &mut JobConfig, overrides: &CliOverrides) {
    if let Some(ref frames) = overrides.frames {
        job.frames = frames.clone();
    }

    if let Some(ref durations) = overrides.durations {
        job.durations = durations.clone();
    }

    if let Some(ref output) = overrides.output {
        job.output = output.clone();
    }
}

/// Read and parse a job file.
///
/// Relative frame and output paths in the file are taken relative to the
/// directory containing the file, so a job can be run from anywhere.
/// The job is not validated here: CLI overrides may still replace fields,
/// so [`resolve_job`] validates the merged result.
///
/// # Example
/// ```ignore
/// let job = load_job(Path::new("anim/job.toml"))?;
/// println!("{} frames -> {}", job.frames.len(), job.output.display());
/// ```
pub fn load_job(path: &Path) -> Result<JobConfig, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let mut job: JobConfig = toml::from_str(&contents)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        for frame in &mut job.frames {
            *frame = rebase(base, frame);
        }
        job.output = rebase(base, &job.output);
    }

    debug!("loaded job file {}", path.display());
    Ok(job)
}

fn rebase(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

fn check(job: &JobConfig) -> Result<(), ConfigError> {
    let errors = job.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}
