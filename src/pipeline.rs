//! Load → encode → report for one job

use crate::config::JobConfig;
use crate::error::Result;
use crate::gif::render_gif;
use crate::loader::{load_frames, LoadedFrame};
use crate::report::Summary;

/// Run a job to completion.
///
/// All frames are decoded before the output is opened, so a bad input
/// never leaves a file behind. `on_loaded` is called once per decoded
/// frame, in order.
pub fn run_job<F>(job: &JobConfig, on_loaded: F) -> Result<Summary>
where
    F: FnMut(&LoadedFrame),
{
    let frames = load_frames(&job.frames, on_loaded)?;
    render_gif(&frames, &job.durations, &job.output)?;
    Summary::collect(&job.output, &frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::durations::Durations;
    use crate::error::Error;
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_frames(dir: &std::path::Path, count: u32, size: u32) -> Vec<PathBuf> {
        (1..=count)
            .map(|i| {
                let path = dir.join(format!("Frame {}.png", i));
                let shade = (i * 40) as u8;
                RgbaImage::from_pixel(size, size, Rgba([shade, shade, 255 - shade, 255]))
                    .save(&path)
                    .unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_run_job_five_frames() {
        let dir = tempdir().unwrap();
        let job = JobConfig {
            frames: write_frames(dir.path(), 5, 100),
            durations: Durations::PerFrame(vec![800, 1200, 1200, 1200, 800]),
            output: dir.path().join("out/anim.gif"),
        };

        let mut loaded = Vec::new();
        let summary = run_job(&job, |f| loaded.push(f.dimensions())).unwrap();

        assert_eq!(loaded, vec![(100, 100); 5]);
        assert_eq!(summary.frame_count, 5);
        assert_eq!(summary.dimensions, (100, 100));
        assert_eq!(summary.output, job.output);
        assert_eq!(summary.size_bytes, std::fs::metadata(&job.output).unwrap().len());
    }

    #[test]
    fn test_run_job_bad_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut frames = write_frames(dir.path(), 2, 10);
        frames.insert(1, dir.path().join("missing.png"));
        let job = JobConfig {
            frames,
            durations: Durations::Uniform(100),
            output: dir.path().join("anim.gif"),
        };

        let err = run_job(&job, |_| {}).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(!job.output.exists());
    }

    #[test]
    fn test_run_job_bad_input_keeps_existing_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("anim.gif");
        std::fs::write(&output, b"previous").unwrap();
        let job = JobConfig {
            frames: vec![dir.path().join("missing.png")],
            durations: Durations::Uniform(100),
            output: output.clone(),
        };

        assert!(run_job(&job, |_| {}).is_err());
        assert_eq!(std::fs::read(&output).unwrap(), b"previous");
    }
}
