//! GIF animation rendering

use std::borrow::Borrow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use log::{debug, info, warn};

use crate::durations::{to_centiseconds, Durations};
use crate::error::{Error, Result};

/// Render a sequence of frames as an infinitely looping animated GIF.
///
/// # Arguments
///
/// * `frames` - The image frames, in playback order
/// * `durations` - One duration for all frames, or one per frame (milliseconds)
/// * `path` - Output file path, overwritten on success
///
/// Durations are checked against the frame list before anything touches
/// the disk. The GIF is written next to `path` and moved into place once
/// complete; if encoding fails the partial file is removed and an
/// existing file at `path` is left as it was.
pub fn render_gif<F>(frames: &[F], durations: &Durations, path: &Path) -> Result<()>
where
    F: Borrow<RgbaImage>,
{
    if frames.is_empty() {
        return Err(Error::NoFrames);
    }
    let delays = durations.resolve(frames.len())?;
    let write_err = |source| Error::Write { path: path.to_path_buf(), source };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let partial = partial_path(path);
    let written = write_frames(frames, &delays, path, &partial)
        .and_then(|()| fs::rename(&partial, path).map_err(write_err));

    if written.is_err() {
        if let Err(e) = fs::remove_file(&partial) {
            warn!("could not remove partial output {}: {}", partial.display(), e);
        }
    } else {
        info!("wrote {} frames to {}", frames.len(), path.display());
    }
    written
}

/// Sibling file the encoder writes into before the final rename.
fn partial_path(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{}.partial", name))
}

fn write_frames<F>(frames: &[F], delays: &[u32], target: &Path, partial: &Path) -> Result<()>
where
    F: Borrow<RgbaImage>,
{
    let encode_err = |source| Error::Encode { path: target.to_path_buf(), source };
    let write_err = |source| Error::Write { path: target.to_path_buf(), source };

    let file = File::create(partial).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    {
        let mut encoder = GifEncoder::new(&mut writer);
        encoder.set_repeat(Repeat::Infinite).map_err(encode_err)?;

        for (index, (image, &ms)) in frames.iter().zip(delays).enumerate() {
            // GIF uses centiseconds (1/100th of a second) for delays
            let delay_cs = to_centiseconds(ms).ok_or(Error::InvalidDuration { index })?;
            let delay = Delay::from_numer_denom_ms(delay_cs as u32 * 10, 1);
            let frame = Frame::from_parts(Borrow::<RgbaImage>::borrow(image).clone(), 0, 0, delay);
            encoder.encode_frame(frame).map_err(encode_err)?;
            debug!("encoded frame {} ({} cs)", index + 1, delay_cs);
        }
        // Dropping the encoder writes the GIF trailer
    }
    writer.flush().map_err(write_err)?;
    Ok(())
}
