//! Input frame loading

use std::borrow::Borrow;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::RgbaImage;
use log::debug;

use crate::error::{Error, Result};

/// A decoded input image and the path it came from
#[derive(Debug, Clone)]
pub struct LoadedFrame {
    pub path: PathBuf,
    pub image: RgbaImage,
}

impl LoadedFrame {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl Borrow<RgbaImage> for LoadedFrame {
    fn borrow(&self) -> &RgbaImage {
        &self.image
    }
}

/// Decode a single image file into RGBA.
///
/// The format is detected from the file content, so a PNG saved with a
/// `.gif` extension still loads.
pub fn load_frame(path: &Path) -> Result<LoadedFrame> {
    let read_err = |source| Error::Read { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(read_err)?;
    let reader = ImageReader::new(BufReader::new(file)).with_guessed_format().map_err(read_err)?;
    let image = reader
        .decode()
        .map_err(|source| Error::Decode { path: path.to_path_buf(), source })?
        .into_rgba8();

    debug!("decoded {} as {}x{}", path.display(), image.width(), image.height());
    Ok(LoadedFrame { path: path.to_path_buf(), image })
}

/// Load every path in order, stopping at the first failure.
///
/// `on_loaded` runs after each successful decode, before the next path is
/// opened, so progress output stays in step with the work done.
pub fn load_frames<P, F>(paths: &[P], mut on_loaded: F) -> Result<Vec<LoadedFrame>>
where
    P: AsRef<Path>,
    F: FnMut(&LoadedFrame),
{
    let mut frames = Vec::with_capacity(paths.len());
    for path in paths {
        let frame = load_frame(path.as_ref())?;
        on_loaded(&frame);
        frames.push(frame);
    }
    Ok(frames)
}
