//! Per-frame display durations
//!
//! A duration specification is either one value applied to every frame or
//! an explicit list aligned with the frame list. In TOML job files both
//! shapes are accepted:
//!
//! ```toml
//! durations = 100
//! durations = [800, 1200, 1200, 1200, 800]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest duration a 16-bit GIF delay can hold without losing time
pub const MAX_DURATION_MS: u32 = u16::MAX as u32 * 10 + 9;

/// Display duration of each frame, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Durations {
    /// Same duration for every frame
    Uniform(u32),
    /// One duration per frame, in frame order
    PerFrame(Vec<u32>),
}

impl Durations {
    /// Expand into exactly one duration per frame.
    ///
    /// Fails if a per-frame list has the wrong length or if any
    /// duration is zero or longer than [`MAX_DURATION_MS`].
    pub fn resolve(&self, frame_count: usize) -> Result<Vec<u32>> {
        let resolved = match self {
            Durations::Uniform(ms) => vec![*ms; frame_count],
            Durations::PerFrame(list) => {
                if list.len() != frame_count {
                    return Err(Error::DurationMismatch {
                        frames: frame_count,
                        durations: list.len(),
                    });
                }
                list.clone()
            }
        };

        if let Some(index) = resolved.iter().position(|&ms| !is_valid_duration(ms)) {
            return Err(Error::InvalidDuration { index });
        }

        Ok(resolved)
    }
}

impl From<u32> for Durations {
    fn from(ms: u32) -> Self {
        Durations::Uniform(ms)
    }
}

impl From<Vec<u32>> for Durations {
    fn from(list: Vec<u32>) -> Self {
        Durations::PerFrame(list)
    }
}

/// Whether `ms` can be stored as a GIF frame delay.
pub fn is_valid_duration(ms: u32) -> bool {
    ms > 0 && ms <= MAX_DURATION_MS
}

/// Convert milliseconds to a GIF delay in centiseconds.
///
/// GIF stores delays in 1/100 s, so anything below 10ms becomes the
/// one-centisecond minimum and remainders are truncated. Returns `None`
/// when the delay doesn't fit the 16-bit field.
pub fn to_centiseconds(ms: u32) -> Option<u16> {
    u16::try_from((ms / 10).max(1)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_expands_to_frame_count() {
        let durations = Durations::Uniform(100);
        assert_eq!(durations.resolve(3).unwrap(), vec![100, 100, 100]);
    }

    #[test]
    fn test_per_frame_preserves_order() {
        let durations = Durations::PerFrame(vec![800, 1200, 1200, 1200, 800]);
        assert_eq!(durations.resolve(5).unwrap(), vec![800, 1200, 1200, 1200, 800]);
    }

    #[test]
    fn test_per_frame_length_mismatch() {
        let durations = Durations::PerFrame(vec![800, 1200]);
        match durations.resolve(5) {
            Err(Error::DurationMismatch { frames, durations }) => {
                assert_eq!(frames, 5);
                assert_eq!(durations, 2);
            }
            other => panic!("expected DurationMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_duration_rejected() {
        let durations = Durations::PerFrame(vec![100, 0, 100]);
        assert!(matches!(durations.resolve(3), Err(Error::InvalidDuration { index: 1 })));

        let uniform = Durations::Uniform(0);
        assert!(matches!(uniform.resolve(2), Err(Error::InvalidDuration { index: 0 })));
    }

    #[test]
    fn test_uniform_with_no_frames() {
        assert!(Durations::Uniform(100).resolve(0).unwrap().is_empty());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Durations::from(100), Durations::Uniform(100));
        assert_eq!(Durations::from(vec![1, 2]), Durations::PerFrame(vec![1, 2]));
    }

    #[test]
    fn test_centiseconds() {
        assert_eq!(to_centiseconds(800), Some(80));
        assert_eq!(to_centiseconds(1200), Some(120));
        assert_eq!(to_centiseconds(15), Some(1));
        assert_eq!(to_centiseconds(5), Some(1));
        assert_eq!(to_centiseconds(655_350), Some(u16::MAX));
        assert_eq!(to_centiseconds(655_360), None);
        assert_eq!(to_centiseconds(u32::MAX), None);
    }

    #[test]
    fn test_longest_gif_delay_accepted() {
        let durations = Durations::PerFrame(vec![655_350, MAX_DURATION_MS]);
        assert_eq!(durations.resolve(2).unwrap(), vec![655_350, 655_359]);
    }

    #[test]
    fn test_delay_beyond_gif_range_rejected() {
        let durations = Durations::PerFrame(vec![100, 655_360]);
        assert!(matches!(durations.resolve(2), Err(Error::InvalidDuration { index: 1 })));

        let uniform = Durations::Uniform(700_000);
        assert!(matches!(uniform.resolve(3), Err(Error::InvalidDuration { index: 0 })));
    }

    #[test]
    fn test_deserialize_both_shapes() {
        #[derive(Deserialize)]
        struct Doc {
            durations: Durations,
        }

        let uniform: Doc = toml::from_str("durations = 250").unwrap();
        assert_eq!(uniform.durations, Durations::Uniform(250));

        let list: Doc = toml::from_str("durations = [800, 1200]").unwrap();
        assert_eq!(list.durations, Durations::PerFrame(vec![800, 1200]));
    }
}
