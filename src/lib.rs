//! framegif - Library for assembling still images into animated GIFs
//!
//! This library provides functionality to:
//! - Decode an ordered list of input images
//! - Encode them as an infinitely looping GIF with per-frame durations
//! - Summarize the written animation (frame count, size, dimensions)

pub mod cli;
pub mod config;
pub mod durations;
pub mod error;
pub mod gif;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use durations::Durations;
pub use error::{Error, Result};
