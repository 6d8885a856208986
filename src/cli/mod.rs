//! Command-line interface implementation
//!
//! This module provides the CLI entry point, logging setup and the
//! dispatch to the assemble command.

mod assemble;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::durations::Durations;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// framegif - Assemble still images into a looping animated GIF
///
/// Without arguments the built-in job runs: five frames from
/// docs/images/GIF/ written to docs/images/conda-commands.gif.
#[derive(Parser, Debug)]
#[command(name = "framegif")]
#[command(about = "framegif - Assemble still images into a looping animated GIF")]
#[command(version)]
pub struct Cli {
    /// TOML job file with `frames`, `durations` and `output`
    #[arg(long, value_name = "FILE")]
    pub job: Option<PathBuf>,

    /// Output GIF path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Input image; repeat for each frame, in playback order
    #[arg(long = "frame", value_name = "FILE")]
    pub frames: Vec<PathBuf>,

    /// Per-frame durations in milliseconds (e.g. 800,1200,800)
    #[arg(long, value_name = "MS", value_delimiter = ',', conflicts_with = "delay")]
    pub durations: Option<Vec<u32>>,

    /// One duration in milliseconds for every frame
    #[arg(long, value_name = "MS")]
    pub delay: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Job values given on the command line
    pub fn overrides(&self) -> CliOverrides {
        let durations = match (&self.durations, self.delay) {
            (Some(list), _) => Some(Durations::PerFrame(list.clone())),
            (None, Some(ms)) => Some(Durations::Uniform(ms)),
            (None, None) => None,
        };

        CliOverrides {
            frames: if self.frames.is_empty() { None } else { Some(self.frames.clone()) },
            durations,
            output: self.output.clone(),
        }
    }
}

/// Set up env_logger on stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("Command-line args: {:?}", cli);

    assemble::run_assemble(cli.job.as_deref(), &cli.overrides())
}
