//! framegif - Command-line tool for assembling still images into an animated GIF

use std::process::ExitCode;

use framegif::cli;

fn main() -> ExitCode {
    cli::run()
}
