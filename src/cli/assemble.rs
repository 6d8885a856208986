//! Assemble command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::{resolve_job, CliOverrides};
use crate::error::Result;
use crate::pipeline::run_job;
use crate::report::Summary;

use super::{EXIT_ERROR, EXIT_SUCCESS};

const RULE_WIDTH: usize = 60;

/// Execute the assemble command
pub fn run_assemble(job_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    let rule = "=".repeat(RULE_WIDTH);

    println!("Creating animated GIF...");
    println!("{}", rule);

    match assemble(job_path, overrides) {
        Ok(summary) => {
            println!();
            println!("{}", summary);
            println!("{}", rule);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn assemble(job_path: Option<&Path>, overrides: &CliOverrides) -> Result<Summary> {
    if job_path.is_none() && overrides.is_empty() {
        log::info!("running built-in job");
    }
    let job = resolve_job(job_path, overrides)?;

    run_job(&job, |frame| {
        let (width, height) = frame.dimensions();
        println!("[OK] Loaded: {} ({}x{})", frame.path.display(), width, height);
    })
}
