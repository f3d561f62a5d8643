//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads (or synthesizes) the observation sets
//! - runs the joint fit pipeline
//! - prints the report and writes the optional export

use clap::Parser;

use crate::cli::Cli;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cosmofit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = cli.to_config();

    if !config.synthetic && config.data_path.is_none() {
        return Err(AppError::new(
            2,
            "Provide a supernova table path, or pass --synthetic to fit a generated sample.",
        ));
    }

    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.sn, &run.bao, &run.fit, &config)
    );

    if let Some(path) = &config.export {
        crate::io::write_fit_json(path, &run.fit, &config)?;
    }

    Ok(())
}
