//! Lantern demo entry point.
//!
//! Boots the logging subsystem from `logging.yaml` (override the path
//! with the `LOG_CFG` environment variable), then emits sample records
//! at several severities from different call sites.

use anyhow::Result;
use colored::Colorize;

use lantern_core::bootstrap::{setup_logging, ENV_CONFIG_VAR};
use lantern_core::{debug, error, info, warning, Severity};
use std::path::Path;

mod sites;

fn main() {
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    // The file handler in logging.yaml writes under ./logs; a missing
    // directory would otherwise degrade setup to the baseline config
    std::fs::create_dir_all("logs")?;

    let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("logging.yaml");
    let context = setup_logging(config_path, Severity::Debug, ENV_CONFIG_VAR);

    let logger = context.logger("server");
    debug!(logger, "debug log test");
    info!(logger, "info log test");
    warning!(logger, "warning log test");
    error!(logger, "error log test");

    // Records emitted from other modules and call-site shapes
    sites::announce_startup(&logger);
    sites::report_failed_read(&logger);
    sites::StatusProbe::report(&logger);

    Ok(())
}
