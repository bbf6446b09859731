//! Avocado Report - Main Entry Point

use anyhow::{Context, Result};
use avocado_common::init_logging;
use avocado_config::ReportConfig;
use tracing::{error, info};

fn main() -> Result<()> {
    let config = ReportConfig::default();

    init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")?;

    info!("Starting avocado report");

    let input = config.input.path.clone();
    match avocado_report::run(config) {
        Ok(paths) => {
            info!("Avocado report finished with {} charts", paths.len());
            Ok(())
        }
        Err(e) => {
            error!("Avocado report failed: {}", e);
            Err(e).with_context(|| format!("Failed to build report from {}", input.display()))
        }
    }
}
