//! One complete report run

use avocado_charts::ReportPipeline;
use avocado_common::Result;
use avocado_config::ReportConfig;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Load the configured dataset and write all three charts.
///
/// Returns the paths of the written images in rendering order.
#[instrument(skip_all, fields(input = %config.input.path.display()))]
pub fn run(config: ReportConfig) -> Result<Vec<PathBuf>> {
    let pipeline = ReportPipeline::new(config)?;
    let records = pipeline.load_records()?;
    let paths = pipeline.run(&records)?;

    for path in &paths {
        info!("Wrote {}", path.display());
    }
    Ok(paths)
}
