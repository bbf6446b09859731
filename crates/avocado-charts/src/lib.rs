//! # Avocado Charts
//!
//! Aggregation and static chart rendering for the avocado sales dataset.
//!
//! Records are loaded once by [`dataset`], reduced to three read-only views
//! by the aggregators in [`aggregator`], and drawn by the line, bar and
//! scatter renderers onto bitmap images using plotters. [`pipeline`] wires
//! each view to its renderer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod bar_chart;
pub mod dataset;
pub mod line_chart;
pub mod pipeline;
pub mod renderer;
pub mod scatter_chart;
pub mod types;
pub mod views;

pub use aggregator::*;
pub use bar_chart::BarChart;
pub use dataset::{load_records, read_records};
pub use line_chart::LineChart;
pub use pipeline::ReportPipeline;
pub use renderer::ChartRenderer;
pub use scatter_chart::ScatterChart;
pub use types::*;
pub use views::*;
