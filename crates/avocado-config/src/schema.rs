//! Configuration schema definitions using serde.

use avocado_common::{LoggingConfig, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for the avocado report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Dataset location.
    pub input: InputConfig,
    /// Chart file locations.
    pub output: OutputConfig,
    /// Image size, background and fonts shared by every chart.
    pub canvas: CanvasConfig,
    /// Line chart of yearly average prices.
    pub price_trend: PriceTrendConfig,
    /// Bar chart of the least-selling regions.
    pub regional_volume: RegionalVolumeConfig,
    /// Scatter chart of bag sizes against total volume.
    pub bag_categories: BagCategoryConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Dataset input configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the CSV dataset.
    pub path: PathBuf,
}

/// Output image paths. The image format follows each file's extension.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Price trend line chart.
    pub line_chart: PathBuf,
    /// Regional volume bar chart.
    pub bar_chart: PathBuf,
    /// Bag category scatter chart.
    pub scatter_chart: PathBuf,
}

/// Canvas configuration shared by all charts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Background color (name or hex).
    pub background: String,
    /// Font family for all text.
    pub font_family: String,
    /// Title font size.
    pub title_font_size: u32,
    /// Axis description and tick label font size.
    pub label_font_size: u32,
}

/// Price trend chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceTrendConfig {
    /// Chart title.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Legend label of the organic series.
    pub organic_label: String,
    /// Legend label of the conventional series.
    pub conventional_label: String,
    /// Line color of the organic series.
    pub organic_color: String,
    /// Line color of the conventional series.
    pub conventional_color: String,
}

/// Regional volume chart configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionalVolumeConfig {
    /// Chart title.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Year whose volumes are compared.
    pub year: i32,
    /// Maximum number of regions shown.
    pub limit: usize,
    /// Volumes are divided by this before plotting.
    pub volume_divisor: f64,
    /// Bar colors, cycled when there are more bars than colors.
    pub colors: Vec<String>,
    /// Y tick positions in plotted (divided) units.
    pub y_ticks: Vec<f64>,
    /// Labels drawn at `y_ticks`, one per tick.
    pub y_tick_labels: Vec<String>,
}

/// Bag category chart configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BagCategoryConfig {
    /// Chart title.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Legend labels for small, large and extra large bags, in that order.
    pub series_labels: [String; 3],
    /// Point opacity, in `(0, 1]`.
    pub alpha: f64,
}

impl ReportConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
