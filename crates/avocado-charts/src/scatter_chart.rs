//! Scatter chart of several x sequences against one shared y sequence

use crate::renderer::{font, format_number, padded_range, palette_color, rgb, ChartRenderer};
use crate::types::{ChartConfig, ScatterData};
use avocado_common::{AvocadoError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

/// Point opacity used unless configured otherwise
pub const DEFAULT_ALPHA: f64 = 0.6;

const POINT_RADIUS: u32 = 3;

/// Scatter chart with one semi-transparent point series per x sequence
#[derive(Debug, Clone)]
pub struct ScatterChart {
    config: ChartConfig,
    alpha: f64,
}

impl ScatterChart {
    /// Create a scatter chart with the default point alpha.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Use a different point opacity, clamped to `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Point opacity, between 0 and 1.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl ChartRenderer for ScatterChart {
    type Data = ScatterData;

    fn name(&self) -> &'static str {
        "scatter"
    }

    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn validate(&self, data: &ScatterData) -> Result<()> {
        if data.x_series.len() != data.labels.len() {
            return Err(AvocadoError::config(format!(
                "Scatter chart has {} x sequences but {} labels",
                data.x_series.len(),
                data.labels.len()
            )));
        }

        for (label, xs) in data.labels.iter().zip(&data.x_series) {
            if xs.len() != data.y.len() {
                return Err(AvocadoError::config(format!(
                    "Scatter series '{label}' has {} x values but there are {} y values",
                    xs.len(),
                    data.y.len()
                )));
            }
        }

        Ok(())
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, data: &ScatterData) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let config = &self.config;
        let style = &config.style;
        root.fill(&rgb(style.background))?;

        let x_range = padded_range(data.x_series.iter().flatten().copied(), 0.05);
        let y_range = padded_range(data.y.iter().copied(), 0.05);

        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, font(&style.title_font))
            .margin(style.margins.outer)
            .x_label_area_size(style.margins.x_label_area)
            .y_label_area_size(style.margins.y_label_area)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(&config.x_label)
            .y_desc(&config.y_label)
            .label_style(font(&style.label_font))
            .axis_desc_style(font(&style.label_font))
            .x_label_formatter(&|v| format_number(*v))
            .y_label_formatter(&|v| format_number(*v))
            .draw()?;

        for (index, (xs, label)) in data.x_series.iter().zip(&data.labels).enumerate() {
            let point_style = rgb(palette_color(index)).mix(self.alpha).filled();
            chart
                .draw_series(
                    xs.iter()
                        .zip(&data.y)
                        .map(|(&x, &y)| Circle::new((x, y), POINT_RADIUS, point_style)),
                )?
                .label(label.as_str())
                .legend(move |(x, y)| Circle::new((x + 10, y), POINT_RADIUS, point_style));
        }

        if !data.labels.is_empty() {
            chart
                .configure_series_labels()
                .label_font(font(&style.label_font))
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        debug!("Drew {} scatter series of {} points", data.x_series.len(), data.y.len());
        Ok(())
    }
}
