//! Multi-series line chart

use crate::renderer::{font, format_number, padded_range, palette_color, rgb, ChartRenderer};
use crate::types::{ChartConfig, LineSeriesData, LineStyle, Marker};
use avocado_common::{AvocadoError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::debug;

const STYLE_FIELDS: [&str; 4] = ["label", "color", "marker", "line_style"];

/// Line chart with one connected line per series, a grid, and a legend when
/// series are labelled.
#[derive(Debug, Clone)]
pub struct LineChart {
    config: ChartConfig,
}

impl LineChart {
    /// Create a line chart with the given settings.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for LineChart {
    type Data = [LineSeriesData];

    fn name(&self) -> &'static str {
        "line"
    }

    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn validate(&self, series: &[LineSeriesData]) -> Result<()> {
        if series.len() < 2 {
            return Err(AvocadoError::config(format!(
                "Line chart needs at least two series, got {}",
                series.len()
            )));
        }

        for (index, s) in series.iter().enumerate() {
            if s.x.len() != s.y.len() {
                return Err(AvocadoError::config(format!(
                    "Line series {index} has {} x values but {} y values",
                    s.x.len(),
                    s.y.len()
                )));
            }
        }

        for (field_index, field) in STYLE_FIELDS.iter().enumerate() {
            let set = series
                .iter()
                .filter(|s| s.style.presence()[field_index])
                .count();
            if set != 0 && set != series.len() {
                return Err(AvocadoError::config(format!(
                    "Line style '{field}' is set on {set} of {} series; set it on all or none",
                    series.len()
                )));
            }
        }

        Ok(())
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, series: &[LineSeriesData]) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let config = &self.config;
        let style = &config.style;
        root.fill(&rgb(style.background))?;

        let x_range = padded_range(series.iter().flat_map(|s| s.x.iter().copied()), 0.05);
        let y_range = padded_range(series.iter().flat_map(|s| s.y.iter().copied()), 0.05);

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
            .draw()?;

        let mut labelled = false;
        for (index, s) in series.iter().enumerate() {
            let color = rgb(s.style.color.unwrap_or_else(|| palette_color(index)));
            let stroke = color.stroke_width(2);
            let points: Vec<(f64, f64)> = s.x.iter().copied().zip(s.y.iter().copied()).collect();

            let annotation = match s.style.line_style.unwrap_or_default() {
                LineStyle::Solid => chart.draw_series(LineSeries::new(points.clone(), stroke))?,
                LineStyle::Dashed => {
                    chart.draw_series(DashedLineSeries::new(points.clone(), 10, 6, stroke))?
                }
                LineStyle::Dotted => {
                    chart.draw_series(DashedLineSeries::new(points.clone(), 2, 4, stroke))?
                }
            };
            if let Some(label) = &s.style.label {
                annotation
                    .label(label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));
                labelled = true;
            }

            if let Some(marker) = s.style.marker {
                let fill = color.filled();
                match marker {
                    Marker::Circle => {
                        chart.draw_series(points.iter().map(|&p| Circle::new(p, 4, fill)))?;
                    }
                    Marker::Square => {
                        chart.draw_series(points.iter().map(|&p| {
                            EmptyElement::at(p) + Rectangle::new([(-4, -4), (4, 4)], fill)
                        }))?;
                    }
                    Marker::Triangle => {
                        chart.draw_series(points.iter().map(|&p| TriangleMarker::new(p, 5, fill)))?;
                    }
                    Marker::Cross => {
                        chart.draw_series(points.iter().map(|&p| Cross::new(p, 4, stroke)))?;
                    }
                }
            }
        }

        if labelled {
            chart
                .configure_series_labels()
                .label_font(font(&style.label_font))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        debug!("Drew {} line series", series.len());
        Ok(())
    }
}
