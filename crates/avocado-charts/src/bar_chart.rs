//! Categorical bar chart with value annotations

use crate::renderer::{font, format_number, rgb, text_style, ChartRenderer};
use crate::types::{BarColors, BarData, ChartConfig};
use avocado_common::{AvocadoError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

const BAR_HALF_WIDTH: f64 = 0.4;
const TICK_LENGTH: i32 = 5;

/// Bar chart with one bar per category, x labels rotated 90 degrees, and
/// optional custom y ticks that replace the numeric ones.
#[derive(Debug, Clone)]
pub struct BarChart {
    config: ChartConfig,
}

impl BarChart {
    /// Create a bar chart with the given settings.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Height of the x label area, large enough for the longest rotated label.
    fn x_label_area(&self, labels: &[String]) -> u32 {
        let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let longest = u32::try_from(longest).unwrap_or(u32::MAX);
        let font_size = self.config.style.label_font.size;
        let needed = longest
            .saturating_mul(font_size)
            .saturating_mul(2)
            / 3;
        let needed = needed.saturating_add(font_size.saturating_mul(3));
        self.config.style.margins.x_label_area.max(needed)
    }
}

impl ChartRenderer for BarChart {
    type Data = BarData;

    fn name(&self) -> &'static str {
        "bar"
    }

    fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn validate(&self, data: &BarData) -> Result<()> {
        if data.labels.len() != data.values.len() {
            return Err(AvocadoError::config(format!(
                "Bar chart has {} labels but {} values",
                data.labels.len(),
                data.values.len()
            )));
        }

        if let BarColors::PerBar(colors) = &data.colors {
            if colors.is_empty() {
                return Err(AvocadoError::config("Bar chart color list is empty"));
            }
        }

        if let Some(ticks) = &data.y_ticks {
            if ticks.positions.len() != ticks.labels.len() {
                return Err(AvocadoError::config(format!(
                    "Bar chart has {} y tick positions but {} tick labels",
                    ticks.positions.len(),
                    ticks.labels.len()
                )));
            }
        }

        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, data: &BarData) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let config = &self.config;
        let style = &config.style;
        root.fill(&rgb(style.background))?;

        let bar_count = data.values.len();
        let x_range = if bar_count == 0 {
            -0.5..0.5
        } else {
            -0.5..(bar_count as f64 - 0.5)
        };

        // The y axis always includes zero and every custom tick.
        let tick_positions = data.y_ticks.iter().flat_map(|t| t.positions.iter().copied());
        let (y_min, y_max) = data
            .values
            .iter()
            .copied()
            .chain(tick_positions)
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
        let y_min = y_min * 1.1;

        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, font(&style.title_font))
            .margin(style.margins.outer)
            .x_label_area_size(self.x_label_area(&data.labels))
            .y_label_area_size(style.margins.y_label_area)
            .build_cartesian_2d(x_range, y_min..y_max)?;

        let custom_ticks = data.y_ticks.as_ref().filter(|t| !t.positions.is_empty());
        let blank = |_: &f64| String::new();
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_desc(&config.x_label)
            .y_desc(&config.y_label)
            .label_style(font(&style.label_font))
            .axis_desc_style(font(&style.label_font))
            .x_label_formatter(&blank);
        if custom_ticks.is_some() {
            mesh.disable_y_mesh().y_labels(0);
        }
        mesh.draw()?;

        for (index, value) in data.values.iter().copied().enumerate() {
            let color = data
                .colors
                .color_for(index)
                .ok_or_else(|| AvocadoError::config("Bar chart color list is empty"))?;
            let x = index as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, value)],
                rgb(color).filled(),
            )))?;
        }

        // Value annotations sit just above each bar.
        let annotation_style = text_style(&style.label_font).pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(data.values.iter().copied().enumerate().map(|(index, value)| {
            Text::new(format_number(value), (index as f64, value), annotation_style.clone())
        }))?;

        if let Some(ticks) = custom_ticks {
            let grid = BLACK.mix(0.15).stroke_width(1);
            let (x_start, x_end) = (chart.x_range().start, chart.x_range().end);
            chart.draw_series(
                ticks
                    .positions
                    .iter()
                    .map(|&y| PathElement::new(vec![(x_start, y), (x_end, y)], grid)),
            )?;

            let tick_style = text_style(&style.label_font).pos(Pos::new(HPos::Right, VPos::Center));
            for (&position, label) in ticks.positions.iter().zip(&ticks.labels) {
                let (px, py) = chart.backend_coord(&(x_start, position));
                root.draw(&PathElement::new(vec![(px - TICK_LENGTH, py), (px, py)], BLACK))?;
                root.draw(&Text::new(label.as_str(), (px - TICK_LENGTH - 3, py), tick_style.clone()))?;
            }
        }

        let rotated = text_style(&style.label_font)
            .transform(FontTransform::Rotate90)
            .pos(Pos::new(HPos::Left, VPos::Center));
        for (index, label) in data.labels.iter().enumerate() {
            let (px, py) = chart.backend_coord(&(index as f64, y_min));
            root.draw(&Text::new(label.as_str(), (px, py + 8), rotated.clone()))?;
        }

        debug!("Drew {} bars", bar_count);
        Ok(())
    }
}
