//! Chart rendering trait and shared drawing helpers

use crate::types::{ChartConfig, FontConfig};
use avocado_common::{AvocadoError, Result, Rgb};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{info, instrument};

/// Matplotlib's tab10 cycle, used when a series has no explicit color
pub const DEFAULT_PALETTE: [Rgb; 8] = [
    Rgb(31, 119, 180),  // Blue
    Rgb(255, 127, 14),  // Orange
    Rgb(44, 160, 44),   // Green
    Rgb(214, 39, 40),   // Red
    Rgb(148, 103, 189), // Purple
    Rgb(140, 86, 75),   // Brown
    Rgb(227, 119, 194), // Pink
    Rgb(127, 127, 127), // Gray
];

/// Trait for validating and drawing one kind of chart.
///
/// Implementors provide [`validate`](ChartRenderer::validate) and a
/// backend-generic [`draw`](ChartRenderer::draw). File and in-memory
/// rendering are built on top of them.
pub trait ChartRenderer {
    /// Input the chart is drawn from
    type Data: ?Sized;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Title, axis descriptions and canvas settings
    fn config(&self) -> &ChartConfig;

    /// Check the input for inconsistencies without drawing anything
    fn validate(&self, data: &Self::Data) -> Result<()>;

    /// Draw the chart onto a drawing area of any backend
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, data: &Self::Data) -> Result<()>
    where
        DB::ErrorType: 'static;

    /// Validate, draw and save the chart to `path`, replacing any existing
    /// file. The image format follows the file extension.
    #[instrument(skip_all, fields(chart = self.name(), path = %path.display()))]
    fn render_to_file(&self, data: &Self::Data, path: &Path) -> Result<()> {
        self.validate(data)?;

        let config = self.config();
        {
            let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
            self.draw(&root, data)?;
            root.present()?;
        }

        info!("Saved {} chart to {}", self.name(), path.display());
        Ok(())
    }

    /// Validate and draw the chart into an RGB pixel buffer
    fn render_to_bytes(&self, data: &Self::Data) -> Result<Vec<u8>> {
        self.validate(data)?;

        let config = self.config();
        let len = usize::try_from(u64::from(config.width) * u64::from(config.height) * 3)
            .map_err(|e| AvocadoError::config_with_source("Canvas is too large", e))?;
        let mut buffer = vec![0u8; len];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (config.width, config.height))
                .into_drawing_area();
            self.draw(&root, data)?;
            root.present()?;
        }

        Ok(buffer)
    }
}

/// Convert a configured color into a plotters color
pub fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Palette color for the series at `index`, cycling
pub fn palette_color(index: usize) -> Rgb {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

/// Plotters font for a font setting
pub fn font(config: &FontConfig) -> FontDesc<'_> {
    (config.family.as_str(), f64::from(config.size)).into_font()
}

/// Black text in the given font
pub fn text_style(config: &FontConfig) -> TextStyle<'_> {
    font(config).color(&BLACK)
}

/// Axis range covering every finite value, widened by `fraction` of the span
/// on each side.
///
/// An empty input yields `0..1`. A single distinct value is centred in a
/// range one unit wide.
pub fn padded_range(values: impl IntoIterator<Item = f64>, fraction: f64) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 0.5)..(max + 0.5);
    }

    let padding = (max - min) * fraction;
    (min - padding)..(max + padding)
}

/// Format a number with at most two decimals, dropping trailing zeros.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
