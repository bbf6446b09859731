//! Runtime validation of report settings.

use crate::schema::{CanvasConfig, ReportConfig};
use avocado_common::{parse_color, AvocadoError, Result};
use std::path::Path;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &ReportConfig) -> Result<()> {
        Self::validate_canvas(&config.canvas)?;

        validate_path("input.path", &config.input.path)?;
        validate_path("output.line_chart", &config.output.line_chart)?;
        validate_path("output.bar_chart", &config.output.bar_chart)?;
        validate_path("output.scatter_chart", &config.output.scatter_chart)?;

        let price = &config.price_trend;
        validate_color("price_trend.organic_color", &price.organic_color)?;
        validate_color("price_trend.conventional_color", &price.conventional_color)?;

        let regional = &config.regional_volume;
        if regional.limit == 0 {
            return Err(AvocadoError::config(
                "regional_volume.limit must be at least 1",
            ));
        }
        if !(regional.volume_divisor.is_finite() && regional.volume_divisor > 0.0) {
            return Err(AvocadoError::config(
                "regional_volume.volume_divisor must be a positive number",
            ));
        }
        if regional.colors.is_empty() {
            return Err(AvocadoError::config(
                "regional_volume.colors must name at least one color",
            ));
        }
        for color in &regional.colors {
            validate_color("regional_volume.colors", color)?;
        }
        if regional.y_ticks.len() != regional.y_tick_labels.len() {
            return Err(AvocadoError::config(format!(
                "regional_volume has {} y ticks but {} tick labels",
                regional.y_ticks.len(),
                regional.y_tick_labels.len()
            )));
        }

        let alpha = config.bag_categories.alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(AvocadoError::config(format!(
                "bag_categories.alpha must be in (0, 1], got {alpha}"
            )));
        }

        Ok(())
    }

    fn validate_canvas(canvas: &CanvasConfig) -> Result<()> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(AvocadoError::config(format!(
                "canvas size must be non-zero, got {}x{}",
                canvas.width, canvas.height
            )));
        }
        if canvas.title_font_size == 0 || canvas.label_font_size == 0 {
            return Err(AvocadoError::config("canvas font sizes must be non-zero"));
        }
        validate_color("canvas.background", &canvas.background)
    }
}

fn validate_color(setting: &str, value: &str) -> Result<()> {
    parse_color(value)
        .map(|_| ())
        .ok_or_else(|| AvocadoError::config(format!("{setting}: unknown color '{value}'")))
}

fn validate_path(setting: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(AvocadoError::config(format!("{setting} cannot be empty")));
    }
    Ok(())
}
