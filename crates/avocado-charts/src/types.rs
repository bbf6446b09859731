//! Chart configuration and renderer input types

use avocado_common::{parse_color, AvocadoError, Result, Rgb};
use avocado_config::CanvasConfig;
use serde::{Deserialize, Serialize};

/// Title, axis descriptions and canvas settings of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Caption drawn above the plot
    pub title: String,
    /// X axis description
    pub x_label: String,
    /// Y axis description
    pub y_label: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Colors, fonts and margins
    pub style: StyleConfig,
}

impl ChartConfig {
    /// Chart settings on the shared canvas, with the given title and axis
    /// descriptions.
    pub fn from_canvas(
        canvas: &CanvasConfig,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Result<Self> {
        let background = parse_color(&canvas.background).ok_or_else(|| {
            AvocadoError::config(format!("unknown background color '{}'", canvas.background))
        })?;

        Ok(Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            width: canvas.width,
            height: canvas.height,
            style: StyleConfig {
                background,
                title_font: FontConfig {
                    family: canvas.font_family.clone(),
                    size: canvas.title_font_size,
                },
                label_font: FontConfig {
                    family: canvas.font_family.clone(),
                    size: canvas.label_font_size,
                },
                ..StyleConfig::default()
            },
        })
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            width: 800,
            height: 800,
            style: StyleConfig::default(),
        }
    }
}

/// Visual styling shared by all renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Canvas fill color
    pub background: Rgb,
    /// Font for the caption
    pub title_font: FontConfig,
    /// Font for tick labels, axis descriptions and legends
    pub label_font: FontConfig,
    /// Space around the plotting area
    pub margins: MarginConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 18,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
        }
    }
}

/// Font family and size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Font size in pixels
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

/// Space around the plotting area, in pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginConfig {
    /// Gap between the image border and the chart
    pub outer: u32,
    /// Height reserved below the plot for x tick labels and description
    pub x_label_area: u32,
    /// Width reserved left of the plot for y tick labels and description
    pub y_label_area: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 20,
            x_label_area: 60,
            y_label_area: 80,
        }
    }
}

/// Point marker drawn at each data point of a line series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// Filled circle
    Circle,
    /// Filled square
    Square,
    /// Filled triangle
    Triangle,
    /// Diagonal cross
    Cross,
}

/// Stroke pattern of a line series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Continuous stroke
    #[default]
    Solid,
    /// Long dashes
    Dashed,
    /// Short dashes
    Dotted,
}

/// Optional styling of one line series.
///
/// A field left unset on every series falls back to the renderer default.
/// Setting a field on some series but not on others is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    /// Legend entry; no entry when unset
    pub label: Option<String>,
    /// Line color; the palette color for the series index when unset
    pub color: Option<Rgb>,
    /// Point marker; no markers when unset
    pub marker: Option<Marker>,
    /// Stroke pattern; solid when unset
    pub line_style: Option<LineStyle>,
}

impl SeriesStyle {
    /// Style with only a legend label and color set.
    pub fn labelled(label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: Some(label.into()),
            color: Some(color),
            ..Self::default()
        }
    }

    /// Which optional fields are set, as label, color, marker, line style.
    pub(crate) fn presence(&self) -> [bool; 4] {
        [
            self.label.is_some(),
            self.color.is_some(),
            self.marker.is_some(),
            self.line_style.is_some(),
        ]
    }
}

/// One line series: parallel x and y values plus styling
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesData {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates, one per x value
    pub y: Vec<f64>,
    /// Legend and stroke styling
    pub style: SeriesStyle,
}

impl LineSeriesData {
    /// Unstyled series from paired coordinates.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            style: SeriesStyle::default(),
        }
    }

    /// Replace the series style.
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}

/// Bar fill colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarColors {
    /// Every bar gets the same color
    Single(Rgb),
    /// Colors are assigned in order and cycled when there are more bars
    PerBar(Vec<Rgb>),
}

impl BarColors {
    /// Color of the bar at `index`, if any color is available.
    pub fn color_for(&self, index: usize) -> Option<Rgb> {
        match self {
            Self::Single(color) => Some(*color),
            Self::PerBar(colors) if colors.is_empty() => None,
            Self::PerBar(colors) => Some(colors[index % colors.len()]),
        }
    }
}

/// Custom y axis ticks: label `labels[i]` is drawn at `positions[i]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickMarks {
    /// Y values where ticks are drawn
    pub positions: Vec<f64>,
    /// Label for each position
    pub labels: Vec<String>,
}

/// Input of the bar renderer
#[derive(Debug, Clone, PartialEq)]
pub struct BarData {
    /// Category label under each bar
    pub labels: Vec<String>,
    /// Bar heights, one per label
    pub values: Vec<f64>,
    /// Bar fill colors
    pub colors: BarColors,
    /// Ticks replacing the numeric y labels
    pub y_ticks: Option<TickMarks>,
}

/// Input of the scatter renderer: several x sequences against one y sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    /// One x sequence per plotted series
    pub x_series: Vec<Vec<f64>>,
    /// Y values shared by every series
    pub y: Vec<f64>,
    /// Legend label per series
    pub labels: Vec<String>,
}

/// Parse a configured color name, naming the setting on failure.
pub fn resolve_color(setting: &str, value: &str) -> Result<Rgb> {
    parse_color(value)
        .ok_or_else(|| AvocadoError::config(format!("{setting}: unknown color '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_colors_cycle() {
        let colors = BarColors::PerBar(vec![Rgb(1, 0, 0), Rgb(2, 0, 0)]);
        assert_eq!(colors.color_for(0), Some(Rgb(1, 0, 0)));
        assert_eq!(colors.color_for(3), Some(Rgb(2, 0, 0)));
        assert_eq!(BarColors::PerBar(vec![]).color_for(0), None);
        assert_eq!(BarColors::Single(Rgb(9, 9, 9)).color_for(42), Some(Rgb(9, 9, 9)));
    }

    #[test]
    fn test_chart_config_from_canvas() {
        let canvas = CanvasConfig {
            width: 640,
            background: "black".to_string(),
            ..CanvasConfig::default()
        };
        let config = ChartConfig::from_canvas(&canvas, "T", "X", "Y").unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.style.background, Rgb(0, 0, 0));
        assert_eq!(config.style.title_font.size, canvas.title_font_size);
    }

    #[test]
    fn test_series_style_deserializes_lowercase() {
        let style: SeriesStyle =
            toml::from_str("label = \"a\"\nmarker = \"triangle\"\nline_style = \"dashed\"")
                .unwrap();
        assert_eq!(style.marker, Some(Marker::Triangle));
        assert_eq!(style.line_style, Some(LineStyle::Dashed));
        assert!(style.color.is_none());
    }

    #[test]
    fn test_resolve_color_names_setting() {
        let err = resolve_color("colors[2]", "nope").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("colors[2]"));
    }
}
