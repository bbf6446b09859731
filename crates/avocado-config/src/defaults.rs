//! Default values reproducing the report's fixed parameters.

use crate::schema::*;
use avocado_common::LoggingConfig;
use std::path::PathBuf;

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            canvas: CanvasConfig::default(),
            price_trend: PriceTrendConfig::default(),
            regional_volume: RegionalVolumeConfig::default(),
            bag_categories: BagCategoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("avocado.csv"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_chart: PathBuf::from("Avocado_line_plot.jpg"),
            bar_chart: PathBuf::from("Avocado_bar_plot.jpg"),
            scatter_chart: PathBuf::from("Avocado_scatter_plot.jpg"),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            background: "white".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 18,
            label_font_size: 14,
        }
    }
}

impl Default for PriceTrendConfig {
    fn default() -> Self {
        Self {
            title: "Organic vs Conventional Avocado Average Price, 2015-2018".to_string(),
            x_label: "Years".to_string(),
            y_label: "Average Price in $".to_string(),
            organic_label: "organic".to_string(),
            conventional_label: "conventional".to_string(),
            organic_color: "red".to_string(),
            conventional_color: "green".to_string(),
        }
    }
}

impl Default for RegionalVolumeConfig {
    fn default() -> Self {
        Self {
            title: "Ten Regions with least Avocado's sale".to_string(),
            x_label: "Regions".to_string(),
            y_label: "Total Volume Sold".to_string(),
            year: 2015,
            limit: 10,
            volume_divisor: 1000.0,
            colors: ["lightblue", "blue", "purple", "red", "green"]
                .into_iter()
                .map(String::from)
                .collect(),
            y_ticks: (1..=8).map(|m| f64::from(m) * 1000.0).collect(),
            y_tick_labels: (1..=8).map(|m| format!("{m}M")).collect(),
        }
    }
}

impl Default for BagCategoryConfig {
    fn default() -> Self {
        Self {
            title: "Comparison Between Different Categories of Avocado Bag sold".to_string(),
            x_label: "Number of Bags Sold".to_string(),
            y_label: "Total Volume Sold".to_string(),
            series_labels: [
                "Small Bags".to_string(),
                "Large Bags".to_string(),
                "XLarge Bags".to_string(),
            ],
            alpha: 0.6,
        }
    }
}
