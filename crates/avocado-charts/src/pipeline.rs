//! Report pipeline wiring each view to its renderer

use crate::aggregator::{
    BagCategoryAggregator, DataAggregator, PriceTrendAggregator, RegionalVolumeAggregator,
};
use crate::bar_chart::BarChart;
use crate::dataset;
use crate::line_chart::LineChart;
use crate::renderer::ChartRenderer;
use crate::scatter_chart::ScatterChart;
use crate::types::{
    resolve_color, BarColors, BarData, ChartConfig, LineSeriesData, ScatterData, SeriesStyle,
    TickMarks,
};
use crate::views::{BagCategoryView, PriceTrendView, RegionalVolumeView, YearlyPrice};
use avocado_common::{RawRecord, Result};
use avocado_config::ReportConfig;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Produces the three report charts from a validated configuration.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: ReportConfig,
}

impl ReportPipeline {
    /// Create a pipeline, rejecting an invalid configuration.
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Read the configured dataset.
    pub fn load_records(&self) -> Result<Vec<RawRecord>> {
        dataset::load_records(&self.config.input.path)
    }

    /// Render the price trend, regional volume and bag category charts in
    /// that order, returning the written paths.
    ///
    /// A failure stops the run. Charts already written are left in place.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn run(&self, records: &[RawRecord]) -> Result<Vec<PathBuf>> {
        let paths = vec![
            self.render_price_trend(records)?,
            self.render_regional_volume(records)?,
            self.render_bag_categories(records)?,
        ];
        info!("Report complete: {} charts written", paths.len());
        Ok(paths)
    }

    /// Aggregate the price trend and write the line chart.
    pub fn render_price_trend(&self, records: &[RawRecord]) -> Result<PathBuf> {
        let view = PriceTrendAggregator::new().aggregate(records)?;
        let series = self.price_trend_series(&view)?;
        let path = self.config.output.line_chart.clone();
        self.line_chart()?.render_to_file(&series, &path)?;
        Ok(path)
    }

    /// Aggregate the configured year's least-selling regions and write the bar chart.
    pub fn render_regional_volume(&self, records: &[RawRecord]) -> Result<PathBuf> {
        let view = RegionalVolumeAggregator::from(&self.config.regional_volume).aggregate(records)?;
        let bars = self.regional_volume_bars(&view)?;
        let path = self.config.output.bar_chart.clone();
        self.bar_chart()?.render_to_file(&bars, &path)?;
        Ok(path)
    }

    /// Extract bag counts and write the scatter chart.
    pub fn render_bag_categories(&self, records: &[RawRecord]) -> Result<PathBuf> {
        let view = BagCategoryAggregator::new().aggregate(records)?;
        let data = self.bag_category_points(&view);
        let path = self.config.output.scatter_chart.clone();
        self.scatter_chart()?.render_to_file(&data, &path)?;
        Ok(path)
    }

    /// Line renderer for the price trend.
    pub fn line_chart(&self) -> Result<LineChart> {
        let settings = &self.config.price_trend;
        let config = ChartConfig::from_canvas(
            &self.config.canvas,
            &settings.title,
            &settings.x_label,
            &settings.y_label,
        )?;
        Ok(LineChart::new(config))
    }

    /// Bar renderer for the regional volumes.
    pub fn bar_chart(&self) -> Result<BarChart> {
        let settings = &self.config.regional_volume;
        let config = ChartConfig::from_canvas(
            &self.config.canvas,
            &settings.title,
            &settings.x_label,
            &settings.y_label,
        )?;
        Ok(BarChart::new(config))
    }

    /// Scatter renderer for the bag categories.
    pub fn scatter_chart(&self) -> Result<ScatterChart> {
        let settings = &self.config.bag_categories;
        let config = ChartConfig::from_canvas(
            &self.config.canvas,
            &settings.title,
            &settings.x_label,
            &settings.y_label,
        )?;
        Ok(ScatterChart::new(config).with_alpha(settings.alpha))
    }

    /// Organic and conventional series, years on x.
    pub fn price_trend_series(&self, view: &PriceTrendView) -> Result<Vec<LineSeriesData>> {
        let settings = &self.config.price_trend;
        let organic = resolve_color("price_trend.organic_color", &settings.organic_color)?;
        let conventional =
            resolve_color("price_trend.conventional_color", &settings.conventional_color)?;

        Ok(vec![
            yearly_series(&view.organic)
                .with_style(SeriesStyle::labelled(&settings.organic_label, organic)),
            yearly_series(&view.conventional)
                .with_style(SeriesStyle::labelled(&settings.conventional_label, conventional)),
        ])
    }

    /// Region bars with volumes divided by the configured divisor.
    pub fn regional_volume_bars(&self, view: &RegionalVolumeView) -> Result<BarData> {
        let settings = &self.config.regional_volume;
        let colors = settings
            .colors
            .iter()
            .map(|c| resolve_color("regional_volume.colors", c))
            .collect::<Result<Vec<_>>>()?;

        Ok(BarData {
            labels: view.labels(),
            values: view.scaled_volumes(settings.volume_divisor),
            colors: BarColors::PerBar(colors),
            y_ticks: Some(TickMarks {
                positions: settings.y_ticks.clone(),
                labels: settings.y_tick_labels.clone(),
            }),
        })
    }

    /// Small, large and extra large bag counts against total volume.
    pub fn bag_category_points(&self, view: &BagCategoryView) -> ScatterData {
        ScatterData {
            x_series: view.bag_series().iter().map(|s| s.to_vec()).collect(),
            y: view.total_volume.clone(),
            labels: self.config.bag_categories.series_labels.to_vec(),
        }
    }
}

fn yearly_series(prices: &[YearlyPrice]) -> LineSeriesData {
    LineSeriesData::new(
        prices.iter().map(|p| f64::from(p.year)).collect(),
        prices.iter().map(|p| p.average_price).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::RegionVolume;
    use avocado_common::test_utils::RecordBuilder;

    fn pipeline_in(dir: &std::path::Path) -> ReportPipeline {
        let mut config = ReportConfig::default();
        config.canvas.width = 400;
        config.canvas.height = 400;
        config.output.line_chart = dir.join("line.jpg");
        config.output.bar_chart = dir.join("bar.jpg");
        config.output.scatter_chart = dir.join("scatter.jpg");
        ReportPipeline::new(config).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = ReportConfig::default();
        config.regional_volume.limit = 0;
        assert!(ReportPipeline::new(config).unwrap_err().is_config());
    }

    #[test]
    fn test_bars_are_scaled_and_ticked() {
        let pipeline = ReportPipeline::new(ReportConfig::default()).unwrap();
        let view = RegionalVolumeView {
            year: 2015,
            regions: vec![
                RegionVolume { region: "A".into(), total_volume: 1_500_000.0 },
                RegionVolume { region: "B".into(), total_volume: 2_000_000.0 },
            ],
        };

        let bars = pipeline.regional_volume_bars(&view).unwrap();

        assert_eq!(bars.values, vec![1500.0, 2000.0]);
        let ticks = bars.y_ticks.unwrap();
        assert_eq!(ticks.positions.first(), Some(&1000.0));
        assert_eq!(ticks.labels.last().map(String::as_str), Some("8M"));
    }

    #[test]
    fn test_price_series_are_labelled() {
        let pipeline = ReportPipeline::new(ReportConfig::default()).unwrap();
        let records = vec![
            RecordBuilder::new("organic", 2015).price(1.0).build(),
            RecordBuilder::new("conventional", 2015).price(2.0).build(),
        ];
        let view = PriceTrendAggregator::new().aggregate(&records).unwrap();

        let series = pipeline.price_trend_series(&view).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].x, vec![2015.0]);
        assert_eq!(series[1].y, vec![2.0]);
        assert!(series.iter().all(|s| s.style.label.is_some()));
    }

    #[test]
    fn test_run_writes_three_charts() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline_in(dir.path());
        let records = avocado_common::test_utils::record_fixtures::sample_records();

        let paths = pipeline.run(&records).unwrap();

        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert!(path.exists(), "{} was not written", path.display());
        }
    }

    #[test]
    fn test_run_stops_on_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline_in(dir.path());

        assert!(pipeline.run(&[]).unwrap_err().is_data());
        assert!(!dir.path().join("line.jpg").exists());
    }
}
