//! Integration tests for the dataset loader, aggregators and renderers

use avocado_charts::*;
use avocado_common::test_utils::record_fixtures::{records_to_csv, sample_records, REGIONS};
use avocado_common::test_utils::{init_test_logging, RecordBuilder};
use avocado_common::RawRecord;
use avocado_config::{RegionalVolumeConfig, ReportConfig};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = RawRecord> {
    (
        prop_oneof![Just("organic"), Just("conventional"), Just("other")],
        2015..2019i32,
        0..REGIONS.len(),
        0.5f64..3.0,
        0.0f64..1.0e7,
    )
        .prop_map(|(kind, year, region, price, volume)| {
            RecordBuilder::new(kind, year)
                .region(REGIONS[region])
                .price(price)
                .volume(volume)
                .bags(volume * 0.3, volume * 0.05, volume * 0.001)
                .build()
        })
}

proptest! {
    #[test]
    fn price_trend_years_are_strictly_increasing(records in prop::collection::vec(arb_record(), 1..80)) {
        let view = PriceTrendAggregator::new().aggregate(&records).unwrap();

        for series in [&view.organic, &view.conventional] {
            prop_assert!(series.windows(2).all(|w| w[0].year < w[1].year));
        }
    }

    #[test]
    fn regional_volume_is_bounded_and_ascending(
        records in prop::collection::vec(arb_record(), 1..80),
        year in 2015..2019i32,
    ) {
        let view = RegionalVolumeAggregator::with_year_and_limit(year, 10)
            .aggregate(&records)
            .unwrap();

        prop_assert!(view.regions.len() <= 10);
        prop_assert!(view
            .regions
            .windows(2)
            .all(|w| w[0].total_volume <= w[1].total_volume));
    }

    #[test]
    fn bag_categories_keep_row_count(records in prop::collection::vec(arb_record(), 1..80)) {
        let view = BagCategoryAggregator::new().aggregate(&records).unwrap();

        prop_assert_eq!(view.len(), records.len());
        for series in view.bag_series() {
            prop_assert_eq!(series.len(), records.len());
        }
    }
}

#[test]
fn test_fixture_dataset_end_to_end() {
    init_test_logging();

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("avocado.csv");
    std::fs::write(&csv_path, records_to_csv(&sample_records())).unwrap();

    let mut config = ReportConfig::default();
    config.input.path = csv_path;
    config.canvas.width = 500;
    config.canvas.height = 500;
    config.output.line_chart = dir.path().join("Avocado_line_plot.jpg");
    config.output.bar_chart = dir.path().join("Avocado_bar_plot.jpg");
    config.output.scatter_chart = dir.path().join("Avocado_scatter_plot.jpg");

    let pipeline = ReportPipeline::new(config).unwrap();
    let records = pipeline.load_records().unwrap();
    let paths = pipeline.run(&records).unwrap();

    assert_eq!(paths.len(), 3);
    for path in paths {
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0xFF, 0xD8]), "{} is not a JPEG", path.display());
    }
}

#[test]
fn test_regional_view_of_fixture() {
    let view = RegionalVolumeAggregator::from(&RegionalVolumeConfig::default())
        .aggregate(&sample_records())
        .unwrap();

    assert_eq!(view.regions.len(), 10);
    assert_eq!(view.regions[0].region, REGIONS[0]);
}

#[test]
fn test_renderers_are_idempotent() {
    let pipeline = ReportPipeline::new(ReportConfig {
        canvas: avocado_config::CanvasConfig {
            width: 300,
            height: 300,
            ..Default::default()
        },
        ..ReportConfig::default()
    })
    .unwrap();
    let records = sample_records();

    let view = RegionalVolumeAggregator::from(&pipeline.config().regional_volume)
        .aggregate(&records)
        .unwrap();
    let bars = pipeline.regional_volume_bars(&view).unwrap();
    let chart = pipeline.bar_chart().unwrap();
    assert_eq!(
        chart.render_to_bytes(&bars).unwrap(),
        chart.render_to_bytes(&bars).unwrap()
    );

    let view = PriceTrendAggregator::new().aggregate(&records).unwrap();
    let series = pipeline.price_trend_series(&view).unwrap();
    let chart = pipeline.line_chart().unwrap();
    assert_eq!(
        chart.render_to_bytes(&series).unwrap(),
        chart.render_to_bytes(&series).unwrap()
    );
}

#[test]
fn test_missing_column_fails_before_rendering() {
    let csv = "type,year,region,AveragePrice,Total Volume,Small Bags,Large Bags\n\
               organic,2015,Albany,1.0,10.0,1.0,1.0\n";
    let err = read_records(csv.as_bytes()).unwrap_err();

    assert!(err.is_data());
    assert_eq!(err.field(), Some("XLarge Bags"));
}
