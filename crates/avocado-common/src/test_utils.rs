//! Test utilities and shared test helpers for the avocado report.
//!
//! This module provides record builders, CSV fixtures and helper functions
//! that can be used across all crates in the workspace for unit and
//! integration testing.

use crate::types::{RawRecord, REQUIRED_COLUMNS};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Builder for dataset rows with neutral defaults.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: RawRecord,
}

impl RecordBuilder {
    /// Start a record of the given type and year in the "Albany" region.
    pub fn new(kind: &str, year: i32) -> Self {
        Self {
            record: RawRecord {
                kind: kind.to_string(),
                year,
                region: "Albany".to_string(),
                average_price: 1.0,
                total_volume: 0.0,
                small_bags: 0.0,
                large_bags: 0.0,
                xlarge_bags: 0.0,
            },
        }
    }

    /// Set the region.
    pub fn region(mut self, region: &str) -> Self {
        self.record.region = region.to_string();
        self
    }

    /// Set the average price.
    pub fn price(mut self, price: f64) -> Self {
        self.record.average_price = price;
        self
    }

    /// Set the total volume.
    pub fn volume(mut self, volume: f64) -> Self {
        self.record.total_volume = volume;
        self
    }

    /// Set the small, large and extra large bag counts.
    pub fn bags(mut self, small: f64, large: f64, xlarge: f64) -> Self {
        self.record.small_bags = small;
        self.record.large_bags = large;
        self.record.xlarge_bags = xlarge;
        self
    }

    /// Finish the record.
    pub fn build(self) -> RawRecord {
        self.record
    }
}

/// Dataset fixtures shaped like the real avocado data.
pub mod record_fixtures {
    use super::*;

    /// Region names used by the fixtures, twelve of them so top-N limits bite.
    pub const REGIONS: [&str; 12] = [
        "Albany",
        "Atlanta",
        "Boise",
        "Boston",
        "Chicago",
        "Denver",
        "Detroit",
        "Houston",
        "Nashville",
        "Portland",
        "Seattle",
        "Spokane",
    ];

    /// One record per region, type and year from 2015 to 2018.
    pub fn sample_records() -> Vec<RawRecord> {
        let mut records = Vec::new();
        for year in 2015..=2018 {
            for (i, region) in REGIONS.iter().enumerate() {
                let offset = i as f64;
                for kind in ["conventional", "organic"] {
                    let organic = kind == "organic";
                    let base_price = if organic { 1.6 } else { 1.1 };
                    let price = base_price + offset * 0.01;
                    let base_volume = if organic { 5_000.0 } else { 90_000.0 };
                    let volume = base_volume * (offset + 1.0) + f64::from(year - 2015) * 100.0;
                    records.push(
                        RecordBuilder::new(kind, year)
                            .region(region)
                            .price(price)
                            .volume(volume)
                            .bags(volume * 0.3, volume * 0.05, volume * 0.001)
                            .build(),
                    );
                }
            }
        }
        records
    }

    /// Render records as CSV with the dataset's column layout, including the
    /// extra columns the loader is expected to ignore.
    pub fn records_to_csv(records: &[RawRecord]) -> String {
        let mut out = String::from(",Date,");
        out.push_str(&REQUIRED_COLUMNS.join(","));
        out.push_str(",4046\n");
        for (i, r) in records.iter().enumerate() {
            out.push_str(&format!(
                "{i},{year}-12-27,{kind},{year},{region},{price},{volume},{small},{large},{xlarge},0\n",
                kind = r.kind,
                year = r.year,
                region = r.region,
                price = r.average_price,
                volume = r.total_volume,
                small = r.small_bags,
                large = r.large_bags,
                xlarge = r.xlarge_bags,
            ));
        }
        out
    }
}
