//! Data aggregation for turning raw records into chart views

use crate::views::{
    BagCategoryView, PriceTrendView, RegionVolume, RegionalVolumeView, YearlyPrice,
};
use avocado_common::{AvocadoError, ProduceType, RawRecord, Result};
use avocado_config::RegionalVolumeConfig;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument, warn};

/// Trait for aggregating records into a specific view
pub trait DataAggregator<T> {
    /// Process raw records and return the aggregated view
    fn aggregate(&self, records: &[RawRecord]) -> Result<T>;
}

fn ensure_not_empty(records: &[RawRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(AvocadoError::data("Cannot aggregate an empty dataset"));
    }
    Ok(())
}

/// Aggregator for mean average price per produce type and year
#[derive(Debug, Default)]
pub struct PriceTrendAggregator;

impl PriceTrendAggregator {
    /// Create the aggregator.
    pub fn new() -> Self {
        Self
    }
}

impl DataAggregator<PriceTrendView> for PriceTrendAggregator {
    /// Records whose type is neither organic nor conventional are left out
    /// of both sequences.
    #[instrument(skip_all, fields(records = records.len()))]
    fn aggregate(&self, records: &[RawRecord]) -> Result<PriceTrendView> {
        ensure_not_empty(records)?;

        // Keyed by (type, year) so iteration yields each type's years in order.
        let mut groups: BTreeMap<(ProduceType, i32), (f64, u32)> = BTreeMap::new();
        let mut excluded = 0usize;

        for record in records {
            match record.produce_type() {
                Some(produce_type) => {
                    let (sum, count) = groups
                        .entry((produce_type, record.year))
                        .or_insert((0.0, 0));
                    *sum += record.average_price;
                    *count += 1;
                }
                None => excluded += 1,
            }
        }

        if excluded > 0 {
            warn!(excluded, "Excluded records with unrecognized type from price trend");
        }

        let mut view = PriceTrendView::default();
        for ((produce_type, year), (sum, count)) in groups {
            let point = YearlyPrice {
                year,
                average_price: sum / f64::from(count),
            };
            match produce_type {
                ProduceType::Organic => view.organic.push(point),
                ProduceType::Conventional => view.conventional.push(point),
            }
        }

        debug!(
            "Aggregated {} organic and {} conventional yearly prices",
            view.organic.len(),
            view.conventional.len()
        );
        Ok(view)
    }
}

/// Aggregator for the least-selling regions of one year
#[derive(Debug)]
pub struct RegionalVolumeAggregator {
    /// Year whose volumes are compared
    pub year: i32,
    /// Maximum number of regions to return
    pub limit: usize,
}

impl RegionalVolumeAggregator {
    /// Aggregator for the given year, keeping at most `limit` regions.
    pub fn with_year_and_limit(year: i32, limit: usize) -> Self {
        Self { year, limit }
    }
}

impl From<&RegionalVolumeConfig> for RegionalVolumeAggregator {
    fn from(config: &RegionalVolumeConfig) -> Self {
        Self::with_year_and_limit(config.year, config.limit)
    }
}

impl DataAggregator<RegionalVolumeView> for RegionalVolumeAggregator {
    #[instrument(skip_all, fields(records = records.len(), year = self.year, limit = self.limit))]
    fn aggregate(&self, records: &[RawRecord]) -> Result<RegionalVolumeView> {
        ensure_not_empty(records)?;

        let mut region_totals: HashMap<&str, f64> = HashMap::new();
        for record in records.iter().filter(|r| r.year == self.year) {
            *region_totals.entry(record.region.as_str()).or_insert(0.0) += record.total_volume;
        }

        if region_totals.is_empty() {
            warn!("No records found for year {}", self.year);
        }

        let mut regions: Vec<RegionVolume> = region_totals
            .into_iter()
            .map(|(region, total_volume)| RegionVolume {
                region: region.to_string(),
                total_volume,
            })
            .collect();

        // Sort by volume ascending, region name breaks ties, keep the first N
        regions.sort_by(|a, b| {
            a.total_volume
                .total_cmp(&b.total_volume)
                .then_with(|| a.region.cmp(&b.region))
        });
        regions.truncate(self.limit);

        debug!("Aggregated {} regional volume entries", regions.len());
        Ok(RegionalVolumeView {
            year: self.year,
            regions,
        })
    }
}

/// Row-level extraction of bag counts and total volume
#[derive(Debug, Default)]
pub struct BagCategoryAggregator;

impl BagCategoryAggregator {
    /// Create the aggregator.
    pub fn new() -> Self {
        Self
    }
}

impl DataAggregator<BagCategoryView> for BagCategoryAggregator {
    #[instrument(skip_all, fields(records = records.len()))]
    fn aggregate(&self, records: &[RawRecord]) -> Result<BagCategoryView> {
        ensure_not_empty(records)?;

        let mut view = BagCategoryView {
            small_bags: Vec::with_capacity(records.len()),
            large_bags: Vec::with_capacity(records.len()),
            xlarge_bags: Vec::with_capacity(records.len()),
            total_volume: Vec::with_capacity(records.len()),
        };
        for record in records {
            view.small_bags.push(record.small_bags);
            view.large_bags.push(record.large_bags);
            view.xlarge_bags.push(record.xlarge_bags);
            view.total_volume.push(record.total_volume);
        }

        Ok(view)
    }
}
