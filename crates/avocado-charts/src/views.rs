//! Aggregated, read-only views derived from the raw records

use avocado_common::ProduceType;

/// Mean average price of one produce type in one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyPrice {
    /// Calendar year
    pub year: i32,
    /// Mean of the records' average prices for the year
    pub average_price: f64,
}

/// Yearly mean prices, one sequence per produce type, each ordered by year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTrendView {
    /// Organic prices by ascending year
    pub organic: Vec<YearlyPrice>,
    /// Conventional prices by ascending year
    pub conventional: Vec<YearlyPrice>,
}

impl PriceTrendView {
    /// The sequence for one produce type.
    pub fn series(&self, produce_type: ProduceType) -> &[YearlyPrice] {
        match produce_type {
            ProduceType::Organic => &self.organic,
            ProduceType::Conventional => &self.conventional,
        }
    }
}

/// Summed total volume of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionVolume {
    /// Region name
    pub region: String,
    /// Sum of the region's total volume for the year
    pub total_volume: f64,
}

/// The least-selling regions of a year, ascending by volume.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalVolumeView {
    /// Year the volumes were summed for
    pub year: i32,
    /// Regions by ascending volume
    pub regions: Vec<RegionVolume>,
}

impl RegionalVolumeView {
    /// Region names in view order.
    pub fn labels(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.region.clone()).collect()
    }

    /// Volumes in view order, divided by `divisor`.
    pub fn scaled_volumes(&self, divisor: f64) -> Vec<f64> {
        self.regions.iter().map(|r| r.total_volume / divisor).collect()
    }
}

/// Row-level bag counts alongside each row's total volume.
///
/// All four sequences have one entry per input record, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BagCategoryView {
    /// Small bag count per record
    pub small_bags: Vec<f64>,
    /// Large bag count per record
    pub large_bags: Vec<f64>,
    /// Extra large bag count per record
    pub xlarge_bags: Vec<f64>,
    /// Total volume per record
    pub total_volume: Vec<f64>,
}

impl BagCategoryView {
    /// Number of rows in the view.
    pub fn len(&self) -> usize {
        self.total_volume.len()
    }

    /// Whether the view has no rows.
    pub fn is_empty(&self) -> bool {
        self.total_volume.is_empty()
    }

    /// Small, large and extra large bag counts, in that order.
    pub fn bag_series(&self) -> [&[f64]; 3] {
        [&self.small_bags, &self.large_bags, &self.xlarge_bags]
    }
}
