//! Dataset record types shared by the loader, aggregators and fixtures.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// CSV column names a dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "type",
    "year",
    "region",
    "AveragePrice",
    "Total Volume",
    "Small Bags",
    "Large Bags",
    "XLarge Bags",
];

/// One row of the avocado sales dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Produce category, normally `organic` or `conventional`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Sales year.
    pub year: i32,
    /// Sales region.
    pub region: String,
    /// Average price of a single avocado.
    #[serde(rename = "AveragePrice")]
    pub average_price: f64,
    /// Total number of avocados sold.
    #[serde(rename = "Total Volume")]
    pub total_volume: f64,
    /// Small bags sold.
    #[serde(rename = "Small Bags")]
    pub small_bags: f64,
    /// Large bags sold.
    #[serde(rename = "Large Bags")]
    pub large_bags: f64,
    /// Extra large bags sold.
    #[serde(rename = "XLarge Bags")]
    pub xlarge_bags: f64,
}

impl RawRecord {
    /// The record's produce type, if it is one of the known categories.
    pub fn produce_type(&self) -> Option<ProduceType> {
        self.kind.parse().ok()
    }
}

/// Known produce categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProduceType {
    /// Conventionally grown avocados.
    Conventional,
    /// Organically grown avocados.
    Organic,
}

/// Error returned when a type string is not a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown produce type '{0}'")]
pub struct UnknownProduceType(pub String);

impl FromStr for ProduceType {
    type Err = UnknownProduceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conventional" => Ok(Self::Conventional),
            "organic" => Ok(Self::Organic),
            other => Err(UnknownProduceType(other.to_string())),
        }
    }
}
