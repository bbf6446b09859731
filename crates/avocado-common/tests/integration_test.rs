//! Integration tests for avocado-common crate.
//!
//! These tests verify the shared record type against CSV input and the
//! error conversions the other crates rely on.

use avocado_common::{parse_color, AvocadoError, ProduceType, RawRecord, Rgb, REQUIRED_COLUMNS};
use proptest::prelude::*;
use std::error::Error;

#[test]
fn test_record_deserializes_from_dataset_row() {
    let csv = "\
,Date,AveragePrice,Total Volume,4046,4225,4770,Total Bags,Small Bags,Large Bags,XLarge Bags,type,year,region
0,2015-12-27,1.33,64236.62,1036.74,54454.85,48.16,8696.87,8603.62,93.25,0.0,conventional,2015,Albany
";
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let records: Vec<RawRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.produce_type(), Some(ProduceType::Conventional));
    assert_eq!(record.year, 2015);
    assert_eq!(record.region, "Albany");
    assert!((record.average_price - 1.33).abs() < 1e-9);
    assert!((record.total_volume - 64236.62).abs() < 1e-9);
    assert!((record.small_bags - 8603.62).abs() < 1e-9);
    assert!((record.large_bags - 93.25).abs() < 1e-9);
    assert!(record.xlarge_bags.abs() < 1e-9);
}

#[test]
fn test_malformed_value_becomes_data_error() {
    let mut csv = REQUIRED_COLUMNS.join(",");
    csv.push_str("\norganic,twenty-fifteen,Albany,1.0,1.0,1.0,1.0,1.0\n");
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let csv_error = reader
        .deserialize::<RawRecord>()
        .next()
        .unwrap()
        .unwrap_err();

    let error = AvocadoError::from(csv_error);
    assert!(error.is_data());
    assert!(error.to_string().contains("line 2"));
    assert!(error.source().is_some());
}

proptest! {
    #[test]
    fn hex_colors_round_trip_through_parser(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("#{r:02X}{g:02X}{b:02X}");
        prop_assert_eq!(parse_color(&hex), Some(Rgb(r, g, b)));
    }
}
