//! Reading the avocado dataset into memory

use avocado_common::{AvocadoError, RawRecord, Result, REQUIRED_COLUMNS};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Load every record of the CSV dataset at `path`.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        AvocadoError::data_with_source(format!("Failed to open dataset '{}'", path.display()), e)
    })?;

    let records = read_records(BufReader::new(file))?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read CSV records from any reader.
///
/// Fails with a data error when a required column is absent, when a value
/// cannot be parsed, or when the input has no data rows.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(AvocadoError::data_field(
                format!("Dataset is missing required column '{column}'"),
                column,
            ));
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        let record = row.map_err(|err| {
            let field = match err.kind() {
                csv::ErrorKind::Deserialize { err: de, .. } => de
                    .field()
                    .and_then(|i| headers.get(usize::try_from(i).ok()?))
                    .map(str::to_string),
                _ => None,
            };
            AvocadoError::Data {
                message: format!("Malformed value in data row {}", index + 1),
                field,
                source: Some(Box::new(err)),
            }
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(AvocadoError::data("Dataset contains no records"));
    }

    debug!("Parsed {} dataset rows", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use avocado_common::test_utils::record_fixtures::{records_to_csv, sample_records};

    #[test]
    fn test_reads_fixture_csv() {
        let expected = sample_records();
        let csv = records_to_csv(&expected);
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), expected.len());
        assert_eq!(records[0].region, expected[0].region);
        assert_eq!(records[5].kind, expected[5].kind);
    }

    #[test]
    fn test_missing_column_is_named() {
        let csv = "type,year,region,AveragePrice,Small Bags,Large Bags,XLarge Bags\n\
                   organic,2015,Albany,1.0,1.0,1.0,1.0\n";
        let err = read_records(csv.as_bytes()).unwrap_err();

        assert!(err.is_data());
        assert_eq!(err.field(), Some("Total Volume"));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv = format!("{}\n", REQUIRED_COLUMNS.join(","));
        let err = read_records(csv.as_bytes()).unwrap_err();

        assert!(err.is_data());
        assert!(err.to_string().contains("no records"));
    }

    #[test]
    fn test_blank_value_reports_column() {
        let csv = format!(
            "{}\norganic,2015,Albany,1.0,,1.0,1.0,1.0\n",
            REQUIRED_COLUMNS.join(",")
        );
        let err = read_records(csv.as_bytes()).unwrap_err();

        assert!(err.is_data());
        assert!(err.to_string().contains("data row 1"));
        assert_eq!(err.field(), Some("Total Volume"));
    }

    #[test]
    fn test_missing_file_is_data_error() {
        let err = load_records("/no/such/avocado.csv").unwrap_err();
        assert!(err.is_data());
    }
}
