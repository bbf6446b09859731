//! Integration tests for avocado-config crate.
//!
//! These tests verify loading and validation of the report configuration
//! from TOML files.

use avocado_common::test_utils::create_temp_dir;
use avocado_config::{ConfigLoader, ReportConfig};
use std::path::PathBuf;

#[test]
fn test_load_from_file_applies_overrides() {
    let dir = create_temp_dir();
    let path = dir.path().join("report.toml");
    std::fs::write(
        &path,
        r##"
[output]
line_chart = "out/prices.png"

[regional_volume]
colors = ["#336699"]

[logging]
level = "debug"
"##,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();

    let mut expected = ReportConfig::default();
    expected.output.line_chart = PathBuf::from("out/prices.png");
    expected.regional_volume.colors = vec!["#336699".to_string()];
    expected.logging.level = "debug".to_string();
    assert_eq!(config, expected);

    let loader = ConfigLoader::new(&path);
    assert_eq!(loader.path(), path.as_path());
    assert_eq!(loader.load().unwrap(), expected);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = create_temp_dir();
    let path = dir.path().join("report.toml");
    std::fs::write(&path, "[canvas]\nbackground = \"not-a-color\"\n").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("canvas.background"));
}

#[test]
fn test_empty_document_is_default() {
    let config = ConfigLoader::from_toml_str("").unwrap();
    assert_eq!(config, ReportConfig::default());
}
