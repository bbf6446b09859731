//! Error types and utilities for the avocado report

use thiserror::Error;

/// Result type alias for avocado report operations
pub type Result<T> = std::result::Result<T, AvocadoError>;

/// Main error type for avocado report operations
#[derive(Error, Debug)]
pub enum AvocadoError {
    /// Missing or malformed input data, or an empty dataset
    #[error("Data error: {message}")]
    Data {
        /// Description of what was wrong
        message: String,
        /// Column or field that failed, when known
        field: Option<String>,
        /// Underlying parse or read error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Mismatched chart parameters or an invalid report configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what was wrong
        message: String,
        /// Underlying parse or read error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart drawing or image encoding errors
    #[error("Render error: {message}")]
    Render {
        /// Description of what was wrong
        message: String,
        /// Underlying drawing or encoding error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AvocadoError {
    /// Create a new data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            field: None,
            source: None,
        }
    }

    /// Create a new data error naming the offending field
    pub fn data_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            field: Some(field.into()),
            source: None,
        }
    }

    /// Create a new data error with source
    pub fn data_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Data {
            message: msg.into(),
            field: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this is a data error
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    /// Whether this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// The field a data error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Data { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to AvocadoError
impl From<csv::Error> for AvocadoError {
    fn from(err: csv::Error) -> Self {
        let message = match err.position() {
            Some(position) => format!("Malformed record at line {}", position.line()),
            None => "Malformed CSV input".to_string(),
        };
        Self::data_with_source(message, err)
    }
}

/// Convert from toml::de::Error to AvocadoError
impl From<toml::de::Error> for AvocadoError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to AvocadoError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for AvocadoError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Chart rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let data_error = AvocadoError::data("dataset is empty");
        assert!(data_error.to_string().contains("Data error"));
        assert!(data_error.to_string().contains("dataset is empty"));
        assert!(data_error.is_data());

        let config_error = AvocadoError::config("5 labels but 4 values");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.is_config());

        let field_error = AvocadoError::data_field("missing column", "Total Volume");
        assert_eq!(field_error.field(), Some("Total Volume"));
        assert!(config_error.field().is_none());
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = AvocadoError::render_with_source("Failed to save chart", io_error);

        assert!(wrapped_error.to_string().contains("Failed to save chart"));
        assert!(wrapped_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: AvocadoError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let error: AvocadoError = toml_error.into();

        assert!(error.is_config());
        assert!(error.to_string().contains("TOML parsing error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_csv_error_conversion() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("1,2\n3\n".as_bytes());
        let csv_error = reader
            .records()
            .find_map(std::result::Result::err)
            .expect("ragged rows should fail");
        let error: AvocadoError = csv_error.into();

        assert!(error.is_data());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_display_formatting() {
        let error = AvocadoError::config("missing field");
        assert_eq!(format!("{error}"), "Configuration error: missing field");

        let error = AvocadoError::render("backend closed");
        assert_eq!(format!("{error}"), "Render error: backend closed");
    }
}
