//! # Avocado Common
//!
//! Shared types, utilities, and common functionality for the avocado report.
//!
//! This crate provides the error type, logging setup, the raw dataset record
//! and color parsing used across all other crates in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use color::{parse_color, Rgb};
pub use error::{AvocadoError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use types::*;
