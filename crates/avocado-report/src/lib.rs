//! # Avocado Report
//!
//! Generates the avocado sales chart report: reads the dataset once and
//! writes the price trend, regional volume and bag category charts.
//!
//! This is the binary crate. The library half exposes [`report::run`] so the
//! whole report can be driven from tests with a custom configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod report;

pub use report::*;
