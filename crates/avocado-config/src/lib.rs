//! # Avocado Config
//!
//! Type-safe configuration for the avocado report.
//!
//! Every setting has a compiled-in default reproducing the report's fixed
//! titles, colors, ticks and file names, so a run needs no configuration
//! file. Library callers can still parse and validate TOML overrides.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
