//! # Tradedash Core
//!
//! Dataset model and CSV codec for the tradedash portfolio dashboard.
//!
//! ## Design Philosophy
//!
//! - **Pure values**: a [`Dataset`] is constructed once per render pass,
//!   held for its duration, and discarded - no caching or persistence
//! - **Typed cells**: fields are parsed into integer, decimal, text, or
//!   empty cells; numeric aggregation uses exact [`rust_decimal`] arithmetic
//! - **Explicit emptiness**: [`Dataset::empty`] is a valid sentinel value,
//!   distinguishable from "not yet loaded"
//!
//! ## Module Overview
//!
//! - [`dataset`] - `Dataset` and `Cell` types
//! - [`csv_io`] - CSV decode/encode
//! - [`schema`] - portfolio column-name constants
//! - [`formatting`] - currency/quantity display helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use tradedash_core::{read_csv_bytes, schema};
//!
//! let csv = "STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n\
//!            Momentum,2024-01-15,RELIANCE.NS,100,2500.50\n";
//! let dataset = read_csv_bytes(csv.as_bytes()).unwrap();
//!
//! assert_eq!(dataset.row_count(), 1);
//! assert!(dataset.has_column(schema::QTY));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod csv_io;
pub mod dataset;
pub mod error;
pub mod formatting;
pub mod schema;

// Re-export error types at crate root
pub use error::{CoreResult, DatasetError};

// Re-export main types
pub use csv_io::{read_csv, read_csv_bytes, write_csv};
pub use dataset::{Cell, Dataset};
pub use formatting::{format_currency, format_quantity};
