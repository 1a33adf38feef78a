//! # Tradedash Metrics
//!
//! Summary metrics for the tradedash portfolio dashboard.
//!
//! Given a non-empty dataset with `QTY` and `ENTRY PRICE` columns, computes
//! three scalar aggregates:
//!
//! - **Trade count** - number of rows
//! - **Total quantity** - exact sum of `QTY`
//! - **Total investment** - exact sum of `QTY x ENTRY PRICE`
//!
//! Preconditions are validated explicitly and surface as typed
//! [`MetricsError`]s; the summarizer never panics on a missing column.
//!
//! ## Quick Start
//!
//! ```rust
//! use tradedash_core::read_csv_bytes;
//! use tradedash_metrics::summarize;
//!
//! let csv = "STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n\
//!            Sample,2024-01-15,RELIANCE.NS,100,2500.50\n";
//! let dataset = read_csv_bytes(csv.as_bytes()).unwrap();
//! let summary = summarize(&dataset).unwrap();
//!
//! assert_eq!(summary.trade_count, 1);
//! assert_eq!(summary.total_investment_display(), "250,050.00");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod summary;

// Re-export error types at crate root
pub use error::{MetricsError, MetricsResult};

// Re-export main types
pub use summary::{summarize, validate_schema, PortfolioSummary};
