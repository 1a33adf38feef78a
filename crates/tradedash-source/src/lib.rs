//! # Tradedash Source
//!
//! Dataset origin resolution for the tradedash portfolio dashboard.
//!
//! A dataset is resolved from exactly one of three mutually exclusive
//! origins:
//!
//! - **Remote**: a named file fetched from the configured repository with a
//!   bounded timeout; failures are classified ([`FetchError`]) and carried
//!   as data, never raised past the resolver
//! - **Upload**: user-supplied CSV bytes, or a neutral awaiting-input halt
//!   when none have been supplied
//! - **Sample**: fixed, deterministic rows that cannot fail
//!
//! ## Quick Start
//!
//! ```rust
//! use tradedash_source::{resolve, Origin, RemoteConfig, Resolution};
//!
//! let config = RemoteConfig::new("trader");
//! match resolve(&Origin::Sample, &config).unwrap() {
//!     Resolution::Resolved(dataset) => assert_eq!(dataset.row_count(), 3),
//!     _ => unreachable!("the sample origin always resolves"),
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - remote repository coordinates and fetch settings
//! - [`remote`] - named-file convention and HTTP fetch
//! - [`resolver`] - origin selection and resolution
//! - [`sample`] - built-in datasets and sample-file generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod remote;
pub mod resolver;
pub mod sample;

// Re-export error types at crate root
pub use error::{FetchError, SourceError, SourceResult};

// Re-export main types
pub use config::RemoteConfig;
pub use remote::{fetch_csv, fetch_remote, RemoteFile};
pub use resolver::{resolve, Origin, Resolution};
pub use sample::{fallback_row, generate_sample_csv, sample_file_dataset, sample_portfolio};
