//! # Tradedash Engine
//!
//! Render-pass orchestration for the tradedash portfolio dashboard.
//!
//! The engine composes the source resolver and the metrics summarizer into
//! one synchronous pass per user interaction:
//!
//! ```text
//! selecting origin -> resolving -> {empty | populated}
//!     empty (remote)  -> fallback applied -> metrics -> display
//!     populated       -> metrics -> display
//!     upload, no file -> awaiting input (terminal)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tradedash_engine::{render, RenderOutcome};
//! use tradedash_source::{Origin, RemoteConfig};
//!
//! let config = RemoteConfig::new("trader");
//! match render(&Origin::Sample, &config).unwrap() {
//!     RenderOutcome::Rendered(view) => {
//!         assert_eq!(view.summary.trade_count, 3);
//!     }
//!     _ => unreachable!("the sample origin always renders"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod render;

// Re-export main types
pub use render::{render, RenderError, RenderOutcome, RenderedView, SourceNotice};
