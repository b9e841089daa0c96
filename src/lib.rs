//! # Seriespod
//!
//! Constant-memory running summaries for labeled measurement streams.
//!
//! A [`SeriesPod`] ingests numeric observations one at a time and keeps a
//! running description of the series so far — count, incremental mean,
//! extrema, first and most recent value, and the wall-clock instants
//! behind them — without retaining any individual observation. State
//! stays O(1) however long the stream runs, which makes the pod a
//! building block for telemetry, monitoring, and measurement-summary
//! pipelines.
//!
//! ## Quick Start
//!
//! ```rust
//! use seriespod::prelude::*;
//!
//! let mut pod = SeriesPod::new("sensor-3 temperature");
//!
//! for reading in [21.4, 21.9, 21.2, 22.1] {
//!     pod.add(reading);
//! }
//!
//! println!("{}", pod); // "sensor-3 temperature : <mean> ± <half-range>"
//! assert_eq!(pod.len(), 4);
//! assert_eq!(pod.max(), Some(22.1));
//! ```
//!
//! ## Behavior notes
//!
//! - NaN observations are rejected silently; infinities are accepted.
//! - The sample counter saturates at `u64::MAX - 1` instead of wrapping;
//!   observations past the ceiling are dropped silently.
//! - Every accessor is total: nothing in this crate returns an error.
//! - Observation timestamps come from an injected [`clock::Clock`], so
//!   time-dependent behavior is testable with
//!   [`clock::ManualClock`].
//!
//! ## Feature Flags
//!
//! - `serde`: serialization of pod snapshots

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod statistics;
pub mod traits;

pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::statistics::SeriesPod;
    pub use crate::traits::{Accumulator, SummaryStats};
}

pub use statistics::SeriesPod;
