//! Running summaries for measurement streams
//!
//! This module provides accumulators that summarize a stream of numeric
//! observations in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use seriespod::statistics::SeriesPod;
//!
//! let mut pod = SeriesPod::new("pressure");
//!
//! for value in [101.2, 101.9, 100.7] {
//!     pod.add(value);
//! }
//!
//! println!("{}", pod);
//! println!("Mean: {:?}", pod.mean());
//! println!("Range: {:?}", pod.range());
//! println!("Window: {:?} s", pod.duration_secs());
//! ```

mod pod;

pub use pod::{SeriesPod, UNLABELED};
