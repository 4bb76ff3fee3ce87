//! **Epicycle curve engine**: rotating vectors ("spinners") whose sum traces a
//! closed 2D curve, scored against a target curve with a k-d tree and timed by
//! arc length for constant-speed playback.
//!
//! ```
//! use epicyclic::{KdTree, SampleTable, Scorer, Spinner};
//!
//! let solution = [Spinner::new(0.6, 1, 0.0), Spinner::new(0.2, -1, 0.0)];
//! let attempt = [Spinner::new(0.6, 1, 0.0), Spinner::new(0.25, -1, 0.0)];
//!
//! let target = SampleTable::sample(&solution, 200);
//! let index = KdTree::build(&target.positions()).unwrap();
//! let result = Scorer::default()
//!     .score(&SampleTable::sample(&attempt, 200), &index)
//!     .unwrap();
//! assert!(result.score > 0.5 && result.score < 1.0);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **geo-io**: export sampled curves as [`geo`](https://crates.io/crates/geo) line strings
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for the distance pass and large k-d tree builds

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod arc_length;
pub mod errors;
pub mod float_types;
pub mod kdtree;
pub mod sampler;
pub mod scorer;
pub mod solution;
pub mod spinner;
pub mod spinner_set;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use arc_length::{TimingTable, WindowTables};
pub use errors::{EpicycleError, Result};
pub use kdtree::{KdTree, LinearIndex, NearestNeighbor};
pub use sampler::{Sample, SampleTable};
pub use scorer::{DEFAULT_SCORE_THRESHOLD, ScoreResult, Scorer};
pub use solution::Solution;
pub use spinner::Spinner;
pub use spinner_set::SpinnerSet;
