//! Parallel implementation of the distance pass

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::float_types::Real;
use crate::kdtree::NearestNeighbor;
use crate::sampler::SampleTable;
use crate::scorer::traits::DistanceOps;

/// Measures samples across the rayon thread pool. Output order matches the
/// attempt table, so results equal the serial pass bit for bit.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelDistanceOps;

#[cfg(feature = "parallel")]
impl ParallelDistanceOps {
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(feature = "parallel")]
impl DistanceOps for ParallelDistanceOps {
    fn distances<I: NearestNeighbor + Sync>(&self, attempt: &SampleTable, index: &I) -> Vec<Real> {
        attempt
            .samples()
            .par_iter()
            .map(|sample| index.nearest_distance(&sample.position))
            .collect()
    }
}
