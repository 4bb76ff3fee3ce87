//! Serial implementation of the distance pass

use crate::float_types::Real;
use crate::kdtree::NearestNeighbor;
use crate::sampler::SampleTable;
use crate::scorer::traits::DistanceOps;

/// Measures samples one after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialDistanceOps;

impl SerialDistanceOps {
    pub const fn new() -> Self {
        Self
    }
}

impl DistanceOps for SerialDistanceOps {
    fn distances<I: NearestNeighbor + Sync>(&self, attempt: &SampleTable, index: &I) -> Vec<Real> {
        attempt
            .iter()
            .map(|sample| index.nearest_distance(&sample.position))
            .collect()
    }
}
