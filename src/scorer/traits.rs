//! Traits defining the distance pass for dependency inversion

use crate::float_types::Real;
use crate::kdtree::NearestNeighbor;
use crate::sampler::SampleTable;

/// Measures every attempt sample against a solution index.
pub trait DistanceOps {
    /// Euclidean distance from each attempt position to its nearest indexed
    /// point, in attempt order.
    fn distances<I: NearestNeighbor + Sync>(&self, attempt: &SampleTable, index: &I) -> Vec<Real>;
}
