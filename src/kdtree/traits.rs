//! Traits shared by nearest-neighbor indexes

use crate::float_types::Real;
use nalgebra::Point2;

/// A fixed, non-empty point set that answers closest-point queries.
pub trait NearestNeighbor {
    /// The stored point closest to `query` in Euclidean distance.
    fn nearest(&self, query: &Point2<Real>) -> Point2<Real>;

    /// Number of stored points (always at least one).
    fn point_count(&self) -> usize;

    /// Euclidean distance from `query` to its nearest stored point.
    fn nearest_distance(&self, query: &Point2<Real>) -> Real {
        let closest = self.nearest(query);
        euclidean((closest - query).norm_squared())
    }
}

/// Square root of a squared distance, clamping rounding noise below zero.
#[inline]
pub fn euclidean(squared: Real) -> Real {
    squared.max(0.0).sqrt()
}
