//! Static nearest-neighbor indexes over 2D point sets
//!
//! [`KdTree`] is the index the scorer uses. [`LinearIndex`] answers the same
//! queries by scanning every point and serves as a reference for small sets.
//! Both are built once from a snapshot and never modified.

pub mod node;
pub mod traits;

pub use node::{Axis, Node};
pub use traits::{NearestNeighbor, euclidean};

use crate::errors::{EpicycleError, Result};
use crate::float_types::Real;
use nalgebra::Point2;

/// Immutable 2D k-d tree.
///
/// Built with median splits in `O(n log n)`; queries visit `O(log n)` nodes
/// on average. A built tree always holds at least one point, so queries
/// cannot fail. On exact ties the winner depends on the tree layout, not on
/// the order points were passed in.
#[derive(Debug, Clone)]
pub struct KdTree {
    root: Box<Node>,
    len: usize,
}

impl KdTree {
    /// Builds a tree over `points`. An empty point set is rejected with
    /// [`EpicycleError::EmptyInput`].
    pub fn build(points: &[Point2<Real>]) -> Result<Self> {
        let mut scratch = points.to_vec();
        let root = Node::build(&mut scratch, 0).ok_or_else(|| {
            EpicycleError::EmptyInput("cannot build a k-d tree from zero points".into())
        })?;
        let tree = Self {
            root,
            len: points.len(),
        };
        log::debug!(
            "built k-d tree over {} points, depth {}",
            tree.len,
            tree.depth()
        );
        Ok(tree)
    }

    /// Point closest to `query`.
    pub fn nearest(&self, query: &Point2<Real>) -> Point2<Real> {
        let mut best = (self.root.point, Real::INFINITY);
        self.root.nearest_into(query, &mut best);
        best.0
    }

    /// Euclidean distance from `query` to the closest point.
    pub fn nearest_distance(&self, query: &Point2<Real>) -> Real {
        let mut best = (self.root.point, Real::INFINITY);
        self.root.nearest_into(query, &mut best);
        euclidean(best.1)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; kept for symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Stored points in tree order.
    pub fn points(&self) -> Vec<Point2<Real>> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_points(&mut out);
        out
    }
}

impl NearestNeighbor for KdTree {
    fn nearest(&self, query: &Point2<Real>) -> Point2<Real> {
        KdTree::nearest(self, query)
    }

    fn point_count(&self) -> usize {
        self.len
    }

    fn nearest_distance(&self, query: &Point2<Real>) -> Real {
        KdTree::nearest_distance(self, query)
    }
}

/// Brute-force index: checks every point on each query.
#[derive(Debug, Clone)]
pub struct LinearIndex {
    points: Vec<Point2<Real>>,
}

impl LinearIndex {
    pub fn build(points: &[Point2<Real>]) -> Result<Self> {
        if points.is_empty() {
            return Err(EpicycleError::EmptyInput(
                "cannot build a linear index from zero points".into(),
            ));
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }
}

impl NearestNeighbor for LinearIndex {
    fn nearest(&self, query: &Point2<Real>) -> Point2<Real> {
        // First point wins ties.
        let mut closest = self.points[0];
        let mut best = (closest - query).norm_squared();
        for p in &self.points[1..] {
            let d2 = (p - query).norm_squared();
            if d2 < best {
                best = d2;
                closest = *p;
            }
        }
        closest
    }

    fn point_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Vec<Point2<Real>> {
        (0..n)
            .flat_map(|i| (0..n).map(move |j| Point2::new(i as Real, j as Real * 0.5)))
            .collect()
    }

    #[test]
    fn empty_build_fails() {
        assert!(matches!(KdTree::build(&[]), Err(EpicycleError::EmptyInput(_))));
        assert!(matches!(LinearIndex::build(&[]), Err(EpicycleError::EmptyInput(_))));
    }

    #[test]
    fn single_point_tree() {
        let tree = KdTree::build(&[Point2::new(3.0, -1.0)]).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.nearest(&Point2::new(100.0, 100.0)), Point2::new(3.0, -1.0));
        assert!((tree.nearest_distance(&Point2::new(3.0, 3.0)) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn indexed_points_find_themselves() {
        let pts = grid(12);
        let tree = KdTree::build(&pts).unwrap();
        for p in &pts {
            assert_eq!(tree.nearest(p), *p);
            assert_eq!(tree.nearest_distance(p), 0.0);
        }
    }

    #[test]
    fn tree_is_balanced_and_keeps_every_point() {
        let pts = grid(32);
        let tree = KdTree::build(&pts).unwrap();
        assert_eq!(tree.len(), 1024);
        // ceil(log2(1025)) == 11
        assert!(tree.depth() <= 11);
        let mut stored = tree.points();
        let mut expected = pts.clone();
        let key = |p: &Point2<Real>| (p.x, p.y);
        stored.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
        expected.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
        assert_eq!(stored, expected);
    }

    #[test]
    fn agrees_with_linear_scan() {
        let pts: Vec<Point2<Real>> = (0..200)
            .map(|i| {
                let t = i as Real * 0.731;
                Point2::new(t.sin() * (1.0 + 0.1 * i as Real), (2.3 * t).cos())
            })
            .collect();
        let tree = KdTree::build(&pts).unwrap();
        let linear = LinearIndex::build(&pts).unwrap();
        for i in 0..100 {
            let q = Point2::new((i as Real * 0.37).cos() * 3.0, (i as Real * 0.11).sin() * 1.5);
            let a = NearestNeighbor::nearest_distance(&tree, &q);
            let b = linear.nearest_distance(&q);
            assert!((a - b).abs() < 1e-9, "query {q:?}: tree {a} vs linear {b}");
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let p = Point2::new(0.5, 0.5);
        let tree = KdTree::build(&[p, p, p, Point2::new(1.0, 1.0)]).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.nearest(&Point2::new(0.4, 0.4)), p);
    }
}
