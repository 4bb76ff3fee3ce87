//! k-d tree node data structure

use crate::float_types::Real;
use nalgebra::Point2;

/// Splitting axis of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub const fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Axis::X } else { Axis::Y }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// A k-d tree node: one stored point that also splits its subtree.
#[derive(Debug, Clone)]
pub struct Node {
    pub point: Point2<Real>,

    pub axis: Axis,

    /// Points whose `axis` coordinate is at most `point`'s.
    pub left: Option<Box<Node>>,

    /// Points whose `axis` coordinate is at least `point`'s.
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Builds a balanced subtree by splitting at the median of alternating axes.
    ///
    /// Reorders `points` in place. Returns `None` for an empty slice.
    pub fn build(points: &mut [Point2<Real>], depth: usize) -> Option<Box<Node>> {
        if points.is_empty() {
            return None;
        }

        let axis = Axis::for_depth(depth);
        let mid = points.len() / 2;
        let k = axis.index();
        points.select_nth_unstable_by(mid, |a, b| a[k].total_cmp(&b[k]));

        let point = points[mid];
        let (lower, rest) = points.split_at_mut(mid);
        let upper = &mut rest[1..];

        #[cfg(feature = "parallel")]
        let (left, right) = if lower.len() + upper.len() > PARALLEL_BUILD_THRESHOLD {
            rayon::join(
                || Node::build(lower, depth + 1),
                || Node::build(upper, depth + 1),
            )
        } else {
            (Node::build(lower, depth + 1), Node::build(upper, depth + 1))
        };

        #[cfg(not(feature = "parallel"))]
        let (left, right) = (Node::build(lower, depth + 1), Node::build(upper, depth + 1));

        Some(Box::new(Node {
            point,
            axis,
            left,
            right,
        }))
    }

    /// Descends towards `query`, updating `best` with the closest point seen
    /// and its squared distance. The far side of a split is only visited when
    /// the splitting line is closer than the current best.
    pub fn nearest_into(&self, query: &Point2<Real>, best: &mut (Point2<Real>, Real)) {
        let d2 = (self.point - query).norm_squared();
        if d2 < best.1 {
            *best = (self.point, d2);
        }

        let k = self.axis.index();
        let diff = query[k] - self.point[k];
        let (near, far) = if diff < 0.0 {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };

        if let Some(near) = near {
            near.nearest_into(query, best);
        }
        if diff * diff < best.1 {
            if let Some(far) = far {
                far.nearest_into(query, best);
            }
        }
    }

    /// Number of levels below and including this node.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.depth());
        let right = self.right.as_ref().map_or(0, |n| n.depth());
        1 + left.max(right)
    }

    /// Appends every stored point, in pre-order.
    pub fn collect_points(&self, out: &mut Vec<Point2<Real>>) {
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            out.push(current.point);
            stack.extend(
                [&current.right, &current.left]
                    .iter()
                    .filter_map(|child| child.as_ref().map(|boxed| boxed.as_ref())),
            );
        }
    }
}

/// Below this many points a subtree is built on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_BUILD_THRESHOLD: usize = 2048;
