//! Composition of spinners into sampled curves.
//!
//! Positions are in the epicycle's own unit-amplitude frame. Scaling to a
//! screen radius, rotating, flipping or centring in a viewport is left to
//! whoever draws the samples.

use crate::float_types::Real;
use crate::spinner::Spinner;
use nalgebra::{Point2, Vector2};

/// Position of the summed spinner chain at `proportion` of one cycle.
/// An empty chain stays at the origin.
pub fn composed_position(spinners: &[Spinner], proportion: Real) -> Point2<Real> {
    spinners
        .iter()
        .fold(Point2::origin(), |acc, s| acc + s.position(proportion))
}

/// Velocity of the summed spinner chain at `proportion` of one cycle.
pub fn composed_velocity(spinners: &[Spinner], proportion: Real) -> Vector2<Real> {
    spinners
        .iter()
        .fold(Vector2::zeros(), |acc, s| acc + s.velocity(proportion))
}

/// One evaluation of a composed curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Fraction of the cycle, in `[0, 1)`.
    pub proportion: Real,
    pub position: Point2<Real>,
    pub velocity: Vector2<Real>,
}

/// `N` evenly spaced samples of a curve, the `i`th at proportion `i / N`.
///
/// Tables are rebuilt, never edited, when the spinners change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    samples: Vec<Sample>,
}

impl SampleTable {
    /// Samples `spinners` at `count` evenly spaced proportions in `[0, 1)`.
    ///
    /// `count == 0` gives an empty table; downstream operations that need
    /// samples report that as [`EmptyInput`](crate::errors::EpicycleError::EmptyInput).
    pub fn sample(spinners: &[Spinner], count: usize) -> Self {
        let samples: Vec<Sample> = (0..count)
            .map(|i| {
                let proportion = i as Real / count as Real;
                Sample {
                    proportion,
                    position: composed_position(spinners, proportion),
                    velocity: composed_velocity(spinners, proportion),
                }
            })
            .collect();
        log::trace!(
            "sampled {} spinners at {} proportions",
            spinners.len(),
            samples.len()
        );
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Sampled positions in table order.
    pub fn positions(&self) -> Vec<Point2<Real>> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Sampled velocities in table order.
    pub fn velocities(&self) -> Vec<Vector2<Real>> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    /// The sampled positions as a closed `geo` ring (first point repeated at the end).
    #[cfg(feature = "geo-io")]
    pub fn to_line_string(&self) -> geo::LineString<Real> {
        let mut coords: Vec<geo::Coord<Real>> = self
            .samples
            .iter()
            .map(|s| geo::coord! { x: s.position.x, y: s.position.y })
            .collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        geo::LineString::new(coords)
    }
}

impl<'a> IntoIterator for &'a SampleTable {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
