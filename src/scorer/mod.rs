//! Turning geometric mismatch into a bounded score
//!
//! Each attempt sample is measured against the nearest point of the
//! solution curve, and each distance `d` becomes `base^(-scalar * d)`:
//! 1 for a perfect hit, falling towards 0 as the sample strays. The final
//! score is the mean over all samples.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use serial::SerialDistanceOps;
pub use traits::DistanceOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelDistanceOps;

use crate::errors::{EpicycleError, Result};
use crate::float_types::Real;
use crate::kdtree::NearestNeighbor;
use crate::sampler::SampleTable;

/// Score an attempt must beat to count as a match. Callers make that
/// comparison themselves; this is only the customary value.
pub const DEFAULT_SCORE_THRESHOLD: Real = 0.8;

/// Per-sample distances and their aggregate score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Same length and order as the attempt table.
    pub distances: Vec<Real>,

    /// Mean per-sample score, in `(0, 1]`.
    pub score: Real,
}

/// Scoring constants. Higher `scalar` punishes each unit of distance harder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    base: Real,
    scalar: Real,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            base: 2.0,
            scalar: 5.0,
        }
    }
}

impl Scorer {
    /// Requires a finite `base > 1` and a finite `scalar > 0`, which keeps
    /// the score strictly decreasing in distance.
    pub fn new(base: Real, scalar: Real) -> Result<Self> {
        if !(base.is_finite() && base > 1.0) {
            return Err(EpicycleError::InvalidInput(format!(
                "Scorer base must be finite and greater than 1, got {base}"
            )));
        }
        if !(scalar.is_finite() && scalar > 0.0) {
            return Err(EpicycleError::InvalidInput(format!(
                "Scorer scalar must be finite and positive, got {scalar}"
            )));
        }
        Ok(Self { base, scalar })
    }

    pub const fn base(&self) -> Real {
        self.base
    }

    pub const fn scalar(&self) -> Real {
        self.scalar
    }

    /// Score of a single linear (not squared) distance.
    ///
    /// Far distances would underflow `base^(-scalar * d)` to zero, so the
    /// result is floored at `Real::MIN_POSITIVE` and stays in `(0, 1]`.
    pub fn score_of(&self, distance: Real) -> Result<Real> {
        if distance.is_nan() || distance < 0.0 {
            return Err(EpicycleError::InvalidInput(format!(
                "Received invalid distance: {distance}"
            )));
        }
        Ok(self.base.powf(-self.scalar * distance).max(Real::MIN_POSITIVE))
    }

    /// Mean score over `distances`.
    pub fn aggregate(&self, distances: &[Real]) -> Result<Real> {
        if distances.is_empty() {
            return Err(EpicycleError::EmptyInput(
                "cannot aggregate an empty distance list".into(),
            ));
        }
        self.score_up_to(distances.len(), distances)
    }

    /// Sum of the scores of the first `index` distances, divided by the full
    /// length of `distances`.
    ///
    /// Used to fill a progress bar while grading plays back: the value grows
    /// from 0 at `index == 0` to the final aggregate at `index == len`.
    pub fn score_up_to(&self, index: usize, distances: &[Real]) -> Result<Real> {
        if distances.is_empty() {
            return Err(EpicycleError::EmptyInput(
                "cannot score an empty distance list".into(),
            ));
        }
        if index > distances.len() {
            return Err(EpicycleError::InvalidInput(format!(
                "Invalid index {index} for {} distances",
                distances.len()
            )));
        }
        let sum = distances[..index]
            .iter()
            .try_fold(0.0, |acc, &d| self.score_of(d).map(|s| acc + s))?;
        Ok(sum / distances.len() as Real)
    }

    /// `(time, partial score)` keyframes for animating a score display:
    /// `len + 1` entries, time running `0, 1/len, ..., 1`.
    pub fn progress(&self, distances: &[Real]) -> Result<Vec<(Real, Real)>> {
        if distances.is_empty() {
            return Err(EpicycleError::EmptyInput(
                "cannot build progress from an empty distance list".into(),
            ));
        }
        let n = distances.len() as Real;
        let mut keyframes = Vec::with_capacity(distances.len() + 1);
        let mut sum: Real = 0.0;
        keyframes.push((0.0, 0.0));
        for (i, &d) in distances.iter().enumerate() {
            sum += self.score_of(d)?;
            keyframes.push(((i + 1) as Real / n, sum / n));
        }
        Ok(keyframes)
    }

    /// Nearest-neighbor distance of every attempt sample.
    #[cfg(not(feature = "parallel"))]
    pub fn distances<I: NearestNeighbor + Sync>(
        &self,
        attempt: &SampleTable,
        index: &I,
    ) -> Vec<Real> {
        SerialDistanceOps::new().distances(attempt, index)
    }

    #[cfg(feature = "parallel")]
    pub fn distances<I: NearestNeighbor + Sync>(
        &self,
        attempt: &SampleTable,
        index: &I,
    ) -> Vec<Real> {
        ParallelDistanceOps::new().distances(attempt, index)
    }

    /// Distances plus their aggregate. An empty attempt table is an
    /// [`EpicycleError::EmptyInput`].
    pub fn score<I: NearestNeighbor + Sync>(
        &self,
        attempt: &SampleTable,
        index: &I,
    ) -> Result<ScoreResult> {
        let distances = self.distances(attempt, index);
        let score = self.aggregate(&distances)?;
        log::debug!("scored {} samples: {score:.4}", distances.len());
        Ok(ScoreResult { distances, score })
    }
}
