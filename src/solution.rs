//! The target curve of a puzzle, indexed once and graded against many attempts.

use crate::errors::Result;
use crate::float_types::{PI, Real};
use crate::kdtree::KdTree;
use crate::sampler::SampleTable;
use crate::scorer::{ScoreResult, Scorer};
use crate::spinner::Spinner;
use crate::spinner_set::SpinnerSet;

/// Sample count used when grading, unless the caller picks another.
pub const DEFAULT_GRADING_SAMPLES: usize = 200;

/// A target spinner set together with its sampled curve and the k-d tree
/// over those samples. The tree is built in [`Solution::new`] and reused by
/// every call to [`Solution::grade`].
#[derive(Debug, Clone)]
pub struct Solution {
    spinners: SpinnerSet,
    samples: SampleTable,
    index: KdTree,
}

impl Solution {
    /// Samples `spinners` at `sample_count` points and indexes them.
    ///
    /// `sample_count == 0` fails with
    /// [`EmptyInput`](crate::errors::EpicycleError::EmptyInput).
    pub fn new(spinners: SpinnerSet, sample_count: usize) -> Result<Self> {
        spinners.validate()?;
        let samples = SampleTable::sample(spinners.as_slice(), sample_count);
        let index = KdTree::build(&samples.positions())?;
        log::debug!(
            "solution ready: {} spinners, {} samples",
            spinners.len(),
            samples.len()
        );
        Ok(Self {
            spinners,
            samples,
            index,
        })
    }

    /// The first puzzle's target: two counter-rotating circles tracing an oval.
    pub fn oval() -> Result<Self> {
        Self::new(
            SpinnerSet::new(vec![
                Spinner::new(0.2, -1, PI / 10.0),
                Spinner::new(0.6, 1, PI / 17.0),
            ]),
            DEFAULT_GRADING_SAMPLES,
        )
    }

    pub fn spinners(&self) -> &SpinnerSet {
        &self.spinners
    }

    pub fn samples(&self) -> &SampleTable {
        &self.samples
    }

    pub fn index(&self) -> &KdTree {
        &self.index
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Samples `attempt` at the solution's own density and scores it.
    pub fn grade(&self, attempt: &SpinnerSet, scorer: &Scorer) -> Result<ScoreResult> {
        let attempt_samples = SampleTable::sample(attempt.as_slice(), self.sample_count());
        scorer.score(&attempt_samples, &self.index)
    }

    /// Score of `attempt` alone, without the per-sample distances.
    pub fn grade_score(&self, attempt: &SpinnerSet, scorer: &Scorer) -> Result<Real> {
        self.grade(attempt, scorer).map(|r| r.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EpicycleError;

    #[test]
    fn zero_samples_fail() {
        let err = Solution::new(SpinnerSet::starting_attempt(), 0).unwrap_err();
        assert!(matches!(err, EpicycleError::EmptyInput(_)));
    }

    #[test]
    fn invalid_spinner_fails() {
        let set = SpinnerSet::new(vec![Spinner::new(-1.0, 1, 0.0)]);
        assert!(matches!(Solution::new(set, 10), Err(EpicycleError::InvalidInput(_))));
    }

    #[test]
    fn solution_grades_itself_perfectly() {
        let oval = Solution::oval().unwrap();
        let result = oval.grade(oval.spinners(), &Scorer::default()).unwrap();
        assert_eq!(result.distances.len(), DEFAULT_GRADING_SAMPLES);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn starting_attempt_does_not_solve_oval() {
        let oval = Solution::oval().unwrap();
        let score = oval
            .grade_score(&SpinnerSet::starting_attempt(), &Scorer::default())
            .unwrap();
        assert!(score > 0.0);
        assert!(score < crate::scorer::DEFAULT_SCORE_THRESHOLD);
    }

    #[test]
    fn empty_attempt_is_scored_as_a_point() {
        // An empty set traces the origin; still a valid, if poor, attempt.
        let oval = Solution::oval().unwrap();
        let result = oval.grade(&SpinnerSet::default(), &Scorer::default()).unwrap();
        let first = result.distances[0];
        assert!(result.distances.iter().all(|&d| d == first));
        assert!(result.score < 1.0);
    }
}
