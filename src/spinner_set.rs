//! Ordered collections of spinners

use crate::errors::Result;
use crate::float_types::Real;
use crate::spinner::Spinner;

/// An ordered set of spinners whose vector sum traces one closed curve.
///
/// Summation is commutative so order never changes the curve, but it is kept
/// for deterministic iteration and for nesting circles when animating.
/// An empty set traces the constant point at the origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinnerSet {
    spinners: Vec<Spinner>,
}

impl SpinnerSet {
    pub const fn new(spinners: Vec<Spinner>) -> Self {
        Self { spinners }
    }

    /// Builds a set from editor slots, skipping the empty ones.
    pub fn from_slots(slots: &[Option<Spinner>]) -> Self {
        Self {
            spinners: slots.iter().flatten().copied().collect(),
        }
    }

    /// Builds a set from `(amplitude, frequency, phase)` triples, validating each one.
    pub fn from_triples(triples: &[(Real, i32, Real)]) -> Result<Self> {
        let spinners = triples
            .iter()
            .map(|&triple| Spinner::from(triple).validate())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { spinners })
    }

    /// The attempt a player starts from before editing.
    pub fn starting_attempt() -> Self {
        Self::new(vec![Spinner::new(0.66, -1, 0.0), Spinner::new(0.33, -3, 0.0)])
    }

    pub fn as_slice(&self) -> &[Spinner] {
        &self.spinners
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spinner> {
        self.spinners.iter()
    }

    pub fn len(&self) -> usize {
        self.spinners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spinners.is_empty()
    }

    pub fn push(&mut self, spinner: Spinner) {
        self.spinners.push(spinner);
    }

    /// True when no spinner both rotates and has a radius, i.e. the curve
    /// is a single stationary point.
    pub fn is_stationary(&self) -> bool {
        self.spinners
            .iter()
            .all(|s| s.frequency == 0 || s.amplitude == 0.0)
    }

    /// Validates every spinner, returning the first failure.
    pub fn validate(&self) -> Result<()> {
        self.spinners.iter().try_for_each(|s| s.validate().map(|_| ()))
    }

    /// Per-spinner rotation keyframes for a looping animation.
    ///
    /// Returns one row per spinner with `keyframes + 1` angles taken at
    /// proportions `0, 1/keyframes, ..., 1`. Each angle is relative to the
    /// previous spinner in the set, which is the frame the circle is mounted in.
    /// `keyframes == 0` yields a single angle at proportion 0 per spinner.
    pub fn rotation_keyframes(&self, keyframes: usize) -> Vec<Vec<Real>> {
        let steps = keyframes.max(1);
        let proportions: Vec<Real> = (0..=keyframes)
            .map(|i| i as Real / steps as Real)
            .collect();

        self.spinners
            .iter()
            .enumerate()
            .map(|(index, spinner)| {
                let parent = index.checked_sub(1).map(|i| &self.spinners[i]);
                proportions
                    .iter()
                    .map(|&p| spinner.relative_angle(parent, p))
                    .collect()
            })
            .collect()
    }
}

impl From<Vec<Spinner>> for SpinnerSet {
    fn from(spinners: Vec<Spinner>) -> Self {
        Self::new(spinners)
    }
}

impl FromIterator<Spinner> for SpinnerSet {
    fn from_iter<I: IntoIterator<Item = Spinner>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[Spinner]> for SpinnerSet {
    fn as_ref(&self) -> &[Spinner] {
        &self.spinners
    }
}

impl<'a> IntoIterator for &'a SpinnerSet {
    type Item = &'a Spinner;
    type IntoIter = std::slice::Iter<'a, Spinner>;

    fn into_iter(self) -> Self::IntoIter {
        self.spinners.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EpicycleError;

    #[test]
    fn slots_skip_empty_entries() {
        let a = Spinner::new(0.5, 1, 0.0);
        let b = Spinner::new(0.2, -2, 1.0);
        let set = SpinnerSet::from_slots(&[Some(a), None, Some(b), None]);
        assert_eq!(set.as_slice(), &[a, b]);
    }

    #[test]
    fn triples_are_validated() {
        let set = SpinnerSet::from_triples(&[(0.5, 1, 0.0), (0.1, -4, 2.0)]).unwrap();
        assert_eq!(set.len(), 2);
        let err = SpinnerSet::from_triples(&[(0.5, 1, 0.0), (-0.1, 2, 0.0)]).unwrap_err();
        assert!(matches!(err, EpicycleError::InvalidInput(_)));
    }

    #[test]
    fn stationary_detection() {
        assert!(SpinnerSet::default().is_stationary());
        let still = SpinnerSet::new(vec![Spinner::new(0.5, 0, 0.0), Spinner::new(0.0, 3, 0.0)]);
        assert!(still.is_stationary());
        assert!(!SpinnerSet::starting_attempt().is_stationary());
    }

    #[test]
    fn keyframes_are_relative_to_parent() {
        let set = SpinnerSet::new(vec![Spinner::new(0.6, 1, 0.0), Spinner::new(0.2, -1, 0.0)]);
        let frames = set.rotation_keyframes(4);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 5);
        // child turns -1 against a parent turning +1: relative rate -2
        let last = frames[1][4];
        assert!((last - (-2.0 * crate::float_types::TAU)).abs() < 1e-4);
        assert_eq!(set.rotation_keyframes(0)[0], vec![0.0]);
    }
}
