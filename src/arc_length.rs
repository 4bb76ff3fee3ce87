//! Arc-length timing for constant-speed playback.
//!
//! Spinners advance uniformly in proportion, but the traced point does not:
//! its speed is `|velocity|`, which varies around the curve. A
//! [`TimingTable`] pairs "fraction of the curve drawn" with "fraction of the
//! cycle elapsed" so an animation driver can key stroke progress against
//! time.
//!
//! Integration is the trapezoid rule over the evenly spaced samples. The
//! curve is periodic, so the closing interval pairs the last sample's speed
//! with the first one's.

use crate::errors::{EpicycleError, Result};
use crate::float_types::{Real, tolerance};
use crate::sampler::SampleTable;

/// Running arc length of the sampled curve.
///
/// Returns `N + 1` values for `N` samples: `0` at proportion 0, then the
/// length accumulated up to proportion `i / N`, ending with the total at
/// proportion 1. An empty table gives an empty result.
pub fn cumulative_length(samples: &SampleTable) -> Vec<Real> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let step = 1.0 / n as Real;
    let speeds: Vec<Real> = samples.iter().map(|s| s.velocity.norm()).collect();

    let mut lengths = Vec::with_capacity(n + 1);
    let mut total: Real = 0.0;
    lengths.push(total);
    for i in 0..n {
        let next = speeds[(i + 1) % n];
        total += 0.5 * (speeds[i] + next) * step;
        lengths.push(total);
    }
    lengths
}

/// One row of a [`TimingTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingEntry {
    /// Fraction of the total arc length drawn, in `[0, 1]`.
    pub normalized_length: Real,
    /// Fraction of the cycle elapsed, in `[0, 1]`.
    pub time: Real,
}

/// Monotone map from elapsed time to drawn length, from `(0, 0)` to `(1, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingTable {
    entries: Vec<TimingEntry>,
}

impl TimingTable {
    pub fn entries(&self) -> &[TimingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lengths(&self) -> Vec<Real> {
        self.entries.iter().map(|e| e.normalized_length).collect()
    }

    pub fn times(&self) -> Vec<Real> {
        self.entries.iter().map(|e| e.time).collect()
    }

    /// Normalized length at an arbitrary `time`, linearly interpolated
    /// between rows. `time` is clamped to `[0, 1]`; NaN reads as 0.
    pub fn length_at(&self, time: Real) -> Real {
        let segments = self.entries.len().saturating_sub(1);
        if segments == 0 {
            return self.entries.first().map_or(0.0, |e| e.normalized_length);
        }
        let t = if time.is_nan() { 0.0 } else { time.clamp(0.0, 1.0) };
        let scaled = t * segments as Real;
        let i = (scaled.floor() as usize).min(segments - 1);
        let frac = scaled - i as Real;
        let a = self.entries[i].normalized_length;
        let b = self.entries[i + 1].normalized_length;
        a + (b - a) * frac
    }
}

/// Divides a running length by its total.
///
/// Row `i` of the result is timed at `i / (len - 1)`, matching the layout of
/// [`cumulative_length`]. A total at or below
/// [`tolerance`](crate::float_types::tolerance) means the curve never moves
/// and is reported as [`EpicycleError::DegenerateCurve`]. Fewer than two
/// rows cannot be timed and are an [`EpicycleError::EmptyInput`].
pub fn normalize(cumulative: &[Real]) -> Result<TimingTable> {
    let Some(&total) = cumulative.last() else {
        return Err(EpicycleError::EmptyInput(
            "cannot normalize an empty length table".into(),
        ));
    };
    if !(total.is_finite() && total > tolerance()) {
        return Err(EpicycleError::DegenerateCurve {
            total_length: total,
        });
    }

    if cumulative.len() < 2 {
        return Err(EpicycleError::EmptyInput(
            "a length table needs at least a start and an end row".into(),
        ));
    }

    let segments = (cumulative.len() - 1) as Real;
    let entries: Vec<TimingEntry> = cumulative
        .iter()
        .enumerate()
        .map(|(i, &length)| TimingEntry {
            normalized_length: length / total,
            time: i as Real / segments,
        })
        .collect();
    log::trace!("timing table: {} rows, total length {total}", entries.len());
    Ok(TimingTable { entries })
}

/// [`cumulative_length`] followed by [`normalize`].
pub fn timing_table(samples: &SampleTable) -> Result<TimingTable> {
    normalize(&cumulative_length(samples))
}

/// Bounds of a fixed-length preview window sliding along the curve.
///
/// The window ends at the current drawn length and reaches back `w`. Near
/// the start of the curve it crosses the 0/1 seam and is drawn as two arcs:
/// the head `[start_clamped, end_unclamped]` and the tail
/// `[start_wrapped, end_wrapped]`. When the window does not cross the seam
/// the tail collapses to an empty `[0, 0]` arc.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTables {
    pub times: Vec<Real>,
    /// `max(0, length - w)`
    pub start_clamped: Vec<Real>,
    /// `length`
    pub end_unclamped: Vec<Real>,
    /// `(length - w) mod 1` while the window crosses the seam, else 0
    pub start_wrapped: Vec<Real>,
    /// 1 while the window crosses the seam, else equal to `start_wrapped`
    pub end_wrapped: Vec<Real>,
}

impl WindowTables {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// True when row `i` is drawn as two arcs.
    pub fn is_split(&self, i: usize) -> bool {
        self.end_wrapped[i] > self.start_wrapped[i]
    }
}

/// Derives the four window tables from a timing table and a window length
/// `w` (a fraction of the total length, in `[0, 1]`).
pub fn window(table: &TimingTable, w: Real) -> Result<WindowTables> {
    if !(w.is_finite() && (0.0..=1.0).contains(&w)) {
        return Err(EpicycleError::InvalidInput(format!(
            "Window length must lie in [0, 1], got {w}"
        )));
    }

    let n = table.len();
    let mut tables = WindowTables {
        times: Vec::with_capacity(n),
        start_clamped: Vec::with_capacity(n),
        end_unclamped: Vec::with_capacity(n),
        start_wrapped: Vec::with_capacity(n),
        end_wrapped: Vec::with_capacity(n),
    };

    for entry in table.entries() {
        let length = entry.normalized_length;
        let shifted = length - w;
        let (start_wrapped, end_wrapped) = if shifted < 0.0 {
            (shifted.rem_euclid(1.0), 1.0)
        } else {
            (0.0, 0.0)
        };

        tables.times.push(entry.time);
        tables.start_clamped.push(shifted.max(0.0));
        tables.end_unclamped.push(length);
        tables.start_wrapped.push(start_wrapped);
        tables.end_wrapped.push(end_wrapped);
    }
    Ok(tables)
}
