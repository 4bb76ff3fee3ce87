//! A single uniformly rotating vector (one epicycle).

use crate::errors::{EpicycleError, Result};
use crate::float_types::{Real, TAU};
use nalgebra::Vector2;
use std::ops::RangeInclusive;

/// One rotating vector: a circle of radius `amplitude` turning `frequency`
/// times per cycle, starting at `phase`.
///
/// Colour and identity belong to whoever edits spinners; here a spinner is
/// a plain value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    /// Non-negative by convention, normalized to `[0, 1]`.
    pub amplitude: Real,

    /// Whole turns per cycle. Negative values turn clockwise, zero is a fixed offset.
    pub frequency: i32,

    /// Starting angle in radians. Not bounded to `[0, 2π)`.
    pub phase: Real,
}

impl Default for Spinner {
    /// The spinner handed out when a new one is added to a set.
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            frequency: 1,
            phase: 0.0,
        }
    }
}

impl Spinner {
    /// Frequencies offered to players. The engine itself accepts any `i32`.
    pub const ALLOWED_FREQUENCIES: RangeInclusive<i32> = -5..=5;

    pub const fn new(amplitude: Real, frequency: i32, phase: Real) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Angle in radians after `proportion` of the cycle, i.e. after
    /// `proportion * frequency` full turns starting at `phase`.
    #[inline]
    pub fn angle(&self, proportion: Real) -> Real {
        TAU * self.frequency as Real * proportion + self.phase
    }

    /// Offset of the vector's tip from its own centre.
    #[inline]
    pub fn position(&self, proportion: Real) -> Vector2<Real> {
        let (sin, cos) = self.angle(proportion).sin_cos();
        Vector2::new(self.amplitude * cos, self.amplitude * sin)
    }

    /// Analytic velocity of the tip, `amplitude * frequency * (-sin, cos)`.
    ///
    /// This is the derivative with respect to the angle scaled by the turn
    /// rate; the constant `2π` factor of a derivative by proportion is left
    /// out because every consumer normalizes.
    #[inline]
    pub fn velocity(&self, proportion: Real) -> Vector2<Real> {
        let (sin, cos) = self.angle(proportion).sin_cos();
        let speed = self.amplitude * self.frequency as Real;
        Vector2::new(-speed * sin, speed * cos)
    }

    /// Angle of this spinner measured against the spinner it is mounted on.
    ///
    /// Nested circles are drawn in their parent's rotating frame, so an
    /// animation driver rotates each one by the difference of the two angles.
    pub fn relative_angle(&self, parent: Option<&Spinner>, proportion: Real) -> Real {
        self.angle(proportion) - parent.map_or(0.0, |p| p.angle(proportion))
    }

    /// Checks a spinner received from an editor.
    ///
    /// Rejects negative or non-finite amplitudes and non-finite phases.
    pub fn validate(self) -> Result<Self> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(EpicycleError::InvalidInput(format!(
                "Spinner amplitude must be finite and non-negative, got {}",
                self.amplitude
            )));
        }
        if !self.phase.is_finite() {
            return Err(EpicycleError::InvalidInput(format!(
                "Spinner phase must be finite, got {}",
                self.phase
            )));
        }
        Ok(self)
    }

    /// Returns a copy with amplitude clamped to `[0, 1]` and frequency clamped
    /// to [`Spinner::ALLOWED_FREQUENCIES`].
    pub fn clamped(&self) -> Self {
        Self {
            amplitude: self.amplitude.clamp(0.0, 1.0),
            frequency: self.frequency.clamp(
                *Self::ALLOWED_FREQUENCIES.start(),
                *Self::ALLOWED_FREQUENCIES.end(),
            ),
            phase: self.phase,
        }
    }

    /// Phase in whole degrees for display. A negative phase is moved up by a
    /// single turn before truncating.
    pub fn phase_in_degrees(&self) -> i32 {
        let mut phase = self.phase;
        if phase < 0.0 {
            phase += TAU;
        }
        (phase * 360.0 / TAU) as i32
    }
}

impl From<(Real, i32, Real)> for Spinner {
    fn from((amplitude, frequency, phase): (Real, i32, Real)) -> Self {
        Self::new(amplitude, frequency, phase)
    }
}
