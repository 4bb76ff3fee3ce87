//! Error conditions reported by the curve engine

use crate::float_types::Real;

/// Every failure the engine reports back to its caller.
///
/// All variants are local and recoverable. The engine never substitutes a
/// default (a `NaN`, a zero) where one of these applies.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpicycleError {
    /// (InvalidInput) A value violates the caller contract, e.g. a negative distance
    #[error("(InvalidInput) {0}")]
    InvalidInput(String),
    /// (EmptyInput) An operation that needs at least one element received none
    #[error("(EmptyInput) {0}")]
    EmptyInput(String),
    /// (DegenerateCurve) The curve does not move, so it has no arc length to normalize by
    #[error("(DegenerateCurve) The curve has zero total arc length ({total_length})")]
    DegenerateCurve { total_length: Real },
}

pub type Result<T> = std::result::Result<T, EpicycleError>;
