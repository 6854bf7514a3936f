//! Error taxonomy for solve invocations.
//!
//! Validation failures are caller errors and carry the message the transport
//! layer reports verbatim. The remaining variants are search outcomes:
//! `NoSolution` for an exhausted frontier, `BudgetExceeded` for a search that
//! was cut off before finishing. The two are deliberately distinct so callers
//! can tell "too expensive" apart from "provably impossible".

use thiserror::Error;

use crate::combination::{MAX_WHEELS, WHEEL_MODULUS};

/// Rejected input, detected before any search work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both combinations were absent from the request.
    #[error("initial and target combinations must be set")]
    Missing,
    /// One or both combinations have no wheels.
    #[error("initial and target combinations cannot be empty")]
    Empty,
    /// Wheel counts differ.
    #[error("initial and target combinations must have the same size ({from} vs {to})")]
    LengthMismatch { from: usize, to: usize },
    /// A digit outside the wheel range.
    #[error("wheel {index} position {value} is outside 0..{modulus}", modulus = WHEEL_MODULUS)]
    PositionOutOfRange { index: usize, value: i64 },
    /// More wheels than the packed state encoding supports.
    #[error("combination has {count} wheels, at most {max} are supported", max = MAX_WHEELS)]
    TooManyWheels { count: usize },
}

/// Any failure of a solve invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The frontier emptied before the target was dequeued. Unreachable for
    /// validated inputs on uniform wheels; kept as a guard.
    #[error("no turn sequence reaches the target combination")]
    NoSolution,
    /// The search hit its explored-state ceiling or its deadline.
    #[error("search budget exceeded after exploring {explored} states in {elapsed_ms}ms")]
    BudgetExceeded { explored: usize, elapsed_ms: u64 },
}
