//! Shortest-sequence solver for multi-wheel rotary combination locks.
//!
//! Models a lock as an implicit graph over wheel combinations: every state
//! has one neighbor per wheel per turn direction. A bounded breadth-first
//! search finds a minimum sequence of single wheel turns from one
//! combination to another.

pub mod combination;
pub mod error;
pub mod graph;
pub mod solver;
pub mod validate;

// Re-export main types
pub use combination::{cyclic_distance, Combination, Direction, Move, MAX_WHEELS, WHEEL_MODULUS};
pub use error::{SolveError, ValidationError};
pub use graph::{neighbors, Neighbors};
pub use solver::{solve, solve_request, Solution, SolveRequest, SolverConfig};
pub use validate::validate;
