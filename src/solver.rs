//! Bounded breadth-first search for minimum turn sequences.
//!
//! The frontier is a FIFO queue, so states are expanded in distance order:
//! every combination reachable in `d` turns is enqueued before any
//! combination reachable in `d + 1` turns is dequeued. The first time the
//! target is dequeued it has therefore been reached by a minimum number of
//! turns. Visited bookkeeping doubles as the parent map used to reconstruct
//! the path once the target is found.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combination::{Combination, Move, StateKey};
use crate::error::SolveError;
use crate::graph::neighbors;
use crate::validate::validate;

/// Resource bounds for a single solve invocation.
///
/// The state space grows as `10^k` with the wheel count, so an uncapped
/// search can be driven to arbitrary memory and time by the caller.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum wall-clock time for the search.
    pub timeout: Duration,
    /// Maximum number of states dequeued and expanded.
    pub max_states: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_states: 1_000_000,
        }
    }
}

/// A raw solve request as supplied by the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub from: Option<Vec<i64>>,
    pub to: Option<Vec<i64>>,
}

/// A minimum turn sequence, with search statistics.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Every combination from the initial to the target inclusive.
    pub steps: Vec<Combination>,
    /// The turn taken between each adjacent pair of steps.
    pub moves: Vec<Move>,
    /// States dequeued before the target was found.
    pub states_explored: usize,
    /// Search time in milliseconds.
    pub time_elapsed_ms: u64,
}

impl Solution {
    /// Number of turns, always `steps.len() - 1`.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

/// Validate a raw request and solve it.
pub fn solve_request(
    request: &SolveRequest,
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    let (from, to) = validate(request.from.as_deref(), request.to.as_deref())?;
    debug!(%from, %to, "solving");
    solve(&from, &to, config)
}

/// Find a minimum sequence of single wheel turns from `from` to `to`.
///
/// Inputs must already be validated: equal wheel counts, digits in range.
/// Returns [`SolveError::BudgetExceeded`] when a configured ceiling is hit
/// before the target is found.
pub fn solve(
    from: &Combination,
    to: &Combination,
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    let start_time = Instant::now();
    let deadline = start_time + config.timeout;
    let wheel_count = from.wheel_count();

    let start = from.key();
    let target = to.key();

    // Maps each discovered state to the state and turn it was first reached
    // from. Membership marks a state visited; the start has no entry.
    let mut parents: HashMap<StateKey, (StateKey, Move)> = HashMap::new();
    let mut frontier: VecDeque<StateKey> = VecDeque::new();
    frontier.push_back(start);

    let mut states_explored: usize = 0;

    while let Some(current) = frontier.pop_front() {
        if Instant::now() > deadline || states_explored >= config.max_states {
            debug!(states_explored, "search budget exceeded");
            return Err(SolveError::BudgetExceeded {
                explored: states_explored,
                elapsed_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        if current == target {
            let (steps, moves) = reconstruct(&parents, start, target, wheel_count);
            debug!(states_explored, turns = moves.len(), "target found");
            return Ok(Solution {
                steps,
                moves,
                states_explored,
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            });
        }
        states_explored += 1;

        let combination = Combination::from_key(current, wheel_count);
        for (mv, neighbor) in neighbors(&combination) {
            let key = neighbor.key();
            if key != start && !parents.contains_key(&key) {
                parents.insert(key, (current, mv));
                frontier.push_back(key);
            }
        }
    }

    // Unreachable for equal-length inputs on uniform wheels, since every
    // state can reach every other by turning each wheel independently.
    Err(SolveError::NoSolution)
}

/// Walk the parent map backward from the target and emit the path in forward
/// order, decoding packed keys into combinations.
fn reconstruct(
    parents: &HashMap<StateKey, (StateKey, Move)>,
    start: StateKey,
    target: StateKey,
    wheel_count: usize,
) -> (Vec<Combination>, Vec<Move>) {
    let mut steps = Vec::new();
    let mut moves = Vec::new();

    let mut cursor = target;
    steps.push(Combination::from_key(cursor, wheel_count));
    while cursor != start {
        let (parent, mv) = parents[&cursor];
        moves.push(mv);
        cursor = parent;
        steps.push(Combination::from_key(cursor, wheel_count));
    }

    steps.reverse();
    moves.reverse();
    (steps, moves)
}
