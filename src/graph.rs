//! Implicit neighbor generation over the combination state space.
//!
//! The graph is never materialized. A combination of `k` wheels has exactly
//! `2k` neighbors, generated on demand: each wheel turned one step in each
//! direction.

use smallvec::SmallVec;

use crate::combination::{Combination, Direction, Move};

/// Neighbor buffer, sized so the `2k` entries of a typical lock stay inline.
pub type Neighbors = SmallVec<[(Move, Combination); 16]>;

/// All single-turn successors of `combination`.
///
/// Generation order is fixed: wheel 0 up, wheel 0 down, wheel 1 up, and so
/// on. When several shortest paths tie, this order decides which one the
/// search returns.
pub fn neighbors(combination: &Combination) -> Neighbors {
    let mut out = Neighbors::new();
    for wheel in 0..combination.wheel_count() {
        for direction in [Direction::Up, Direction::Down] {
            let mv = Move { wheel, direction };
            out.push((mv, combination.turned(wheel, direction)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_two_neighbors_per_wheel() {
        let combination = Combination::new([0, 5, 9]);
        assert_eq!(neighbors(&combination).len(), 6);
    }

    #[test]
    fn test_generation_order_is_up_before_down_per_wheel() {
        let combination = Combination::new([4, 9]);
        let result = neighbors(&combination);

        let moves: Vec<Move> = result.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(
            moves,
            vec![
                Move { wheel: 0, direction: Direction::Up },
                Move { wheel: 0, direction: Direction::Down },
                Move { wheel: 1, direction: Direction::Up },
                Move { wheel: 1, direction: Direction::Down },
            ]
        );

        let states: Vec<&[u8]> = result.iter().map(|(_, c)| c.digits()).collect();
        assert_eq!(states, vec![&[5, 9][..], &[3, 9], &[4, 0], &[4, 8]]);
    }

    #[test]
    fn test_no_neighbor_equals_the_input() {
        let combination = Combination::new([0, 0, 0, 0]);
        assert!(neighbors(&combination).iter().all(|(_, c)| *c != combination));
    }
}
