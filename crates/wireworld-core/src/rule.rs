//! The Wireworld transition rule.
//!
//! | current       | next                                           |
//! |---------------|------------------------------------------------|
//! | empty         | empty                                          |
//! | electron head | electron tail                                  |
//! | electron tail | conductor                                      |
//! | conductor     | electron head with 1 or 2 head neighbors, else conductor |

use wireworld_types::CellState;

/// Compute the next state of a cell from its current state and the number
/// of electron heads among its eight neighbors.
///
/// The head count only matters for conductors.
pub const fn next_state(current: CellState, head_neighbors: u8) -> CellState {
    match current {
        CellState::Empty => CellState::Empty,
        CellState::ElectronHead => CellState::ElectronTail,
        CellState::ElectronTail => CellState::Conductor,
        CellState::Conductor => {
            if matches!(head_neighbors, 1 | 2) {
                CellState::ElectronHead
            } else {
                CellState::Conductor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_transition_table() {
        for heads in 0..=8_u8 {
            assert_eq!(next_state(CellState::Empty, heads), CellState::Empty);
            assert_eq!(
                next_state(CellState::ElectronHead, heads),
                CellState::ElectronTail
            );
            assert_eq!(
                next_state(CellState::ElectronTail, heads),
                CellState::Conductor
            );
            let expected = if heads == 1 || heads == 2 {
                CellState::ElectronHead
            } else {
                CellState::Conductor
            };
            assert_eq!(next_state(CellState::Conductor, heads), expected, "heads = {heads}");
        }
    }

    #[test]
    fn repeated_calls_agree() {
        for state in CellState::ALL {
            for heads in 0..=8_u8 {
                assert_eq!(next_state(state, heads), next_state(state, heads));
            }
        }
    }
}
