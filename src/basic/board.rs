use itertools::Itertools;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};

/// Sorted (row-major) and deduplicated, the form [`random_free_spot`] expects
pub fn get_occupied_cells<'a>(cells: impl IntoIterator<Item = &'a GridPoint>) -> Vec<GridPoint> {
    cells.into_iter().copied().sorted_unstable().dedup().collect()
}

/// Uniform over the cells not in `occupied_cells`, `None` if the board is full.
/// `occupied_cells` must be sorted and deduplicated and lie on the board.
pub fn random_free_spot(occupied_cells: &[GridPoint], board_dim: GridDim, rng: &mut impl Rng) -> Option<GridPoint> {
    let free_spaces = board_dim.area() - occupied_cells.len();
    if free_spaces == 0 {
        return None;
    }

    // pick the n-th free cell, then skip over every occupied cell before it
    let mut new_idx = rng.gen_range(0..free_spaces);
    for &pos in occupied_cells {
        if board_dim.index_of(pos) <= new_idx {
            new_idx += 1;
        }
    }

    let spot = board_dim.from_index(new_idx);
    debug_assert!(board_dim.contains(spot), "{:?} is off the board", spot);
    Some(spot)
}
