//! Sum-of-Manhattan-distances heuristic.

use crate::layout::Layout;

/// Sum over every non-blank tile of the grid distance between its position
/// in `a` and its position in `b`.
///
/// Each move shifts exactly one tile by one cell, so this never overestimates
/// the number of moves separating the two layouts.
pub fn manhattan_distance(a: &Layout, b: &Layout) -> u64 {
    DistanceTable::new(b).distance(a)
}

/// Position of every tile in a fixed target layout, so repeated distance
/// queries against the same target skip the lookup pass.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    dimension: usize,
    target: Vec<usize>,
}

impl DistanceTable {
    pub fn new(target: &Layout) -> Self {
        let mut positions = vec![0usize; target.tiles().len()];
        for (position, &tile) in target.tiles().iter().enumerate() {
            positions[tile as usize] = position;
        }
        Self {
            dimension: target.dimension(),
            target: positions,
        }
    }

    /// Manhattan distance from `layout` to the target.
    pub fn distance(&self, layout: &Layout) -> u64 {
        debug_assert_eq!(layout.dimension(), self.dimension);

        let mut distance = 0u64;
        for (position, &tile) in layout.tiles().iter().enumerate() {
            if tile != 0 {
                distance += block_distance(layout, position, self.target[tile as usize]);
            }
        }
        distance
    }
}

fn block_distance(layout: &Layout, from: usize, to: usize) -> u64 {
    let (from_x, from_y) = layout.coords(from);
    let (to_x, to_y) = layout.coords(to);
    (from_x.abs_diff(to_x) + from_y.abs_diff(to_y)) as u64
}
