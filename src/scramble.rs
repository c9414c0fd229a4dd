//! Random scrambles reached by walking the blank away from the goal.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::LayoutError;
use crate::layout::{Layout, Move};

/// Makes `moves` random blank moves starting from the goal, never undoing the
/// previous move. Every scramble produced this way is solvable in at most
/// `moves` moves.
pub fn scramble<R: Rng + ?Sized>(
    dimension: usize,
    moves: usize,
    rng: &mut R,
) -> Result<Layout, LayoutError> {
    let mut layout = Layout::goal(dimension)?;
    let mut last: Option<Move> = None;

    for _ in 0..moves {
        let options: Vec<(Move, Layout)> = layout
            .successors()
            .filter(|(m, _)| last.map_or(true, |prev| *m != prev.opposite()))
            .collect();

        // only a 1x1 board has nowhere to go
        let Some((m, next)) = options.choose(rng).cloned() else {
            break;
        };
        layout = next;
        last = Some(m);
    }

    Ok(layout)
}
