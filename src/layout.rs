//! Board layouts and the single-move transition rule.

use std::fmt;

use crate::error::LayoutError;

/// A move of the blank into an orthogonally adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Down,
    Up,
}

impl Move {
    /// Every move, in the order transitions are generated.
    ///
    /// Equal-priority frontier entries pop in insertion order, so this order
    /// decides which of several optimal paths the solver reports.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Down, Move::Up];

    /// Column and row offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
            Move::Down => (0, 1),
            Move::Up => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Immutable snapshot of an N×N board, stored row-major. Label 0 is the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    dimension: usize,
    tiles: Vec<u32>,
    blank: usize,
}

/// Canonical encoding of a layout, used as the key of the visited map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutKey {
    /// Tiles packed into fixed-width bit fields.
    Packed(u128),
    /// Boards too large to pack keep their full tile list.
    Wide(Box<[u32]>),
}

impl Layout {
    /// Builds a layout after checking that `tiles` is a permutation of
    /// `0..dimension²`.
    pub fn new(dimension: usize, tiles: Vec<u32>) -> Result<Self, LayoutError> {
        let cells = cell_count(dimension)?;
        if tiles.len() != cells {
            return Err(LayoutError::WrongTileCount {
                dimension,
                expected: cells,
                actual: tiles.len(),
            });
        }

        let max = (cells - 1) as u32;
        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (position, &tile) in tiles.iter().enumerate() {
            if tile > max {
                return Err(LayoutError::TileOutOfRange {
                    tile,
                    position,
                    max,
                });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(LayoutError::DuplicateTile { tile, position });
            }
            if tile == 0 {
                blank = position;
            }
        }

        Ok(Self {
            dimension,
            tiles,
            blank,
        })
    }

    /// The solved board `[0, 1, ..., dimension² - 1]`.
    pub fn goal(dimension: usize) -> Result<Self, LayoutError> {
        let cells = cell_count(dimension)?;
        Ok(Self {
            dimension,
            tiles: (0..cells as u32).collect(),
            blank: 0,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Linear index of the blank.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &t)| t as usize == i)
    }

    /// Column and row of a linear index.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.dimension, index / self.dimension)
    }

    /// The layout reached by moving the blank, or `None` if the move would
    /// leave the board.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (dx, dy) = movement.as_offset();
        let (x, y) = self.coords(self.blank);

        let new_x = x as isize + dx;
        let new_y = y as isize + dy;
        let size = self.dimension as isize;

        if new_x >= 0 && new_x < size && new_y >= 0 && new_y < size {
            let target = new_y as usize * self.dimension + new_x as usize;
            let mut tiles = self.tiles.clone();
            tiles.swap(self.blank, target);
            Some(Self {
                dimension: self.dimension,
                tiles,
                blank: target,
            })
        } else {
            None
        }
    }

    /// Every layout one blank move away, in [`Move::ALL`] order.
    pub fn transitions(&self) -> Vec<Layout> {
        Move::ALL.into_iter().filter_map(|m| self.apply(m)).collect()
    }

    /// Like [`Layout::transitions`], paired with the move that produced each.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Layout)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |m| self.apply(m).map(|next| (m, next)))
    }

    /// The move that turns `self` into `next`, if they are one move apart.
    pub fn move_to(&self, next: &Layout) -> Option<Move> {
        self.successors()
            .find(|(_, candidate)| candidate == next)
            .map(|(m, _)| m)
    }

    pub fn key(&self) -> LayoutKey {
        let cells = self.tiles.len();
        let width = bit_width((cells - 1) as u32);
        if cells * width as usize <= 128 {
            let packed = self
                .tiles
                .iter()
                .fold(0u128, |acc, &t| (acc << width) | u128::from(t));
            LayoutKey::Packed(packed)
        } else {
            LayoutKey::Wide(self.tiles.clone().into_boxed_slice())
        }
    }
}

fn cell_count(dimension: usize) -> Result<usize, LayoutError> {
    if dimension == 0 {
        return Err(LayoutError::InvalidDimension(dimension));
    }
    dimension
        .checked_mul(dimension)
        .filter(|&cells| u32::try_from(cells - 1).is_ok())
        .ok_or(LayoutError::DimensionTooLarge(dimension))
}

fn bit_width(value: u32) -> u32 {
    (u32::BITS - value.leading_zeros()).max(1)
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = (self.tiles.len() - 1) as u32;
        let width = max.to_string().len().max(2);

        for row in self.tiles.chunks(self.dimension) {
            for (col, &val) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if val == 0 {
                    write!(f, "{:width$}", "", width = width)?;
                } else {
                    write!(f, "{:width$}", val, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
