use super::dir::Dir;
use crate::basic::Point;
use num_integer::Integer;
use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
};

/// A cell on the board, measured in cells (not pixels)
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

/// Size of the board in cells, `x` columns by `y` rows
pub type GridDim = GridPoint;

impl GridPoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Top-left corner of the cell in pixels
    pub fn to_point(self, cell_size: f32) -> Point {
        Point {
            x: self.x as f32 * cell_size,
            y: self.y as f32 * cell_size,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dx, dy) = dir.delta();
        let dist = dist as isize;
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    // basically mod width, mod height
    // the board is a torus, leaving one edge re-enters at the opposite one
    #[must_use]
    pub fn wrap_around(self, board_dim: GridDim) -> Self {
        Self {
            x: self.x.mod_floor(&board_dim.x),
            y: self.y.mod_floor(&board_dim.y),
        }
    }

    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dist: usize, board_dim: GridDim) -> Self {
        self.translate(dir, dist).wrap_around(board_dim)
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }

    /// Total number of cells when `self` is used as a board dimension
    pub fn area(self) -> usize {
        (self.x * self.y) as usize
    }

    /// Row-major index of `pos` when `self` is used as a board dimension
    pub fn index_of(self, pos: Self) -> usize {
        (pos.y * self.x + pos.x) as usize
    }

    /// Inverse of [`GridPoint::index_of`]
    pub fn from_index(self, idx: usize) -> Self {
        let (y, x) = (idx as isize).div_rem(&self.x);
        Self { x, y }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// row-major, same order as `index_of`
impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}
