use failure;
use std;

pub type Result<T> = std::result::Result<T, failure::Error>;

#[derive(Fail, Debug, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[fail(display = "Invalid board: no rows")]
    Empty,
    #[fail(display = "Invalid board: row {} has {} cells, expected {}", row, len, n)]
    NotSquare { row: usize, len: usize, n: usize },
    #[fail(display = "Invalid board: cell ({}, {}) is {}, expected 0 or 1", i, j, value)]
    InvalidCell { i: usize, j: usize, value: i64 },
    #[fail(display = "Invalid board: unexpected character {:?} in row {}", ch, row)]
    InvalidCharacter { row: usize, ch: char },
}

#[derive(Fail, Debug, PartialEq, Eq)]
#[fail(display = "Unsolvable board: {} equations unsatisfied", unsatisfied)]
pub struct UnsolvableError {
    pub unsatisfied: usize,
}

#[derive(Fail, Debug, PartialEq, Eq)]
#[fail(display = "Board is too large: {}x{} (max: {})", n, n, max)]
pub struct BoardTooLargeError {
    pub n: usize,
    pub max: usize,
}

#[derive(Hash, Copy, Clone, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub i: i32,
    pub j: i32,
}

impl Cell {
    pub fn new(i: i32, j: i32) -> Cell {
        Cell { i, j }
    }

    pub fn from_linear_index(index: usize, n: usize) -> Cell {
        Cell::new((index / n) as i32, (index % n) as i32)
    }

    pub fn is_in_range(&self, n: usize) -> bool {
        0 <= self.i && (self.i as usize) < n && 0 <= self.j && (self.j as usize) < n
    }

    pub fn to_linear_index(&self, n: usize) -> usize {
        n * self.i as usize + self.j as usize
    }

    /// In-range orthogonal neighbors, in the order of `CellDiff::gen_all_diff`.
    pub fn neighbors(self, n: usize) -> impl Iterator<Item = Cell> {
        CellDiff::gen_all_diff()
            .iter()
            .map(move |d| self + *d)
            .filter(move |c| c.is_in_range(n))
    }

    /// The cell itself followed by its neighbors: everything a press flips.
    pub fn press_area(self, n: usize) -> impl Iterator<Item = Cell> {
        std::iter::once(self).chain(self.neighbors(n))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellDiff {
    pub di: i32,
    pub dj: i32,
}

impl std::ops::Add<CellDiff> for Cell {
    type Output = Self;
    fn add(self, rhs: CellDiff) -> Self {
        Cell::new(self.i + rhs.di, self.j + rhs.dj)
    }
}

impl CellDiff {
    pub fn new(di: i32, dj: i32) -> CellDiff {
        CellDiff { di, dj }
    }

    // up, down, left, right
    pub fn gen_all_diff() -> &'static [CellDiff] {
        lazy_static! {
            static ref DIFFS: Vec<CellDiff> = vec![
                CellDiff::new(-1, 0),
                CellDiff::new(1, 0),
                CellDiff::new(0, -1),
                CellDiff::new(0, 1),
            ];
        }
        &DIFFS[..]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cell_test() {
        let c = Cell::new(1, 2);
        assert_eq!(c.to_linear_index(3), 5);
        assert_eq!(Cell::from_linear_index(5, 3), c);
        assert!(c.is_in_range(3));
        assert!(!c.is_in_range(2));
        assert!(!Cell::new(-1, 0).is_in_range(3));
        assert_eq!(c + CellDiff::new(1, 0), Cell::new(2, 2));
        assert_eq!(CellDiff::gen_all_diff().len(), 4);
    }

    #[test]
    fn neighbors_test() {
        let corner: Vec<_> = Cell::new(0, 0).neighbors(3).collect();
        assert_eq!(corner, vec![Cell::new(1, 0), Cell::new(0, 1)]);

        let center: Vec<_> = Cell::new(1, 1).neighbors(3).collect();
        assert_eq!(
            center,
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
            ]
        );

        assert_eq!(Cell::new(0, 0).neighbors(1).count(), 0);
        assert_eq!(Cell::new(0, 0).press_area(1).count(), 1);
        assert_eq!(Cell::new(0, 1).press_area(3).count(), 4);
    }
}
