use serde_json;
use std;
use std::path::Path;

use super::matrix::*;
use super::prelude::*;

/// An n×n grid of lights, stored row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub n: usize,
    pub lit: Vec<bool>,
}

impl Board {
    pub fn new(n: usize) -> Board {
        assert!(n >= 1);
        Board {
            n,
            lit: vec![false; n * n],
        }
    }

    pub fn from_rows<T: Copy + Into<i64>>(rows: &[Vec<T>]) -> Result<Board> {
        let n = rows.len();
        if n == 0 {
            return Err(InvalidBoardError::Empty.into());
        }
        let mut lit = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(InvalidBoardError::NotSquare {
                    row: i,
                    len: row.len(),
                    n,
                }.into());
            }
            for (j, value) in row.iter().enumerate() {
                let value: i64 = (*value).into();
                match value {
                    0 => lit.push(false),
                    1 => lit.push(true),
                    value => return Err(InvalidBoardError::InvalidCell { i, j, value }.into()),
                }
            }
        }
        Ok(Board { n, lit })
    }

    /// Parses rows of `0`/`1` digits separated by `/`, `;` or newlines, e.g. `101/010/101`.
    /// Commas and spaces inside a row separate cells: `1,0/0,1`.
    pub fn parse(s: &str) -> Result<Board> {
        let mut rows: Vec<Vec<u8>> = vec![];
        for (row, text) in s
            .split(|ch: char| ch == '/' || ch == ';' || ch == '\n')
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .enumerate()
        {
            let mut cells = vec![];
            for ch in text.chars().filter(|ch| *ch != ',' && !ch.is_whitespace()) {
                match ch.to_digit(10) {
                    Some(d) => cells.push(d as u8),
                    None => return Err(InvalidBoardError::InvalidCharacter { row, ch }.into()),
                }
            }
            rows.push(cells);
        }
        Board::from_rows(&rows)
    }

    /// Reads a JSON array of 0/1 rows.
    pub fn read(path: impl AsRef<Path>) -> Result<Board> {
        let path = path.as_ref();
        debug!("read: {}", path.display());
        // Wider than a cell so out-of-range numbers reach `from_rows` and fail there.
        let rows: Vec<Vec<i64>> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        Board::from_rows(&rows)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.lit
            .chunks(self.n)
            .map(|row| row.iter().map(|b| *b as u8).collect())
            .collect()
    }

    pub fn to_vector(&self) -> BitVector {
        BitVector::from_bits(&self.lit)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.n;
        (0..n * n).map(move |k| Cell::from_linear_index(k, n))
    }

    /// Flips `c` and its in-range orthogonal neighbors.
    pub fn toggle(&mut self, c: Cell) {
        assert!(c.is_in_range(self.n));
        for t in c.press_area(self.n) {
            let k = t.to_linear_index(self.n);
            self.lit[k] = !self.lit[k];
        }
    }

    /// Presses every cell whose bit is set in `presses`.
    pub fn press_all(&mut self, presses: &BitVector) {
        assert_eq!(presses.len(), self.n * self.n);
        for k in presses.ones() {
            self.toggle(Cell::from_linear_index(k, self.n));
        }
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|b| **b).count()
    }

    pub fn is_all_off(&self) -> bool {
        self.lit.iter().all(|b| !*b)
    }

    /// Reshapes a press vector into rows, the way a board is laid out.
    pub fn press_grid(&self, presses: &BitVector) -> Vec<Vec<u8>> {
        assert_eq!(presses.len(), self.n * self.n);
        presses.to_bits().chunks(self.n).map(|row| row.to_vec()).collect()
    }
}

impl std::ops::Index<Cell> for Board {
    type Output = bool;
    fn index(&self, index: Cell) -> &bool {
        &self.lit[index.to_linear_index(self.n)]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.to_rows() {
            let line: Vec<String> = row.iter().map(|b| b.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Flips cell (i, j) and its in-range orthogonal neighbors in place.
pub fn toggle(board: &mut Board, i: usize, j: usize) {
    board.toggle(Cell::new(i as i32, j as i32));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_rows_test() {
        let board = Board::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(board.n, 2);
        assert_eq!(board.lit, vec![true, false, false, true]);
        assert!(board[Cell::new(1, 1)]);
        assert_eq!(board.lit_count(), 2);
        assert_eq!(board.to_rows(), vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn invalid_board_test() {
        let err = Board::from_rows(&[vec![1, 0], vec![1]]).unwrap_err();
        assert_eq!(
            err.downcast::<InvalidBoardError>().unwrap(),
            InvalidBoardError::NotSquare { row: 1, len: 1, n: 2 }
        );

        let err = Board::from_rows(&[vec![1, 0, 1], vec![1, 0, 1]]).unwrap_err();
        assert!(err.downcast_ref::<InvalidBoardError>().is_some());

        let err = Board::from_rows(&[vec![1, 2], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err.downcast::<InvalidBoardError>().unwrap(),
            InvalidBoardError::InvalidCell { i: 0, j: 1, value: 2 }
        );

        let err = Board::from_rows::<u8>(&[]).unwrap_err();
        assert_eq!(
            err.downcast::<InvalidBoardError>().unwrap(),
            InvalidBoardError::Empty
        );
    }

    #[test]
    fn parse_test() {
        let board = Board::parse("101/010/101").unwrap();
        assert_eq!(board.to_rows(), vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]]);
        assert_eq!(Board::parse("11; 11").unwrap().lit_count(), 4);
        assert_eq!(Board::parse("1\n").unwrap().n, 1);
        assert_eq!(Board::parse("10\r\n01\r\n").unwrap().lit_count(), 2);

        // Commas separate cells, not rows.
        let board = Board::parse("1,0/0,1").unwrap();
        assert_eq!(board.to_rows(), vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(Board::parse("1 1 0; 0 1 0; 0 0 0").unwrap().lit_count(), 3);

        let err = Board::parse("1x/00").unwrap_err();
        assert_eq!(
            err.downcast::<InvalidBoardError>().unwrap(),
            InvalidBoardError::InvalidCharacter { row: 0, ch: 'x' }
        );
        let err = Board::parse("12/00").unwrap_err();
        assert!(err.downcast_ref::<InvalidBoardError>().is_some());
    }

    #[test]
    fn read_test() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lightsout-read-{}.json", std::process::id()));

        std::fs::write(&path, "[[1, 0, 1], [0, 1, 0], [1, 0, 1]]").unwrap();
        let board = Board::read(&path).unwrap();
        assert_eq!(board, Board::parse("101/010/101").unwrap());

        // Out-of-range numbers are board errors, not JSON errors.
        std::fs::write(&path, "[[1, 300], [0, 0]]").unwrap();
        let err = Board::read(&path).unwrap_err();
        assert_eq!(
            err.downcast::<InvalidBoardError>().unwrap(),
            InvalidBoardError::InvalidCell { i: 0, j: 1, value: 300 }
        );
        std::fs::write(&path, "[[1, -1], [0, 0]]").unwrap();
        let err = Board::read(&path).unwrap_err();
        assert_eq!(
            err.downcast::<InvalidBoardError>().unwrap(),
            InvalidBoardError::InvalidCell { i: 0, j: 1, value: -1 }
        );

        std::fs::write(&path, "[[1, 0], [0]]").unwrap();
        let err = Board::read(&path).unwrap_err();
        assert_eq!(
            err.downcast::<InvalidBoardError>().unwrap(),
            InvalidBoardError::NotSquare { row: 1, len: 1, n: 2 }
        );

        std::fs::write(&path, "not json").unwrap();
        let err = Board::read(&path).unwrap_err();
        assert!(err.downcast_ref::<InvalidBoardError>().is_none());

        std::fs::remove_file(&path).unwrap();
        assert!(Board::read(&path).is_err());
    }

    #[test]
    fn toggle_test() {
        let mut board = Board::new(3);
        toggle(&mut board, 1, 1);
        assert_eq!(board.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]);
        toggle(&mut board, 0, 0);
        assert_eq!(board.to_rows(), vec![vec![1, 0, 0], vec![0, 1, 1], vec![0, 1, 0]]);
        toggle(&mut board, 0, 0);
        toggle(&mut board, 1, 1);
        assert!(board.is_all_off());

        let mut single = Board::new(1);
        toggle(&mut single, 0, 0);
        assert_eq!(single.lit, vec![true]);
    }

    #[test]
    fn press_all_test() {
        let mut board = Board::new(2);
        let presses = BitVector::from_bits(&[true, false, false, true]);
        assert_eq!(board.press_grid(&presses), vec![vec![1, 0], vec![0, 1]]);
        board.press_all(&presses);
        assert_eq!(board.to_rows(), vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(format!("{}", board), "1 0\n0 1\n");
        assert_eq!(board.cells().count(), 4);
    }
}
