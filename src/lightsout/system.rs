use super::board::*;
use super::matrix::*;
use super::prelude::*;

/// `A·x = b` over GF(2) for one board: `A` is the toggle matrix, `b` the lit cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearSystem {
    pub a: BitMatrix,
    pub b: BitVector,
}

impl LinearSystem {
    pub fn new(board: &Board) -> LinearSystem {
        let n = board.n;
        debug!("system: board: {}x{}, unknowns: {}", n, n, n * n);
        LinearSystem {
            a: toggle_matrix(n),
            b: board.to_vector(),
        }
    }

    pub fn unknowns(&self) -> usize {
        self.b.len()
    }
}

/// `A[r][c] = 1` iff pressing cell `c` flips cell `r`. Depends only on `n`.
pub fn toggle_matrix(n: usize) -> BitMatrix {
    let m = n * n;
    let mut a = BitMatrix::zeros(m, m);
    for r in 0..m {
        let cell = Cell::from_linear_index(r, n);
        for c in cell.press_area(n) {
            a.set(r, c.to_linear_index(n), true);
        }
    }
    a
}

/// Validates `rows` as a board and builds its system.
pub fn build_system(rows: &[Vec<u8>]) -> Result<(BitMatrix, BitVector)> {
    let board = Board::from_rows(rows)?;
    let LinearSystem { a, b } = LinearSystem::new(&board);
    Ok((a, b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_cell_test() {
        let (a, b) = build_system(&[vec![1]]).unwrap();
        assert_eq!(a.to_rows(), vec![vec![1]]);
        assert_eq!(b.to_bits(), vec![1]);
    }

    #[test]
    fn two_by_two_test() {
        let (a, b) = build_system(&[vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(
            a.to_rows(),
            vec![
                vec![1, 1, 1, 0],
                vec![1, 1, 0, 1],
                vec![1, 0, 1, 1],
                vec![0, 1, 1, 1],
            ]
        );
        assert_eq!(b.to_bits(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn toggle_matrix_shape_test() {
        for n in 1..=6 {
            let a = toggle_matrix(n);
            let m = n * n;
            assert_eq!(a.num_rows(), m);
            assert_eq!(a.num_cols(), m);
            assert!(a.is_symmetric());
            for r in 0..m {
                assert!(a.get(r, r));
                assert!(a.row(r).count_ones() <= 5);
            }
        }
        // Corners touch 2 neighbors, edges 3, interior 4.
        let a = toggle_matrix(3);
        assert_eq!(a.row(0).count_ones(), 3);
        assert_eq!(a.row(1).count_ones(), 4);
        assert_eq!(a.row(4).count_ones(), 5);
    }

    #[test]
    fn matrix_matches_toggle_test() {
        let n = 4;
        let a = toggle_matrix(n);
        for c in 0..n * n {
            let mut board = Board::new(n);
            board.toggle(Cell::from_linear_index(c, n));
            for r in 0..n * n {
                assert_eq!(a.get(r, c), board.lit[r]);
            }
        }
    }

    #[test]
    fn rhs_is_board_test() {
        let board = Board::parse("100/011/000").unwrap();
        let system = LinearSystem::new(&board);
        assert_eq!(system.unknowns(), 9);
        assert_eq!(system.b.to_bits(), vec![1, 0, 0, 0, 1, 1, 0, 0, 0]);
        assert_eq!(system.a, toggle_matrix(3));
    }

    #[test]
    fn invalid_board_test() {
        let err = build_system(&[vec![1, 0], vec![1]]).unwrap_err();
        assert!(err.downcast_ref::<InvalidBoardError>().is_some());
    }
}
