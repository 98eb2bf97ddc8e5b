//! Gaussian elimination over GF(2).
//!
//! Forward elimination uses row addition only and picks the first row at or below the
//! diagonal with a 1 in the current column. Back-substitution sets every variable
//! whose diagonal entry is 0 to 0 without checking the equation it leaves behind, so
//! `solve` may return a vector that does not satisfy the system. `eliminate` reports
//! that case explicitly.

use super::board::*;
use super::matrix::*;
use super::prelude::*;
use super::system::*;
use super::trace::*;
use super::verify::*;

/// Receives each elimination step as it happens.
pub trait Observer {
    fn pivot(&mut self, _col: usize, _row: usize) {}
    fn swap(&mut self, _a: usize, _b: usize) {}
    fn add(&mut self, _target: usize, _source: usize) {}
    fn free(&mut self, _col: usize) {}
    fn assign(&mut self, _var: usize, _value: bool, _free: bool) {}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Unique solution.
    Solved(BitVector),
    /// A solution with the listed pivotless columns set to 0.
    SolvedWithFreeVariables(BitVector, Vec<usize>),
    /// The candidate leaves some equations unsatisfied; pivotless columns as above.
    Inconsistent(BitVector, Vec<usize>),
}

impl Outcome {
    pub fn solution(&self) -> &BitVector {
        use self::Outcome::*;
        match self {
            Solved(x) | SolvedWithFreeVariables(x, _) | Inconsistent(x, _) => x,
        }
    }

    /// Columns without a pivot, in increasing order. Empty for `Solved`.
    pub fn free_columns(&self) -> &[usize] {
        use self::Outcome::*;
        match self {
            Solved(_) => &[],
            SolvedWithFreeVariables(_, free) | Inconsistent(_, free) => free,
        }
    }

    pub fn into_solution(self) -> BitVector {
        use self::Outcome::*;
        match self {
            Solved(x) | SolvedWithFreeVariables(x, _) | Inconsistent(x, _) => x,
        }
    }

    pub fn is_consistent(&self) -> bool {
        match self {
            Outcome::Inconsistent(..) => false,
            _ => true,
        }
    }
}

struct Reduction {
    x: BitVector,
    free_columns: Vec<usize>,
}

fn reduce<O: Observer + ?Sized>(a: &BitMatrix, b: &BitVector, observer: &mut O) -> Reduction {
    let m = a.num_rows();
    assert_eq!(a.num_cols(), m, "coefficient matrix must be square");
    assert_eq!(b.len(), m, "right-hand side must match the matrix");

    let mut aug = a.augment(b);
    let mut free_columns = vec![];

    for col in 0..m {
        let pivot = match (col..m).find(|r| aug.get(*r, col)) {
            Some(row) => row,
            None => {
                observer.free(col);
                free_columns.push(col);
                continue;
            }
        };
        observer.pivot(col, pivot);
        if pivot != col {
            aug.swap_rows(col, pivot);
            observer.swap(col, pivot);
        }
        for r in col + 1..m {
            if aug.get(r, col) {
                aug.add_row(r, col);
                observer.add(r, col);
            }
        }
    }

    // One spare bit so `x` lines up with the augmented rows; it stays 0.
    let mut x = BitVector::zeros(m + 1);
    for i in (0..m).rev() {
        let row = aug.row(i);
        if row.get(i) {
            let s = row.get(m) ^ row.dot_from(&x, i + 1);
            x.set(i, s);
            observer.assign(i, s, false);
        } else {
            observer.assign(i, false, true);
        }
    }
    x.truncate(m);

    Reduction { x, free_columns }
}

/// Solves `A·x = b`. Never fails; the result may not satisfy the system.
pub fn solve(a: &BitMatrix, b: &BitVector) -> BitVector {
    reduce(a, b, &mut NoopObserver).x
}

pub fn solve_with<O: Observer + ?Sized>(a: &BitMatrix, b: &BitVector, observer: &mut O) -> BitVector {
    reduce(a, b, observer).x
}

pub fn eliminate(a: &BitMatrix, b: &BitVector) -> Outcome {
    eliminate_with(a, b, &mut NoopObserver)
}

/// Runs the same elimination as `solve`, then classifies the candidate with a residual check.
pub fn eliminate_with<O: Observer + ?Sized>(a: &BitMatrix, b: &BitVector, observer: &mut O) -> Outcome {
    let Reduction { x, free_columns } = reduce(a, b, observer);
    let unsatisfied = residual(a, b, &x).count_ones();
    if unsatisfied > 0 {
        warn!(
            "elimination: {} of {} equations unsatisfied, free columns: {:?}",
            unsatisfied,
            b.len(),
            free_columns
        );
        Outcome::Inconsistent(x, free_columns)
    } else if free_columns.is_empty() {
        debug!("elimination: unique solution, unknowns: {}", b.len());
        Outcome::Solved(x)
    } else {
        debug!("elimination: free columns: {:?}", free_columns);
        Outcome::SolvedWithFreeVariables(x, free_columns)
    }
}

pub fn solve_board(board: &Board) -> BitVector {
    let system = LinearSystem::new(board);
    solve(&system.a, &system.b)
}

/// `solve(build_system(rows))`.
pub fn solve_puzzle(rows: &[Vec<u8>]) -> Result<BitVector> {
    let (a, b) = build_system(rows)?;
    Ok(solve(&a, &b))
}

/// Like `solve_puzzle`, but fails with `UnsolvableError` instead of returning a vector
/// that leaves lights on.
pub fn solve_puzzle_strict(rows: &[Vec<u8>]) -> Result<BitVector> {
    let (a, b) = build_system(rows)?;
    match eliminate(&a, &b) {
        Outcome::Inconsistent(x, _) => Err(UnsolvableError {
            unsatisfied: residual(&a, &b, &x).count_ones(),
        }.into()),
        outcome => Ok(outcome.into_solution()),
    }
}
