use super::board::*;
use super::matrix::*;

/// Presses every cell set in `presses` on a copy of `board`; true iff every light ends up off.
pub fn verify(board: &Board, presses: &BitVector) -> bool {
    let mut board = board.clone();
    apply_presses(&mut board, presses);
    board.is_all_off()
}

pub fn apply_presses(board: &mut Board, presses: &BitVector) {
    board.press_all(presses);
}

/// `A·x + b`: the equations `x` leaves unsatisfied.
pub fn residual(a: &BitMatrix, b: &BitVector, x: &BitVector) -> BitVector {
    let mut r = a.mul_vec(x);
    r.xor_assign(b);
    r
}
