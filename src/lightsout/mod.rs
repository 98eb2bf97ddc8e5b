mod board;
mod gauss;
mod matrix;
mod prelude;
pub mod run;
mod system;
mod trace;
mod verify;

pub use self::board::{toggle, Board};
pub use self::gauss::{
    eliminate, eliminate_with, solve, solve_board, solve_puzzle, solve_puzzle_strict, solve_with,
    Observer, Outcome,
};
pub use self::matrix::{BitMatrix, BitVector};
pub use self::prelude::{
    BoardTooLargeError, Cell, CellDiff, InvalidBoardError, Result, UnsolvableError,
};
pub use self::system::{build_system, toggle_matrix, LinearSystem};
pub use self::trace::{LogObserver, NoopObserver, Step, Trace};
pub use self::verify::{apply_presses, residual, verify};
