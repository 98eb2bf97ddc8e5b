use chrono::*;
use serde_json;

use std;
use std::path::Path;

use super::board::*;
use super::gauss::*;
use super::prelude::*;
use super::system::*;
use super::trace::*;
use super::verify::*;
use rayon::prelude::*;

pub struct Config {
    /// Largest accepted board side; the interactive game stops at 8.
    pub max_size: usize,
    pub strict: bool,
    pub explain: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_size: 8,
            strict: false,
            explain: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Report {
    pub n: usize,
    pub presses: Vec<Vec<u8>>,
    pub verified: bool,
    pub free_columns: Vec<usize>,
    pub unsatisfied: usize,
}

impl Report {
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Writing report to: {}", path.display());
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

pub struct RunResult {
    pub report: Report,
    pub outcome: Outcome,
    pub trace: Trace,
}

pub fn load_board(board: Option<String>, rows: Option<String>) -> Result<Board> {
    if let Some(path) = board {
        Board::read(path)
    } else if let Some(rows) = rows {
        Board::parse(&rows)
    } else {
        bail!("either --board or --rows is required")
    }
}

pub fn solve_board_with(board: &Board, config: &Config) -> Result<RunResult> {
    if board.n > config.max_size {
        return Err(BoardTooLargeError {
            n: board.n,
            max: config.max_size,
        }.into());
    }
    let system = LinearSystem::new(board);
    let mut trace = Trace::new();
    let outcome = eliminate_with(&system.a, &system.b, &mut trace);
    let unsatisfied = residual(&system.a, &system.b, outcome.solution()).count_ones();
    if config.strict && unsatisfied > 0 {
        return Err(UnsolvableError { unsatisfied }.into());
    }
    let report = Report {
        n: board.n,
        presses: board.press_grid(outcome.solution()),
        verified: verify(board, outcome.solution()),
        free_columns: outcome.free_columns().to_vec(),
        unsatisfied,
    };
    Ok(RunResult {
        report,
        outcome,
        trace,
    })
}

pub fn solve(
    board: Option<String>,
    rows: Option<String>,
    output: Option<String>,
    trace: Option<String>,
    config: &Config,
) -> Result<()> {
    let board = load_board(board, rows)?;
    info!("board: {}x{}, lit: {}", board.n, board.n, board.lit_count());
    let run_result = solve_board_with(&board, config)?;

    println!("{}", board);
    if config.explain {
        println!("{}", run_result.trace);
    }
    for (i, row) in run_result.report.presses.iter().enumerate() {
        let line: Vec<String> = row.iter().map(|b| b.to_string()).collect();
        println!("row {}: {}", i + 1, line.join(" "));
    }
    println!("verified: {}", run_result.report.verified);
    if !run_result.report.verified {
        warn!(
            "presses leave lights on: unsatisfied: {}",
            run_result.report.unsatisfied
        );
    }

    if let Some(output) = output {
        run_result.report.write_to(output)?;
    }
    if let Some(trace) = trace {
        run_result.trace.write_to(trace)?;
    }
    Ok(())
}

pub fn check(board: Option<String>, rows: Option<String>, presses: String) -> Result<()> {
    let board = load_board(board, rows)?;
    // A press grid has the same shape and alphabet as a board.
    let presses = Board::read(presses)?;
    if presses.n != board.n {
        bail!(
            "presses are {}x{} but the board is {}x{}",
            presses.n,
            presses.n,
            board.n,
            board.n
        );
    }
    println!("{}", verify(&board, &presses.to_vector()));
    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SurveyRow {
    pub n: usize,
    pub unknowns: usize,
    pub free_columns: usize,
    pub all_lit_solved: bool,
}

pub fn survey_size(n: usize) -> SurveyRow {
    let mut board = Board::new(n);
    for lit in board.lit.iter_mut() {
        *lit = true;
    }
    let system = LinearSystem::new(&board);
    let outcome = eliminate(&system.a, &system.b);
    debug!("survey: n: {}, outcome: {}", n, outcome.is_consistent());
    SurveyRow {
        n,
        unknowns: system.unknowns(),
        free_columns: outcome.free_columns().len(),
        all_lit_solved: verify(&board, outcome.solution()),
    }
}

pub fn survey(max: usize) -> Result<()> {
    if max == 0 {
        bail!("--max must be at least 1");
    }
    let start_datetime = Local::now();
    info!("survey: sizes: 1..={}, start_datetime: {}", max, start_datetime);
    let sizes = (1..=max).collect::<Vec<_>>();
    let rows = sizes
        .par_iter()
        .map(|n| survey_size(*n))
        .collect::<Vec<_>>();
    println!("{:>4} {:>8} {:>6} {:>8}", "n", "unknowns", "free", "all-lit");
    for row in &rows {
        println!(
            "{:>4} {:>8} {:>6} {:>8}",
            row.n, row.unknowns, row.free_columns, row.all_lit_solved
        );
    }
    info!(
        "survey: done: start_datetime: {}, now: {}",
        start_datetime,
        Local::now()
    );
    Ok(())
}
