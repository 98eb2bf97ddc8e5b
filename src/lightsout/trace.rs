use serde_json;
use std;

use super::gauss::*;
use super::prelude::*;

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Pivot { col: usize, row: usize },
    Swap { a: usize, b: usize },
    Add { target: usize, source: usize },
    Free { col: usize },
    Assign { var: usize, value: bool, free: bool },
}

/// Discards every step.
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Forwards every step to the `trace!` log level.
pub struct LogObserver;

impl Observer for LogObserver {
    fn pivot(&mut self, col: usize, row: usize) {
        trace!("column {}: pivot at row {}", col, row);
    }

    fn swap(&mut self, a: usize, b: usize) {
        trace!("swap: F{} <-> F{}", a, b);
    }

    fn add(&mut self, target: usize, source: usize) {
        trace!("add: F{} -> F{} + F{}", target, target, source);
    }

    fn free(&mut self, col: usize) {
        trace!("column {}: no pivot", col);
    }

    fn assign(&mut self, var: usize, value: bool, free: bool) {
        trace!("x_{} = {}{}", var, value as u8, if free { " (free)" } else { "" });
    }
}

/// Records every step, for display or export.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub steps: Vec<Step>,
}

impl Observer for Trace {
    fn pivot(&mut self, col: usize, row: usize) {
        self.steps.push(Step::Pivot { col, row });
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.steps.push(Step::Swap { a, b });
    }

    fn add(&mut self, target: usize, source: usize) {
        self.steps.push(Step::Add { target, source });
    }

    fn free(&mut self, col: usize) {
        self.steps.push(Step::Free { col });
    }

    fn assign(&mut self, var: usize, value: bool, free: bool) {
        self.steps.push(Step::Assign { var, value, free });
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use self::Step::*;
        writeln!(f, "--start--")?;
        for step in &self.steps {
            match *step {
                Pivot { col, row } => writeln!(f, "column {}: pivot F{}", col, row)?,
                Swap { a, b } => writeln!(f, "  F{} <-> F{}", a, b)?,
                Add { target, source } => writeln!(f, "  F{} -> F{} + F{}", target, target, source)?,
                Free { col } => writeln!(f, "column {}: no pivot", col)?,
                Assign { var, value, free } => writeln!(
                    f,
                    "x_{} = {}{}",
                    var,
                    value as u8,
                    if free { " (free)" } else { "" }
                )?,
            }
        }
        writeln!(f, "--end--")
    }
}

impl Trace {
    pub fn new() -> Trace {
        Default::default()
    }

    pub fn swaps(&self) -> Vec<(usize, usize)> {
        self.steps
            .iter()
            .filter_map(|step| match *step {
                Step::Swap { a, b } => Some((a, b)),
                _ => None,
            })
            .collect()
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Writing trace to: {}", path.display());
        std::fs::write(path, serde_json::to_string_pretty(&self.steps)?)?;
        Ok(())
    }
}
