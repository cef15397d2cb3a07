use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use serde::Serialize;

use crate::problem::Vertex;
use crate::solution::SearchOutcome;

pub const INFEASIBLE_VALUE: i64 = -1;
pub const DISCONNECTED_VALUE: i64 = -2;

#[derive(Debug, Serialize)]
pub struct JsonSolution<'a> {
    pub solution: &'a [Vertex],
    #[serde(rename = "max subpath value")]
    pub max_subpath_value: i64,
}

impl<'a> JsonSolution<'a> {
    pub fn from_outcome(outcome: &'a SearchOutcome) -> anyhow::Result<Self> {
        Ok(match outcome {
            SearchOutcome::Solved(solution) => Self {
                solution: &solution.path,
                max_subpath_value: i64::try_from(solution.bound)?,
            },
            SearchOutcome::Infeasible => Self {
                solution: &[],
                max_subpath_value: INFEASIBLE_VALUE,
            },
            SearchOutcome::Disconnected => Self {
                solution: &[],
                max_subpath_value: DISCONNECTED_VALUE,
            },
        })
    }
}

pub fn write_solution(path: impl Into<String>, outcome: &SearchOutcome) -> anyhow::Result<()> {
    let path = path.into();
    let f = File::create(&path).with_context(|| format!("unable to create '{}'", path))?;
    let mut file = BufWriter::new(&f);
    serde_json::to_writer(&mut file, &JsonSolution::from_outcome(outcome)?)?;
    writeln!(file)?;
    file.flush()?;
    Ok(())
}
