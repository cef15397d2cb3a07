use clap::{Parser, ValueEnum};

use crate::solver::parallel::{ConfigurationError, WorkerCount, DEFAULT_WORKERS};

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(short, long, help = "instance file path (json)")]
    pub instance: String,

    #[arg(short, long, help = "solution file path (json)")]
    pub solution: Option<String>,

    #[command(flatten)]
    pub solver: SolverArguments,

    #[arg(long, help = "print summary to stdout", default_value = "false")]
    pub print_summary_to_stdout: bool,
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum Solver {
    /// branch-and-bound on the calling thread
    Exact,
    /// branch-and-bound with start vertices spread over a thread pool
    ExactParallel,
    /// every vertex order, no pruning (tiny instances only)
    BruteForce,
}

#[derive(clap::Args, Clone, Debug)]
pub struct SolverArguments {
    #[arg(long = "solver", value_enum, default_value = "exact-parallel")]
    pub variant: Solver,
    #[arg(
        short,
        long,
        help = "number of worker threads (must be positive)",
        default_value_t = DEFAULT_WORKERS as i64,
        allow_negative_numbers = true
    )]
    pub threads: i64,
}

impl SolverArguments {
    pub(crate) fn worker_count(&self) -> Result<WorkerCount, ConfigurationError> {
        WorkerCount::try_from(self.threads)
    }
}
