use log::info;
use took::{Timer, Took};

use crate::cli::{Solver, SolverArguments};
use crate::problem::connectivity::is_connected;
use crate::problem::graph::Graph;
use crate::solution::SearchOutcome;
use crate::solver::exact::EngineResult;
use crate::solver::stats::SearchStats;
use crate::utils::logging::format_log_stats;

pub mod brute_force;
pub mod context;
pub mod exact;
pub mod parallel;
pub mod stats;

pub struct SolverResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub time: Took,
}

/// Validates the configuration, rejects unreachable graphs and runs the selected engine.
pub fn run(graph: &Graph, args: &SolverArguments) -> anyhow::Result<SolverResult> {
    let workers = args.worker_count()?;
    let timer = Timer::new();

    if !is_connected(graph) {
        info!("graph is not connected, skipping search");
        return Ok(SolverResult {
            outcome: SearchOutcome::Disconnected,
            stats: SearchStats::default(),
            time: timer.took(),
        });
    }

    info!("starting solver {:?}", args.variant);
    let EngineResult { best, stats } = match args.variant {
        Solver::Exact => exact::solve(graph),
        Solver::ExactParallel => parallel::solve_parallel(graph, workers)?,
        Solver::BruteForce => brute_force::solve(graph),
    };
    info!("{}", format_log_stats(&stats));

    Ok(SolverResult {
        outcome: SearchOutcome::from_best(best),
        stats,
        time: timer.took(),
    })
}
