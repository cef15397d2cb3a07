use took::Took;

use crate::solution::SearchOutcome;
use crate::solver::stats::SearchStats;

pub fn format_log_method_outcome_timed(method: &str, outcome: &SearchOutcome, took: &Took) -> String {
    format!("{method} - {}, took: {took}", format_log_outcome(outcome))
}

pub fn format_log_outcome(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Solved(solution) => format!(
            "bound {} over {} vertices (status: {})",
            solution.bound,
            solution.path.len(),
            outcome.status()
        ),
        _ => format!("no path (status: {})", outcome.status()),
    }
}

pub fn format_log_stats(stats: &SearchStats) -> String {
    format!("search statistics - {}", stats)
}
