use crate::solution::SearchOutcome;
use crate::solver::SolverResult;

pub const INFEASIBLE_MESSAGE: &str = "no solution";
pub const DISCONNECTED_MESSAGE: &str = "no solution: graph is not connected";

/// Human readable result: the path followed by its bound, or one of the sentinels.
pub fn format_outcome(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Solved(solution) => {
            let path = solution
                .path
                .iter()
                .map(|it| it.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("path: {}\nbound: {}", path, solution.bound)
        }
        SearchOutcome::Infeasible => INFEASIBLE_MESSAGE.to_string(),
        SearchOutcome::Disconnected => DISCONNECTED_MESSAGE.to_string(),
    }
}

/// `<status>,<bound or ->,<seconds>` with fractional seconds
pub fn format_summary(result: &SolverResult) -> String {
    format!(
        "{},{},{}",
        result.outcome.status(),
        result
            .outcome
            .bound()
            .map_or("-".to_string(), |it| it.to_string()),
        result.time.as_std().as_secs_f64()
    )
}
