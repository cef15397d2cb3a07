use crate::problem::graph::Graph;
use crate::problem::{Vertex, Weight};

/// A complete stop-constrained Hamiltonian path together with its bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<Vertex>,
    pub bound: Weight,
}

impl Solution {
    pub fn new(path: Vec<Vertex>, bound: Weight) -> Self {
        Self { path, bound }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// connected, but no stop-constrained Hamiltonian path exists
    Infeasible,
    /// rejected by the reachability check, no search was run
    Disconnected,
}

impl SearchOutcome {
    pub fn from_best(best: Option<Solution>) -> Self {
        match best {
            Some(solution) => Self::Solved(solution),
            None => Self::Infeasible,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn bound(&self) -> Option<Weight> {
        self.solution().map(|it| it.bound)
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::Infeasible => "infeasible",
            Self::Disconnected => "disconnected",
        }
    }
}

/// Largest segment weight along `path`.
///
/// A segment closes whenever a stop vertex is reached; a trailing open segment counts too.
pub fn max_segment(graph: &Graph, path: &[Vertex]) -> Weight {
    let mut max = 0;
    let mut current = 0;
    for pair in path.windows(2) {
        current += graph.weight(pair[0], pair[1]);
        if graph.is_stop(pair[1]) {
            max = max.max(current);
            current = 0;
        }
    }
    max.max(current)
}
