use fixedbitset::FixedBitSet;

use crate::problem::graph::Graph;
use crate::problem::{Vertex, Weight};
use crate::solution::{max_segment, Solution};

#[derive(Debug, PartialEq, Eq)]
pub enum Violation {
    WrongLength(usize),
    UnknownVertex(Vertex),
    DuplicateVertex(Vertex),
    MissingEdge { from: Vertex, to: Vertex },
    StartNotStop(Vertex),
    EndNotStop(Vertex),
}

#[derive(Debug, PartialEq, Eq)]
pub enum ValidatorResult {
    Valid(Weight),
    ConstraintViolation(Violation),
    BoundMismatch(Weight),
}

impl ValidatorResult {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Valid(_) => true,
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn assert_valid(&self) {
        match self {
            Self::Valid(_) => {}
            Self::ConstraintViolation(violation) => {
                assert!(false, "{:?}", violation)
            }
            Self::BoundMismatch(bound) => {
                assert!(false, "BoundMismatch({})", bound)
            }
        }
    }
}

/// Checks that `path` is a permutation of all vertices along existing arcs that starts and
/// ends on a stop, and (optionally) that its bound equals `expected_bound`.
pub fn validate_path(
    graph: &Graph,
    path: &[Vertex],
    expected_bound: Option<Weight>,
) -> ValidatorResult {
    use ValidatorResult::*;
    use Violation::*;

    let n = graph.num_vertices();
    if path.len() != n {
        return ConstraintViolation(WrongLength(path.len()));
    }

    let mut seen = FixedBitSet::with_capacity(n);
    for &v in path {
        if v >= n {
            return ConstraintViolation(UnknownVertex(v));
        }
        if seen.put(v) {
            return ConstraintViolation(DuplicateVertex(v));
        }
    }

    for pair in path.windows(2) {
        if !graph.has_arc(pair[0], pair[1]) {
            return ConstraintViolation(MissingEdge {
                from: pair[0],
                to: pair[1],
            });
        }
    }

    if !graph.is_stop(path[0]) {
        return ConstraintViolation(StartNotStop(path[0]));
    }
    if !graph.is_stop(path[n - 1]) {
        return ConstraintViolation(EndNotStop(path[n - 1]));
    }

    let bound = max_segment(graph, path);
    match expected_bound {
        Some(expected) if expected != bound => BoundMismatch(bound),
        _ => Valid(bound),
    }
}

pub fn validate_solution(graph: &Graph, solution: &Solution) -> ValidatorResult {
    validate_path(graph, &solution.path, Some(solution.bound))
}

#[cfg(test)]
pub fn assert_valid_solution(graph: &Graph, solution: &Solution) {
    validate_solution(graph, solution).assert_valid()
}
