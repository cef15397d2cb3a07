use crate::problem::graph::Graph;
use crate::problem::Vertex;
use crate::solution::{max_segment, Solution};
use crate::solver::exact::EngineResult;
use crate::solver::stats::SearchStats;

/// Rearranges `perm` into the next lexicographic permutation; `false` once it was the last.
fn next_permutation(perm: &mut [Vertex]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

fn is_candidate(graph: &Graph, perm: &[Vertex]) -> bool {
    graph.is_stop(perm[0])
        && graph.is_stop(perm[perm.len() - 1])
        && perm.windows(2).all(|it| graph.has_arc(it[0], it[1]))
}

/// Evaluates all `n!` vertex orders without any pruning.
///
/// Only usable for very small graphs; serves as a reference for the exact search.
pub fn solve(graph: &Graph) -> EngineResult {
    let mut perm: Vec<Vertex> = (0..graph.num_vertices()).collect();
    let mut best: Option<Solution> = None;
    let mut stats = SearchStats::default();

    loop {
        stats.nodes += 1;
        if is_candidate(graph, &perm) {
            let bound = max_segment(graph, &perm);
            if best.as_ref().map_or(true, |it| bound < it.bound) {
                best = Some(Solution::new(perm.clone(), bound));
                stats.commits += 1;
            }
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    EngineResult { best, stats }
}
