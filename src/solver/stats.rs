use std::fmt::{Display, Formatter};

/// Counters collected by one search worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// branches entered
    pub nodes: u64,
    pub pruned_by_bound: u64,
    /// branches that would exhaust the stops before the last position
    pub pruned_by_stop_order: u64,
    /// improvements installed into the shared context
    pub commits: u64,
}

impl SearchStats {
    pub fn merged(self, other: Self) -> Self {
        Self {
            nodes: self.nodes + other.nodes,
            pruned_by_bound: self.pruned_by_bound + other.pruned_by_bound,
            pruned_by_stop_order: self.pruned_by_stop_order + other.pruned_by_stop_order,
            commits: self.commits + other.commits,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes: {}, pruned (bound/stops): {}/{}, commits: {}",
            self.nodes, self.pruned_by_bound, self.pruned_by_stop_order, self.commits
        )
    }
}
