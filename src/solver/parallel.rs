use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

use log::info;
#[cfg(not(feature = "parallel"))]
use log::warn;
#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::problem::graph::Graph;
use crate::problem::Vertex;
use crate::solver::context::SearchContext;
use crate::solver::exact::{BranchAndBound, EngineResult};
use crate::solver::stats::SearchStats;

pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    NonPositiveWorkerCount(i64),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveWorkerCount(count) => {
                write!(f, "worker count must be positive, got {}", count)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Number of search threads, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerCount(NonZeroUsize);

impl WorkerCount {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for WorkerCount {
    type Error = ConfigurationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(ConfigurationError::NonPositiveWorkerCount(value))
    }
}

/// Exact search with the start vertices spread over `workers` threads.
///
/// Starts are handed out one at a time since subtree sizes vary wildly with pruning.
/// Each worker keeps its own buffers; all of them share one [`SearchContext`].
pub fn solve_parallel(graph: &Graph, workers: WorkerCount) -> anyhow::Result<EngineResult> {
    let context = SearchContext::new();
    let starts: Vec<Vertex> = graph.stops().collect();
    info!(
        "distributing {} start vertices over {} workers",
        starts.len(),
        workers.get()
    );

    #[cfg(feature = "parallel")]
    let stats = {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .build()?;
        pool.install(|| {
            starts
                .par_iter()
                .with_max_len(1)
                .map_init(
                    || BranchAndBound::new(graph, &context),
                    |bnb, &start| {
                        bnb.explore_from(start);
                        bnb.take_stats()
                    },
                )
                .reduce(SearchStats::default, SearchStats::merged)
        })
    };

    #[cfg(not(feature = "parallel"))]
    let stats = {
        warn!("built without the parallel feature, searching on the calling thread");
        let mut bnb = BranchAndBound::new(graph, &context);
        starts
            .iter()
            .map(|&start| {
                bnb.explore_from(start);
                bnb.take_stats()
            })
            .fold(SearchStats::default(), SearchStats::merged)
    };

    Ok(EngineResult {
        best: context.into_best(),
        stats,
    })
}
