use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::problem::{Vertex, Weight};
use crate::solution::Solution;

/// Best path found so far, shared by every branch of one search.
///
/// The bound is mirrored into an atomic so branches can prune without taking the lock.
/// Those reads may be stale; that only costs extra exploration. The solution behind the
/// mutex is the source of truth and every commit is rechecked against it under the lock.
#[derive(Debug)]
pub struct SearchContext {
    bound: AtomicU64,
    best: Mutex<Option<Solution>>,
}

impl SearchContext {
    /// `Weight::MAX` stands for "nothing found yet".
    pub fn new() -> Self {
        Self {
            bound: AtomicU64::new(Weight::MAX),
            best: Mutex::new(None),
        }
    }

    #[inline(always)]
    pub fn bound(&self) -> Weight {
        self.bound.load(Ordering::Relaxed)
    }

    /// Installs `path` if `bound` is strictly better than the current best.
    pub fn try_commit(&self, path: &[Vertex], bound: Weight) -> bool {
        if bound >= self.bound() {
            return false;
        }

        let mut guard = self.best.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = guard.as_ref() {
            if bound >= current.bound {
                return false;
            }
        }

        *guard = Some(Solution::new(path.to_vec(), bound));
        self.bound.store(bound, Ordering::Relaxed);
        true
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<Solution> {
        self.best
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_best(self) -> Option<Solution> {
        self.best
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
