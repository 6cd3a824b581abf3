use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::Result;
use crate::graph::{ComponentIndex, VertexId};
use crate::Estimate;

/// Smallest `r` with `r * r >= n`.
pub fn ceil_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r < n {
        r += 1;
    }
    while r > 0 && (r - 1) * (r - 1) >= n {
        r -= 1;
    }
    r
}

/// Follows parent pointers from `end` back to a root and returns the
/// vertex ids root-first.
pub(crate) fn trace_back(
    parents: &[Option<usize>],
    end: usize,
    index: &ComponentIndex<'_>,
) -> Vec<VertexId> {
    let mut path = vec![index.id(end)];
    let mut current = end;
    while let Some(parent) = parents[current] {
        path.push(index.id(parent));
        current = parent;
    }
    path.reverse();
    path
}

/// Runs one estimate per trial and keeps the longest. Ties keep the
/// earliest trial, in both modes.
pub(crate) fn best_of_trials<T, F>(parallel: bool, trials: Vec<T>, run: F) -> Result<Estimate>
where
    T: Send,
    F: Fn(T) -> Result<Estimate> + Sync + Send,
{
    if parallel {
        trials
            .into_par_iter()
            .map(&run)
            .try_reduce(Estimate::default, |best, next| Ok(best.longer(next)))
    } else {
        trials
            .into_iter()
            .try_fold(Estimate::default(), |best, trial| Ok(best.longer(run(trial)?)))
    }
}
