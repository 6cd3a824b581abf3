use bit_vec::BitVec;
use log::{debug, info};

use crate::builder::Builder;
use crate::error::{LspError, Result};
use crate::graph::{Component, ComponentIndex, Graph, VertexId};
use crate::traits::{Estimator, Sampler};
use crate::utils::{best_of_trials, trace_back};
use crate::Estimate;

/// Unweighted double sweep: from a random pivot, find the deepest vertex A,
/// then report the depth reached by a second sweep started at A.
#[derive(Clone, Debug, Default)]
pub struct DoubleSweep {
    builder: Builder,
}

/// Result of one sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeepestNode {
    pub vertex: VertexId,
    pub depth: usize,
    /// Tree path from the sweep's start to `vertex`.
    pub path: Vec<VertexId>,
}

impl DoubleSweep {
    pub fn new(builder: Builder) -> Self {
        Self { builder }
    }

    /// Single sweep from `start` inside `component`.
    pub fn find_deepest_node(
        &self,
        graph: &Graph,
        component: &Component,
        start: VertexId,
    ) -> Result<DeepestNode> {
        deepest_from(graph, &component.index(), start)
    }
}

impl Estimator for DoubleSweep {
    fn name(&self) -> &'static str {
        "double-sweep"
    }

    fn search_lsp(
        &self,
        graph: &Graph,
        component: &Component,
        sampler: &mut dyn Sampler,
    ) -> Result<Estimate> {
        if component.is_empty() {
            return Err(LspError::EmptyDomain);
        }
        let index = component.index();
        let trials = self.builder.trials_for(component.len());
        let pivots = sampler.pick_many(component.vertices(), trials)?;

        let best = best_of_trials(self.builder.get_parallel(), pivots, |pivot| {
            let first = deepest_from(graph, &index, pivot)?;
            let second = deepest_from(graph, &index, first.vertex)?;
            debug!(
                "double-sweep: pivot {} -> {} (depth {}) -> {} (depth {})",
                pivot, first.vertex, first.depth, second.vertex, second.depth
            );
            Ok(Estimate::with_path(second.path))
        })?;

        info!(
            "{}: {} trials over {} vertices, longest {}",
            self.name(),
            trials,
            component.len(),
            best.length
        );
        Ok(best)
    }
}

/// Explicit-stack depth-first traversal. A vertex is marked when it is
/// popped, at one more than the depth of the vertex that pushed it, so the
/// depth of every vertex is the length of its simple tree path.
fn deepest_from(graph: &Graph, index: &ComponentIndex<'_>, start: VertexId) -> Result<DeepestNode> {
    let start = index.require(start)?;
    let mut visited = BitVec::from_elem(index.len(), false);
    let mut parents: Vec<Option<usize>> = vec![None; index.len()];
    let mut stack: Vec<(usize, usize, Option<usize>)> = vec![(start, 0, None)];

    let mut deepest = start;
    let mut max_depth = 0;

    while let Some((position, depth, parent)) = stack.pop() {
        if visited[position] {
            continue;
        }
        visited.set(position, true);
        parents[position] = parent;

        if depth > max_depth {
            max_depth = depth;
            deepest = position;
        }

        for next in index.neighbors(graph, position) {
            if !visited[next] {
                stack.push((next, depth + 1, Some(position)));
            }
        }
    }

    Ok(DeepestNode {
        vertex: index.id(deepest),
        depth: max_depth,
        path: trace_back(&parents, deepest, index),
    })
}
