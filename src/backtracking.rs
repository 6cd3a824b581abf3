use bit_vec::BitVec;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, info, trace};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rustc_hash::FxHashMap;

use crate::builder::Builder;
use crate::error::{LspError, Result};
use crate::graph::{Component, ComponentIndex, Graph, VertexId};
use crate::traits::{Estimator, Sampler};
use crate::Estimate;

/// Depth-first enumeration of simple paths from random pivots, pruned by a
/// memo of the longest path length already seen at each vertex.
///
/// The memo lives for one `search_lsp` call and is shared by all of its
/// trials, so the result depends on the order branches are visited.
#[derive(Clone, Debug, Default)]
pub struct Backtracking {
    builder: Builder,
}

/// Pruning table keyed by component position.
pub trait PruningMemo {
    /// Records `length` at `vertex` unless a length at least as long is
    /// already recorded. Returns `false` when the branch is dominated.
    fn record_if_longer(&mut self, vertex: usize, length: usize) -> bool;
}

impl PruningMemo for FxHashMap<usize, usize> {
    fn record_if_longer(&mut self, vertex: usize, length: usize) -> bool {
        match self.get(&vertex) {
            Some(&best) if best >= length => false,
            _ => {
                self.insert(vertex, length);
                true
            }
        }
    }
}

/// Concurrent memo for parallel trials; the check and the update happen
/// under one shard lock.
impl PruningMemo for &DashMap<usize, usize> {
    fn record_if_longer(&mut self, vertex: usize, length: usize) -> bool {
        match self.entry(vertex) {
            Entry::Occupied(mut best) => {
                if *best.get() >= length {
                    false
                } else {
                    best.insert(length);
                    true
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(length);
                true
            }
        }
    }
}

struct Branch {
    position: usize,
    on_path: BitVec,
    length: usize,
    /// Index of this branch's last step in the trail arena.
    step: usize,
}

impl Backtracking {
    pub fn new(builder: Builder) -> Self {
        Self { builder }
    }
}

impl Estimator for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
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
        let pivots = sampler
            .pick_many(component.vertices(), trials)?
            .into_iter()
            .map(|pivot| index.require(pivot))
            .collect::<Result<Vec<usize>>>()?;

        let best = if self.builder.get_parallel() {
            let memo: DashMap<usize, usize> = DashMap::new();
            pivots
                .into_par_iter()
                .map(|pivot| {
                    let mut shared = &memo;
                    explore(graph, &index, pivot, &mut shared)
                })
                .reduce(Estimate::default, Estimate::longer)
        } else {
            let mut memo: FxHashMap<usize, usize> = FxHashMap::default();
            memo.reserve(component.len());
            pivots
                .into_iter()
                .map(|pivot| explore(graph, &index, pivot, &mut memo))
                .fold(Estimate::default(), Estimate::longer)
        };

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

fn explore<M: PruningMemo>(
    graph: &Graph,
    index: &ComponentIndex<'_>,
    pivot: usize,
    memo: &mut M,
) -> Estimate {
    // (position, previous step); each branch keeps only the index of its last step.
    let mut trail: Vec<(usize, Option<usize>)> = vec![(pivot, None)];
    let mut on_path = BitVec::from_elem(index.len(), false);
    on_path.set(pivot, true);

    let mut stack = vec![Branch {
        position: pivot,
        on_path,
        length: 0,
        step: 0,
    }];
    let mut best: Option<(usize, usize)> = None;
    let mut pruned = 0usize;

    while let Some(branch) = stack.pop() {
        if !memo.record_if_longer(branch.position, branch.length) {
            pruned += 1;
            trace!(
                "backtracking: pruned {} at length {}",
                index.id(branch.position),
                branch.length
            );
            continue;
        }

        if best.map_or(true, |(length, _)| branch.length > length) {
            best = Some((branch.length, branch.step));
        }

        for next in index.neighbors(graph, branch.position) {
            if branch.on_path[next] {
                continue;
            }
            let mut on_path = branch.on_path.clone();
            on_path.set(next, true);
            trail.push((next, Some(branch.step)));
            stack.push(Branch {
                position: next,
                on_path,
                length: branch.length + 1,
                step: trail.len() - 1,
            });
        }
    }

    debug!(
        "backtracking: pivot {} best {:?}, {} branches pruned",
        index.id(pivot),
        best.map(|(length, _)| length),
        pruned
    );

    match best {
        Some((_, step)) => Estimate::with_path(unwind(&trail, step, index)),
        None => Estimate::default(),
    }
}

fn unwind(trail: &[(usize, Option<usize>)], step: usize, index: &ComponentIndex<'_>) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(step);
    while let Some(at) = current {
        let (position, previous) = trail[at];
        path.push(index.id(position));
        current = previous;
    }
    path.reverse();
    path
}
