use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bit_vec::BitVec;
use log::{debug, info};

use crate::builder::Builder;
use crate::error::{LspError, Result};
use crate::graph::{Component, ComponentIndex, Graph, VertexId};
use crate::traits::{Estimator, Sampler};
use crate::utils::{best_of_trials, trace_back};
use crate::Estimate;

/// Dijkstra-style relaxation that always settles the unvisited vertex with
/// the *largest* known distance and relaxes neighbors upward.
///
/// Equal distances are settled in the order they were recorded.
#[derive(Clone, Debug, Default)]
pub struct FarthestFirst {
    builder: Builder,
}

/// Per-call distance/parent record. `distance == None` stands for −∞.
#[derive(Clone, Copy, Debug, Default)]
struct Relaxation {
    distance: Option<usize>,
    parent: Option<usize>,
}

impl FarthestFirst {
    pub fn new(builder: Builder) -> Self {
        Self { builder }
    }

    /// Relaxes the whole component from `start` and returns the parent chain
    /// ending at the farthest vertex, start first.
    pub fn search_from(
        &self,
        graph: &Graph,
        component: &Component,
        start: VertexId,
    ) -> Result<Estimate> {
        if component.is_empty() {
            return Err(LspError::EmptyDomain);
        }
        relax_from(graph, &component.index(), start)
    }
}

impl Estimator for FarthestFirst {
    fn name(&self) -> &'static str {
        "farthest-first"
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
        let starts = sampler.pick_many(component.vertices(), trials)?;

        let best = best_of_trials(self.builder.get_parallel(), starts, |start| {
            relax_from(graph, &index, start)
        })?;

        info!(
            "{}: {} starts over {} vertices, longest {}",
            self.name(),
            trials,
            component.len(),
            best.length
        );
        Ok(best)
    }
}

fn relax_from(graph: &Graph, index: &ComponentIndex<'_>, start: VertexId) -> Result<Estimate> {
    let start_position = index.require(start)?;

    let mut records = vec![Relaxation::default(); index.len()];
    let mut unvisited = BitVec::from_elem(index.len(), true);
    // (distance, insertion order, position); the max-heap pops the farthest
    // vertex first and, among equals, the one recorded earliest.
    let mut frontier: BinaryHeap<(usize, Reverse<u64>, usize)> = BinaryHeap::new();
    let mut sequence = 0u64;

    records[start_position].distance = Some(0);
    frontier.push((0, Reverse(sequence), start_position));

    while let Some((distance, _, position)) = frontier.pop() {
        if !unvisited[position] || records[position].distance != Some(distance) {
            continue;
        }
        unvisited.set(position, false);

        for next in index.neighbors(graph, position) {
            if !unvisited[next] {
                continue;
            }
            let candidate = distance + 1;
            if records[next].distance.map_or(true, |known| candidate > known) {
                records[next] = Relaxation {
                    distance: Some(candidate),
                    parent: Some(position),
                };
                sequence += 1;
                frontier.push((candidate, Reverse(sequence), next));
            }
        }
    }

    // Farthest vertex; the first one in component order wins ties.
    let farthest = records
        .iter()
        .enumerate()
        .filter_map(|(position, record)| record.distance.map(|d| (position, d)))
        .fold((start_position, 0), |best, current| {
            if current.1 > best.1 {
                current
            } else {
                best
            }
        });

    let parents: Vec<Option<usize>> = records.iter().map(|record| record.parent).collect();
    let path = trace_back(&parents, farthest.0, index);
    debug!(
        "farthest-first: start {} reaches {} at distance {}",
        start,
        index.id(farthest.0),
        farthest.1
    );

    Ok(Estimate::with_path(path))
}
