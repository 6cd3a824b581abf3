use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bit_vec::BitVec;
use itertools::iproduct;
use log::{debug, info};

use crate::builder::Builder;
use crate::error::{LspError, Result};
use crate::graph::{Component, ComponentIndex, Graph, Point};
use crate::traits::{Estimator, Sampler};
use crate::utils::{best_of_trials, trace_back};
use crate::Estimate;

/// Best-first search steered *away* from a sampled target.
///
/// The priority of a vertex is `hops − distance(vertex, target)` and the
/// largest priority is expanded first, which favours long walks that stay
/// far from the target. A trial ends when the target is popped; its length
/// is the hop count recorded for the target.
#[derive(Clone, Debug, Default)]
pub struct BestFirst {
    builder: Builder,
}

impl BestFirst {
    pub fn new(builder: Builder) -> Self {
        Self { builder }
    }
}

impl Estimator for BestFirst {
    fn name(&self) -> &'static str {
        "best-first"
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
        let points: Vec<Point> = graph
            .vertices_with_points(component)?
            .into_iter()
            .map(|vertex| vertex.point)
            .collect();

        let samples = self.builder.trials_for(component.len());
        let sources = sampler.pick_many(component.vertices(), samples)?;
        let targets = sampler.pick_many(component.vertices(), samples)?;

        let pairs = iproduct!(sources, targets)
            .map(|(source, target)| Ok((index.require(source)?, index.require(target)?)))
            .collect::<Result<Vec<(usize, usize)>>>()?;
        let pair_count = pairs.len();

        let best = best_of_trials(self.builder.get_parallel(), pairs, |(source, target)| {
            Ok(stretch(graph, &index, &points, source, target))
        })?;

        info!(
            "{}: {} source/target pairs over {} vertices, longest {}",
            self.name(),
            pair_count,
            component.len(),
            best.length
        );
        Ok(best)
    }
}

/// Frontier entry. Higher priority pops first; equal priorities pop in
/// insertion order.
#[derive(Clone, Copy, Debug)]
struct Scored {
    priority: f64,
    sequence: u64,
    position: usize,
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored {}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

fn stretch(
    graph: &Graph,
    index: &ComponentIndex<'_>,
    points: &[Point],
    source: usize,
    target: usize,
) -> Estimate {
    let goal = points[target];
    let mut hops: Vec<Option<usize>> = vec![None; index.len()];
    let mut priorities = vec![f64::NEG_INFINITY; index.len()];
    let mut parents: Vec<Option<usize>> = vec![None; index.len()];
    let mut visited = BitVec::from_elem(index.len(), false);
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    hops[source] = Some(0);
    priorities[source] = -points[source].distance(&goal);
    frontier.push(Scored {
        priority: priorities[source],
        sequence,
        position: source,
    });

    while let Some(Scored { position, .. }) = frontier.pop() {
        if visited[position] {
            continue;
        }
        let Some(current) = hops[position] else {
            continue;
        };
        if position == target {
            debug!(
                "best-first: {} -> {} in {} hops",
                index.id(source),
                index.id(target),
                current
            );
            return Estimate::with_path(trace_back(&parents, target, index));
        }
        visited.set(position, true);

        for next in index.neighbors(graph, position) {
            if visited[next] {
                continue;
            }
            let tentative = current + 1;
            let priority = tentative as f64 - points[next].distance(&goal);
            if hops[next].is_none() || priority > priorities[next] {
                hops[next] = Some(tentative);
                priorities[next] = priority;
                parents[next] = Some(position);
                sequence += 1;
                frontier.push(Scored {
                    priority,
                    sequence,
                    position: next,
                });
            }
        }
    }

    debug!(
        "best-first: {} never reached {}",
        index.id(source),
        index.id(target)
    );
    Estimate::default()
}
