/*
    Heuristic estimators for the Longest Simple Path (LSP) in the largest
    connected component of a sparse undirected graph.
    Copyright © lsp-heuristics contributors 2026.
*/

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod backtracking;
pub mod best_first;
pub mod builder;
pub mod double_sweep;
pub mod error;
pub mod farthest_first;
pub mod generate;
pub mod graph;
pub mod io;
pub mod logging;
pub mod report;
pub mod sampler;
pub mod traits;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::backtracking::Backtracking;
pub use crate::best_first::BestFirst;
pub use crate::builder::*;
pub use crate::double_sweep::DoubleSweep;
pub use crate::error::{LspError, Result};
pub use crate::farthest_first::FarthestFirst;
pub use crate::graph::{Component, DegreeStats, Graph, Point, Vertex, VertexId};
pub use crate::sampler::{RandomSampler, SequenceSampler};
pub use crate::traits::{Estimator, Sampler};

/// A lower-bound estimate of the longest simple path.
///
/// `path`, when present, is a simple path of exactly `length` edges listed
/// from its start vertex to its farthest vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub length: usize,
    pub path: Option<Vec<VertexId>>,
}

impl Estimate {
    pub fn length_only(length: usize) -> Self {
        Self { length, path: None }
    }

    pub fn with_path(path: Vec<VertexId>) -> Self {
        Self {
            length: path.len().saturating_sub(1),
            path: Some(path),
        }
    }

    /// Keeps `self` unless `other` is strictly longer.
    pub fn longer(self, other: Self) -> Self {
        if other.length > self.length {
            other
        } else {
            self
        }
    }
}

/// The four estimators, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    DoubleSweep,
    FarthestFirst,
    BestFirst,
    Backtracking,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DoubleSweep,
        Algorithm::FarthestFirst,
        Algorithm::BestFirst,
        Algorithm::Backtracking,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DoubleSweep => "double-sweep",
            Algorithm::FarthestFirst => "farthest-first",
            Algorithm::BestFirst => "best-first",
            Algorithm::Backtracking => "backtracking",
        }
    }

    /// Only the best-first search reads vertex coordinates.
    pub fn needs_points(self) -> bool {
        matches!(self, Algorithm::BestFirst)
    }

    pub fn estimator(self, builder: Builder) -> Box<dyn Estimator + Send + Sync> {
        match self {
            Algorithm::DoubleSweep => Box::new(builder.double_sweep()),
            Algorithm::FarthestFirst => Box::new(builder.farthest_first()),
            Algorithm::BestFirst => Box::new(builder.best_first()),
            Algorithm::Backtracking => Box::new(builder.backtracking()),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs `algorithm` on the largest connected component of `graph`, sampling
/// with the builder's seeded sampler.
///
/// # Examples
///
/// ```ignore
/// let estimate = lsp_heuristics::search(&graph, Algorithm::Backtracking, Builder::default().set_seed(7))?;
/// println!("longest simple path >= {}", estimate.length);
/// ```
pub fn search(graph: &Graph, algorithm: Algorithm, builder: Builder) -> Result<Estimate> {
    let component = graph.largest_component();
    let mut sampler = builder.sampler();
    algorithm
        .estimator(builder)
        .search_lsp(graph, &component, &mut sampler)
}
