//! Random geometric graphs for benchmarking.

use std::f64::consts::SQRT_2;

use log::debug;
use rand::Rng;
use rayon::prelude::*;

use crate::error::{LspError, Result};
use crate::graph::{Graph, Point, VertexId};

/// Width below which the radius bisection stops.
pub const RADIUS_TOLERANCE: f64 = 0.001;

/// Benchmark sizes with the share of vertices the largest component should hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub vertices: usize,
    pub min_fraction: f64,
    pub max_fraction: f64,
}

pub const PRESETS: [Preset; 3] = [
    Preset {
        vertices: 300,
        min_fraction: 0.90,
        max_fraction: 0.95,
    },
    Preset {
        vertices: 400,
        min_fraction: 0.80,
        max_fraction: 0.90,
    },
    Preset {
        vertices: 500,
        min_fraction: 0.70,
        max_fraction: 0.80,
    },
];

/// A graph whose vertices are uniform points in the unit square, joined
/// whenever they lie within `radius` of each other.
#[derive(Clone, Debug)]
pub struct GeometricGraph {
    pub graph: Graph,
    pub radius: f64,
}

impl GeometricGraph {
    /// Vertex ids run from 1 to `n`; every vertex carries its point, including
    /// isolated ones.
    pub fn generate<R: Rng>(n: usize, radius: f64, rng: &mut R) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(LspError::InvalidParameter(format!(
                "radius must be a non-negative number, got {}",
                radius
            )));
        }
        if n >= VertexId::MAX as usize {
            return Err(LspError::InvalidParameter(format!(
                "too many vertices: {}",
                n
            )));
        }

        let points: Vec<Point> = (0..n)
            .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
            .collect();

        let pairs: Vec<(usize, usize)> = {
            let points = &points;
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| {
                    ((i + 1)..n)
                        .filter(move |&j| points[i].distance(&points[j]) <= radius)
                        .map(move |j| (i, j))
                })
                .collect()
        };

        let mut graph = Graph::new();
        for (i, point) in points.iter().enumerate() {
            graph.set_point(i as VertexId + 1, *point);
        }
        for (i, j) in pairs {
            graph.add_edge(i as VertexId + 1, j as VertexId + 1);
        }

        debug!(
            "generated geometric graph: n={} r={:.4} edges={}",
            n,
            radius,
            graph.edge_count()
        );
        Ok(Self { graph, radius })
    }
}

/// Bisects the connection radius on `[0, √2]` until a freshly generated
/// graph's largest component holds between `min_fraction · n` and
/// `max_fraction · n` vertices, or the interval is narrower than
/// [`RADIUS_TOLERANCE`]. A new graph is drawn at every step.
pub fn find_optimal_radius<R: Rng>(
    n: usize,
    min_fraction: f64,
    max_fraction: f64,
    rng: &mut R,
) -> Result<f64> {
    if n == 0 {
        return Err(LspError::InvalidParameter(
            "at least one vertex is required".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&min_fraction)
        || !(0.0..=1.0).contains(&max_fraction)
        || min_fraction > max_fraction
    {
        return Err(LspError::InvalidParameter(format!(
            "fractions must satisfy 0 <= min <= max <= 1, got {} and {}",
            min_fraction, max_fraction
        )));
    }

    let lower = min_fraction * n as f64;
    let upper = max_fraction * n as f64;
    let (mut low, mut high) = (0.0, SQRT_2);
    let mut mid = (low + high) / 2.0;

    while high - low > RADIUS_TOLERANCE {
        mid = (low + high) / 2.0;
        let size = GeometricGraph::generate(n, mid, rng)?
            .graph
            .largest_component()
            .len() as f64;
        debug!("radius {:.4}: largest component {}", mid, size);

        if size < lower {
            low = mid;
        } else if size > upper {
            high = mid;
        } else {
            break;
        }
    }

    Ok(mid)
}
