use std::time::{Duration, Instant};

use itertools::Itertools;
use log::warn;
use serde::Serialize;

use crate::builder::Builder;
use crate::error::Result;
use crate::graph::{Component, Graph, VertexId};
use crate::{Algorithm, Estimate};

/// One row of the comparison table.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub vertex_count: usize,
    pub radius: Option<f64>,
    pub component_size: usize,
    pub max_degree: usize,
    pub average_degree: f64,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<VertexId>>,
    pub elapsed_ms: f64,
}

impl Report {
    pub fn new(
        algorithm: Algorithm,
        graph: &Graph,
        component: &Component,
        radius: Option<f64>,
        estimate: Estimate,
        elapsed: Duration,
    ) -> Self {
        let degrees = graph.degree_stats(component);
        Self {
            algorithm,
            vertex_count: graph.len(),
            radius,
            component_size: component.len(),
            max_degree: degrees.max_degree,
            average_degree: degrees.average_degree,
            length: estimate.length,
            path: estimate.path,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

/// Runs each algorithm on the largest component of `graph`. Every algorithm
/// gets its own sampler seeded identically, so runs are comparable.
///
/// Best-first is skipped with a warning when any component vertex lacks
/// coordinates, e.g. in a file that mixes both line formats.
pub fn evaluate(
    graph: &Graph,
    radius: Option<f64>,
    algorithms: &[Algorithm],
    builder: &Builder,
) -> Result<Vec<Report>> {
    let component = graph.largest_component();
    let has_points = graph.has_points_for(&component);
    let mut reports = Vec::with_capacity(algorithms.len());

    for &algorithm in algorithms {
        if algorithm.needs_points() && !has_points {
            warn!("skipping {}: the largest component is missing coordinates", algorithm);
            continue;
        }
        let mut sampler = builder.sampler();
        let started = Instant::now();
        let estimate = algorithm
            .estimator(builder.clone())
            .search_lsp(graph, &component, &mut sampler)?;
        reports.push(Report::new(
            algorithm,
            graph,
            &component,
            radius,
            estimate,
            started.elapsed(),
        ));
    }

    Ok(reports)
}

const HEADERS: [&str; 8] = [
    "Algorithm",
    "Vertices",
    "Radius",
    "LCC",
    "Max deg",
    "Avg deg",
    "LSP",
    "Time (ms)",
];

/// Renders the reports as an aligned text table. Paths are not included.
pub fn render_table(reports: &[Report]) -> String {
    let rows: Vec<[String; 8]> = reports
        .iter()
        .map(|report| {
            [
                report.algorithm.name().to_string(),
                report.vertex_count.to_string(),
                report
                    .radius
                    .map(|r| format!("{:.4}", r))
                    .unwrap_or_else(|| "-".to_string()),
                report.component_size.to_string(),
                report.max_degree.to_string(),
                format!("{:.2}", report.average_degree),
                report.length.to_string(),
                format!("{:.1}", report.elapsed_ms),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..HEADERS.len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].len())
                .chain(std::iter::once(HEADERS[column].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let separator = widths.iter().map(|width| "-".repeat(*width)).join("-+-");

    std::iter::once(format_row(HEADERS.to_vec()))
        .chain(std::iter::once(separator))
        .chain(
            rows.iter()
                .map(|row| format_row(row.iter().map(String::as_str).collect())),
        )
        .join("\n")
}
