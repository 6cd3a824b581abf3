//! Edge-list ingestion and export.
//!
//! Two line formats are understood, and may be mixed within one file:
//!
//! - `u v`: an unweighted edge.
//! - `u x1 y1 v x2 y2`: an edge whose endpoints carry planar coordinates.
//!
//! Blank lines and lines starting with `%` or `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{LspError, Result};
use crate::graph::{Graph, Point, VertexId};

/// Parses an edge list. Any malformed line, including one that is not
/// valid UTF-8, aborts the whole read.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();

    for (line_index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_no = line_index + 1;
        let line = std::str::from_utf8(&bytes)
            .map_err(|e| LspError::format(line_no, format!("invalid UTF-8: {}", e)))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match tokens.as_slice() {
            [u, v] => graph.add_edge(parse_id(u, line_no)?, parse_id(v, line_no)?),
            [u, x1, y1, v, x2, y2] => {
                let u = parse_id(u, line_no)?;
                let pu = Point::new(parse_coordinate(x1, line_no)?, parse_coordinate(y1, line_no)?);
                let v = parse_id(v, line_no)?;
                let pv = Point::new(parse_coordinate(x2, line_no)?, parse_coordinate(y2, line_no)?);
                graph.add_edge_with_points(u, pu, v, pv);
            }
            other => {
                return Err(LspError::format(
                    line_no,
                    format!("expected 2 or 6 fields, found {}", other.len()),
                ))
            }
        }
    }

    debug!(
        "read {} vertices and {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    read_edge_list(BufReader::new(file))
}

/// Writes every undirected edge once as `u v`.
pub fn write_edge_list<W: Write>(graph: &Graph, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for (u, v) in undirected_edges(graph) {
        writeln!(writer, "{} {}", u, v)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes every undirected edge once as `u x1 y1 v x2 y2`.
pub fn write_point_edge_list<W: Write>(graph: &Graph, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for (u, v) in undirected_edges(graph) {
        let pu = graph.point(u).ok_or(LspError::MissingCoordinates(u))?;
        let pv = graph.point(v).ok_or(LspError::MissingCoordinates(v))?;
        writeln!(writer, "{} {} {} {} {} {}", u, pu.x, pu.y, v, pv.x, pv.y)?;
    }
    writer.flush()?;
    Ok(())
}

/// Each `add_edge(u, v)` leaves one entry in both lists; a self-loop leaves
/// two entries in the same list.
fn undirected_edges(graph: &Graph) -> Vec<(VertexId, VertexId)> {
    let mut edges = Vec::with_capacity(graph.edge_count());
    for &u in graph.vertices() {
        let mut self_loops = 0;
        for &v in graph.neighbors(u) {
            if u < v {
                edges.push((u, v));
            } else if u == v {
                self_loops += 1;
                if self_loops % 2 == 0 {
                    edges.push((u, u));
                }
            }
        }
    }
    edges
}

fn parse_id(token: &str, line: usize) -> Result<VertexId> {
    token
        .parse()
        .map_err(|e| LspError::format(line, format!("invalid vertex id {:?}: {}", token, e)))
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64> {
    token
        .parse()
        .map_err(|e| LspError::format(line, format!("invalid coordinate {:?}: {}", token, e)))
}
