use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{LspError, Result};

pub type VertexId = u32;

/// A planar position attached to a vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A vertex identifier together with its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub point: Point,
}

/// Undirected adjacency-list graph with optional per-vertex coordinates.
///
/// Neighbor lists keep edge-insertion order and are never deduplicated.
/// Vertices are iterated in the order they were first seen, which makes
/// component extraction deterministic.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: FxHashMap<VertexId, Vec<VertexId>>,
    order: Vec<VertexId>,
    points: FxHashMap<VertexId, Point>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex without any incident edge.
    pub fn add_vertex(&mut self, id: VertexId) {
        if !self.adjacency.contains_key(&id) {
            self.adjacency.insert(id, Vec::new());
            self.order.push(id);
        }
    }

    /// Inserts `v` into the neighbor list of `u` and `u` into the neighbor list of `v`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.add_vertex(u);
        self.add_vertex(v);
        self.adjacency.entry(u).or_default().push(v);
        self.adjacency.entry(v).or_default().push(u);
    }

    /// Attaches coordinates to a vertex. The first point recorded for a vertex wins.
    pub fn set_point(&mut self, id: VertexId, point: Point) {
        self.add_vertex(id);
        self.points.entry(id).or_insert(point);
    }

    pub fn add_edge_with_points(&mut self, u: VertexId, pu: Point, v: VertexId, pv: Point) {
        self.set_point(u, pu);
        self.set_point(v, pv);
        self.add_edge(u, v);
    }

    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All vertices in first-seen order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.order
    }

    pub fn point(&self, id: VertexId) -> Option<Point> {
        self.points.get(&id).copied()
    }

    /// True when every vertex of `component` carries coordinates.
    pub fn has_points_for(&self, component: &Component) -> bool {
        component
            .vertices()
            .iter()
            .all(|id| self.points.contains_key(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of `add_edge` calls reflected in the adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Finds the connected component with the most vertices.
    ///
    /// Every vertex not yet reached starts a new explicit-stack traversal, in
    /// first-seen order. Only a strictly larger component replaces the current
    /// best, so ties go to the component discovered first.
    pub fn largest_component(&self) -> Component {
        let mut visited = FxHashSet::default();
        visited.reserve(self.order.len());

        let mut largest: Vec<VertexId> = Vec::new();
        for &root in &self.order {
            if visited.contains(&root) {
                continue;
            }
            let component = self.collect_reachable(root, &mut visited);
            if component.len() > largest.len() {
                largest = component;
            }
        }

        Component::new(largest)
    }

    /// Coordinate-bearing variant of [`Graph::largest_component`].
    pub fn largest_component_vertices(&self) -> Result<Vec<Vertex>> {
        self.vertices_with_points(&self.largest_component())
    }

    /// Resolves the coordinates of every vertex of `component`, in component order.
    pub fn vertices_with_points(&self, component: &Component) -> Result<Vec<Vertex>> {
        component
            .vertices()
            .iter()
            .map(|&id| {
                self.point(id)
                    .map(|point| Vertex { id, point })
                    .ok_or(LspError::MissingCoordinates(id))
            })
            .collect()
    }

    /// Maximum and average adjacency-list length over `component`.
    pub fn degree_stats(&self, component: &Component) -> DegreeStats {
        if component.is_empty() {
            return DegreeStats::default();
        }

        let (max_degree, total) = component
            .vertices()
            .iter()
            .map(|&id| self.neighbors(id).len())
            .fold((0, 0), |(max, sum), degree| (max.max(degree), sum + degree));

        DegreeStats {
            max_degree,
            average_degree: total as f64 / component.len() as f64,
        }
    }

    fn collect_reachable(&self, root: VertexId, visited: &mut FxHashSet<VertexId>) -> Vec<VertexId> {
        let mut component = Vec::new();
        let mut stack = vec![root];
        visited.insert(root);

        while let Some(v) = stack.pop() {
            component.push(v);
            for &neighbor in self.neighbors(v) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        component
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeStats {
    pub max_degree: usize,
    pub average_degree: f64,
}

/// The vertex set an estimator searches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Component {
    vertices: Vec<VertexId>,
}

impl Component {
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    pub(crate) fn index(&self) -> ComponentIndex<'_> {
        ComponentIndex::new(&self.vertices)
    }
}

impl From<Vec<VertexId>> for Component {
    fn from(vertices: Vec<VertexId>) -> Self {
        Self::new(vertices)
    }
}

/// Dense positions for the vertices of one component.
///
/// Search state is kept in position-indexed vectors and bit sets owned by a
/// single estimator call. Neighbors outside the component have no position
/// and are never traversed.
pub(crate) struct ComponentIndex<'a> {
    ids: &'a [VertexId],
    positions: FxHashMap<VertexId, usize>,
}

impl<'a> ComponentIndex<'a> {
    fn new(ids: &'a [VertexId]) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(ids.len());
        for (position, &id) in ids.iter().enumerate() {
            positions.entry(id).or_insert(position);
        }
        Self { ids, positions }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn id(&self, position: usize) -> VertexId {
        self.ids[position]
    }

    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn require(&self, id: VertexId) -> Result<usize> {
        self.position(id).ok_or(LspError::UnknownVertex(id))
    }

    /// Positions of the in-component neighbors of the vertex at `position`.
    pub fn neighbors<'g>(
        &'g self,
        graph: &'g Graph,
        position: usize,
    ) -> impl Iterator<Item = usize> + 'g {
        graph
            .neighbors(self.id(position))
            .iter()
            .filter_map(move |&id| self.position(id))
    }
}
