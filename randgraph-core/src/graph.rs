//! Directed graph held in memory between generation and serialization.

use std::collections::HashMap;

use crate::{
    error::{GraphError, Result},
    vertex::VertexId,
};

/// Mapping from each vertex to its ordered out-edges.
///
/// Vertices iterate in the order they were generated or read, which keeps the
/// serialized form stable for a given graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<VertexId>,
    edges: Vec<Vec<VertexId>>,
    index: HashMap<VertexId, usize>,
}

/// Summary counts for a [`Graph`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of directed edges.
    pub edges: usize,
    /// Largest out-degree of any vertex, zero for an empty graph.
    pub max_out_degree: usize,
}

impl Graph {
    /// Builds a graph from parallel vertex and edge lists.
    ///
    /// `edges[i]` holds the out-edges of `vertices[i]`; callers guarantee both
    /// have the same length and that vertices are distinct.
    pub(crate) fn from_parts(vertices: Vec<VertexId>, edges: Vec<Vec<VertexId>>) -> Self {
        debug_assert_eq!(vertices.len(), edges.len());
        let index = vertices
            .iter()
            .enumerate()
            .map(|(position, vertex)| (vertex.clone(), position))
            .collect();
        Self {
            vertices,
            edges,
            index,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether `vertex` is part of the graph.
    #[must_use]
    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.index.contains_key(vertex)
    }

    /// Vertices in iteration order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Out-edges of `vertex`, or `None` if it is not part of the graph.
    #[must_use]
    pub fn neighbours(&self, vertex: &VertexId) -> Option<&[VertexId]> {
        let position = *self.index.get(vertex)?;
        self.edges.get(position).map(Vec::as_slice)
    }

    /// Iterates `(vertex, out-edges)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &[VertexId])> + '_ {
        self.vertices
            .iter()
            .zip(self.edges.iter().map(Vec::as_slice))
    }

    /// Iterates every `(source, target)` edge grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (&VertexId, &VertexId)> + '_ {
        self.iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }

    /// Returns vertex, edge, and maximum out-degree counts.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use randgraph_core::{GraphStats, read_graph};
    ///
    /// let graph = read_graph(Cursor::new("x\ny\nz\nx,y\nx,z\ny,z\n")).expect("fixture parses");
    /// assert_eq!(
    ///     graph.stats(),
    ///     GraphStats { vertices: 3, edges: 3, max_out_degree: 2 },
    /// );
    /// ```
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            max_out_degree: self.edges.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// Checks that no vertex lists itself and every edge stays in the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] or [`GraphError::DanglingEdge`] for the
    /// first violation found in vertex order.
    pub fn validate(&self) -> Result<()> {
        for (source, target) in self.edges() {
            if source == target {
                return Err(GraphError::SelfLoop {
                    vertex: source.to_string(),
                });
            }
            if !self.contains(target) {
                return Err(GraphError::DanglingEdge {
                    source_vertex: source.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(())
    }
}
