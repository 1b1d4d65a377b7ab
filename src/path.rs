use std::{
    fmt::{self, Debug, Display},
    iter::once,
};

use crate::edge::EdgeId;

/// A walk through a graph, represented as a sequence of vertices and the
/// edges that connect them.  A walk always has at least one vertex and
/// exactly one fewer edge than vertices.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path<T> {
    edges: Vec<EdgeId>,
    vertices: Vec<T>,
}

impl<T> Path<T> {
    /// Creates a new path starting at the given vertex.
    pub fn new(start: T) -> Self {
        Self {
            edges: Vec::new(),
            vertices: vec![start],
        }
    }

    pub(crate) fn from_parts(vertices: Vec<T>, edges: Vec<EdgeId>) -> Self {
        debug_assert_eq!(vertices.len(), edges.len() + 1);
        Self { edges, vertices }
    }

    /// Returns the first vertex in the path.
    pub fn first_vertex(&self) -> &T {
        &self.vertices[0]
    }

    /// Returns the last vertex in the path.
    pub fn last_vertex(&self) -> &T {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Returns the number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the path has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_closed(&self) -> bool
    where
        T: PartialEq,
    {
        self.first_vertex() == self.last_vertex()
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Returns an iterator over the vertices in the path along with the
    /// edges connecting them.  Each item is `(incoming_edge, vertex,
    /// outgoing_edge)`; the first vertex has no incoming edge and the last
    /// vertex has no outgoing edge.
    pub fn vertices_with_edges(
        &self,
    ) -> impl Iterator<Item = (Option<EdgeId>, &T, Option<EdgeId>)> + '_ {
        let incoming = once(None).chain(self.edges.iter().copied().map(Some));
        let outgoing = self.edges.iter().copied().map(Some).chain(once(None));
        incoming
            .zip(outgoing)
            .zip(self.vertices.iter())
            .map(|((in_edge, out_edge), vertex)| (in_edge, vertex, out_edge))
    }

    /// Extends the path by one edge ending at `vertex`.
    pub fn push(&mut self, edge: EdgeId, vertex: T) {
        self.edges.push(edge);
        self.vertices.push(vertex);
    }
}

/// Formats the path as `->v0->v1->...`.
impl<T: Display> Display for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "->{vertex}")?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
