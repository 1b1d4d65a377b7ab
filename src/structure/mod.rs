//! Storage strategies for vertex/edge relationships.
//!
//! [`AdjacencyStructure`] is the capability set shared by the two storage
//! strategies:
//!
//! - [`AdjacencyList`]: one incidence list per vertex.  Edge lookup is a
//!   linear scan of the source's list; adjacency is reported in insertion
//!   order.
//! - [`AdjacencyMatrix`]: a dense `capacity × capacity` grid of cells.  Edge
//!   lookup is a single cell access; adjacency is reported in ascending
//!   vertex-index order.  The grid doubles when a vertex does not fit.
//!
//! [`Structure`] wraps one of the two behind a single type so a
//! [`Graph`](crate::Graph) can choose its storage at run time.
//!
//! Both strategies hold every edge exactly once in an arena and refer to it by
//! [`EdgeId`]; an undirected edge is the same id reachable from both ends.

pub mod list;
pub mod matrix;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tracing::{debug, trace};

pub use self::{list::AdjacencyList, matrix::AdjacencyMatrix};
use crate::{
    Result,
    directedness::Directedness,
    edge::{Edge, EdgeId},
    error::GraphError,
    vertex::VertexId,
};

/// Initial side length of a matrix created without a capacity hint.
pub const DEFAULT_MATRIX_CAPACITY: usize = 32;

/// Largest side length allocated up front.  Larger capacity hints are
/// clamped; the matrix still grows past this on demand.
pub const MAX_INITIAL_MATRIX_CAPACITY: usize = 1024;

/// Selects the storage strategy of a graph.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum StructureKind {
    #[default]
    List,
    Matrix,
}

impl Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::List => f.write_str("list"),
            StructureKind::Matrix => f.write_str("matrix"),
        }
    }
}

impl FromStr for StructureKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(StructureKind::List),
            "matrix" => Ok(StructureKind::Matrix),
            _ => Err(GraphError::IllegalStructureKind(s.to_string())),
        }
    }
}

impl quickcheck::Arbitrary for StructureKind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[StructureKind::List, StructureKind::Matrix])
            .unwrap_or(&StructureKind::List)
    }
}

/// Capability set of an adjacency structure.
///
/// Implementors provide vertex registration, the edge arena, edge lookup by
/// endpoint pair, per-vertex incidence, and the low-level [`link`] hook.  The
/// insertion rules (duplicate refusal, directed/undirected exclusivity,
/// implicit endpoint creation) live in the provided methods so that every
/// strategy enforces them identically.
///
/// [`link`]: AdjacencyStructure::link
pub trait AdjacencyStructure<T: VertexId, W> {
    fn kind(&self) -> StructureKind;

    /// Gets the number of vertices.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the number of logical edges.  An undirected edge counts once.
    fn num_edges(&self) -> usize {
        self.edges().len()
    }

    /// Gets all vertex identifiers in insertion order.
    fn vertices(&self) -> &[T];

    fn contains_vertex(&self, id: &T) -> bool;

    /// Adds a vertex.  Returns `false` and does nothing if it is already
    /// present.
    fn add_vertex(&mut self, id: T) -> bool;

    /// Gets all edges, indexed by [`EdgeId`].
    fn edges(&self) -> &[Edge<T, W>];

    fn edge(&self, id: EdgeId) -> Option<&Edge<T, W>> {
        self.edges().get(id.index())
    }

    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<T, W>>;

    /// Gets the edge reachable from `from` to `into`: a directed edge
    /// `from → into` or an undirected edge between the two.
    fn find_edge(&self, from: &T, into: &T) -> Option<EdgeId>;

    /// Gets the edges reachable from a vertex, or `None` if the vertex is
    /// unknown.
    fn adjacent_edge_ids(&self, id: &T) -> Option<Vec<EdgeId>>;

    /// Stores a new edge between two registered vertices and makes it
    /// reachable according to its directedness.  Callers must have checked
    /// that no edge is reachable between the two already.
    #[doc(hidden)]
    fn link(&mut self, source: T, target: T, weight: W, directedness: Directedness) -> EdgeId;

    /// Produces the textual dump of the structure.
    fn render(&self) -> String
    where
        T: Display,
        W: Display;

    /// Adds a directed edge `source → target`, creating missing endpoints.
    /// Returns `None` if an edge is already reachable from `source` to
    /// `target`, including an undirected edge between them.
    fn add_edge_directed(&mut self, source: T, target: T, weight: W) -> Option<EdgeId> {
        if self.find_edge(&source, &target).is_some() {
            trace!(?source, ?target, "directed edge refused");
            return None;
        }
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        debug!(?source, ?target, "adding directed edge");
        Some(self.link(source, target, weight, Directedness::Directed))
    }

    /// Adds an undirected edge between `source` and `target`, creating
    /// missing endpoints.  Returns `None` if any edge is reachable between
    /// the two in either direction.
    fn add_edge_undirected(&mut self, source: T, target: T, weight: W) -> Option<EdgeId> {
        if self.find_edge(&source, &target).is_some() || self.find_edge(&target, &source).is_some()
        {
            trace!(?source, ?target, "undirected edge refused");
            return None;
        }
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        debug!(?source, ?target, "adding undirected edge");
        Some(self.link(source, target, weight, Directedness::Undirected))
    }

    /// Adds a directed edge with the ends and weight of an existing edge.
    fn insert_edge_directed(&mut self, edge: &Edge<T, W>) -> Option<EdgeId>
    where
        W: Clone,
    {
        self.add_edge_directed(
            edge.source().clone(),
            edge.target().clone(),
            edge.weight().clone(),
        )
    }

    /// Adds an undirected edge with the ends and weight of an existing edge.
    fn insert_edge_undirected(&mut self, edge: &Edge<T, W>) -> Option<EdgeId>
    where
        W: Clone,
    {
        self.add_edge_undirected(
            edge.source().clone(),
            edge.target().clone(),
            edge.weight().clone(),
        )
    }

    /// Gets the far ends of the edges reachable from a vertex, in the same
    /// order as [`adjacent_edge_ids`](Self::adjacent_edge_ids).
    fn adjacent_vertices<'a>(&'a self, id: &T) -> Option<Vec<&'a T>>
    where
        W: 'a,
    {
        let edge_ids = self.adjacent_edge_ids(id)?;
        Some(
            edge_ids
                .into_iter()
                .filter_map(|eid| self.edge(eid))
                .map(|edge| edge.other_end(id))
                .collect(),
        )
    }

    /// Gets the degree of a vertex: one per reachable edge, except that an
    /// undirected self-loop touches its vertex twice and counts 2.
    fn degree(&self, id: &T) -> Option<usize> {
        let edge_ids = self.adjacent_edge_ids(id)?;
        Some(
            edge_ids
                .into_iter()
                .filter_map(|eid| self.edge(eid))
                .map(|edge| {
                    if edge.is_undirected() && edge.is_self_loop() {
                        2
                    } else {
                        1
                    }
                })
                .sum(),
        )
    }

    /// Returns true if a one-directional edge `from → into` exists.  The
    /// directed view of an undirected edge does not count.
    fn contains_edge_directed(&self, from: &T, into: &T) -> bool {
        self.find_edge(from, into)
            .and_then(|eid| self.edge(eid))
            .is_some_and(|edge| edge.is_directed())
    }

    /// Returns true if `from` and `into` are joined by one undirected edge
    /// reachable in both directions.
    fn contains_edge_undirected(&self, from: &T, into: &T) -> bool {
        match (self.find_edge(from, into), self.find_edge(into, from)) {
            (Some(forward), Some(backward)) if forward == backward => self
                .edge(forward)
                .is_some_and(|edge| edge.is_undirected()),
            _ => false,
        }
    }
}

/// Forwards a method call to whichever strategy a [`Structure`] holds.
macro_rules! dispatch {
    ($self:expr, $inner:ident => $call:expr) => {
        match $self {
            Structure::List($inner) => $call,
            Structure::Matrix($inner) => $call,
        }
    };
}

/// An adjacency structure whose strategy is chosen at run time.
#[derive(Clone, Debug)]
pub enum Structure<T: VertexId, W> {
    List(AdjacencyList<T, W>),
    Matrix(AdjacencyMatrix<T, W>),
}

impl<T: VertexId, W> Structure<T, W> {
    pub fn list() -> Self {
        Structure::List(AdjacencyList::new())
    }

    /// Creates a matrix with the given initial capacity, which must be
    /// positive.
    pub fn matrix(capacity: usize) -> Result<Self> {
        AdjacencyMatrix::with_capacity(capacity).map(Structure::Matrix)
    }

    /// Creates an empty structure of the given kind with default capacity.
    pub fn new(kind: StructureKind) -> Self {
        match kind {
            StructureKind::List => Self::list(),
            StructureKind::Matrix => Structure::Matrix(AdjacencyMatrix::new()),
        }
    }
}

impl<T: VertexId, W> AdjacencyStructure<T, W> for Structure<T, W> {
    fn kind(&self) -> StructureKind {
        dispatch!(self, s => s.kind())
    }

    fn len(&self) -> usize {
        dispatch!(self, s => s.len())
    }

    fn vertices(&self) -> &[T] {
        dispatch!(self, s => s.vertices())
    }

    fn contains_vertex(&self, id: &T) -> bool {
        dispatch!(self, s => s.contains_vertex(id))
    }

    fn add_vertex(&mut self, id: T) -> bool {
        dispatch!(self, s => s.add_vertex(id))
    }

    fn edges(&self) -> &[Edge<T, W>] {
        dispatch!(self, s => s.edges())
    }

    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<T, W>> {
        dispatch!(self, s => s.edge_mut(id))
    }

    fn find_edge(&self, from: &T, into: &T) -> Option<EdgeId> {
        dispatch!(self, s => s.find_edge(from, into))
    }

    fn adjacent_edge_ids(&self, id: &T) -> Option<Vec<EdgeId>> {
        dispatch!(self, s => s.adjacent_edge_ids(id))
    }

    fn link(&mut self, source: T, target: T, weight: W, directedness: Directedness) -> EdgeId {
        dispatch!(self, s => s.link(source, target, weight, directedness))
    }

    fn render(&self) -> String
    where
        T: Display,
        W: Display,
    {
        dispatch!(self, s => s.render())
    }
}
