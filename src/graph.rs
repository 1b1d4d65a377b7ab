//! [`Graph`] is the entry point of the library.  It owns the authoritative
//! vertex objects, an optional index of edges by caller-supplied key, and
//! exactly one [`Structure`] that stores the topology.
//!
//! Vertex objects (with their tags and properties) live in the graph rather
//! than in the structure, so converting a graph to another storage strategy
//! keeps them intact.  Edges live in the structure and are addressed by
//! [`EdgeId`].
//!
//! Insertions that would duplicate a vertex or an edge, or mix a directed and
//! an undirected edge on the same pair of vertices, are refused with `false`
//! or `None`.  Lookups by an identifier that was never added return
//! [`GraphError::VertexNotFound`].

use std::{collections::HashMap, fmt::Display};

use tracing::info;

use crate::{
    Result,
    config::GraphConfig,
    directedness::Directedness,
    edge::{Edge, EdgeId},
    error::GraphError,
    eulerian::{self, Eulerian},
    search::EulerianWalks,
    structure::{AdjacencyStructure, Structure, StructureKind},
    vertex::{Vertex, VertexId},
};

/// A weighted graph over vertex identifiers `T` with edge weights `W`.
/// Edges may additionally be registered under keys of type `K`.
#[derive(Clone, Debug)]
pub struct Graph<T: VertexId, W, K = T> {
    /// Invariant: holds exactly the vertices of `structure`.
    vertices: HashMap<T, Vertex<T>>,
    structure: Structure<T, W>,
    keyed_edges: HashMap<K, EdgeId>,
}

impl<T: VertexId, W, K: VertexId> Default for Graph<T, W, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VertexId, W, K: VertexId> Graph<T, W, K> {
    /// Creates an empty graph backed by an adjacency list.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            structure: Structure::list(),
            keyed_edges: HashMap::new(),
        }
    }

    /// Creates an empty graph of the given kind.  `capacity_hint` sets the
    /// initial size of a matrix and must not be zero.
    pub fn create(kind: StructureKind, capacity_hint: Option<usize>) -> Result<Self> {
        Self::with_config(GraphConfig::new(kind, capacity_hint))
    }

    pub fn with_config(config: GraphConfig) -> Result<Self> {
        Self::from_structure(config.structure()?)
    }

    /// Creates a graph around an existing structure, which must be empty.
    pub fn from_structure(structure: Structure<T, W>) -> Result<Self> {
        if !structure.is_empty() {
            return Err(GraphError::NonEmptyGraph);
        }
        Ok(Self {
            vertices: HashMap::new(),
            structure,
            keyed_edges: HashMap::new(),
        })
    }

    /// Rebuilds this graph on the given storage strategy.  Vertices, edges,
    /// edge ids, keys, tags and properties are all preserved; only the
    /// ordering of adjacency queries may change.
    pub fn converted(&self, kind: StructureKind) -> Self
    where
        W: Clone,
    {
        let mut structure = Structure::new(kind);
        for id in self.structure.vertices() {
            structure.add_vertex(id.clone());
        }
        for edge in self.structure.edges() {
            let copied = match edge.directedness() {
                Directedness::Directed => structure.insert_edge_directed(edge),
                Directedness::Undirected => structure.insert_edge_undirected(edge),
            };
            debug_assert_eq!(copied, Some(edge.id()));
            if let Some(copy) = copied.and_then(|eid| structure.edge_mut(eid)) {
                copy.set_tag(edge.tag());
                *copy.properties_mut() = edge.properties().clone();
            }
        }
        Self {
            vertices: self.vertices.clone(),
            structure,
            keyed_edges: self.keyed_edges.clone(),
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.structure.kind()
    }

    pub fn structure(&self) -> &Structure<T, W> {
        &self.structure
    }

    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    /// Gets the number of vertices.
    pub fn len(&self) -> usize {
        self.structure.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.len()
    }

    /// Gets the number of logical edges; an undirected edge counts once.
    pub fn num_edges(&self) -> usize {
        self.structure.num_edges()
    }

    /// Adds a vertex.  Returns `false` if it is already present.
    pub fn add_vertex(&mut self, id: T) -> bool {
        self.add_vertex_with(Vertex::new(id))
    }

    /// Adds a vertex object, keeping its tag and properties.  Returns `false`
    /// and leaves the existing vertex untouched if the id is already present.
    pub fn add_vertex_with(&mut self, vertex: Vertex<T>) -> bool {
        if !self.structure.add_vertex(vertex.id().clone()) {
            return false;
        }
        self.vertices.insert(vertex.id().clone(), vertex);
        true
    }

    pub fn contains_vertex(&self, id: &T) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex(&self, id: &T) -> Option<&Vertex<T>> {
        self.vertices.get(id)
    }

    pub fn vertex_mut(&mut self, id: &T) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(id)
    }

    /// Gets all vertex ids in insertion order.
    pub fn vertex_ids(&self) -> &[T] {
        self.structure.vertices()
    }

    /// Gets all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.structure
            .vertices()
            .iter()
            .filter_map(|id| self.vertices.get(id))
    }

    /// Gets the far ends of the edges reachable from a vertex.
    pub fn adjacent_vertices(&self, id: &T) -> Result<Vec<&Vertex<T>>> {
        let ids = self
            .structure
            .adjacent_vertices(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))?;
        Ok(ids
            .into_iter()
            .filter_map(|other| self.vertices.get(other))
            .collect())
    }

    /// Gets the edges reachable from a vertex.
    pub fn adjacent_edges(&self, id: &T) -> Result<Vec<&Edge<T, W>>> {
        let edge_ids = self
            .structure
            .adjacent_edge_ids(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))?;
        Ok(edge_ids
            .into_iter()
            .filter_map(|eid| self.structure.edge(eid))
            .collect())
    }

    /// Gets the number of edges reachable from a vertex.
    pub fn degree(&self, id: &T) -> Result<usize> {
        self.structure
            .degree(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    /// Adds a directed edge, creating missing endpoints.  Returns `None` if
    /// an edge is already reachable from `source` to `target`.
    pub fn add_edge_directed(&mut self, source: T, target: T, weight: W) -> Option<&Edge<T, W>> {
        let eid = self
            .structure
            .add_edge_directed(source.clone(), target.clone(), weight)?;
        self.adopt_endpoints(source, target);
        self.structure.edge(eid)
    }

    /// Adds an undirected edge, creating missing endpoints.  Returns `None`
    /// if any edge joins the two vertices already.
    pub fn add_edge_undirected(
        &mut self,
        source: T,
        target: T,
        weight: W,
    ) -> Option<&Edge<T, W>> {
        let eid = self
            .structure
            .add_edge_undirected(source.clone(), target.clone(), weight)?;
        self.adopt_endpoints(source, target);
        self.structure.edge(eid)
    }

    /// Adds a directed edge with the ends and weight of `edge`.
    pub fn insert_edge_directed(&mut self, edge: &Edge<T, W>) -> Option<&Edge<T, W>>
    where
        W: Clone,
    {
        self.add_edge_directed(
            edge.source().clone(),
            edge.target().clone(),
            edge.weight().clone(),
        )
    }

    /// Adds an undirected edge with the ends and weight of `edge`.
    pub fn insert_edge_undirected(&mut self, edge: &Edge<T, W>) -> Option<&Edge<T, W>>
    where
        W: Clone,
    {
        self.add_edge_undirected(
            edge.source().clone(),
            edge.target().clone(),
            edge.weight().clone(),
        )
    }

    /// Adds a directed edge registered under `key`.  Returns `None` if the
    /// key is already in use or the edge is refused.
    pub fn add_keyed_edge_directed(
        &mut self,
        key: K,
        source: T,
        target: T,
        weight: W,
    ) -> Option<&Edge<T, W>> {
        if self.keyed_edges.contains_key(&key) {
            return None;
        }
        let eid = self.add_edge_directed(source, target, weight)?.id();
        self.keyed_edges.insert(key, eid);
        self.structure.edge(eid)
    }

    /// Adds an undirected edge registered under `key`.  Returns `None` if the
    /// key is already in use or the edge is refused.
    pub fn add_keyed_edge_undirected(
        &mut self,
        key: K,
        source: T,
        target: T,
        weight: W,
    ) -> Option<&Edge<T, W>> {
        if self.keyed_edges.contains_key(&key) {
            return None;
        }
        let eid = self.add_edge_undirected(source, target, weight)?.id();
        self.keyed_edges.insert(key, eid);
        self.structure.edge(eid)
    }

    pub fn edge_by_key(&self, key: &K) -> Option<&Edge<T, W>> {
        self.keyed_edges
            .get(key)
            .and_then(|&eid| self.structure.edge(eid))
    }

    pub fn contains_edge_key(&self, key: &K) -> bool {
        self.keyed_edges.contains_key(key)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<T, W>> {
        self.structure.edge(id)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<T, W>> {
        self.structure.edge_mut(id)
    }

    /// Gets all edges in insertion order.
    pub fn edges(&self) -> &[Edge<T, W>] {
        self.structure.edges()
    }

    /// Gets the edge reachable from `from` to `into`, if any.
    pub fn find_edge(&self, from: &T, into: &T) -> Option<&Edge<T, W>> {
        self.structure
            .find_edge(from, into)
            .and_then(|eid| self.structure.edge(eid))
    }

    /// True if a one-directional edge `from → into` exists.
    pub fn contains_edge_directed(&self, from: &T, into: &T) -> bool {
        self.structure.contains_edge_directed(from, into)
    }

    /// True if an undirected edge joins `from` and `into`.
    pub fn contains_edge_undirected(&self, from: &T, into: &T) -> bool {
        self.structure.contains_edge_undirected(from, into)
    }

    /// Produces the textual dump of the underlying structure.
    pub fn render(&self) -> String
    where
        T: Display,
        W: Display,
    {
        self.structure.render()
    }

    /// Logs the textual dump at INFO level.
    pub fn print(&self)
    where
        T: Display,
        W: Display,
    {
        info!(kind = %self.kind(), "\n{}", self.render());
    }

    /// Lazily enumerates the walks from `root` that use every edge exactly
    /// once.
    pub fn eulerian_walks(&self, root: &T) -> Result<EulerianWalks<'_, T, W, Structure<T, W>>> {
        if !self.contains_vertex(root) {
            return Err(GraphError::vertex_not_found(root));
        }
        Ok(EulerianWalks::new(&self.structure, root.clone()))
    }

    /// Collects every walk from `root` that uses every edge exactly once,
    /// each formatted as `->v0->v1->...`.
    pub fn find_all_paths(&self, root: &T) -> Result<Vec<String>>
    where
        T: Display,
    {
        Ok(self
            .eulerian_walks(root)?
            .map(|path| path.to_string())
            .collect())
    }

    fn adopt_endpoints(&mut self, source: T, target: T) {
        for id in [source, target] {
            self.vertices
                .entry(id)
                .or_insert_with_key(|id| Vertex::new(id.clone()));
        }
    }
}

impl<T: VertexId, W, K: VertexId> Eulerian for Graph<T, W, K> {
    fn odd_degree_count(&self) -> usize {
        eulerian::odd_degree_count::<T, W, _>(&self.structure)
    }
}
