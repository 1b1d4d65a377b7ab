use std::fmt::{self, Debug, Display};

use derivative::Derivative;

use crate::{
    directedness::Directedness,
    properties::{Properties, PropertyValue},
    vertex::VisitState,
};

/// Identifies an edge within one adjacency structure.  Ids are dense and are
/// handed out in insertion order starting from zero.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted link between two vertex identifiers.
///
/// Equality and hashing consider the [`EdgeId`] only; two edges with equal
/// ends and weight but different ids are different edges.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, W: Clone"),
    Debug(bound = "T: Debug, W: Debug"),
    Hash(bound = "")
)]
pub struct Edge<T, W> {
    id: EdgeId,
    #[derivative(Hash = "ignore")]
    source: T,
    #[derivative(Hash = "ignore")]
    target: T,
    #[derivative(Hash = "ignore")]
    weight: W,
    #[derivative(Hash = "ignore")]
    directedness: Directedness,
    #[derivative(Hash = "ignore")]
    tag: Option<VisitState>,
    #[derivative(Hash = "ignore")]
    properties: Properties,
}

impl<T, W> Edge<T, W> {
    pub(crate) fn new(
        id: EdgeId,
        source: T,
        target: T,
        weight: W,
        directedness: Directedness,
    ) -> Self {
        Self {
            id,
            source,
            target,
            weight,
            directedness,
            tag: None,
            properties: Properties::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn ends(&self) -> (&T, &T) {
        (&self.source, &self.target)
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    pub fn is_undirected(&self) -> bool {
        self.directedness.is_undirected()
    }

    /// Returns the end opposite `vertex`: the source when `vertex` is the
    /// target, the target otherwise.  A self-loop returns its only vertex.
    pub fn other_end(&self, vertex: &T) -> &T
    where
        T: PartialEq,
    {
        if self.target == *vertex {
            &self.source
        } else {
            &self.target
        }
    }

    pub fn is_self_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.source == self.target
    }

    pub fn tag(&self) -> Option<VisitState> {
        self.tag
    }

    pub fn set_tag(&mut self, tag: Option<VisitState>) {
        self.tag = tag;
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.set(key, value)
    }
}

impl<T, W> PartialEq for Edge<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T, W> Eq for Edge<T, W> {}

/// Append-only storage for the edges of one adjacency structure.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, W: Clone"),
    Debug(bound = "T: Debug, W: Debug"),
    Default(bound = "")
)]
pub(crate) struct EdgeArena<T, W> {
    edges: Vec<Edge<T, W>>,
}

impl<T, W> EdgeArena<T, W> {
    pub fn push(&mut self, source: T, target: T, weight: W, directedness: Directedness) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges
            .push(Edge::new(id, source, target, weight, directedness));
        id
    }

    pub fn get(&self, id: EdgeId) -> Option<&Edge<T, W>> {
        self.edges.get(id.0)
    }

    pub fn get_mut(&mut self, id: EdgeId) -> Option<&mut Edge<T, W>> {
        self.edges.get_mut(id.0)
    }

    pub fn as_slice(&self) -> &[Edge<T, W>] {
        &self.edges
    }
}
