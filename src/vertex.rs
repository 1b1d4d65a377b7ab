use std::{fmt::Debug, hash::Hash};

use derivative::Derivative;

use crate::properties::{Properties, PropertyValue};

/// A type usable as a vertex identifier.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}

/// Three-state marker for search algorithms and for callers that want to tag
/// vertices or edges while walking a graph.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum VisitState {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// A vertex: an identifier plus optional auxiliary data.
///
/// Equality and hashing consider the identifier only, so a vertex carrying
/// a tag or properties compares equal to a bare vertex with the same id.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug"),
    Hash(bound = "T: Hash")
)]
pub struct Vertex<T> {
    id: T,
    #[derivative(Hash = "ignore")]
    tag: Option<VisitState>,
    #[derivative(Hash = "ignore")]
    properties: Properties,
}

impl<T> Vertex<T> {
    pub fn new(id: T) -> Self {
        Self {
            id,
            tag: None,
            properties: Properties::new(),
        }
    }

    pub fn with_properties(id: T, properties: Properties) -> Self {
        Self {
            id,
            tag: None,
            properties,
        }
    }

    pub fn id(&self) -> &T {
        &self.id
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

impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: Eq> Eq for Vertex<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::hash::Hasher;
    use std::hash::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_aux_data() {
        let mut tagged = Vertex::new(7);
        tagged.set_tag(Some(VisitState::Done));
        tagged.set_property("color", "red");
        assert_eq!(tagged, Vertex::new(7));
        assert_ne!(tagged, Vertex::new(8));
    }

    #[test]
    fn test_hash_ignores_aux_data() {
        let mut tagged = Vertex::new("a");
        tagged.set_property("weight", 2);
        assert_eq!(hash_of(&tagged), hash_of(&Vertex::new("a")));

        let set: HashSet<_> = [tagged, Vertex::new("a"), Vertex::new("b")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_tag_roundtrip() {
        let mut v = Vertex::new(1);
        assert_eq!(v.tag(), None);
        v.set_tag(Some(VisitState::InProgress));
        assert_eq!(v.tag(), Some(VisitState::InProgress));
    }
}
