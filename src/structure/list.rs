use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use derivative::Derivative;

use crate::{
    directedness::Directedness,
    edge::{Edge, EdgeArena, EdgeId},
    structure::{AdjacencyStructure, StructureKind},
    vertex::VertexId,
};

/// Sparse adjacency storage: one incidence list per vertex.
///
/// A directed edge is listed under its source only.  An undirected edge is
/// listed under both ends (once for a self-loop).  Lists keep insertion
/// order.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, W: Clone"),
    Debug(bound = "T: std::fmt::Debug, W: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct AdjacencyList<T, W> {
    vertices: Vec<T>,
    /// Invariant: `index[vertices[i]] == i` for every `i`.
    index: HashMap<T, usize>,
    /// Invariant: `incidence.len() == vertices.len()`.
    incidence: Vec<Vec<EdgeId>>,
    edges: EdgeArena<T, W>,
}

impl<T: VertexId, W> AdjacencyList<T, W> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            incidence: Vec::new(),
            edges: EdgeArena::default(),
        }
    }

    fn incident(&self, id: &T) -> Option<&[EdgeId]> {
        self.index.get(id).map(|&i| self.incidence[i].as_slice())
    }
}

impl<T: VertexId, W> AdjacencyStructure<T, W> for AdjacencyList<T, W> {
    fn kind(&self) -> StructureKind {
        StructureKind::List
    }

    fn len(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> &[T] {
        &self.vertices
    }

    fn contains_vertex(&self, id: &T) -> bool {
        self.index.contains_key(id)
    }

    fn add_vertex(&mut self, id: T) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.vertices.len());
        self.vertices.push(id);
        self.incidence.push(Vec::new());
        true
    }

    fn edges(&self) -> &[Edge<T, W>] {
        self.edges.as_slice()
    }

    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<T, W>> {
        self.edges.get_mut(id)
    }

    fn find_edge(&self, from: &T, into: &T) -> Option<EdgeId> {
        self.incident(from)?.iter().copied().find(|&eid| {
            self.edges
                .get(eid)
                .is_some_and(|edge| edge.other_end(from) == into)
        })
    }

    fn adjacent_edge_ids(&self, id: &T) -> Option<Vec<EdgeId>> {
        self.incident(id).map(<[EdgeId]>::to_vec)
    }

    fn link(&mut self, source: T, target: T, weight: W, directedness: Directedness) -> EdgeId {
        let from = self.index[&source];
        let into = self.index[&target];
        let eid = self.edges.push(source, target, weight, directedness);
        self.incidence[from].push(eid);
        if directedness.is_undirected() && from != into {
            self.incidence[into].push(eid);
        }
        eid
    }

    /// One line per vertex with a non-empty incidence list, in vertex
    /// insertion order: `<id> -> [<neighbor>, <weight>] ...`.
    fn render(&self) -> String
    where
        T: Display,
        W: Display,
    {
        ListDump(self).to_string()
    }
}

struct ListDump<'a, T, W>(&'a AdjacencyList<T, W>);

impl<T: VertexId + Display, W: Display> Display for ListDump<'_, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.0;
        for (vertex, incident) in list.vertices.iter().zip(&list.incidence) {
            if incident.is_empty() {
                continue;
            }
            write!(f, "{vertex} ->")?;
            for edge in incident.iter().filter_map(|&eid| list.edges.get(eid)) {
                write!(f, " [{}, {}]", edge.other_end(vertex), edge.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_once() {
        let mut list: AdjacencyList<u32, ()> = AdjacencyList::new();
        assert!(list.is_empty());
        assert!(list.add_vertex(1));
        assert!(!list.add_vertex(1));
        assert!(list.contains_vertex(&1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_adjacency_in_insertion_order() {
        let mut list = AdjacencyList::new();
        list.add_edge_undirected(1, 4, 0);
        list.add_edge_undirected(1, 2, 0);
        list.add_edge_directed(1, 3, 0);
        assert_eq!(list.adjacent_vertices(&1), Some(vec![&4, &2, &3]));
        assert_eq!(list.adjacent_vertices(&4), Some(vec![&1]));
        assert_eq!(list.adjacent_vertices(&3), Some(vec![]));
        assert_eq!(list.adjacent_vertices(&9), None);
    }

    #[test]
    fn test_undirected_edge_shared() {
        let mut list = AdjacencyList::new();
        let eid = list.add_edge_undirected('a', 'b', 2.5).unwrap();
        assert_eq!(list.adjacent_edge_ids(&'a'), Some(vec![eid]));
        assert_eq!(list.adjacent_edge_ids(&'b'), Some(vec![eid]));
        assert_eq!(list.num_edges(), 1);
    }

    #[test]
    fn test_self_loop_listed_once() {
        let mut list = AdjacencyList::new();
        let eid = list.add_edge_undirected(5, 5, ()).unwrap();
        assert_eq!(list.adjacent_edge_ids(&5), Some(vec![eid]));
        assert_eq!(list.degree(&5), Some(2));
        assert!(list.contains_edge_undirected(&5, &5));
        assert_eq!(list.add_edge_directed(5, 5, ()), None);
    }

    #[test]
    fn test_render() {
        let mut list = AdjacencyList::new();
        list.add_vertex(9);
        list.add_edge_undirected(1, 2, 5);
        list.add_edge_directed(2, 3, 7);
        assert_eq!(list.render(), "1 -> [2, 5]\n2 -> [1, 5] [3, 7]\n");
    }
}
