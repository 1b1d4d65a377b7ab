//! Degree-parity classification of graphs.
//!
//! A directed edge counts toward the degree of its source only; an undirected
//! edge counts once for each end, so an undirected self-loop counts twice.

use crate::{structure::AdjacencyStructure, vertex::VertexId};

/// Classification of a graph by the number of odd-degree vertices.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum EulerianClass {
    /// No vertex has odd degree.
    Cycle,
    /// Exactly two vertices have odd degree.
    Trail,
    NotEulerian,
}

impl EulerianClass {
    pub fn from_odd_degree_count(count: usize) -> Self {
        match count {
            0 => EulerianClass::Cycle,
            2 => EulerianClass::Trail,
            _ => EulerianClass::NotEulerian,
        }
    }
}

/// Counts the vertices of a structure whose degree is odd.
pub fn odd_degree_count<T, W, S>(structure: &S) -> usize
where
    T: VertexId,
    S: AdjacencyStructure<T, W> + ?Sized,
{
    structure
        .vertices()
        .iter()
        .filter(|id| structure.degree(id).is_some_and(|degree| degree % 2 == 1))
        .count()
}

/// Eulerian queries.  An empty graph has no odd-degree vertices and is
/// therefore classified as a cycle.
pub trait Eulerian {
    /// Gets the number of vertices with odd degree.
    fn odd_degree_count(&self) -> usize;

    fn eulerian_class(&self) -> EulerianClass {
        EulerianClass::from_odd_degree_count(self.odd_degree_count())
    }

    /// True if the odd-degree count is 0 or 2.
    fn is_eulerian(&self) -> bool {
        self.eulerian_class() != EulerianClass::NotEulerian
    }

    /// True if exactly two vertices have odd degree.
    fn is_eulerian_trail(&self) -> bool {
        self.eulerian_class() == EulerianClass::Trail
    }

    /// True if no vertex has odd degree.
    fn is_eulerian_cycle(&self) -> bool {
        self.eulerian_class() == EulerianClass::Cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::AdjacencyList;

    #[test]
    fn test_class_from_count() {
        assert_eq!(EulerianClass::from_odd_degree_count(0), EulerianClass::Cycle);
        assert_eq!(EulerianClass::from_odd_degree_count(2), EulerianClass::Trail);
        assert_eq!(
            EulerianClass::from_odd_degree_count(4),
            EulerianClass::NotEulerian
        );
    }

    #[test]
    fn test_odd_degree_count() {
        let mut list: AdjacencyList<u32, ()> = AdjacencyList::new();
        assert_eq!(odd_degree_count(&list), 0);
        list.add_edge_undirected(1, 2, ());
        assert_eq!(odd_degree_count(&list), 2);
        list.add_edge_undirected(2, 3, ());
        list.add_edge_undirected(3, 1, ());
        assert_eq!(odd_degree_count(&list), 0);
        list.add_edge_directed(1, 4, ());
        assert_eq!(odd_degree_count(&list), 1);
    }

    #[test]
    fn test_undirected_self_loop_keeps_parity() {
        let mut list: AdjacencyList<u32, ()> = AdjacencyList::new();
        list.add_edge_undirected(1, 1, ());
        assert_eq!(list.degree(&1), Some(2));
        assert_eq!(odd_degree_count(&list), 0);
        list.add_edge_undirected(1, 2, ());
        list.add_edge_undirected(2, 2, ());
        assert_eq!(list.degree(&2), Some(3));
        assert_eq!(odd_degree_count(&list), 2);
    }
}
