use std::marker::PhantomData;

use bitvec::vec::BitVec;
use tracing::{Span, info_span};

use crate::{edge::EdgeId, path::Path, structure::AdjacencyStructure, vertex::VertexId};

/// One level of the depth-first search: a vertex on the current walk, the
/// edge used to reach it, and a cursor into its adjacent edges.
struct Frame<T> {
    vertex: T,
    via: Option<EdgeId>,
    edges: Vec<EdgeId>,
    next: usize,
}

/// Lazily enumerates every walk from a root vertex that uses each edge of the
/// structure exactly once.
///
/// The search descends through every unused adjacent edge and frees the edge
/// again on backtrack, so sibling branches may reuse it.  A walk is yielded
/// whenever the number of edges on the current branch equals the total edge
/// count.  Walks are produced in depth-first order following the adjacency
/// order of the structure.
///
/// The traversal keeps its own stack and its own used-edge set, so it never
/// recurses and never mutates the structure.  Enumeration is exponential in
/// the number of edges on dense graphs.
pub struct EulerianWalks<'g, T, W, S>
where
    T: VertexId,
    S: AdjacencyStructure<T, W>,
{
    structure: &'g S,
    /// Bit `i` is set while edge `i` is on the current branch.
    used: BitVec,
    used_count: usize,
    total: usize,
    stack: Vec<Frame<T>>,
    root: Option<T>,
    span: Span,
    phantom: PhantomData<fn() -> W>,
}

impl<'g, T, W, S> EulerianWalks<'g, T, W, S>
where
    T: VertexId,
    S: AdjacencyStructure<T, W>,
{
    pub fn new(structure: &'g S, root: T) -> Self {
        let total = structure.num_edges();
        let span = info_span!("eulerian_walks", root = ?root, edges = total);
        Self {
            structure,
            used: BitVec::repeat(false, total),
            used_count: 0,
            total,
            stack: Vec::with_capacity(total + 1),
            root: Some(root),
            span,
            phantom: PhantomData,
        }
    }

    /// Pushes `vertex` onto the current walk, returning the walk if it now
    /// covers every edge.
    fn enter(&mut self, vertex: T, via: Option<EdgeId>) -> Option<Path<T>> {
        if let Some(eid) = via {
            self.used.set(eid.index(), true);
            self.used_count += 1;
        }
        let edges = self
            .structure
            .adjacent_edge_ids(&vertex)
            .unwrap_or_default();
        self.stack.push(Frame {
            vertex,
            via,
            edges,
            next: 0,
        });
        (self.used_count == self.total).then(|| self.current_path())
    }

    fn current_path(&self) -> Path<T> {
        Path::from_parts(
            self.stack.iter().map(|frame| frame.vertex.clone()).collect(),
            self.stack.iter().filter_map(|frame| frame.via).collect(),
        )
    }
}

impl<'g, T, W, S> Iterator for EulerianWalks<'g, T, W, S>
where
    T: VertexId,
    S: AdjacencyStructure<T, W>,
{
    type Item = Path<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.span.clone();
        let _entered = span.enter();

        if let Some(root) = self.root.take()
            && let Some(path) = self.enter(root, None)
        {
            return Some(path);
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some(&eid) = frame.edges.get(frame.next) else {
                let via = frame.via;
                self.stack.pop();
                if let Some(eid) = via {
                    self.used.set(eid.index(), false);
                    self.used_count -= 1;
                }
                continue;
            };
            frame.next += 1;
            if self.used[eid.index()] {
                continue;
            }
            let Some(edge) = self.structure.edge(eid) else {
                continue;
            };
            let target = edge.other_end(&frame.vertex).clone();
            if let Some(path) = self.enter(target, Some(eid)) {
                return Some(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::structure::{AdjacencyList, AdjacencyMatrix};

    fn triangle<S: AdjacencyStructure<u8, ()>>(mut structure: S) -> S {
        structure.add_edge_undirected(0, 1, ());
        structure.add_edge_undirected(1, 2, ());
        structure.add_edge_undirected(2, 0, ());
        structure
    }

    #[test]
    fn test_triangle_walks() {
        let list = triangle(AdjacencyList::new());
        let walks: Vec<String> = EulerianWalks::new(&list, 0)
            .map(|p| p.to_string())
            .collect();
        assert_eq!(walks, vec!["->0->1->2->0", "->0->2->1->0"]);
    }

    #[test]
    fn test_walks_use_each_edge_once() {
        let matrix = triangle(AdjacencyMatrix::new());
        for path in EulerianWalks::new(&matrix, 1) {
            assert_eq!(path.len(), 3);
            let distinct: HashSet<_> = path.edges().iter().collect();
            assert_eq!(distinct.len(), 3);
            assert!(path.is_closed());
        }
    }

    #[test]
    fn test_no_edges_yields_root() {
        let mut list: AdjacencyList<u8, ()> = AdjacencyList::new();
        list.add_vertex(4);
        let walks: Vec<_> = EulerianWalks::new(&list, 4).collect();
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].vertices(), &[4]);
    }

    #[test]
    fn test_directed_edges_followed_forward_only() {
        let mut list: AdjacencyList<char, ()> = AdjacencyList::new();
        list.add_edge_directed('a', 'b', ());
        list.add_edge_directed('b', 'c', ());
        let from_a: Vec<_> = EulerianWalks::new(&list, 'a')
            .map(|p| p.to_string())
            .collect();
        assert_eq!(from_a, vec!["->a->b->c"]);
        assert_eq!(EulerianWalks::new(&list, 'c').count(), 0);
    }

    #[test]
    fn test_disconnected_edges_yield_nothing() {
        let mut list: AdjacencyList<u8, ()> = AdjacencyList::new();
        list.add_edge_undirected(0, 1, ());
        list.add_edge_undirected(2, 3, ());
        assert_eq!(EulerianWalks::new(&list, 0).count(), 0);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let mut list: AdjacencyList<u32, ()> = AdjacencyList::new();
        for i in 0..20_000 {
            list.add_edge_directed(i, i + 1, ());
        }
        let walks: Vec<_> = EulerianWalks::new(&list, 0).collect();
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].len(), 20_000);
    }
}
