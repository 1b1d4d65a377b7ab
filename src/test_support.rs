//! Random graph scripts and a consistency checker shared by the unit and
//! integration tests.

use std::{collections::HashSet, hash::Hash};

use quickcheck::{Arbitrary, Gen};
use tracing::info_span;

use crate::{
    Eulerian, Graph, StructureKind, directedness::Directedness, tracing_support::init_tracing,
    vertex::VertexId,
};

/// Vertex ids are drawn from a small range so that scripts revisit vertices
/// and exercise the duplicate and conflict rules.
const VERTEX_RANGE: u8 = 8;

/// One insertion against a `Graph<u8, i8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphOp {
    AddVertex(u8),
    AddDirected(u8, u8, i8),
    AddUndirected(u8, u8, i8),
}

impl Arbitrary for GraphOp {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex = |g: &mut Gen| u8::arbitrary(g) % VERTEX_RANGE;
        match u8::arbitrary(g) % 3 {
            0 => GraphOp::AddVertex(vertex(g)),
            1 => GraphOp::AddDirected(vertex(g), vertex(g), i8::arbitrary(g)),
            _ => GraphOp::AddUndirected(vertex(g), vertex(g), i8::arbitrary(g)),
        }
    }
}

/// A random insertion script.
#[derive(Clone, Debug)]
pub struct ArbGraphOps {
    pub ops: Vec<GraphOp>,
}

impl Arbitrary for ArbGraphOps {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_ops = usize::arbitrary(g) % 40;
        ArbGraphOps {
            ops: (0..num_ops).map(|_| GraphOp::arbitrary(g)).collect(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.ops.shrink().map(|ops| ArbGraphOps { ops }))
    }
}

impl ArbGraphOps {
    /// Runs the script against a fresh graph of the given kind.
    pub fn build(&self, kind: StructureKind) -> Graph<u8, i8> {
        let mut graph = Graph::new().converted(kind);
        apply_ops(&mut graph, &self.ops);
        graph
    }
}

/// Applies each operation in order and reports whether it was accepted.
pub fn apply_ops<K: VertexId>(graph: &mut Graph<u8, i8, K>, ops: &[GraphOp]) -> Vec<bool> {
    ops.iter()
        .map(|op| match *op {
            GraphOp::AddVertex(v) => graph.add_vertex(v),
            GraphOp::AddDirected(a, b, w) => graph.add_edge_directed(a, b, w).is_some(),
            GraphOp::AddUndirected(a, b, w) => graph.add_edge_undirected(a, b, w).is_some(),
        })
        .collect()
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<T: VertexId, W, K: VertexId>(graph: &Graph<T, W, K>) {
    init_tracing();
    let _span = info_span!("check_graph_consistency", kind = %graph.kind()).entered();

    // Vertex registry and structure agree.
    let ids = graph.vertex_ids();
    assert!(!has_duplicates(ids));
    assert_eq!(ids.len(), graph.len());
    assert_eq!(graph.vertices().count(), graph.len());
    for id in ids {
        assert!(graph.contains_vertex(id));
        assert_eq!(graph.vertex(id).map(|v| v.id()), Some(id));
    }

    let mut expected_degree_sum = 0;
    for (index, edge) in graph.edges().iter().enumerate() {
        let (source, target) = edge.ends();
        assert_eq!(edge.id().index(), index);
        assert!(graph.contains_vertex(source));
        assert!(graph.contains_vertex(target));
        assert_eq!(graph.find_edge(source, target).map(|e| e.id()), Some(edge.id()));

        let from_source = graph.adjacent_edges(source).unwrap_or_default();
        assert!(from_source.iter().any(|e| e.id() == edge.id()));

        match edge.directedness() {
            Directedness::Directed => {
                assert!(graph.contains_edge_directed(source, target));
                assert!(!graph.contains_edge_undirected(source, target));
                expected_degree_sum += 1;
            }
            Directedness::Undirected => {
                assert!(graph.contains_edge_undirected(source, target));
                assert!(graph.contains_edge_undirected(target, source));
                assert!(!graph.contains_edge_directed(source, target));
                assert!(!graph.contains_edge_directed(target, source));
                let from_target = graph.adjacent_edges(target).unwrap_or_default();
                assert!(from_target.iter().any(|e| e.id() == edge.id()));
                expected_degree_sum += 2;
            }
        }
    }

    let degrees: Vec<usize> = ids
        .iter()
        .map(|id| graph.degree(id).unwrap_or_default())
        .collect();
    assert_eq!(degrees.iter().sum::<usize>(), expected_degree_sum);
    assert_eq!(
        graph.odd_degree_count(),
        degrees.iter().filter(|d| *d % 2 == 1).count()
    );
}
