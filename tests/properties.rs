use std::collections::HashSet;

use graphlib::{
    prelude::*,
    test_support::{ArbGraphOps, GraphOp, apply_ops, check_graph_consistency},
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Enumeration is exponential, so path comparisons are limited to small graphs.
const MAX_ENUMERATED_EDGES: usize = 7;

fn adjacency_set(graph: &Graph<u8, i8>, id: &u8) -> HashSet<EdgeId> {
    graph
        .adjacent_edges(id)
        .unwrap()
        .into_iter()
        .map(|edge| edge.id())
        .collect()
}

#[quickcheck]
fn prop_graph_consistent(ops: ArbGraphOps, kind: StructureKind) -> bool {
    check_graph_consistency(&ops.build(kind));
    true
}

#[quickcheck]
fn prop_add_vertex_is_idempotent(ops: ArbGraphOps, kind: StructureKind, v: u8) -> bool {
    let mut graph = ops.build(kind);
    let existed = graph.contains_vertex(&v);
    let len = graph.len();
    let added = graph.add_vertex(v);
    added != existed
        && graph.contains_vertex(&v)
        && !graph.add_vertex(v)
        && graph.len() == len + usize::from(added)
}

#[quickcheck]
fn prop_undirected_excludes_directed(
    ops: ArbGraphOps,
    kind: StructureKind,
    a: u8,
    b: u8,
) -> TestResult {
    let mut graph = ops.build(kind);
    if graph.add_edge_undirected(a, b, 0).is_none() {
        return TestResult::discard();
    }
    TestResult::from_bool(
        graph.contains_edge_undirected(&a, &b)
            && graph.contains_edge_undirected(&b, &a)
            && graph.add_edge_directed(a, b, 1).is_none()
            && graph.add_edge_directed(b, a, 1).is_none()
            && graph.add_edge_undirected(b, a, 1).is_none(),
    )
}

#[quickcheck]
fn prop_directed_is_one_way(ops: ArbGraphOps, kind: StructureKind, a: u8, b: u8) -> TestResult {
    let mut graph = ops.build(kind);
    let reverse_before = graph.contains_edge_directed(&b, &a);
    if graph.add_edge_directed(a, b, 0).is_none() {
        return TestResult::discard();
    }
    let reverse_after = graph.contains_edge_directed(&b, &a);
    TestResult::from_bool(
        graph.contains_edge_directed(&a, &b)
            && !graph.contains_edge_undirected(&a, &b)
            && (a == b || reverse_before == reverse_after)
            && graph.add_edge_directed(a, b, 1).is_none(),
    )
}

#[quickcheck]
fn prop_eulerian_classes_are_consistent(ops: ArbGraphOps, kind: StructureKind) -> bool {
    let graph = ops.build(kind);
    graph.is_eulerian() == (graph.is_eulerian_cycle() || graph.is_eulerian_trail())
        && !(graph.is_eulerian_cycle() && graph.is_eulerian_trail())
}

#[quickcheck]
fn prop_list_and_matrix_agree(ops: ArbGraphOps) -> bool {
    let mut list: Graph<u8, i8> = Graph::create(StructureKind::List, None).unwrap();
    let mut matrix: Graph<u8, i8> = Graph::create(StructureKind::Matrix, Some(1)).unwrap();
    if apply_ops(&mut list, &ops.ops) != apply_ops(&mut matrix, &ops.ops) {
        return false;
    }
    if list.vertex_ids() != matrix.vertex_ids() || list.num_edges() != matrix.num_edges() {
        return false;
    }
    for (l, m) in list.edges().iter().zip(matrix.edges()) {
        if l.ends() != m.ends() || l.weight() != m.weight() || l.directedness() != m.directedness()
        {
            return false;
        }
    }
    for id in list.vertex_ids() {
        if adjacency_set(&list, id) != adjacency_set(&matrix, id) {
            return false;
        }
    }
    list.odd_degree_count() == matrix.odd_degree_count()
}

#[quickcheck]
fn prop_walks_agree_across_kinds(ops: ArbGraphOps) -> TestResult {
    let list = ops.build(StructureKind::List);
    if list.num_edges() > MAX_ENUMERATED_EDGES {
        return TestResult::discard();
    }
    let matrix = list.converted(StructureKind::Matrix);
    for root in list.vertex_ids() {
        let from_list: HashSet<String> = list.find_all_paths(root).unwrap().into_iter().collect();
        let from_matrix: HashSet<String> =
            matrix.find_all_paths(root).unwrap().into_iter().collect();
        if from_list != from_matrix {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}

#[quickcheck]
fn prop_walks_cover_every_edge(ops: ArbGraphOps, kind: StructureKind) -> TestResult {
    let graph = ops.build(kind);
    if graph.num_edges() > MAX_ENUMERATED_EDGES {
        return TestResult::discard();
    }
    for root in graph.vertex_ids() {
        for walk in graph.eulerian_walks(root).unwrap() {
            let used: HashSet<EdgeId> = walk.edges().iter().copied().collect();
            if walk.first_vertex() != root
                || walk.len() != graph.num_edges()
                || used.len() != graph.num_edges()
            {
                return TestResult::failed();
            }
        }
    }
    TestResult::passed()
}

#[test]
fn test_apply_ops_reports_refusals() {
    let mut graph: Graph<u8, i8> = Graph::new();
    let outcomes = apply_ops(
        &mut graph,
        &[
            GraphOp::AddVertex(1),
            GraphOp::AddVertex(1),
            GraphOp::AddUndirected(1, 2, 0),
            GraphOp::AddDirected(2, 1, 0),
            GraphOp::AddDirected(2, 3, 0),
            GraphOp::AddDirected(3, 2, 0),
        ],
    );
    assert_eq!(outcomes, vec![true, false, true, false, true, true]);
    check_graph_consistency(&graph);
}
