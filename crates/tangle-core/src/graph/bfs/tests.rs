use crate::error::GraphError;
use crate::graph::bfs::{bfs_traverse, bfs_traverse_with};
use crate::graph::store::Graph;
use crate::graph::types::{BfsOptions, BfsOutcome, VertexId, Weight};
use crate::graph::VertexQueue;
use std::collections::VecDeque;

fn diamond() -> Graph<()> {
    // 0-1 (w=2), 1-2 (w=3), 0-3 (w=1)
    let mut graph = Graph::new(4).unwrap();
    graph.add_edge(0, 1, Weight::from(2), (), ()).unwrap();
    graph.add_edge(1, 2, Weight::from(3), (), ()).unwrap();
    graph.add_edge(0, 3, Weight::from(1), (), ()).unwrap();
    graph
}

#[test]
fn visits_all_reachable_and_sums_discovery_edges() {
    let graph = diamond();
    let outcome = bfs_traverse(&graph, 0).unwrap();

    assert_eq!(outcome.metric, Weight::from(6));
    assert_eq!(
        outcome.visited_vertices().collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert!(!outcome.truncated);
}

#[test]
fn expansion_follows_chain_order() {
    // Chains are reverse insertion order, so vertex 0 expands 3 before 1.
    let graph = diamond();
    let outcome = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(outcome.order, vec![0, 3, 1, 2]);
}

#[test]
fn single_vertex_graph_yields_zero_metric() {
    let graph: Graph<()> = Graph::new(1).unwrap();
    let outcome = bfs_traverse(&graph, 0).unwrap();

    assert_eq!(outcome.metric, Weight::ZERO);
    assert_eq!(outcome.order, vec![0]);
    assert_eq!(outcome.visited, vec![true]);
}

#[test]
fn isolated_start_vertex_visits_only_itself() {
    let mut graph: Graph<()> = Graph::new(5).unwrap();
    graph.add_edge(0, 1, Weight::from(2), (), ()).unwrap();

    let outcome = bfs_traverse(&graph, 4).unwrap();
    assert_eq!(outcome.order, vec![4]);
    assert_eq!(outcome.metric, Weight::ZERO);
}

#[test]
fn disconnected_vertex_is_never_visited() {
    let mut graph: Graph<()> = Graph::new(5).unwrap();
    graph.add_edge(0, 1, Weight::from(2), (), ()).unwrap();
    graph.add_edge(1, 2, Weight::from(3), (), ()).unwrap();
    graph.add_edge(0, 3, Weight::from(1), (), ()).unwrap();

    let outcome = bfs_traverse(&graph, 0).unwrap();
    assert!(!outcome.is_visited(4));
    assert_eq!(
        outcome.visited_vertices().collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert_eq!(outcome.metric, Weight::from(6));
}

#[test]
fn invalid_start_vertex_is_rejected() {
    let graph = diamond();
    assert!(matches!(
        bfs_traverse(&graph, 4),
        Err(GraphError::InvalidVertex {
            vertex: 4,
            vertex_count: 4
        })
    ));
}

#[test]
fn metric_is_not_a_shortest_path_distance() {
    // Triangle with a heavy direct edge inserted last: chain order makes
    // the traversal discover 2 through the weight-10 edge even though the
    // two-hop route costs 2.
    let mut graph: Graph<()> = Graph::new(3).unwrap();
    graph.add_edge(0, 1, Weight::from(1), (), ()).unwrap();
    graph.add_edge(1, 2, Weight::from(1), (), ()).unwrap();
    graph.add_edge(0, 2, Weight::from(10), (), ()).unwrap();

    let outcome = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(outcome.order, vec![0, 2, 1]);
    assert_eq!(outcome.metric, Weight::from(11));
}

#[test]
fn metric_depends_on_insertion_order() {
    // Two routes to vertex 3; which one becomes the discovery edge is
    // decided by chain order at vertex 0.
    let mut cheap: Graph<()> = Graph::new(4).unwrap();
    cheap.add_edge(0, 1, Weight::from(1), (), ()).unwrap();
    cheap.add_edge(0, 2, Weight::from(1), (), ()).unwrap();
    cheap.add_edge(1, 3, Weight::from(5), (), ()).unwrap();
    cheap.add_edge(2, 3, Weight::from(1), (), ()).unwrap();

    let outcome = bfs_traverse(&cheap, 0).unwrap();
    assert_eq!(outcome.order, vec![0, 2, 1, 3]);
    assert_eq!(outcome.metric, Weight::from(3));

    let mut dear: Graph<()> = Graph::new(4).unwrap();
    dear.add_edge(0, 2, Weight::from(1), (), ()).unwrap();
    dear.add_edge(0, 1, Weight::from(1), (), ()).unwrap();
    dear.add_edge(1, 3, Weight::from(5), (), ()).unwrap();
    dear.add_edge(2, 3, Weight::from(1), (), ()).unwrap();

    let outcome = bfs_traverse(&dear, 0).unwrap();
    assert_eq!(outcome.order, vec![0, 1, 2, 3]);
    assert_eq!(outcome.metric, Weight::from(7));
}

#[test]
fn traversal_leaves_graph_untouched() {
    let graph = diamond();
    let before: Vec<_> = graph.edges().map(|e| (e.vertex, e.neighbor)).collect();

    bfs_traverse(&graph, 0).unwrap();
    bfs_traverse(&graph, 2).unwrap();

    let after: Vec<_> = graph.edges().map(|e| (e.vertex, e.neighbor)).collect();
    assert_eq!(before, after);
}

#[test]
fn start_choice_changes_discovery_edges() {
    let graph = diamond();
    let outcome = bfs_traverse(&graph, 2).unwrap();

    // From 2: discover 1 (w=3), then from 1 discover 0 (w=2), then from 0
    // discover 3 (w=1).
    assert_eq!(outcome.order, vec![2, 1, 0, 3]);
    assert_eq!(outcome.metric, Weight::from(6));
}

#[test]
fn max_visited_truncates_expansion() {
    let graph = diamond();
    let opts = BfsOptions {
        max_visited: Some(2),
    };
    let mut queue = VertexQueue::new();
    let outcome = bfs_traverse_with(&graph, 0, &opts, &mut queue).unwrap();

    assert!(outcome.truncated);
    assert_eq!(outcome.truncation_reason.as_deref(), Some("max_visited"));
    assert_eq!(outcome.visited_count(), 2);
}

#[test]
fn vecdeque_substitutes_for_the_default_queue() {
    let graph = diamond();
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let with_vecdeque =
        bfs_traverse_with(&graph, 0, &BfsOptions::default(), &mut queue).unwrap();
    let with_default = bfs_traverse(&graph, 0).unwrap();

    assert_eq!(with_vecdeque.order, with_default.order);
    assert_eq!(with_vecdeque.metric, with_default.metric);
}

#[test]
fn self_loop_never_contributes_to_the_metric() {
    let mut graph: Graph<()> = Graph::new(2).unwrap();
    graph.add_edge(0, 0, Weight::from(99), (), ()).unwrap();
    graph.add_edge(0, 1, Weight::from(1), (), ()).unwrap();

    let outcome = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(outcome.metric, Weight::from(1));
    assert_eq!(outcome.order, vec![0, 1]);
}

#[test]
fn outcome_serializes_with_stable_shape() {
    let graph = diamond();
    let outcome = bfs_traverse(&graph, 0).unwrap();

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["start"], 0);
    assert_eq!(value["metric"], 6);
    assert_eq!(value["truncated"], false);
    assert_eq!(value["order"][0], 0);
    assert_eq!(value["visited"].as_array().unwrap().len(), 4);
}

#[test]
fn removal_changes_reachability() {
    let mut graph = diamond();
    graph.remove_edge(0, 1).unwrap();
    graph.remove_edge(0, 3).unwrap();

    let outcome = bfs_traverse(&graph, 0).unwrap();
    assert_eq!(outcome.order, vec![0]);
    assert_eq!(outcome.metric, Weight::ZERO);

    let other: BfsOutcome = bfs_traverse(&graph, 1).unwrap();
    assert!(other.is_visited(2));
    assert!(!other.is_visited(0));
}
