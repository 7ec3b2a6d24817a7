//! Tests for avoidance constraints.

use crate::error::{Error, Result};
use crate::graph::Graph;

use super::callbacks::{admit_all, uniform_weight};
use super::constraints::RouteConstraints;
use super::unweighted::solve_unweighted;
use super::weighted::solve_weighted;
use super::Cost;

fn build_chain_graph() -> Graph {
    let mut graph = Graph::with_capacity(4);
    graph.register(1, vec![2, 4], ());
    graph.register(2, vec![1, 3], ());
    graph.register(3, vec![2, 4], ());
    graph.register(4, vec![3, 1], ());
    graph
}

#[test]
fn test_default_is_empty() {
    let constraints = RouteConstraints::default();
    assert!(constraints.is_empty());
    assert!(constraints.admits(1));
    assert!(constraints.allows_edge(1, 2));
}

#[test]
fn test_admits_and_allows_edge() {
    let constraints = RouteConstraints::default().avoid_node(3).avoid_edge(1, 4);
    assert!(!constraints.is_empty());

    assert!(!constraints.admits(3));
    assert!(constraints.admits(4));

    assert!(!constraints.allows_edge(1, 4));
    // Edges are directed.
    assert!(constraints.allows_edge(4, 1));
    // Any edge into an avoided node is refused.
    assert!(!constraints.allows_edge(2, 3));
}

#[test]
fn test_admit_combines_with_inner_predicate() {
    let graph = build_chain_graph();
    let constraints = RouteConstraints::default().avoid_node(2);

    let path = solve_unweighted(&graph, 1, 3, constraints.admit(admit_all::<Graph>)).unwrap();
    assert_eq!(path, vec![1, 4, 3]);

    let err = solve_unweighted(&graph, 1, 3, constraints.admit(|_: &Graph, id| id != 4)).unwrap_err();
    assert!(err.is_no_path());
}

#[test]
fn test_guard_vetoes_avoided_edge() {
    let graph = build_chain_graph();
    let constraints = RouteConstraints::default().avoid_edge(1, 4);

    let path = solve_weighted(&graph, 1, 4, constraints.guard(uniform_weight::<Graph>)).unwrap();
    assert_eq!(path, vec![1, 2, 3, 4]);

    // The reverse direction is untouched.
    let path = solve_weighted(&graph, 4, 1, constraints.guard(uniform_weight::<Graph>)).unwrap();
    assert_eq!(path, vec![4, 1]);
}

#[test]
fn test_guard_vetoes_avoided_node() {
    let graph = build_chain_graph();
    let constraints = RouteConstraints::default().avoid_node(4);

    let path = solve_weighted(&graph, 1, 3, constraints.guard(uniform_weight::<Graph>)).unwrap();
    assert_eq!(path, vec![1, 2, 3]);

    let err = solve_weighted(&graph, 1, 4, constraints.guard(uniform_weight::<Graph>)).unwrap_err();
    assert!(err.is_no_path());
}

#[test]
fn test_guard_skips_inner_for_vetoed_edges() {
    let graph = build_chain_graph();
    let constraints = RouteConstraints::default().avoid_edge(1, 4);

    let mut priced = Vec::new();
    solve_weighted(
        &graph,
        1,
        2,
        constraints.guard(|_: &Graph, _, current, candidate| {
            priced.push((current, candidate));
            Ok(1.0)
        }),
    )
    .unwrap();

    assert!(priced.contains(&(1, 2)));
    assert!(!priced.contains(&(1, 4)));
}

#[test]
fn test_guard_passes_inner_errors_through() {
    let graph = build_chain_graph();
    let constraints = RouteConstraints::default().avoid_node(4);

    let err = solve_weighted(
        &graph,
        1,
        3,
        constraints.guard(|_: &Graph, _, _, _| -> Result<Cost> {
            Err(Error::callback("tariff lookup failed"))
        }),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Callback(_)));
}

#[test]
fn test_deserialize_from_toml() {
    let constraints: RouteConstraints = toml::from_str(
        r#"
        avoid = [2, 7]
        avoid_edges = [[1, 4]]
        "#,
    )
    .unwrap();

    assert!(!constraints.admits(2));
    assert!(!constraints.admits(7));
    assert!(!constraints.allows_edge(1, 4));

    let empty: RouteConstraints = toml::from_str("").unwrap();
    assert!(empty.is_empty());
}
