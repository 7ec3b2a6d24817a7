//! Tests for parent-link reconstruction.

use super::path::{walk_back, ParentLinks, Route};

fn links(entries: &[(u64, Option<u64>)]) -> ParentLinks {
    entries.iter().copied().collect()
}

#[test]
fn test_walk_back_chain() {
    let links = links(&[(1, None), (2, Some(1)), (3, Some(2))]);
    assert_eq!(walk_back(&links, 1, 3), Some(vec![1, 2, 3]));
}

#[test]
fn test_walk_back_source_is_target() {
    assert_eq!(walk_back(&ParentLinks::default(), 7, 7), Some(vec![7]));
}

#[test]
fn test_walk_back_missing_link_is_stuck() {
    // 2 was never recorded: the chain breaks before reaching the source.
    let links = links(&[(1, None), (3, Some(2))]);
    assert_eq!(walk_back(&links, 1, 3), None);
}

#[test]
fn test_walk_back_other_root_is_stuck() {
    let links = links(&[(1, None), (5, None), (3, Some(5))]);
    assert_eq!(walk_back(&links, 1, 3), None);
}

#[test]
fn test_walk_back_cycle_terminates() {
    let links = links(&[(1, None), (2, Some(3)), (3, Some(2))]);
    assert_eq!(walk_back(&links, 1, 3), None);
}

#[test]
fn test_route_hops() {
    let route = Route {
        nodes: vec![4, 8, 15],
        cost: 2.0,
    };
    assert_eq!(route.hops(), 2);
    assert_eq!(route.into_nodes(), vec![4, 8, 15]);

    let empty = Route {
        nodes: Vec::new(),
        cost: 0.0,
    };
    assert_eq!(empty.hops(), 0);
}
