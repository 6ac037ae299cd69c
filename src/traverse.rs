//! Shared breadth-first traversal. Both the simulator and the layout
//! engine route through this module, so the two always agree on the
//! visited-set discipline and sibling tie-break order.

use crate::graph::{Step, WorkflowGraph};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Builds the source -> targets adjacency map, preserving connection
/// insertion order. Connections with an empty endpoint are skipped.
pub fn adjacency(graph: &WorkflowGraph) -> AHashMap<String, Vec<String>> {
    let mut adjacency: AHashMap<String, Vec<String>> = AHashMap::new();
    for connection in graph.connections() {
        if connection.source.is_empty() || connection.target.is_empty() {
            continue;
        }
        adjacency
            .entry(connection.source.clone())
            .or_default()
            .push(connection.target.clone());
    }
    adjacency
}

/// Walks the graph breadth-first from `start_id`, calling `visit` once
/// per reachable step with its hop distance from the start.
///
/// Ids that do not resolve to a step are skipped entirely, so a
/// connection with a dangling endpoint behaves as if it did not exist.
/// Returns the set of visited step ids.
pub fn breadth_first<F>(
    graph: &WorkflowGraph,
    adjacency: &AHashMap<String, Vec<String>>,
    start_id: &str,
    mut visit: F,
) -> AHashSet<String>
where
    F: FnMut(&Step, usize),
{
    let mut visited = AHashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back((start_id.to_string(), 0));

    while let Some((id, depth)) = queue.pop_front() {
        if visited.contains(&id) {
            continue;
        }
        let Some(step) = graph.step(&id) else {
            continue;
        };
        visited.insert(id.clone());
        visit(step, depth);

        if let Some(targets) = adjacency.get(&id) {
            for target in targets {
                if !visited.contains(target) {
                    queue.push_back((target.clone(), depth + 1));
                }
            }
        }
    }

    visited
}
