//! Automatic layered layout.
//!
//! Steps are layered by breadth-first distance from the start step and
//! slotted left-to-right within a layer in declaration order. There is
//! no collision avoidance beyond per-layer slotting; crossing edges are
//! not minimized.

use crate::graph::{Position, StepKind, WorkflowGraph};
use crate::traverse;
use ahash::AHashMap;
use std::collections::BTreeMap;

pub const START_X: f64 = 150.0;
pub const START_Y: f64 = 80.0;
pub const H_GAP: f64 = 220.0;
pub const V_GAP: f64 = 140.0;

/// Computes a position for every step. Returns an empty map for an
/// empty graph.
///
/// Layer 0 is the first declared start step; every step discovered by
/// the traversal sits one layer below its discoverer. Steps the
/// traversal never reached (all of them, when no start exists) each get
/// their own layer below the deepest discovered one, in declaration
/// order, so disconnected pieces land below the main flow instead of
/// overlapping it.
pub fn layered_positions(graph: &WorkflowGraph) -> AHashMap<String, Position> {
    if graph.steps().is_empty() {
        return AHashMap::new();
    }

    let adjacency = traverse::adjacency(graph);
    let mut layer_of: AHashMap<String, usize> = AHashMap::new();

    if let Some(start) = graph
        .steps()
        .iter()
        .find(|step| step.kind == StepKind::Start)
    {
        traverse::breadth_first(graph, &adjacency, &start.id, |step, depth| {
            layer_of.insert(step.id.clone(), depth);
        });
    }

    let mut next_layer = layer_of.values().max().map_or(0, |deepest| deepest + 1);
    for step in graph.steps() {
        if !layer_of.contains_key(&step.id) {
            layer_of.insert(step.id.clone(), next_layer);
            next_layer += 1;
        }
    }

    let mut layers: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for step in graph.steps() {
        layers
            .entry(layer_of[&step.id])
            .or_default()
            .push(step.id.as_str());
    }

    let mut positions = AHashMap::new();
    for (layer, ids) in &layers {
        for (index, id) in ids.iter().enumerate() {
            positions.insert(
                (*id).to_string(),
                Position::new(
                    START_X + index as f64 * H_GAP,
                    START_Y + *layer as f64 * V_GAP,
                ),
            );
        }
    }
    positions
}

/// Applies the computed positions onto the graph. Step identity, kinds,
/// attributes, and connections are untouched.
pub fn apply(graph: &mut WorkflowGraph) {
    let positions = layered_positions(graph);
    for (id, position) in positions {
        if let Some(step) = graph.step_mut(&id) {
            step.position = position;
        }
    }
}
