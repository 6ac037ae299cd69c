//! Structural validation and traversal simulation.
//!
//! The simulator never raises: malformed graphs are reported through
//! the error lists of the returned report, and a (possibly degraded)
//! trace is always produced.

use crate::graph::{Step, StepKind, WorkflowGraph};
use crate::traverse;
use ahash::AHashMap;
use itertools::Itertools;

/// One "executed" entry in the simulation trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    /// 1-based sequential step number.
    pub step: usize,
    pub step_id: String,
    pub message: String,
}

/// The full outcome of a simulation run: the ordered trace, graph-level
/// error messages, and per-step error messages keyed by step id.
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    pub trace: Vec<TraceStep>,
    pub errors: Vec<String>,
    pub step_errors: AHashMap<String, Vec<String>>,
}

impl SimulationReport {
    /// True when neither graph-level nor per-step errors were produced.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.step_errors.is_empty()
    }
}

fn executed_message(step: &Step) -> String {
    format!("Executed node {} ({})", step.display_name(), step.kind)
}

/// Validates and simulates the graph.
///
/// With exactly one start step the trace follows a breadth-first
/// traversal from it and unreachable steps are reported. With zero or
/// several start steps the traversal is skipped and the trace falls
/// back to declaration order, one entry per step, so it is never empty.
pub fn simulate(graph: &WorkflowGraph) -> SimulationReport {
    let mut report = SimulationReport::default();

    let start_ids: Vec<String> = graph
        .steps()
        .iter()
        .filter(|step| step.kind == StepKind::Start)
        .map(|step| step.id.clone())
        .collect();
    let end_count = graph
        .steps()
        .iter()
        .filter(|step| step.kind == StepKind::End)
        .count();

    if start_ids.is_empty() {
        report.errors.push("Missing Start node".to_string());
    } else if start_ids.len() > 1 {
        report.errors.push("More than one Start node".to_string());
        for id in &start_ids {
            report
                .step_errors
                .entry(id.clone())
                .or_default()
                .push("More than one Start node".to_string());
        }
    }

    if end_count == 0 {
        report.errors.push("Missing End node".to_string());
    }

    if start_ids.len() != 1 {
        for (index, step) in graph.steps().iter().enumerate() {
            report.trace.push(TraceStep {
                step: index + 1,
                step_id: step.id.clone(),
                message: executed_message(step),
            });
        }
        return report;
    }

    let adjacency = traverse::adjacency(graph);
    let visited = traverse::breadth_first(graph, &adjacency, &start_ids[0], |step, _depth| {
        let number = report.trace.len() + 1;
        report.trace.push(TraceStep {
            step: number,
            step_id: step.id.clone(),
            message: executed_message(step),
        });
    });

    let unreachable: Vec<&Step> = graph
        .steps()
        .iter()
        .filter(|step| !visited.contains(&step.id))
        .collect();

    if !unreachable.is_empty() {
        let names = unreachable.iter().map(|step| step.display_name()).join(", ");
        report
            .errors
            .push(format!("Unreachable nodes from Start: {}", names));
        for step in unreachable {
            report
                .step_errors
                .entry(step.id.clone())
                .or_default()
                .push("Unreachable from Start node".to_string());
        }
    }

    report
}
