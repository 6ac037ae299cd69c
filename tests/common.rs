//! Common test utilities for building workflow graphs.
use stepflow::prelude::*;

/// Builds a step with a display label.
#[allow(dead_code)]
pub fn step(id: &str, kind: StepKind, label: &str) -> Step {
    let mut step = Step::new(id, kind);
    step.set_attribute("label", serde_json::Value::String(label.to_string()));
    step
}

/// Builds a graph from steps plus `(source, target)` pairs.
#[allow(dead_code)]
pub fn graph(steps: Vec<Step>, connections: &[(&str, &str)]) -> WorkflowGraph {
    let connections = connections
        .iter()
        .map(|(source, target)| Connection::new(*source, *target))
        .collect();
    WorkflowGraph::from_parts(steps, connections)
}

/// `Start -> Review request -> End`.
#[allow(dead_code)]
pub fn linear_flow() -> WorkflowGraph {
    graph(
        vec![
            step("n1", StepKind::Start, "Start"),
            step("n2", StepKind::Task, "Review request"),
            step("n3", StepKind::End, "End"),
        ],
        &[("n1", "n2"), ("n2", "n3")],
    )
}

/// Diamond: `Start -> Collect docs`, `Start -> Manager approval`, both
/// into the `End`.
#[allow(dead_code)]
pub fn diamond_flow() -> WorkflowGraph {
    graph(
        vec![
            step("n1", StepKind::Start, "Start"),
            step("n2", StepKind::Task, "Collect docs"),
            step("n3", StepKind::Approval, "Manager approval"),
            step("n4", StepKind::End, "End"),
        ],
        &[("n1", "n2"), ("n1", "n3"), ("n2", "n4"), ("n3", "n4")],
    )
}

/// Ids of the trace entries, in order.
#[allow(dead_code)]
pub fn trace_ids(report: &SimulationReport) -> Vec<&str> {
    report
        .trace
        .iter()
        .map(|entry| entry.step_id.as_str())
        .collect()
}
