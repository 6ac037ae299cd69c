//! The shared workflow graph model: steps, connections, and structural
//! mutation primitives. The model accepts any combination of kinds and
//! any topology; correctness is judged later by the simulator.

mod step;

pub use step::{Connection, Position, Step, StepKind};

/// The set of steps plus the set of connections. This is the atomic
/// unit of undo/redo snapshots and of simulation input.
///
/// Declaration order is preserved and meaningful: it is the fallback
/// trace order, the within-layer layout order, and (for connections)
/// the traversal tie-break order among siblings.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    steps: Vec<Step>,
    connections: Vec<Connection>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(steps: Vec<Step>, connections: Vec<Connection>) -> Self {
        Self { steps, connections }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn step_mut(&mut self, id: &str) -> Option<&mut Step> {
        self.steps.iter_mut().find(|step| step.id == id)
    }

    pub fn add_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Removes a step and every connection touching it. Returns the
    /// removed step, or `None` when the id is unknown.
    pub fn remove_step(&mut self, id: &str) -> Option<Step> {
        let index = self.steps.iter().position(|step| step.id == id)?;
        let step = self.steps.remove(index);
        self.connections
            .retain(|connection| connection.source != id && connection.target != id);
        Some(step)
    }

    pub fn connect(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.connections.push(Connection::new(source, target));
    }

    /// Removes every connection matching the ordered pair (duplicates
    /// are not deduplicated at insert time, so all of them go). Returns
    /// how many were removed.
    pub fn disconnect(&mut self, source: &str, target: &str) -> usize {
        let before = self.connections.len();
        self.connections
            .retain(|connection| !(connection.source == source && connection.target == target));
        before - self.connections.len()
    }

    /// True when the graph has no steps and no connections.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.connections.is_empty()
    }
}
