//! Derived per-step annotations.
//!
//! Annotations are transient display state recomputed from each
//! simulation run. They live in a side-table keyed by step id rather
//! than on the steps themselves, so history snapshots and serialized
//! documents never carry them.

use crate::simulate::SimulationReport;
use ahash::AHashMap;
use std::fmt;

/// Display severity of an annotated step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Critical => f.write_str("critical"),
        }
    }
}

/// The error messages attached to one step, with their derived severity.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub severity: Severity,
    pub messages: Vec<String>,
}

/// Recomputable side-table of step annotations. A step absent from the
/// table has no annotation.
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    entries: AHashMap<String, Annotation>,
}

impl AnnotationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the table from a simulation report: a step is critical
    /// when any of its messages mentions "start" or "end"
    /// (case-insensitive), warning otherwise. Steps without messages
    /// get no entry.
    pub fn from_report(report: &SimulationReport) -> Self {
        let mut entries = AHashMap::new();
        for (step_id, messages) in &report.step_errors {
            if messages.is_empty() {
                continue;
            }
            let critical = messages.iter().any(|message| {
                let lower = message.to_lowercase();
                lower.contains("start") || lower.contains("end")
            });
            entries.insert(
                step_id.clone(),
                Annotation {
                    severity: if critical {
                        Severity::Critical
                    } else {
                        Severity::Warning
                    },
                    messages: messages.clone(),
                },
            );
        }
        Self { entries }
    }

    pub fn get(&self, step_id: &str) -> Option<&Annotation> {
        self.entries.get(step_id)
    }

    pub fn remove(&mut self, step_id: &str) -> Option<Annotation> {
        self.entries.remove(step_id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
