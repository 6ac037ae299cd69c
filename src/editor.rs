//! The editing session.
//!
//! `WorkflowEditor` ties the live graph to the undo/redo history, the
//! derived annotation table, the current selection, the last simulation
//! report, and the automation catalog. All user-facing operations go
//! through here so that history recording stays consistent: structural
//! edits record `UserEdit` snapshots, simulation results never enter
//! history at all.

use crate::annotate::AnnotationTable;
use crate::catalog::AutomationCatalog;
use crate::error::{ExportError, ImportError};
use crate::graph::{Position, Step, StepKind, WorkflowGraph};
use crate::history::{History, RecordKind};
use crate::simulate::{SimulationReport, simulate};
use crate::{io, layout};
use chrono::{DateTime, Utc};

pub struct WorkflowEditor {
    graph: WorkflowGraph,
    history: History,
    annotations: AnnotationTable,
    report: Option<SimulationReport>,
    selection: Option<String>,
    catalog: AutomationCatalog,
    next_id: u32,
}

impl Default for WorkflowEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowEditor {
    /// Creates an empty session with the built-in automation catalog.
    pub fn new() -> Self {
        Self::with_catalog(AutomationCatalog::builtin())
    }

    pub fn with_catalog(catalog: AutomationCatalog) -> Self {
        Self {
            graph: WorkflowGraph::new(),
            history: History::new(),
            annotations: AnnotationTable::new(),
            report: None,
            selection: None,
            catalog,
            next_id: 1,
        }
    }

    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    pub fn annotations(&self) -> &AnnotationTable {
        &self.annotations
    }

    pub fn report(&self) -> Option<&SimulationReport> {
        self.report.as_ref()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn catalog(&self) -> &AutomationCatalog {
        &self.catalog
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Adds a palette step: sequential id, staggered default position,
    /// uppercase default label. Returns the new step's id.
    pub fn add_step(&mut self, kind: StepKind) -> String {
        let id = self.next_step_id();
        let count = self.graph.steps().len() as f64;
        let mut step = Step::new(id.clone(), kind);
        step.position = Position::new(100.0 + count * 40.0, 100.0 + count * 30.0);
        step.set_attribute("label", serde_json::Value::String(kind.default_label()));
        self.graph.add_step(step);
        self.record_edit();
        id
    }

    // Imported graphs may already contain step-N ids; skip over those.
    fn next_step_id(&mut self) -> String {
        loop {
            let candidate = format!("step-{}", self.next_id);
            self.next_id += 1;
            if self.graph.step(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Sets one attribute on a step, as the form layer does. Returns
    /// false (and records nothing) when the step does not exist.
    pub fn set_attribute(&mut self, id: &str, key: &str, value: serde_json::Value) -> bool {
        match self.graph.step_mut(id) {
            Some(step) => {
                step.set_attribute(key, value);
                self.record_edit();
                true
            }
            None => false,
        }
    }

    /// Moves a step, as a drag on the canvas does.
    pub fn move_step(&mut self, id: &str, position: Position) -> bool {
        match self.graph.step_mut(id) {
            Some(step) => {
                step.position = position;
                self.record_edit();
                true
            }
            None => false,
        }
    }

    pub fn connect(&mut self, source: &str, target: &str) {
        self.graph.connect(source, target);
        self.record_edit();
    }

    /// Removes every connection matching the ordered pair. Returns how
    /// many were removed; nothing is recorded when no connection
    /// matched.
    pub fn disconnect(&mut self, source: &str, target: &str) -> usize {
        let removed = self.graph.disconnect(source, target);
        if removed > 0 {
            self.record_edit();
        }
        removed
    }

    /// Removes a step together with its incident connections, its
    /// annotation, and its selection if it was selected.
    pub fn remove_step(&mut self, id: &str) -> bool {
        if self.graph.remove_step(id).is_none() {
            return false;
        }
        if self.selection.as_deref() == Some(id) {
            self.selection = None;
        }
        self.annotations.remove(id);
        self.record_edit();
        true
    }

    /// Changes the selected step. Selection is not part of the graph
    /// and is never recorded.
    pub fn select(&mut self, id: Option<String>) {
        self.selection = id;
    }

    /// Runs the validator/simulator on the current graph, stores the
    /// report, and rebuilds the derived annotation table from it.
    /// Creates no history entry.
    pub fn run_simulation(&mut self) -> &SimulationReport {
        let report = simulate(&self.graph);
        self.annotations = AnnotationTable::from_report(&report);
        self.report.insert(report)
    }

    /// Applies the auto-layout positions. A layout is an undoable user
    /// action, like any other edit.
    pub fn auto_layout(&mut self) {
        if self.graph.steps().is_empty() {
            return;
        }
        layout::apply(&mut self.graph);
        self.record_edit();
    }

    /// Steps back in history. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.install(snapshot);
                true
            }
            None => false,
        }
    }

    /// Steps forward in history. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.install(snapshot);
                true
            }
            None => false,
        }
    }

    fn install(&mut self, snapshot: WorkflowGraph) {
        self.graph = snapshot;
        self.selection = None;
        self.report = None;
        self.annotations.clear();
    }

    /// Replaces the whole graph from a workflow JSON document and
    /// records the replacement as a single user edit. On error nothing
    /// changes.
    pub fn import_json(&mut self, text: &str) -> Result<(), ImportError> {
        let graph = io::import_workflow(text)?;
        self.graph = graph;
        self.selection = None;
        self.report = None;
        self.annotations.clear();
        self.record_edit();
        Ok(())
    }

    pub fn export_json(&self, exported_at: DateTime<Utc>) -> Result<String, ExportError> {
        io::export_workflow(&self.graph, exported_at)
    }

    pub fn export_file_name(&self, exported_at: DateTime<Utc>) -> String {
        io::export_file_name(exported_at)
    }

    fn record_edit(&mut self) {
        self.history.record(&self.graph, RecordKind::UserEdit);
    }
}
