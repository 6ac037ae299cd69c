//! # Stepflow - Workflow Graph Engine
//!
//! **Stepflow** is the graph engine behind a no-code approval-process
//! builder: a non-technical user assembles a directed graph of typed
//! steps (start, task, approval, automated action, end) and Stepflow
//! validates it, simulates its traversal order, lays it out for
//! display, and tracks every edit in an undo/redo history.
//!
//! The engine does not execute real side effects; it reports structure.
//! The visual canvas, the per-step property forms, and the palette are
//! external collaborators that consume the graph value and the
//! simulation results through [`editor::WorkflowEditor`].
//!
//! ## Core Workflow
//!
//! 1. **Edit**: mutate the graph through the editor (add steps, connect
//!    them, set attributes). Every structural edit becomes an undoable
//!    snapshot in the [`history::History`].
//! 2. **Simulate**: [`simulate::simulate`] walks the graph breadth-first
//!    from the start step and returns an execution trace plus structural
//!    errors (missing or duplicated start, missing end, unreachable
//!    steps). Derived per-step annotations land in a side-table and
//!    never enter history.
//! 3. **Lay out**: [`layout::apply`] assigns grid positions by
//!    breadth-first layer, so even malformed or disconnected graphs
//!    render readably.
//! 4. **Exchange**: [`io`] loads and saves the JSON workflow documents
//!    the surrounding application exchanges with the outside world.
//!
//! ## Quick Start
//!
//! ```rust
//! use stepflow::prelude::*;
//!
//! let mut editor = WorkflowEditor::new();
//! let start = editor.add_step(StepKind::Start);
//! let task = editor.add_step(StepKind::Task);
//! let end = editor.add_step(StepKind::End);
//! editor.connect(&start, &task);
//! editor.connect(&task, &end);
//!
//! editor.auto_layout();
//!
//! let report = editor.run_simulation();
//! assert!(report.is_clean());
//! assert_eq!(report.trace.len(), 3);
//! ```

pub mod annotate;
pub mod catalog;
pub mod editor;
pub mod error;
pub mod graph;
pub mod history;
pub mod io;
pub mod layout;
pub mod prelude;
pub mod simulate;
pub mod traverse;
