//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so callers can
//! pull in the whole editing surface with a single `use`.
//!
//! # Example
//!
//! ```rust
//! use stepflow::prelude::*;
//!
//! let mut editor = WorkflowEditor::new();
//! let start = editor.add_step(StepKind::Start);
//! let end = editor.add_step(StepKind::End);
//! editor.connect(&start, &end);
//!
//! let report = editor.run_simulation();
//! assert!(report.is_clean());
//! ```

// Editing session
pub use crate::editor::WorkflowEditor;

// Graph model
pub use crate::graph::{Connection, Position, Step, StepKind, WorkflowGraph};

// Validation, simulation, and derived annotations
pub use crate::annotate::{Annotation, AnnotationTable, Severity};
pub use crate::simulate::{SimulationReport, TraceStep, simulate};

// History
pub use crate::history::{History, RecordKind};

// Import/export boundary
pub use crate::io::{export_file_name, export_workflow, import_workflow};

// Automation catalog
pub use crate::catalog::{Automation, AutomationCatalog};

// Error types
pub use crate::error::{ExportError, ImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
