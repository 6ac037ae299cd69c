//! The JSON boundary: workflow document import and export.
//!
//! Import is deliberately lenient about the outer document shape and
//! strict about content; on any error the caller's state is left
//! untouched.

mod document;

pub use document::{EdgeDocument, ExportDocument, StepDocument};

use crate::error::{ExportError, ImportError};
use crate::graph::WorkflowGraph;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Parses a workflow document into a graph.
///
/// Recognized shapes are a top-level `{nodes, edges}` and a nested
/// `{workflow: {nodes, edges}}`; each array is located independently,
/// so mixed documents still load. Malformed JSON is an
/// [`ImportError::JsonParse`]; a document where either array cannot be
/// found or read is rejected as [`ImportError::InvalidStructure`].
pub fn import_workflow(text: &str) -> Result<WorkflowGraph, ImportError> {
    let parsed: Value =
        serde_json::from_str(text).map_err(|e| ImportError::JsonParse(e.to_string()))?;

    let nodes = locate_array(&parsed, "nodes").ok_or(ImportError::InvalidStructure)?;
    let edges = locate_array(&parsed, "edges").ok_or(ImportError::InvalidStructure)?;

    let nodes: Vec<StepDocument> = serde_json::from_value(Value::Array(nodes.clone()))
        .map_err(|_| ImportError::InvalidStructure)?;
    let edges: Vec<EdgeDocument> = serde_json::from_value(Value::Array(edges.clone()))
        .map_err(|_| ImportError::InvalidStructure)?;

    Ok(WorkflowGraph::from_parts(
        nodes.into_iter().map(StepDocument::into_step).collect(),
        edges.into_iter().map(EdgeDocument::into_connection).collect(),
    ))
}

fn locate_array<'a>(document: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    if let Some(array) = document.get(key).and_then(Value::as_array) {
        return Some(array);
    }
    document.get("workflow")?.get(key)?.as_array()
}

/// Serializes the graph as a pretty-printed export document with an
/// `exportedAt` ISO-8601 timestamp.
pub fn export_workflow(
    graph: &WorkflowGraph,
    exported_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    let document = ExportDocument {
        exported_at: iso_timestamp(exported_at),
        nodes: graph.steps().iter().map(StepDocument::from).collect(),
        edges: graph.connections().iter().map(EdgeDocument::from).collect(),
    };
    serde_json::to_string_pretty(&document).map_err(|e| ExportError::Serialize(e.to_string()))
}

/// The download file name for an export taken at `exported_at`:
/// `workflow-{timestamp}.json`, with `:` and `.` in the timestamp
/// replaced by `-`.
pub fn export_file_name(exported_at: DateTime<Utc>) -> String {
    let timestamp = iso_timestamp(exported_at).replace([':', '.'], "-");
    format!("workflow-{}.json", timestamp)
}

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
