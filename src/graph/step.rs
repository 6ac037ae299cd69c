use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of step kinds a workflow can contain. The kind is
/// assigned at creation and determines which validation and form rules
/// apply to the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Start,
    Task,
    Approval,
    Automated,
    End,
}

impl StepKind {
    /// The lowercase wire name, as used in workflow documents and trace
    /// messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::Task => "task",
            StepKind::Approval => "approval",
            StepKind::Automated => "automated",
            StepKind::End => "end",
        }
    }

    /// Default display label for a freshly added step of this kind.
    pub fn default_label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2D canvas coordinate. Purely cosmetic: positions never affect
/// validation or traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A typed node in the workflow graph.
///
/// `attributes` is the kind-specific field map maintained by the form
/// layer (assignee, approver role, action id, ...). The engine treats it
/// as opaque except for `label`, which is used in messages.
#[derive(Debug, Clone)]
pub struct Step {
    pub id: String,
    pub kind: StepKind,
    pub position: Position,
    pub attributes: AHashMap<String, serde_json::Value>,
}

impl Step {
    pub fn new(id: impl Into<String>, kind: StepKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            attributes: AHashMap::new(),
        }
    }

    /// The `label` attribute, if one is set.
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("label").and_then(|value| value.as_str())
    }

    /// Display name used in messages: the label when present, otherwise
    /// the id.
    pub fn display_name(&self) -> &str {
        self.label().unwrap_or(&self.id)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.attributes.insert(key.into(), value);
    }
}

/// A directed edge between two steps. Duplicates of the same ordered
/// pair and self-loops are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
